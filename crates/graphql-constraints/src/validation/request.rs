use crate::ast;
use crate::constraints::ConstraintError;
use crate::validation::ArgumentWalker;
use crate::ErrorCode;
use crate::GraphQLError;
use crate::Variables;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

type Result<T> = std::result::Result<T, RequestValidationError>;

/// The standard GraphQL-over-HTTP request body:
/// `{ "query": ..., "operationName": ..., "variables": {...} }`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest {
    pub query: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Variables>,
}
impl GraphQLRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            operation_name: None,
            variables: None,
        }
    }

    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = Some(variables);
        self
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RequestValidationError {
    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    #[error("Syntax Error: {message}")]
    ParseError {
        message: String,
    },
}
impl RequestValidationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Constraint(err) =>
                err.code(),
            Self::ParseError { .. } =>
                ErrorCode::GraphQLParseFailed,
        }
    }
}
impl std::convert::From<&RequestValidationError> for GraphQLError {
    fn from(err: &RequestValidationError) -> Self {
        GraphQLError::new(err.to_string(), err.code())
    }
}

/// What a client receives for one request: `{}` when every argument
/// satisfied its constraints, `{ "errors": [...] }` otherwise.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ValidationOutcome {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,
}
impl ValidationOutcome {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}
impl std::convert::From<Result<()>> for ValidationOutcome {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => Self::default(),
            Err(err) => Self {
                errors: vec![GraphQLError::from(&err)],
            },
        }
    }
}

impl ArgumentWalker<'_> {
    /// Parses and validates a single request.
    pub fn try_validate_request(&self, request: &GraphQLRequest) -> Result<()> {
        let document = ast::query::parse(request.query.as_str())
            .map_err(|err| RequestValidationError::ParseError {
                message: err.to_string(),
            })?;
        let empty_variables = Variables::new();
        self.validate(
            &document,
            request.operation_name.as_deref(),
            request.variables.as_ref().unwrap_or(&empty_variables),
        )?;
        Ok(())
    }

    /// Like [`ArgumentWalker::try_validate_request`], but reports the result
    /// in the shape returned to clients.
    pub fn validate_request(&self, request: &GraphQLRequest) -> ValidationOutcome {
        self.try_validate_request(request).into()
    }

    /// Validates each request of a batch independently. Outcomes are returned
    /// in request order.
    pub fn validate_batch(&self, requests: &[GraphQLRequest]) -> Vec<ValidationOutcome> {
        requests.iter()
            .map(|request| self.validate_request(request))
            .collect()
    }
}
