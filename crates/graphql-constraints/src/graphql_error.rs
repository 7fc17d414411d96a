use crate::ConstraintError;
use serde::Deserialize;
use serde::Serialize;

/// Machine-readable classification placed under `extensions.code` of a
/// client-facing error.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorCode {
    #[serde(rename = "BAD_USER_INPUT")]
    BadUserInput,

    #[serde(rename = "GRAPHQL_PARSE_FAILED")]
    GraphQLParseFailed,
}
impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadUserInput => "BAD_USER_INPUT",
            Self::GraphQLParseFailed => "GRAPHQL_PARSE_FAILED",
        }
    }
}
impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ErrorExtensions {
    pub code: ErrorCode,
}

/// The error shape returned to GraphQL clients:
/// `{ "message": "...", "extensions": { "code": "..." } }`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GraphQLError {
    pub message: String,
    pub extensions: ErrorExtensions,
}
impl GraphQLError {
    pub fn new(message: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            extensions: ErrorExtensions { code },
        }
    }
}
impl std::convert::From<&ConstraintError> for GraphQLError {
    fn from(err: &ConstraintError) -> Self {
        Self::new(err.to_string(), err.code())
    }
}
impl std::convert::From<ConstraintError> for GraphQLError {
    fn from(err: ConstraintError) -> Self {
        Self::from(&err)
    }
}
