pub mod ast;
pub mod constraints;
mod directive_annotation;
pub mod file_reader;
mod graphql_error;
pub mod loc;
pub mod schema;
pub mod types;
pub mod validation;
mod value;


pub use constraints::BoundedIntegerCheck;
pub use constraints::CheckOptions;
pub use constraints::ConstraintCheck;
pub use constraints::ConstraintError;
pub use constraints::default_checks;
pub use constraints::MaxArrayLengthCheck;
pub use directive_annotation::DirectiveAnnotation;
pub use graphql_error::ErrorCode;
pub use graphql_error::ErrorExtensions;
pub use graphql_error::GraphQLError;
pub use schema::Schema;
pub use schema::SchemaBuilder;
pub use schema::SchemaBuildError;
pub use validation::ArgumentWalker;
pub use validation::GraphQLRequest;
pub use validation::RequestValidationError;
pub use validation::ValidationOutcome;
pub use value::Value;

/// Variable bindings supplied alongside an operation, keyed by variable name
/// (without the leading `$`).
pub type Variables = serde_json::Map<String, serde_json::Value>;
