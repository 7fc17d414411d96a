mod argument_values;
mod argument_walker;
mod request;

pub use argument_walker::ArgumentWalker;
pub use request::GraphQLRequest;
pub use request::RequestValidationError;
pub use request::ValidationOutcome;

#[cfg(test)]
mod tests;
