use crate::ErrorCode;
use thiserror::Error;

/// A constraint violation caused by a value the client supplied.
///
/// The [`Display`](std::fmt::Display) text is the exact message surfaced to
/// the client.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConstraintError {
    #[error(
        "Invalid array length for argument {argument_name}. Supplied \
        {supplied} items, maximum allowed is {max_length}"
    )]
    ArrayTooLong {
        argument_name: String,
        supplied: usize,
        max_length: i64,
    },

    #[error("Invalid value for argument {argument_name}. {value} is greater than {max}")]
    IntegerTooLarge {
        argument_name: String,
        value: i64,
        max: i64,
    },

    #[error("Invalid value for argument {argument_name}. {value} is less than {min}")]
    IntegerTooSmall {
        argument_name: String,
        value: i64,
        min: i64,
    },
}
impl ConstraintError {
    /// Name of the argument or input field whose value was rejected.
    pub fn argument_name(&self) -> &str {
        match self {
            Self::ArrayTooLong { argument_name, .. }
                | Self::IntegerTooLarge { argument_name, .. }
                | Self::IntegerTooSmall { argument_name, .. } =>
                argument_name.as_str(),
        }
    }

    /// Every constraint violation is the client's fault.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::BadUserInput
    }
}
