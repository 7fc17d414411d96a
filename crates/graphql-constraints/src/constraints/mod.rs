mod bounded_integer;
mod constraint_error;
mod max_array_length;

pub use bounded_integer::BoundedIntegerCheck;
pub use constraint_error::ConstraintError;
pub use max_array_length::MaxArrayLengthCheck;

use crate::types::InputValueDef;
use crate::DirectiveAnnotation;
use crate::Value;
use serde::Deserialize;

type Result<T> = std::result::Result<T, ConstraintError>;

/// A single request-time constraint, evaluated against every argument and
/// input-field value the
/// [`ArgumentWalker`](crate::validation::ArgumentWalker) reaches.
///
/// A check is bound to a directive name when it is constructed and reads its
/// own parameters from the annotation of that name on the schema definition
/// being checked. Definitions without such an annotation are never rejected.
pub trait ConstraintCheck: std::fmt::Debug + Send + Sync {
    /// The name of the directive this check responds to (without the `@`).
    fn directive_name(&self) -> &str;

    /// SDL declaration of this check's directive, suitable for loading into a
    /// schema alongside the type definitions that use it.
    fn directive_definition(&self) -> String;

    fn check(&self, field: &dyn InputValueDef, value: &Value) -> Result<()>;
}

/// Construction-time options shared by all checks.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CheckOptions {
    /// Overrides the check's canonical directive name. Lets several
    /// differently-named instances of the same kind of check coexist.
    pub name: Option<String>,
}
impl CheckOptions {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    pub(crate) fn directive_name_or(&self, canonical_name: &str) -> String {
        self.name.clone().unwrap_or_else(|| canonical_name.to_string())
    }
}

/// Both supplied checks registered under their canonical directive names.
pub fn default_checks() -> Vec<Box<dyn ConstraintCheck>> {
    vec![
        Box::new(MaxArrayLengthCheck::new(CheckOptions::default())),
        Box::new(BoundedIntegerCheck::new(CheckOptions::default())),
    ]
}

/// Reads an integer parameter off of a directive annotation.
///
/// A missing or non-integer parameter is a schema anomaly rather than a user
/// error, so it is logged and reported as `None`.
fn int_param(
    annot: &DirectiveAnnotation,
    field: &dyn InputValueDef,
    param_name: &str,
) -> Option<i64> {
    match annot.arg(param_name) {
        Some(Value::Int(value)) => Some(*value),
        Some(other) => {
            tracing::warn!(
                "Ignoring `@{}` on `{}`: parameter `{param_name}` is not an \
                integer (found `{other}`).",
                annot.directive_name(),
                field.name(),
            );
            None
        },
        None => {
            tracing::warn!(
                "Ignoring `@{}` on `{}`: parameter `{param_name}` is missing.",
                annot.directive_name(),
                field.name(),
            );
            None
        },
    }
}
