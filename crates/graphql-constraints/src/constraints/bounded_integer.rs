use crate::constraints::int_param;
use crate::constraints::CheckOptions;
use crate::constraints::ConstraintCheck;
use crate::constraints::ConstraintError;
use crate::types::InputValueDef;
use crate::Value;

type Result<T> = std::result::Result<T, ConstraintError>;

/// Rejects integer values outside of the inclusive `min..=max` range given by
/// the field's `@boundedInteger` annotation.
///
/// The upper bound is tested before the lower bound, so a value that somehow
/// violates both (i.e. when `min > max`) reports the upper bound.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundedIntegerCheck {
    directive_name: String,
}
impl BoundedIntegerCheck {
    pub const CANONICAL_NAME: &'static str = "boundedInteger";

    pub fn new(options: CheckOptions) -> Self {
        Self {
            directive_name: options.directive_name_or(Self::CANONICAL_NAME),
        }
    }
}
impl ConstraintCheck for BoundedIntegerCheck {
    fn directive_name(&self) -> &str {
        self.directive_name.as_str()
    }

    fn directive_definition(&self) -> String {
        format!(
            "\"Define a bounded integer\"\n\
            directive @{}(\n  \
              \"The minimum value for the field\"\n  \
              min: Int!\n  \
              \"The maximum value for the field\"\n  \
              max: Int!\n\
            ) on INPUT_FIELD_DEFINITION | ARGUMENT_DEFINITION\n",
            self.directive_name,
        )
    }

    fn check(&self, field: &dyn InputValueDef, value: &Value) -> Result<()> {
        let Some(value) = value.as_i64() else {
            return Ok(());
        };
        let Some(annot) = field.directive(self.directive_name.as_str()) else {
            return Ok(());
        };
        let (Some(min), Some(max)) = (
            int_param(annot, field, "min"),
            int_param(annot, field, "max"),
        ) else {
            return Ok(());
        };

        if value > max {
            return Err(ConstraintError::IntegerTooLarge {
                argument_name: field.name().to_string(),
                value,
                max,
            });
        }

        if value < min {
            return Err(ConstraintError::IntegerTooSmall {
                argument_name: field.name().to_string(),
                value,
                min,
            });
        }

        Ok(())
    }
}
