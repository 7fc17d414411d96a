use crate::constraints::int_param;
use crate::constraints::CheckOptions;
use crate::constraints::ConstraintCheck;
use crate::constraints::ConstraintError;
use crate::types::InputValueDef;
use crate::Value;

type Result<T> = std::result::Result<T, ConstraintError>;

/// Rejects list values with more items than the `length` parameter of the
/// field's `@maxArrayLength` annotation allows.
///
/// ```graphql
/// type Query {
///   search(ids: [ID!]! @maxArrayLength(length: 5)): [Result!]!
/// }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MaxArrayLengthCheck {
    directive_name: String,
}
impl MaxArrayLengthCheck {
    pub const CANONICAL_NAME: &'static str = "maxArrayLength";

    pub fn new(options: CheckOptions) -> Self {
        Self {
            directive_name: options.directive_name_or(Self::CANONICAL_NAME),
        }
    }
}
impl ConstraintCheck for MaxArrayLengthCheck {
    fn directive_name(&self) -> &str {
        self.directive_name.as_str()
    }

    fn directive_definition(&self) -> String {
        format!(
            "\"Define a maximum array length\"\n\
            directive @{}(\n  \
              \"The maximum length for the field\"\n  \
              length: Int!\n\
            ) on INPUT_FIELD_DEFINITION | ARGUMENT_DEFINITION\n",
            self.directive_name,
        )
    }

    fn check(&self, field: &dyn InputValueDef, value: &Value) -> Result<()> {
        let Some(items) = value.as_list() else {
            return Ok(());
        };
        let Some(annot) = field.directive(self.directive_name.as_str()) else {
            return Ok(());
        };
        let Some(max_length) = int_param(annot, field, "length") else {
            return Ok(());
        };

        let supplied = items.len();
        // A negative limit rejects any list; `supplied` is never negative.
        if i64::try_from(supplied).map_or(true, |supplied| supplied > max_length) {
            return Err(ConstraintError::ArrayTooLong {
                argument_name: field.name().to_string(),
                supplied,
                max_length,
            });
        }

        tracing::trace!(
            "`{}` passed @{} ({supplied} <= {max_length}).",
            field.name(),
            self.directive_name,
        );
        Ok(())
    }
}
