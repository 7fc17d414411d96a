use crate::loc;
use crate::types::TypeAnnotation;
use crate::DirectiveAnnotation;
use crate::Value;

/// Common view over the two kinds of schema definitions that accept input
/// values: field arguments ([`Parameter`](crate::types::Parameter)) and input
/// object fields ([`InputField`](crate::types::InputField)).
///
/// Constraint checks are written against this trait so the same check applies
/// to both.
pub trait InputValueDef: std::fmt::Debug {
    fn def_location(&self) -> &loc::SchemaDefLocation;

    fn default_value(&self) -> Option<&Value>;

    fn directives(&self) -> &[DirectiveAnnotation];

    fn name(&self) -> &str;

    fn type_annotation(&self) -> &TypeAnnotation;

    /// Finds the first annotation of the named directive on this definition.
    fn directive(&self, directive_name: &str) -> Option<&DirectiveAnnotation> {
        self.directives()
            .iter()
            .find(|annot| annot.directive_name() == directive_name)
    }
}
