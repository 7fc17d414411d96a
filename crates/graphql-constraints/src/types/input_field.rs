use crate::ast;
use crate::loc;
use crate::types::InputValueDef;
use crate::types::TypeAnnotation;
use crate::DirectiveAnnotation;
use crate::Value;
use std::path::Path;

/// Represents an
/// [input field](https://spec.graphql.org/October2021/#InputFieldsDefinition)
/// defined on an [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) default_value: Option<Value>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) parent_type_name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl InputField {
    pub(crate) fn from_ast(
        file_path: &Path,
        parent_type_name: &str,
        input_val: &ast::schema::InputValue,
    ) -> Self {
        InputField {
            def_location: loc::FilePosition::from_pos(
                file_path,
                input_val.position,
            ).into(),
            default_value: input_val.default_value.as_ref().map(Value::from_const_ast),
            directives: DirectiveAnnotation::from_ast(
                file_path,
                &input_val.directives,
            ),
            name: input_val.name.to_owned(),
            parent_type_name: parent_type_name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(&input_val.value_type),
        }
    }

    /// The name of the [`InputObjectType`](crate::types::InputObjectType) this
    /// field is defined on.
    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }
}
impl InputValueDef for InputField {
    fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`InputField`].
    ///
    /// This list is guaranteed to be ordered the same as the order of
    /// annotations specified on the [`InputField`] definition in the schema.
    fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
