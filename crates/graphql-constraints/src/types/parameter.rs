use crate::ast;
use crate::loc;
use crate::types::InputValueDef;
use crate::types::TypeAnnotation;
use crate::DirectiveAnnotation;
use crate::Value;
use std::path::Path;

/// An argument declared on a [`Field`](crate::types::Field) or
/// [`Directive`](crate::types::Directive) definition.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) default_value: Option<Value>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub(crate) fn from_ast(
        file_path: &Path,
        input_val: &ast::schema::InputValue,
    ) -> Self {
        Parameter {
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
            type_annotation: TypeAnnotation::from_ast_type(&input_val.value_type),
        }
    }
}
impl InputValueDef for Parameter {
    fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

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
