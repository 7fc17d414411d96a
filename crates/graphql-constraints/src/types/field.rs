use crate::ast;
use crate::loc;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a defined field on an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub(crate) fn from_ast(file_path: &Path, ast_field: &ast::schema::Field) -> Self {
        Field {
            def_location: loc::FilePosition::from_pos(
                file_path,
                ast_field.position,
            ).into(),
            name: ast_field.name.to_owned(),
            parameters: ast_field.arguments.iter()
                .map(|input_val| (
                    input_val.name.to_string(),
                    Parameter::from_ast(file_path, input_val),
                ))
                .collect(),
            type_annotation: TypeAnnotation::from_ast_type(&ast_field.field_type),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The arguments declared on this field, in definition order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
