use crate::ast;
use crate::loc;
use crate::Value;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a
/// [directive annotation](https://spec.graphql.org/October2021/#sec-Language.Directives)
/// placed on a schema definition, such as `@maxArrayLength(length: 5)` on an
/// argument or input field.
///
/// A [`DirectiveAnnotation`] can be thought of as a "pointer" to some
/// [`Directive`](crate::types::Directive) paired with a set of named
/// arguments ([`Value`]s).
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) args: IndexMap<String, Value>,
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) directive_name: String,
}
impl DirectiveAnnotation {
    /// Looks up a single argument passed to this annotation by name.
    pub fn arg(&self, name: &str) -> Option<&Value> {
        self.args.get(name)
    }

    /// A map from ParameterName -> [`Value`] for all arguments passed to this
    /// [`DirectiveAnnotation`].
    ///
    /// This returns an [`IndexMap`] to guarantee that map entries retain the
    /// same ordering as the order of arguments passed to this directive
    /// annotation.
    pub fn args(&self) -> &IndexMap<String, Value> {
        &self.args
    }

    /// The [`SchemaDefLocation`](loc::SchemaDefLocation) indicating where this
    /// annotation was written within the schema.
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// The name of the directive this annotation refers to.
    pub fn directive_name(&self) -> &str {
        self.directive_name.as_str()
    }

    pub(crate) fn from_ast(
        file_path: &Path,
        ast_annots: &[ast::schema::Directive],
    ) -> Vec<Self> {
        ast_annots.iter().map(|ast_annot| {
            let args = ast_annot.arguments.iter()
                .map(|(arg_name, arg_val)| (
                    arg_name.to_string(),
                    Value::from_const_ast(arg_val),
                ))
                .collect();

            DirectiveAnnotation {
                args,
                def_location: loc::FilePosition::from_pos(
                    file_path,
                    ast_annot.position,
                ).into(),
                directive_name: ast_annot.name.to_string(),
            }
        }).collect()
    }
}
