use crate::ast;
use crate::loc;
use crate::types::Parameter;
use indexmap::IndexMap;

/// Represents a defined directive.
#[derive(Clone, Debug, PartialEq)]
pub enum Directive {
    Custom {
        def_location: loc::FilePosition,
        description: Option<String>,
        locations: Vec<ast::schema::DirectiveLocation>,
        name: String,
        params: IndexMap<String, Parameter>,
    },
    Deprecated,
    Include,
    Skip,
    SpecifiedBy,
}
impl Directive {
    pub fn name(&self) -> &str {
        match self {
            Directive::Custom { name, .. } => name.as_str(),
            Directive::Deprecated => "deprecated",
            Directive::Include => "include",
            Directive::Skip => "skip",
            Directive::SpecifiedBy => "specifiedBy",
        }
    }

    /// The parameters declared by a custom directive. Built-in directives
    /// report none.
    pub fn params(&self) -> Option<&IndexMap<String, Parameter>> {
        if let Directive::Custom { params, .. } = self {
            Some(params)
        } else {
            None
        }
    }
}
