use crate::loc;
use crate::types::Field;
use crate::DirectiveAnnotation;
use indexmap::IndexMap;

/// Information associated with both
/// [`GraphQLType::Object`](crate::types::GraphQLType::Object) and
/// [`GraphQLType::Interface`](crate::types::GraphQLType::Interface).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectOrInterfaceType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) name: String,
}
impl ObjectOrInterfaceType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// The fields defined on this type (including fields added by type
    /// extensions), in definition order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
