use crate::loc;

/// Information associated with [`GraphQLType::Union`](crate::types::GraphQLType::Union).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) name: String,
}
impl UnionType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
