use crate::loc;

/// Information associated with [`GraphQLType::Enum`](crate::types::GraphQLType::Enum).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) name: String,
}
impl EnumType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
