use crate::loc;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::InputObjectType;
use crate::types::ObjectOrInterfaceType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;

/// Represents a defined GraphQL type
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(ObjectOrInterfaceType),
    Object(ObjectOrInterfaceType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl GraphQLType {
    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(inputobj_type) = self {
            Some(inputobj_type)
        } else {
            None
        }
    }

    /// The selectable fields of this type. Only object and interface types
    /// have any.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            GraphQLType::Interface(t) | GraphQLType::Object(t) => Some(t.fields()),
            _ => None,
        }
    }

    pub fn def_location(&self) -> loc::SchemaDefLocation {
        match self {
            GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::String =>
                loc::SchemaDefLocation::GraphQLBuiltIn,
            GraphQLType::Enum(t) =>
                loc::SchemaDefLocation::Schema(t.def_location.clone()),
            GraphQLType::InputObject(t) =>
                loc::SchemaDefLocation::Schema(t.def_location.clone()),
            GraphQLType::Interface(t) | GraphQLType::Object(t) =>
                loc::SchemaDefLocation::Schema(t.def_location.clone()),
            GraphQLType::Scalar(t) =>
                loc::SchemaDefLocation::Schema(t.def_location.clone()),
            GraphQLType::Union(t) =>
                loc::SchemaDefLocation::Schema(t.def_location.clone()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            GraphQLType::Bool => "Boolean",
            GraphQLType::Float => "Float",
            GraphQLType::ID => "ID",
            GraphQLType::Int => "Int",
            GraphQLType::String => "String",
            GraphQLType::Enum(t) => t.name(),
            GraphQLType::InputObject(t) => t.name(),
            GraphQLType::Interface(t) | GraphQLType::Object(t) => t.name(),
            GraphQLType::Scalar(t) => t.name(),
            GraphQLType::Union(t) => t.name(),
        }
    }

    pub fn unwrap_object(&self) -> &ObjectOrInterfaceType {
        match self {
            GraphQLType::Object(obj_type) => obj_type,
            _ => panic!("Not a GraphQLType::Object: {self:#?}"),
        }
    }
}
