mod directive;
mod enum_type;
mod field;
mod graphql_type;
mod input_field;
mod input_object_type;
mod input_value_def;
mod list_type_annotation;
mod named_type_annotation;
mod object_or_interface_type;
mod parameter;
mod scalar_type;
mod type_annotation;
mod union_type;

pub use directive::Directive;
pub use enum_type::EnumType;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
pub use input_value_def::InputValueDef;
pub use object_or_interface_type::ObjectOrInterfaceType;
pub use parameter::Parameter;
pub use scalar_type::ScalarType;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
pub use type_annotation::TypeAnnotation;
pub use union_type::UnionType;
