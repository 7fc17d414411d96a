use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::GraphQLType;
use std::collections::HashMap;

/// Represents an immutable GraphQL schema.
///
/// A [`Schema`] is read-only once built and can be shared freely across
/// threads while requests are validated against it.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: HashMap<String, Directive>,
    pub(crate) query_type_name: String,
    pub(crate) mutation_type_name: Option<String>,
    pub(crate) subscription_type_name: Option<String>,
    pub(crate) types: HashMap<String, GraphQLType>,
}
impl Schema {
    /// Returns a [`HashMap<String, Directive>`] containing all directives
    /// defined within this [`Schema`].
    ///
    /// [^note] This map includes both directives defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in directives like
    /// `@deprecated`.
    pub fn all_directives(&self) -> &HashMap<String, Directive> {
        &self.directive_defs
    }

    /// Returns a [`HashMap<String, GraphQLType>`] containing all types defined
    /// within this [`Schema`].
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in types like
    /// [`GraphQLType::Bool`].
    pub fn all_types(&self) -> &HashMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn lookup_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    ///
    /// This factors in any `schema { mutation: ... }` override of the default
    /// `Mutation` type name.
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type_name.as_ref()
            .and_then(|type_name| self.types.get(type_name))
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// This factors in any `schema { query: ... }` override of the default
    /// `Query` type name.
    pub fn query_type(&self) -> Option<&GraphQLType> {
        self.types.get(self.query_type_name.as_str())
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type_name.as_ref()
            .and_then(|type_name| self.types.get(type_name))
    }
}
