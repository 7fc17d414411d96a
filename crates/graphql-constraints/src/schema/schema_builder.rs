use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::schema::Schema;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::ObjectOrInterfaceType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::UnionType;
use crate::DirectiveAnnotation;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn builtin_directive_names() -> &'static HashSet<&'static str> {
    static NAMES: OnceLock<HashSet<&'static str>> = OnceLock::new();
    NAMES.get_or_init(|| {
        HashSet::from([
            "skip",
            "include",
            "deprecated",
            "specifiedBy",
        ])
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum GraphQLOperationType {
    Query,
    Mutation,
    Subscription,
}

/// Utility for building a [`Schema`].
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: HashMap<String, Directive>,
    mutation_type: Option<NamedTypeDefLocation>,
    query_type: Option<NamedTypeDefLocation>,
    str_load_counter: u16,
    subscription_type: Option<NamedTypeDefLocation>,
    type_extensions: Vec<(PathBuf, ast::schema::TypeExtension)>,
    types: HashMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        self.inject_missing_builtin_directives();

        for (file_path, ext) in std::mem::take(&mut self.type_extensions) {
            self.merge_type_extension(file_path.as_path(), &ext)?;
        }

        let query_type_name =
            if let Some(def) = self.query_type.take() {
                def.type_name
            } else if let Some(GraphQLType::Object(_)) = self.types.get("Query") {
                "Query".to_string()
            } else {
                return Err(SchemaBuildError::NoQueryOperationTypeDefined);
            };

        let mutation_type_name =
            if let Some(def) = self.mutation_type.take() {
                Some(def.type_name)
            } else {
                match self.types.get("Mutation") {
                    Some(GraphQLType::Object(_)) => Some("Mutation".to_string()),
                    _ => None,
                }
            };

        let subscription_type_name =
            if let Some(def) = self.subscription_type.take() {
                Some(def.type_name)
            } else {
                match self.types.get("Subscription") {
                    Some(GraphQLType::Object(_)) => Some("Subscription".to_string()),
                    _ => None,
                }
            };

        for root_type_name in std::iter::once(&query_type_name)
            .chain(mutation_type_name.iter())
            .chain(subscription_type_name.iter()) {
            if !matches!(self.types.get(root_type_name), Some(GraphQLType::Object(_))) {
                return Err(SchemaBuildError::UndefinedRootOperationType {
                    type_name: root_type_name.to_owned(),
                });
            }
        }

        Ok(Schema {
            directive_defs: self.directive_defs,
            query_type_name,
            mutation_type_name,
            subscription_type_name,
            types: self.types,
        })
    }

    pub fn new() -> Self {
        let types = HashMap::from([
            ("Boolean".to_string(), GraphQLType::Bool),
            ("Float".to_string(), GraphQLType::Float),
            ("ID".to_string(), GraphQLType::ID),
            ("Int".to_string(), GraphQLType::Int),
            ("String".to_string(), GraphQLType::String),
        ]);

        Self {
            directive_defs: HashMap::new(),
            mutation_type: None,
            query_type: None,
            str_load_counter: 0,
            subscription_type: None,
            type_extensions: vec![],
            types,
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    fn inject_missing_builtin_directives(&mut self) {
        for builtin in [
            Directive::Skip,
            Directive::Include,
            Directive::Deprecated,
            Directive::SpecifiedBy,
        ] {
            if !self.directive_defs.contains_key(builtin.name()) {
                self.directive_defs.insert(builtin.name().to_string(), builtin);
            }
        }
    }

    fn insert_type(
        &mut self,
        def_location: loc::FilePosition,
        graphql_type: GraphQLType,
    ) -> Result<()> {
        let type_name = graphql_type.name().to_string();
        if let Some(existing_type) = self.types.get(type_name.as_str()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name,
                def1: existing_type.def_location(),
                def2: def_location.into(),
            });
        }
        tracing::trace!("Defined type `{type_name}` at {def_location}.");
        self.types.insert(type_name, graphql_type);
        Ok(())
    }

    fn merge_type_extension(
        &mut self,
        file_path: &Path,
        ext: &ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;

        let (ext_type_name, ext_position) = match ext {
            TypeExtension::Enum(ext) => (&ext.name, ext.position),
            TypeExtension::InputObject(ext) => (&ext.name, ext.position),
            TypeExtension::Interface(ext) => (&ext.name, ext.position),
            TypeExtension::Object(ext) => (&ext.name, ext.position),
            TypeExtension::Scalar(ext) => (&ext.name, ext.position),
            TypeExtension::Union(ext) => (&ext.name, ext.position),
        };
        let ext_loc = loc::FilePosition::from_pos(file_path, ext_position);

        let existing_type = match self.types.get_mut(ext_type_name.as_str()) {
            Some(existing_type) => existing_type,
            None => return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name: ext_type_name.to_string(),
                extension_type_loc: ext_loc.into(),
            }),
        };

        match (existing_type, ext) {
            // Enum values and union members are not modeled.
            (GraphQLType::Enum(_), TypeExtension::Enum(_))
                | (GraphQLType::Union(_), TypeExtension::Union(_)) => (),

            (GraphQLType::InputObject(inputobj_type), TypeExtension::InputObject(ext)) => {
                inputobj_type.directives.append(&mut DirectiveAnnotation::from_ast(
                    file_path,
                    &ext.directives,
                ));
                for ext_field in ext.fields.iter() {
                    let field = InputField::from_ast(
                        file_path,
                        ext.name.as_str(),
                        ext_field,
                    );
                    insert_unique_field(
                        &mut inputobj_type.fields,
                        ext.name.as_str(),
                        field.name.to_owned(),
                        field,
                        |field| &field.def_location,
                    )?;
                }
            },

            (GraphQLType::Interface(iface_type), TypeExtension::Interface(ext)) => {
                iface_type.directives.append(&mut DirectiveAnnotation::from_ast(
                    file_path,
                    &ext.directives,
                ));
                for ext_field in ext.fields.iter() {
                    let field = Field::from_ast(file_path, ext_field);
                    insert_unique_field(
                        &mut iface_type.fields,
                        ext.name.as_str(),
                        field.name.to_owned(),
                        field,
                        |field| &field.def_location,
                    )?;
                }
            },

            (GraphQLType::Object(obj_type), TypeExtension::Object(ext)) => {
                obj_type.directives.append(&mut DirectiveAnnotation::from_ast(
                    file_path,
                    &ext.directives,
                ));
                for ext_field in ext.fields.iter() {
                    let field = Field::from_ast(file_path, ext_field);
                    insert_unique_field(
                        &mut obj_type.fields,
                        ext.name.as_str(),
                        field.name.to_owned(),
                        field,
                        |field| &field.def_location,
                    )?;
                }
            },

            (GraphQLType::Scalar(scalar_type), TypeExtension::Scalar(ext)) => {
                scalar_type.directives.append(&mut DirectiveAnnotation::from_ast(
                    file_path,
                    &ext.directives,
                ));
            },

            (existing_type, _) => return Err(SchemaBuildError::InvalidExtensionType {
                type_name: existing_type.name().to_string(),
                extension_loc: ext_loc.into(),
            }),
        }

        Ok(())
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                // Extensions may appear before the type they extend (possibly
                // in a different file), so merging waits until build().
                self.type_extensions.push((file_path.to_path_buf(), type_ext));
                Ok(())
            },
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(file_path, directive_def),
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let file_position = loc::FilePosition::from_pos(
            file_path,
            def.position,
        );

        if builtin_directive_names().contains(def.name.as_str()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name: def.name,
                location: file_position.into(),
            });
        }

        if let Some(Directive::Custom {
            def_location,
            ..
        }) = self.directive_defs.get(def.name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name.clone(),
                location1: def_location.clone().into(),
                location2: file_position.into(),
            });
        }

        self.directive_defs.insert(def.name.to_string(), Directive::Custom {
            def_location: file_position,
            description: def.description.to_owned(),
            locations: def.locations.to_owned(),
            name: def.name.to_string(),
            params: def.arguments.iter().map(|input_val| (
                input_val.name.to_string(),
                Parameter::from_ast(file_path, input_val),
            )).collect(),
        });

        Ok(())
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let root_types = [
            (GraphQLOperationType::Query, schema_def.query),
            (GraphQLOperationType::Mutation, schema_def.mutation),
            (GraphQLOperationType::Subscription, schema_def.subscription),
        ];

        for (operation, type_name) in root_types {
            let Some(type_name) = type_name else {
                continue
            };

            let typedef_loc = NamedTypeDefLocation::from_pos(
                type_name,
                file_path,
                schema_def.position,
            );

            let slot = match operation {
                GraphQLOperationType::Query => &mut self.query_type,
                GraphQLOperationType::Mutation => &mut self.mutation_type,
                GraphQLOperationType::Subscription => &mut self.subscription_type,
            };

            if let Some(existing_typedef_loc) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing_typedef_loc.clone(),
                    location2: typedef_loc,
                });
            }
            *slot = Some(typedef_loc);
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(enum_def) => {
                let def_location = loc::FilePosition::from_pos(file_path, enum_def.position);
                self.insert_type(def_location.clone(), GraphQLType::Enum(EnumType {
                    def_location,
                    name: enum_def.name,
                }))
            },

            TypeDefinition::InputObject(inputobj_def) => {
                let def_location = loc::FilePosition::from_pos(file_path, inputobj_def.position);
                let mut fields = IndexMap::new();
                for ast_field in inputobj_def.fields.iter() {
                    let field = InputField::from_ast(
                        file_path,
                        inputobj_def.name.as_str(),
                        ast_field,
                    );
                    insert_unique_field(
                        &mut fields,
                        inputobj_def.name.as_str(),
                        field.name.to_owned(),
                        field,
                        |field| &field.def_location,
                    )?;
                }
                self.insert_type(def_location.clone(), GraphQLType::InputObject(InputObjectType {
                    def_location,
                    directives: DirectiveAnnotation::from_ast(file_path, &inputobj_def.directives),
                    fields,
                    name: inputobj_def.name,
                }))
            },

            TypeDefinition::Interface(iface_def) => {
                let def_location = loc::FilePosition::from_pos(file_path, iface_def.position);
                let iface_type = ObjectOrInterfaceType {
                    def_location: def_location.clone(),
                    directives: DirectiveAnnotation::from_ast(file_path, &iface_def.directives),
                    fields: build_fields(file_path, iface_def.name.as_str(), &iface_def.fields)?,
                    name: iface_def.name,
                };
                self.insert_type(def_location, GraphQLType::Interface(iface_type))
            },

            TypeDefinition::Object(obj_def) => {
                let def_location = loc::FilePosition::from_pos(file_path, obj_def.position);
                let obj_type = ObjectOrInterfaceType {
                    def_location: def_location.clone(),
                    directives: DirectiveAnnotation::from_ast(file_path, &obj_def.directives),
                    fields: build_fields(file_path, obj_def.name.as_str(), &obj_def.fields)?,
                    name: obj_def.name,
                };
                self.insert_type(def_location, GraphQLType::Object(obj_type))
            },

            TypeDefinition::Scalar(scalar_def) => {
                let def_location = loc::FilePosition::from_pos(file_path, scalar_def.position);
                self.insert_type(def_location.clone(), GraphQLType::Scalar(ScalarType {
                    def_location,
                    directives: DirectiveAnnotation::from_ast(file_path, &scalar_def.directives),
                    name: scalar_def.name,
                }))
            },

            TypeDefinition::Union(union_def) => {
                let def_location = loc::FilePosition::from_pos(file_path, union_def.position);
                self.insert_type(def_location.clone(), GraphQLType::Union(UnionType {
                    def_location,
                    name: union_def.name,
                }))
            },
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn build_fields(
    file_path: &Path,
    type_name: &str,
    ast_fields: &[ast::schema::Field],
) -> Result<IndexMap<String, Field>> {
    let mut fields = IndexMap::new();
    for ast_field in ast_fields {
        let field = Field::from_ast(file_path, ast_field);
        insert_unique_field(
            &mut fields,
            type_name,
            field.name.to_owned(),
            field,
            |field| &field.def_location,
        )?;
    }
    Ok(fields)
}

fn insert_unique_field<F>(
    fields: &mut IndexMap<String, F>,
    type_name: &str,
    field_name: String,
    field: F,
    def_location: fn(&F) -> &loc::SchemaDefLocation,
) -> Result<()> {
    if let Some(existing_field) = fields.get(field_name.as_str()) {
        return Err(SchemaBuildError::DuplicateFieldNameDefinition {
            type_name: type_name.to_string(),
            field_name,
            field_def1: def_location(existing_field).clone(),
            field_def2: def_location(&field).clone(),
        });
    }
    fields.insert(field_name, field);
    Ok(())
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the same name: `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SchemaDefLocation,
        location2: loc::SchemaDefLocation,
    },

    #[error(
        "Multiple fields named `{field_name}` were defined on the \
        `{type_name}` type"
    )]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SchemaDefLocation,
        field_def2: loc::SchemaDefLocation,
    },

    #[error("Multiple definitions of the same operation were defined")]
    DuplicateOperationDefinition {
        operation: GraphQLOperationType,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error("Attempted to extend the `{type_name}` type, which is not defined elsewhere")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_type_loc: loc::SchemaDefLocation,
    },

    #[error(
        "Attempted to extend the `{type_name}` type using an extension for a \
        different kind of type"
    )]
    InvalidExtensionType {
        type_name: String,
        extension_loc: loc::SchemaDefLocation,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema file {file:?}: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Attempted to redefine the builtin `@{directive_name}` directive")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::SchemaDefLocation,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error("The root operation type `{type_name}` is not defined as an object type")]
    UndefinedRootOperationType {
        type_name: String,
    },
}

/// Represents the file location of a given type's definition in the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SchemaDefLocation,
    pub type_name: String,
}
impl NamedTypeDefLocation {
    pub(crate) fn from_pos(
        type_name: String,
        file: &Path,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(file, pos).into(),
            type_name,
        }
    }
}
