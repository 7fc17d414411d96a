use crate::loc;
use crate::schema::GraphQLOperationType;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::InputValueDef;
use crate::Value;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod build_operations {
    use super::*;

    #[test]
    fn build_empty_query_type_str() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query")?
            .build()?;

        assert_eq!(schema.all_directives().len(), 4);
        assert!(schema.mutation_type().is_none());
        assert!(schema.subscription_type().is_none());
        assert_eq!(schema.all_types().len(), 6);

        let query_obj_type = schema.query_type().unwrap().unwrap_object();
        assert_eq!(query_obj_type.name(), "Query");
        assert_eq!(query_obj_type.def_location(), &loc::FilePosition {
            col: 1,
            file: PathBuf::from("str://0"),
            line: 1,
        });
        assert!(query_obj_type.directives().is_empty());
        assert!(query_obj_type.fields().is_empty());

        Ok(())
    }

    #[test]
    fn build_all_operation_types_single_str() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Mutation\n",
                "type Query\n",
                "type Subscription",
            ))?
            .build()?;

        assert_eq!(schema.all_types().len(), 8);
        assert_eq!(schema.mutation_type().unwrap().name(), "Mutation");
        assert_eq!(schema.query_type().unwrap().name(), "Query");
        assert_eq!(schema.subscription_type().unwrap().name(), "Subscription");

        let subscription_obj_type = schema.subscription_type().unwrap().unwrap_object();
        assert_eq!(subscription_obj_type.def_location(), &loc::FilePosition {
            col: 1,
            file: PathBuf::from("str://0"),
            line: 3,
        });

        Ok(())
    }

    #[test]
    fn build_operation_types_from_schema_block() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: RootQuery, mutation: RootMutation }\n",
                "type RootQuery\n",
                "type RootMutation",
            ))?
            .build()?;

        assert_eq!(schema.query_type().unwrap().name(), "RootQuery");
        assert_eq!(schema.mutation_type().unwrap().name(), "RootMutation");
        assert!(schema.subscription_type().is_none());

        Ok(())
    }

    #[test]
    fn build_without_query_type_errors() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "type Mutation")?
            .build();

        assert_eq!(result.unwrap_err(), SchemaBuildError::NoQueryOperationTypeDefined);

        Ok(())
    }

    #[test]
    fn build_with_undefined_schema_block_type_errors() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: Query, mutation: Missing }\n",
                "type Query",
            ))?
            .build();

        assert_eq!(result.unwrap_err(), SchemaBuildError::UndefinedRootOperationType {
            type_name: "Missing".to_string(),
        });

        Ok(())
    }

    #[test]
    fn duplicate_schema_block_operation_errors() {
        let result = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: Query }\n",
                "schema { query: Query }\n",
                "type Query",
            ));

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateOperationDefinition {
                operation: GraphQLOperationType::Query,
                ..
            },
        ));
    }
}

mod build_types {
    use super::*;

    #[test]
    fn field_parameters_keep_directive_annotations() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "directive @maxArrayLength(length: Int!) on ARGUMENT_DEFINITION\n",
                "type Query {\n",
                "  search(ids: [ID!]! @maxArrayLength(length: 5), limit: Int = 10): String\n",
                "}",
            ))?
            .build()?;

        let search_field = schema.query_type().unwrap()
            .unwrap_object()
            .field("search")
            .unwrap();
        let param_names: Vec<&str> = search_field.parameters()
            .keys()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(param_names, vec!["ids", "limit"]);

        let ids_param = search_field.parameters().get("ids").unwrap();
        assert_eq!(ids_param.type_annotation().to_string(), "[ID!]!");
        let annot = ids_param.directive("maxArrayLength").unwrap();
        assert_eq!(annot.arg("length"), Some(&Value::Int(5)));

        let limit_param = search_field.parameters().get("limit").unwrap();
        assert!(limit_param.directives().is_empty());
        assert_eq!(limit_param.default_value(), Some(&Value::Int(10)));

        Ok(())
    }

    #[test]
    fn input_object_fields_keep_declaration_order() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { echo(input: Range): Int }\n",
                "input Range {\n",
                "  to: Int\n",
                "  from: Int = 0\n",
                "}",
            ))?
            .build()?;

        let range_type = schema.lookup_type("Range")
            .and_then(GraphQLType::as_input_object)
            .unwrap();
        let field_names: Vec<&str> = range_type.fields()
            .keys()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(field_names, vec!["to", "from"]);

        let from_field = range_type.fields().get("from").unwrap();
        assert_eq!(from_field.parent_type_name(), "Range");
        assert_eq!(from_field.default_value(), Some(&Value::Int(0)));

        Ok(())
    }

    #[test]
    fn duplicate_type_definition_errors() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query\ntype Query");

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateTypeDefinition { type_name, .. }
                if type_name == "Query",
        ));
    }

    #[test]
    fn redefining_builtin_scalar_errors() {
        let result = SchemaBuilder::new()
            .load_str(None, "scalar Int");

        assert_eq!(result.unwrap_err(), SchemaBuildError::DuplicateTypeDefinition {
            type_name: "Int".to_string(),
            def1: loc::SchemaDefLocation::GraphQLBuiltIn,
            def2: loc::FilePosition {
                col: 1,
                file: PathBuf::from("str://0"),
                line: 1,
            }.into(),
        });
    }

    #[test]
    fn duplicate_field_definition_errors() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int, a: String }");

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateFieldNameDefinition { type_name, field_name, .. }
                if type_name == "Query" && field_name == "a",
        ));
    }

    #[test]
    fn parse_error_names_the_source() {
        let result = SchemaBuilder::new()
            .load_str(Some(PathBuf::from("broken.graphql")), "type Query {");

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::ParseError { file, .. }
                if file == PathBuf::from("broken.graphql"),
        ));
    }

    #[test]
    fn each_str_load_gets_its_own_path() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query")?
            .load_str(None, "type Mutation")?
            .build()?;

        let mutation_obj_type = schema.mutation_type().unwrap().unwrap_object();
        assert_eq!(mutation_obj_type.def_location().file, PathBuf::from("str://1"));

        Ok(())
    }
}

mod build_extensions {
    use super::*;

    #[test]
    fn object_extension_adds_fields() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "extend type Query { b(v: Int): Int }")?
            .load_str(None, "type Query { a: Int }")?
            .build()?;

        let query_obj_type = schema.query_type().unwrap().unwrap_object();
        let field_names: Vec<&str> = query_obj_type.fields()
            .keys()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(field_names, vec!["a", "b"]);

        Ok(())
    }

    #[test]
    fn input_object_extension_adds_fields() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { a(r: Range): Int }\n",
                "input Range { min: Int }\n",
                "extend input Range { max: Int }",
            ))?
            .build()?;

        let range_type = schema.lookup_type("Range")
            .and_then(GraphQLType::as_input_object)
            .unwrap();
        assert!(range_type.fields().contains_key("max"));

        Ok(())
    }

    #[test]
    fn enum_and_union_extensions_are_accepted() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { a(c: Color): Pet }\n",
                "type Cat { name: String }\n",
                "type Dog { name: String }\n",
                "enum Color { RED }\n",
                "union Pet = Cat\n",
                "extend enum Color { BLUE }\n",
                "extend union Pet = Dog",
            ))?
            .build()?;

        assert!(matches!(schema.lookup_type("Color"), Some(GraphQLType::Enum(_))));
        assert!(matches!(schema.lookup_type("Pet"), Some(GraphQLType::Union(_))));

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type_errors() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query\nextend type Missing { a: Int }")?
            .build();

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::ExtensionOfUndefinedType { type_name, .. }
                if type_name == "Missing",
        ));

        Ok(())
    }

    #[test]
    fn extension_of_wrong_kind_errors() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query\nextend input Query { a: Int }")?
            .build();

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::InvalidExtensionType { type_name, .. }
                if type_name == "Query",
        ));

        Ok(())
    }
}

mod build_directives {
    use super::*;

    #[test]
    fn builtin_directives_are_injected() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query")?
            .build()?;

        let directives = schema.all_directives();
        assert_eq!(directives.get("skip"), Some(&Directive::Skip));
        assert_eq!(directives.get("include"), Some(&Directive::Include));
        assert_eq!(directives.get("deprecated"), Some(&Directive::Deprecated));
        assert_eq!(directives.get("specifiedBy"), Some(&Directive::SpecifiedBy));

        Ok(())
    }

    #[test]
    fn custom_directive_definition_is_recorded() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "\"Define a bounded integer\"\n",
                "directive @boundedInteger(min: Int!, max: Int!) ",
                "on INPUT_FIELD_DEFINITION | ARGUMENT_DEFINITION\n",
                "type Query",
            ))?
            .build()?;

        let directive = schema.all_directives().get("boundedInteger").unwrap();
        let param_names: Vec<&str> = directive.params()
            .unwrap()
            .keys()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(param_names, vec!["min", "max"]);
        assert!(matches!(
            directive,
            Directive::Custom { description: Some(description), locations, .. }
                if description == "Define a bounded integer" && locations.len() == 2,
        ));

        Ok(())
    }

    #[test]
    fn redefinition_of_builtin_directive_errors() {
        let result = SchemaBuilder::new()
            .load_str(None, "directive @skip(if: Boolean!) on FIELD");

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::RedefinitionOfBuiltinDirective { directive_name, .. }
                if directive_name == "skip",
        ));
    }

    #[test]
    fn duplicate_directive_definition_errors() {
        let result = SchemaBuilder::new()
            .load_str(None, "directive @a on FIELD")
            .and_then(|builder| builder.load_str(None, "directive @a on FIELD"));

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::DuplicateDirectiveDefinition { directive_name, .. }
                if directive_name == "a",
        ));
    }
}

mod load_files {
    use super::*;

    #[test]
    fn missing_file_errors() {
        let result = SchemaBuilder::new()
            .load_file("/this/path/does/not/exist.graphql");

        assert!(matches!(
            result.unwrap_err(),
            SchemaBuildError::SchemaFileReadError(_),
        ));
    }

    #[test]
    fn file_paths_appear_in_locations() -> Result<()> {
        let file_path = std::env::temp_dir().join(format!(
            "graphql-constraints-schema-{}.graphql",
            std::process::id(),
        ));
        std::fs::write(&file_path, "type Query { a: Int }").unwrap();

        let schema = SchemaBuilder::new()
            .load_file(&file_path)?
            .build()?;
        std::fs::remove_file(&file_path).unwrap();

        let query_obj_type = schema.query_type().unwrap().unwrap_object();
        assert_eq!(query_obj_type.def_location().file, file_path);

        Ok(())
    }
}
