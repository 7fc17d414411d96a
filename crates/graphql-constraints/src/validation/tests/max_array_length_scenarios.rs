use crate::constraints::CheckOptions;
use crate::constraints::ConstraintCheck;
use crate::constraints::ConstraintError;
use crate::constraints::MaxArrayLengthCheck;
use crate::schema::Schema;
use crate::validation::tests::test_utils::build_schema;
use crate::validation::tests::test_utils::error_message;
use crate::validation::tests::test_utils::validate_query;
use serde_json::json;

type Result<T> = std::result::Result<T, ConstraintError>;

const DIRECTIVE: &str =
    "directive @maxArrayLength(length: Int!) on ARGUMENT_DEFINITION | INPUT_FIELD_DEFINITION\n";

fn checks() -> Vec<Box<dyn ConstraintCheck>> {
    vec![Box::new(MaxArrayLengthCheck::new(CheckOptions::default()))]
}

fn run(schema: &Schema, query: &str) -> Result<()> {
    validate_query(schema, checks(), query, json!({}))
}

mod simple {
    use super::*;

    fn schema() -> Schema {
        build_schema(&format!("{DIRECTIVE}{}", concat!(
            "type Query {\n",
            "  echo(values: [Int!]! @maxArrayLength(length: 5)): [Int!]!\n",
            "  echo_unlimited(values: [Int!]!): [Int!]!\n",
            "}",
        )))
    }

    #[test]
    fn inline_arguments_without_limit() -> Result<()> {
        run(&schema(), "query { echo_unlimited(values: [1,2,3,4,5,6,7,8,9,10]) }")
    }

    #[test]
    fn inline_arguments_at_limit() -> Result<()> {
        run(&schema(), "query { echo(values: [1,2,3,4,5]) }")
    }

    #[test]
    fn inline_arguments_over_limit() {
        assert_eq!(
            error_message(run(&schema(), "query { echo(values: [1,2,3,4,5,6]) }")),
            "Invalid array length for argument values. Supplied 6 items, maximum allowed is 5",
        );
    }

    #[test]
    fn variable_arguments_at_limit() -> Result<()> {
        validate_query(
            &schema(),
            checks(),
            "query($values: [Int!]!) { echo(values: $values) }",
            json!({ "values": [1, 2, 3, 4, 5] }),
        )
    }

    #[test]
    fn variable_arguments_over_limit() {
        let result = validate_query(
            &schema(),
            checks(),
            "query($values: [Int!]!) { echo(values: $values) }",
            json!({ "values": [1, 2, 3, 4, 5, 6] }),
        );
        assert_eq!(
            error_message(result),
            "Invalid array length for argument values. Supplied 6 items, maximum allowed is 5",
        );
    }

    #[test]
    fn variables_nested_in_list_literals() {
        let result = validate_query(
            &schema(),
            checks(),
            "query($a: Int!, $b: Int!) { echo(values: [$a, $b, 3, 4, 5, $unbound]) }",
            json!({ "a": 1, "b": 2 }),
        );
        assert!(matches!(result, Err(ConstraintError::ArrayTooLong { supplied: 6, .. })));
    }

    #[test]
    fn introspection_fields_are_ignored() -> Result<()> {
        run(&schema(), concat!(
            "query IntrospectionQuery {\n",
            "  __typename\n",
            "  __schema { queryType { name } }\n",
            "}",
        ))
    }

    #[test]
    fn unknown_fields_are_ignored() -> Result<()> {
        run(&schema(), "query { unknown(values: [1,2,3,4,5,6]) { echo(values: [1,2,3,4,5,6]) } }")
    }

    #[test]
    fn shorthand_query_is_validated() {
        assert!(run(&schema(), "{ echo(values: [1,2,3,4,5,6]) }").is_err());
    }

    #[test]
    fn aliased_fields_are_validated() {
        assert!(run(&schema(), "{ ok: echo(values: [1]) bad: echo(values: [1,2,3,4,5,6]) }").is_err());
    }
}

mod renamed_directive {
    use super::*;

    fn schema() -> Schema {
        build_schema(concat!(
            "directive @maxArrayLen(length: Int!) on ARGUMENT_DEFINITION | INPUT_FIELD_DEFINITION\n",
            "type Query {\n",
            "  echo(values: [Int!]! @maxArrayLen(length: 5)): [Int!]!\n",
            "}",
        ))
    }

    fn renamed_checks() -> Vec<Box<dyn ConstraintCheck>> {
        vec![Box::new(MaxArrayLengthCheck::new(CheckOptions::named("maxArrayLen")))]
    }

    #[test]
    fn inline_arguments_at_limit() -> Result<()> {
        validate_query(&schema(), renamed_checks(), "query { echo(values: [1,2,3,4,5]) }", json!({}))
    }

    #[test]
    fn inline_arguments_over_limit() {
        let result = validate_query(
            &schema(),
            renamed_checks(),
            "query { echo(values: [1,2,3,4,5,6]) }",
            json!({}),
        );
        assert_eq!(
            error_message(result),
            "Invalid array length for argument values. Supplied 6 items, maximum allowed is 5",
        );
    }

    #[test]
    fn canonical_check_ignores_renamed_directive() -> Result<()> {
        run(&schema(), "query { echo(values: [1,2,3,4,5,6]) }")
    }
}

mod nested_values {
    use super::*;

    fn schema() -> Schema {
        build_schema(&format!("{DIRECTIVE}{}", concat!(
            "type Query {\n",
            "  echo(initial: [Int!]! @maxArrayLength(length: 4)): [Echo!]!\n",
            "}\n",
            "type Echo {\n",
            "  value: Int!\n",
            "  more(values: [Int!]! @maxArrayLength(length: 2)): [Int!]!\n",
            "}",
        )))
    }

    #[test]
    fn inline_arguments_ok() -> Result<()> {
        run(&schema(), "query { echo(initial: [1,2]) { value more(values: [5,6]) } }")
    }

    #[test]
    fn outer_argument_fails_first() {
        assert_eq!(
            error_message(run(
                &schema(),
                "query { echo(initial: [1,2,3,4,5]) { value more(values: [6,7,8]) } }",
            )),
            "Invalid array length for argument initial. Supplied 5 items, maximum allowed is 4",
        );
    }

    #[test]
    fn inner_argument_fails() {
        assert_eq!(
            error_message(run(
                &schema(),
                "query { echo(initial: [1,2]) { value more(values: [5,6,7]) } }",
            )),
            "Invalid array length for argument values. Supplied 3 items, maximum allowed is 2",
        );
    }

    #[test]
    fn fragment_spread_ok() -> Result<()> {
        run(&schema(), concat!(
            "query { echo(initial: [1,2]) { value ...echoFields } }\n",
            "fragment echoFields on Echo { more(values: [5,6]) }",
        ))
    }

    #[test]
    fn fragment_spread_over_limit() {
        assert_eq!(
            error_message(run(&schema(), concat!(
                "query { echo(initial: [1,2]) { value ...echoFields } }\n",
                "fragment echoFields on Echo { more(values: [5,6,7]) }",
            ))),
            "Invalid array length for argument values. Supplied 3 items, maximum allowed is 2",
        );
    }

    #[test]
    fn fragment_spread_with_variables() {
        let query = concat!(
            "query($values: [Int!]!) { echo(initial: [1,2]) { value ...echoFields } }\n",
            "fragment echoFields on Echo { more(values: $values) }",
        );
        assert!(validate_query(&schema(), checks(), query, json!({ "values": [5, 6] })).is_ok());
        assert!(validate_query(&schema(), checks(), query, json!({ "values": [5, 6, 7] })).is_err());
    }

    #[test]
    fn inline_fragments_with_and_without_type_condition() {
        assert!(run(&schema(), "{ echo(initial: [1]) { ... on Echo { more(values: [1,2,3]) } } }").is_err());
        assert!(run(&schema(), "{ echo(initial: [1]) { ... { more(values: [1,2,3]) } } }").is_err());
    }

    #[test]
    fn unused_fragments_are_not_walked() -> Result<()> {
        run(&schema(), concat!(
            "query { echo(initial: [1]) { value } }\n",
            "fragment unused on Echo { more(values: [1,2,3]) }",
        ))
    }

    #[test]
    fn fragment_cycles_terminate() {
        let result = run(&schema(), concat!(
            "query { echo(initial: [1]) { ...a } }\n",
            "fragment a on Echo { value ...b }\n",
            "fragment b on Echo { ...a more(values: [1,2,3]) }",
        ));
        assert!(matches!(result, Err(ConstraintError::ArrayTooLong { supplied: 3, .. })));
    }
}

mod custom_input_types {
    use super::*;

    fn schema() -> Schema {
        build_schema(&format!("{DIRECTIVE}{}", concat!(
            "type Query {\n",
            "  echo_one(value: EchoInput): [Int!]\n",
            "  echo(values: [EchoInput]! @maxArrayLength(length: 4)): [Int!]!\n",
            "  grid(rows: [[EchoInput]]): Int\n",
            "}\n",
            "input EchoInput {\n",
            "  value: Int!\n",
            "  values: [Int!]! @maxArrayLength(length: 2)\n",
            "}",
        )))
    }

    #[test]
    fn single_input_object_ok() -> Result<()> {
        run(&schema(), "query { echo_one(value: { value: 1, values: [2,3] }) }")
    }

    #[test]
    fn single_input_object_over_limit() {
        assert_eq!(
            error_message(run(&schema(), "query { echo_one(value: { value: 1, values: [2,3,4] }) }")),
            "Invalid array length for argument values. Supplied 3 items, maximum allowed is 2",
        );
    }

    #[test]
    fn list_of_input_objects_ok() -> Result<()> {
        run(&schema(), concat!(
            "query { echo(values: [{ value: 1, values: [2,3] }, { value: 4, values: [5,6] }]) }",
        ))
    }

    #[test]
    fn multiple_fields_ok() -> Result<()> {
        run(&schema(), concat!(
            "query {\n",
            "  echo_one(value: { value: 1, values: [2,3] })\n",
            "  echo(values: [{ value: 1, values: [2,3] }, { value: 4, values: [5,6] }])\n",
            "}",
        ))
    }

    #[test]
    fn list_of_input_objects_over_limit() {
        assert_eq!(
            error_message(run(
                &schema(),
                "query { echo(values: [{ value: 1, values: [2,3] }, { value: 4, values: [5,6,7] }]) }",
            )),
            "Invalid array length for argument values. Supplied 3 items, maximum allowed is 2",
        );
    }

    #[test]
    fn nulls_in_list_of_input_objects_are_skipped() -> Result<()> {
        run(&schema(), concat!(
            "query { echo(values: [{ value: 1, values: [2,3] }, null, { value: 4, values: [5,6] }]) }",
        ))
    }

    #[test]
    fn null_input_object() -> Result<()> {
        run(&schema(), "query { echo_one(value: null) }")
    }

    #[test]
    fn input_object_from_variable() {
        let query = "query($input: EchoInput) { echo_one(value: $input) }";
        assert!(validate_query(
            &schema(),
            checks(),
            query,
            json!({ "input": { "value": 1, "values": [2, 3] } }),
        ).is_ok());
        assert!(validate_query(
            &schema(),
            checks(),
            query,
            json!({ "input": { "value": 1, "values": [2, 3, 4] } }),
        ).is_err());
    }

    #[test]
    fn nested_lists_of_input_objects() {
        assert!(run(&schema(), concat!(
            "{ grid(rows: [[{ value: 1, values: [1] }, null], null, [{ value: 2, values: [1,2] }]]) }",
        )).is_ok());
        assert!(run(&schema(), concat!(
            "{ grid(rows: [[{ value: 1, values: [1] }], [null, { value: 2, values: [1,2,3] }]]) }",
        )).is_err());
    }

    #[test]
    fn lone_input_object_for_list_type_is_wrapped() {
        assert!(run(&schema(), "{ grid(rows: { value: 1, values: [1,2,3] }) }").is_err());
    }
}

mod defaults {
    use super::*;

    fn schema() -> Schema {
        build_schema(&format!("{DIRECTIVE}{}", concat!(
            "type Query {\n",
            "  echo(values: [Int] = [1,2,3] @maxArrayLength(length: 2)): Int\n",
            "  filter(by: Filter): Int\n",
            "}\n",
            "input Filter {\n",
            "  ids: [Int] = [1,2,3] @maxArrayLength(length: 2)\n",
            "}",
        )))
    }

    #[test]
    fn unbound_variable_uses_parameter_default() {
        assert!(run(&schema(), "query($v: [Int]) { echo(values: $v) }").is_err());
    }

    #[test]
    fn unbound_variable_prefers_variable_default() -> Result<()> {
        run(&schema(), "query($v: [Int] = [1]) { echo(values: $v) }")
    }

    #[test]
    fn explicit_null_is_never_checked() -> Result<()> {
        validate_query(
            &schema(),
            checks(),
            "query($v: [Int]) { echo(values: $v) }",
            json!({ "v": null }),
        )
    }

    #[test]
    fn omitted_arguments_are_not_checked() -> Result<()> {
        run(&schema(), "{ echo }")
    }

    #[test]
    fn input_field_defaults_are_applied() {
        assert!(run(&schema(), "{ filter(by: {}) }").is_err());
        assert!(run(&schema(), "{ filter(by: { ids: [1] }) }").is_ok());
    }
}

mod mutation {
    use super::*;

    fn schema() -> Schema {
        build_schema(&format!("{DIRECTIVE}{}", concat!(
            "type Query {\n",
            "  echo(values: [Int!]! @maxArrayLength(length: 5)): [Int!]!\n",
            "}\n",
            "type Mutation {\n",
            "  echo(values: [Int!]! @maxArrayLength(length: 4)): [Int!]!\n",
            "}",
        )))
    }

    #[test]
    fn mutation_at_limit() -> Result<()> {
        run(&schema(), "mutation { echo(values: [1,2,3,4]) }")
    }

    #[test]
    fn mutation_uses_mutation_root_type() {
        assert_eq!(
            error_message(run(&schema(), "mutation { echo(values: [1,2,3,4,5]) }")),
            "Invalid array length for argument values. Supplied 5 items, maximum allowed is 4",
        );
    }

    #[test]
    fn subscription_without_root_type_is_skipped() -> Result<()> {
        run(&schema(), "subscription { echo(values: [1,2,3,4,5,6,7]) }")
    }
}
