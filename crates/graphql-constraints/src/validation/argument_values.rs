use crate::ast;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputValueDef;
use crate::types::TypeAnnotation;
use crate::Value;
use crate::Variables;
use indexmap::IndexMap;
use std::collections::HashMap;

/// The runtime values of an operation's declared variables.
///
/// A variable is present if the request bound it (even to `null`) or if its
/// definition declares a default value. Undeclared bindings are ignored.
#[derive(Debug, Default)]
pub(crate) struct VariableValues {
    values: HashMap<String, Value>,
}
impl VariableValues {
    pub(crate) fn new(
        variable_defs: &[ast::query::VariableDefinition],
        bindings: &Variables,
    ) -> Self {
        let mut values = HashMap::new();
        for var_def in variable_defs {
            let value =
                if let Some(json_value) = bindings.get(var_def.name.as_str()) {
                    Value::from_json(json_value)
                } else if let Some(default_value) = &var_def.default_value {
                    Value::from_const_ast(default_value)
                } else {
                    continue
                };
            values.insert(var_def.name.to_string(), value);
        }
        Self { values }
    }

    fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}

/// Resolves the value of every parameter declared on `field_def` for one
/// selection of that field. Parameters that end up with no value are left out
/// of the returned map.
pub(crate) fn resolve_argument_values(
    schema: &Schema,
    field_def: &Field,
    ast_field: &ast::query::Field,
    variables: &VariableValues,
) -> IndexMap<String, Value> {
    let mut resolved = IndexMap::new();
    for (param_name, param) in field_def.parameters() {
        let ast_value = ast_field.arguments.iter()
            .find(|(arg_name, _)| arg_name == param_name)
            .map(|(_, ast_value)| ast_value);

        let value = ast_value
            .and_then(|ast_value| literal_value(ast_value, variables))
            .or_else(|| param.default_value().cloned());

        if let Some(value) = value {
            resolved.insert(
                param_name.to_string(),
                coerce_value(schema, param.type_annotation(), value),
            );
        }
    }
    resolved
}

/// Converts a (possibly variable-bearing) literal, substituting variables.
///
/// Returns `None` only when `ast_value` itself is a variable with no value.
/// A missing variable nested in a list becomes `null` and a missing variable
/// nested in an object drops that entry.
fn literal_value(
    ast_value: &ast::query::Value,
    variables: &VariableValues,
) -> Option<Value> {
    use ast::query::Value as AstValue;
    match ast_value {
        AstValue::Variable(var_name) =>
            variables.get(var_name.as_str()).cloned(),

        AstValue::List(items) =>
            Some(Value::List(items.iter().map(|item|
                literal_value(item, variables).unwrap_or(Value::Null)
            ).collect())),

        AstValue::Object(entries) =>
            Some(Value::Object(entries.iter().filter_map(|(key, item)|
                literal_value(item, variables).map(|value| (key.to_string(), value))
            ).collect())),

        constant =>
            Some(Value::from_const_ast(constant)),
    }
}

/// Shapes an untyped value after the type it is bound to.
///
/// This never fails: a value that does not fit its type is passed through
/// unchanged, since type errors are reported by the executor.
pub(crate) fn coerce_value(
    schema: &Schema,
    type_annot: &TypeAnnotation,
    value: Value,
) -> Value {
    if value.is_null() {
        return Value::Null;
    }

    match type_annot {
        TypeAnnotation::List(list_annot) => {
            let inner_annot = list_annot.inner_type_annotation();
            match value {
                Value::List(items) =>
                    Value::List(items.into_iter()
                        .map(|item| coerce_value(schema, inner_annot, item))
                        .collect()),
                item =>
                    Value::List(vec![coerce_value(schema, inner_annot, item)]),
            }
        },

        TypeAnnotation::Named(named_annot) => match (named_annot.graphql_type(schema), value) {
            (Some(GraphQLType::InputObject(inputobj_type)), Value::Object(mut entries)) => {
                let mut coerced = IndexMap::new();
                for (field_name, input_field) in inputobj_type.fields() {
                    let field_value = entries
                        .swap_remove(field_name.as_str())
                        .or_else(|| input_field.default_value().cloned());
                    if let Some(field_value) = field_value {
                        coerced.insert(
                            field_name.to_string(),
                            coerce_value(schema, input_field.type_annotation(), field_value),
                        );
                    }
                }
                Value::Object(coerced)
            },

            (Some(GraphQLType::Enum(_)), Value::String(enum_value)) =>
                Value::Enum(enum_value),

            (Some(GraphQLType::Float), Value::Int(int_value)) =>
                Value::Float(int_value as f64),

            // JSON has no integer type of its own, so `11.0` is a valid Int.
            (Some(GraphQLType::Int), Value::Float(float_value))
                if float_value.fract() == 0.0
                    && float_value >= i64::MIN as f64
                    && float_value < i64::MAX as f64 =>
                Value::Int(float_value as i64),

            (_, value) =>
                value,
        },
    }
}
