use crate::ast;
use indexmap::IndexMap;

/// A concrete runtime value bound to an argument or input field.
///
/// Unlike the literal values found in a parsed document, a [`Value`] never
/// contains variable references: by the time a value reaches a
/// [`ConstraintCheck`](crate::constraints::ConstraintCheck) every variable has
/// already been substituted with its bound value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
}
impl Value {
    pub fn as_i64(&self) -> Option<i64> {
        if let Self::Int(int) = self {
            Some(*int)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        if let Self::List(items) = self {
            Some(items.as_slice())
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        if let Self::Object(entries) = self {
            Some(entries)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Converts a constant (variable-free) AST value, such as a default value
    /// or a directive argument written in a schema.
    ///
    /// Variable references have no meaning in a constant context and convert
    /// to [`Value::Null`].
    pub(crate) fn from_const_ast(ast_value: &ast::schema::Value) -> Self {
        match ast_value {
            ast::schema::Value::Variable(_) =>
                Value::Null,

            ast::schema::Value::Int(number) =>
                number.as_i64().map_or(Value::Null, Value::Int),

            ast::schema::Value::Float(value) =>
                Value::Float(*value),

            ast::schema::Value::String(value) =>
                Value::String(value.clone()),

            ast::schema::Value::Boolean(value) =>
                Value::Boolean(*value),

            ast::schema::Value::Null =>
                Value::Null,

            ast::schema::Value::Enum(value) =>
                Value::Enum(value.clone()),

            ast::schema::Value::List(values) =>
                Value::List(values.iter().map(Value::from_const_ast).collect()),

            ast::schema::Value::Object(entries) =>
                Value::Object(entries.iter().map(|(key, ast_value)|
                    (key.clone(), Value::from_const_ast(ast_value))
                ).collect()),
        }
    }

    /// Converts a deserialized JSON value (e.g. a request variable) without
    /// any knowledge of the type it is bound to.
    pub fn from_json(json_value: &serde_json::Value) -> Self {
        match json_value {
            serde_json::Value::Null =>
                Value::Null,

            serde_json::Value::Bool(value) =>
                Value::Boolean(*value),

            serde_json::Value::Number(number) =>
                match number.as_i64() {
                    Some(int) => Value::Int(int),
                    None => Value::Float(number.as_f64().unwrap_or(f64::NAN)),
                },

            serde_json::Value::String(value) =>
                Value::String(value.clone()),

            serde_json::Value::Array(values) =>
                Value::List(values.iter().map(Value::from_json).collect()),

            serde_json::Value::Object(entries) =>
                Value::Object(entries.iter().map(|(key, json_value)|
                    (key.clone(), Value::from_json(json_value))
                ).collect()),
        }
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Enum(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            },
            Self::Null => write!(f, "null"),
            Self::Object(entries) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::String(value) => write!(f, "{value:?}"),
        }
    }
}
