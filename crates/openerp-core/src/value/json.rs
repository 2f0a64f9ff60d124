use super::Value;

/// Converts a JSON-RPC payload value.
///
/// This conversion is lossy: JSON objects have no `Value` form and become
/// [`Value::Null`]. Properties such as `states` or `context` therefore read
/// back as null.
impl From<serde_json::Value> for Value {
    fn from(src: serde_json::Value) -> Self {
        match src {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(v) => Self::Bool(v),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(v) => Self::I64(v),
                None => n.as_f64().map(Self::F64).unwrap_or(Self::Null),
            },
            serde_json::Value::String(v) => Self::String(v),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                // Nested mappings such as `states` have no `Value` form.
                tracing::debug!(keys = map.len(), "dropping object-valued property");
                Self::Null
            }
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(src: &serde_json::Value) -> Self {
        Self::from(src.clone())
    }
}
