use std::fmt::Display;

/// Ordered request parameters.
///
/// The rendered string is what gets hashed into the token and what goes on
/// the wire, so pairs keep their insertion order and are rendered the same
/// way every time. Values are percent-encoded; keys are emitted as-is so that
/// array keys keep their literal `[]` suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Display) -> Self {
        self.push(key, value);
        self
    }

    pub fn with_opt<V: Display>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Appends one `key[]=value` pair per item.
    pub fn with_array<V: Display>(mut self, key: &str, values: &[V]) -> Self {
        let array_key = format!("{}[]", key);
        for value in values {
            self.pairs.push((array_key.clone(), value.to_string()));
        }
        self
    }

    pub fn push(&mut self, key: &str, value: impl Display) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Canonical `key=value&...` rendering.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// JSON object body with the same pairs, in the same order.
    pub fn to_json_body(&self) -> serde_json::Value {
        let map = self
            .pairs
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }
}
