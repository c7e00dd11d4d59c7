//! Search result envelope

use serde_json::Value;

use crate::decode::{self, Decodable, DecodeError, DecodeResult, JsonObject};

/// Generic envelope returned by the search endpoints
///
/// `items` preserves the API-returned order. Decoding is all-or-nothing: a
/// single malformed element fails the whole envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<T> {
    /// Total number of matches the server reports for the query
    pub total_count: u64,

    /// Whether the server timed out and returned a partial match set
    pub incomplete_results: bool,

    /// The matches for the requested page, in API order
    pub items: Vec<T>,
}

impl<T: Decodable> Decodable for SearchResult<T> {
    fn decode(json: &JsonObject) -> DecodeResult<Self> {
        let total_count = decode::require(json, "total_count")?;
        let incomplete_results = decode::require(json, "incomplete_results")?;

        let raw_items: Vec<Value> = decode::require(json, "items")?;
        let items = raw_items
            .iter()
            .map(|item| {
                let object = item.as_object().ok_or_else(|| DecodeError::TypeMismatch {
                    key: "items".to_owned(),
                    expected: "object",
                    actual: decode::json_type_name(item),
                })?;
                T::decode(object)
            })
            .collect::<DecodeResult<Vec<T>>>()?;

        Ok(Self {
            total_count,
            incomplete_results,
            items,
        })
    }
}

impl<T> SearchResult<T> {
    /// Re-serialize the envelope, mapping items through `item_to_json`
    pub fn to_json(&self, item_to_json: impl Fn(&T) -> Value) -> Value {
        serde_json::json!({
            "total_count": self.total_count,
            "incomplete_results": self.incomplete_results,
            "items": self.items.iter().map(item_to_json).collect::<Vec<_>>(),
        })
    }
}
