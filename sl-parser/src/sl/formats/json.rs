//! JSON output
//!
//! Trees and declarations serialize through their `serde` derives. Tokens are flattened to
//! `{token, text, start, end}` records so the dump stays readable.

use crate::sl::token::TokenSpan;
use serde::Serialize;
use serde_json::json;

/// Pretty-print any serializable value
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Convert tokens to JSON-serializable format
pub fn tokens_to_json(tokens: &[TokenSpan]) -> serde_json::Value {
    json!(tokens
        .iter()
        .map(|(token, range)| {
            json!({
                "token": token.kind(),
                "text": token.text(),
                "start": range.start,
                "end": range.end,
            })
        })
        .collect::<Vec<_>>())
}
