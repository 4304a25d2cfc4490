//! JSON body helpers shared by the fallback, panic responder, and root route.

use serde_json::Value;

/// Error bodies carry a single `error` string field.
pub fn error_body(message: impl Into<String>) -> Value {
    serde_json::json!({ "error": message.into() })
}

pub fn message_body(text: &str) -> Value {
    serde_json::json!({ "message": text })
}
