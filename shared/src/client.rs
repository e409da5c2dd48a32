//! Client-related types shared between server and client
//!
//! Wire-level structures used in API communication.

use serde::{Deserialize, Serialize};

/// Error body returned by the inventory backend on failed calls
///
/// Not every failure carries one; callers fall back to a generic
/// message when the body is absent or unparseable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_message_is_optional() {
        let parsed: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(parsed.message.is_empty());

        let parsed: ErrorBody = serde_json::from_str(r#"{"message":"car is locked"}"#).unwrap();
        assert_eq!(parsed.message, "car is locked");
    }
}
