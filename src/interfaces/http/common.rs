//! Common API DTOs

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Standard API response envelope
///
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "error": "message"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request succeeded
    pub success: bool,
    /// Payload, `null` on failure
    pub data: Option<T>,
    /// Error description, omitted on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Read an optional positive number from a query string.
///
/// Missing, empty, non-numeric and zero values all become `None` so the
/// handler falls back to its default instead of rejecting the request.
pub fn lenient_page_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .map(str::trim)
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|value| *value > 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Params {
        #[serde(default, deserialize_with = "lenient_page_number")]
        page: Option<u64>,
    }

    fn parse(json: &str) -> Option<u64> {
        serde_json::from_str::<Params>(json).unwrap().page
    }

    #[test]
    fn test_lenient_page_number() {
        assert_eq!(parse(r#"{"page": "3"}"#), Some(3));
        assert_eq!(parse(r#"{"page": " 7 "}"#), Some(7));
        assert_eq!(parse(r#"{"page": "0"}"#), None);
        assert_eq!(parse(r#"{"page": "abc"}"#), None);
        assert_eq!(parse(r#"{"page": ""}"#), None);
        assert_eq!(parse(r#"{}"#), None);
    }

    #[test]
    fn test_envelope_shape() {
        let ok = serde_json::to_value(ApiResponse::success(5)).unwrap();
        assert_eq!(ok, serde_json::json!({"success": true, "data": 5}));

        let err = serde_json::to_value(ApiResponse::<()>::error("boom")).unwrap();
        assert_eq!(
            err,
            serde_json::json!({"success": false, "data": null, "error": "boom"})
        );
    }
}
