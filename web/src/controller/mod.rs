use serde::Serialize;
pub(crate) mod action_item_controller;
pub(crate) mod health_check_controller;
pub(crate) mod transcript;
pub(crate) mod transcript_controller;

/// Envelope wrapping every JSON payload the API returns.
#[derive(Debug, Serialize)]
struct ApiResponse<T: Serialize> {
    status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status_code: u16, data: T) -> Self {
        Self {
            status_code,
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn api_response_serializes_status_code_and_data() {
        let response = ApiResponse::new(StatusCode::OK.into(), vec!["a", "b"]);
        let serialized = serde_json::to_string(&response).unwrap();

        // Round-trip through serde_json::Value so key ordering can't make
        // the assertion flaky
        let deserialized: serde_json::Value = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, json!({"status_code": 200, "data": ["a", "b"]}));
    }
}
