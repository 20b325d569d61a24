use serde::{Deserialize, Serialize};

/// The uniform response envelope used by every product API endpoint.
///
/// `data` carries the payload on success, `message` carries human-readable
/// feedback (error details, or a confirmation for operations that return no
/// record). Absent fields are omitted from the serialized JSON entirely.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn success_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_omitted() {
        let envelope = ApiResponse::<u32>::failure("Server error");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "message": "Server error"})
        );

        let envelope = ApiResponse::<u32>::success_message("Product deleted");
        let json = serde_json::to_string(&envelope).unwrap();
        assert!(!json.contains("data"));
    }

    #[test]
    fn data_round_trips() {
        let envelope: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"success":true,"data":[1,2,3]}"#).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data, Some(vec![1, 2, 3]));
        assert_eq!(envelope.message, None);
    }
}
