use axum::Json;
use serde::Serialize;

/// Success envelope shared by every endpoint: `{success, data, message}`.
/// The failure counterpart lives in [`crate::error::ApiError`].
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            data,
            message: message.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_shape() {
        let Json(body) = ApiResponse::ok(serde_json::json!({"id": 7}), "created");
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["success"], true);
        assert_eq!(v["data"]["id"], 7);
        assert_eq!(v["message"], "created");
    }
}
