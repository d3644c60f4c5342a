use axum::response::Json;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize, Debug)]
pub struct DefaultResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
}

impl DefaultResponse {
    pub fn ok(message: &str) -> DefaultResponse {
        DefaultResponse {
            message: message.to_string(),
            data: None,
            errors: None,
        }
    }

    pub fn error(message: &str, errors: String) -> DefaultResponse {
        DefaultResponse {
            message: message.to_string(),
            data: None,
            errors: Some(errors),
        }
    }

    pub fn with_data(mut self, data: Value) -> DefaultResponse {
        self.data = Some(data);
        self
    }

    pub fn into_json(self) -> Json<Value> {
        Json(json!(self))
    }
}
