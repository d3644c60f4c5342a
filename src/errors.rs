use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::json;
use validator::ValidationErrors;

#[derive(Serialize, Debug)]
pub struct Errors {
    pub errors: HashMap<String, Vec<String>>,
}

impl Errors {
    pub fn new(errors: &[(&str, &str)]) -> Errors {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();

        for (field, message) in errors {
            map.entry(field.to_string())
                .or_insert_with(Vec::new)
                .push(message.to_string());
        }

        Errors { errors: map }
    }

    pub fn into_string(errors: ValidationErrors) -> String {
        errors
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|error| error.code.to_string())
                    .collect::<Vec<String>>()
                    .join(", ");

                format!("{}: {}", field, messages)
            })
            .collect::<Vec<String>>()
            .join("; ")
    }
}

impl IntoResponse for Errors {
    fn into_response(self) -> Response {
        let body = Json(json!({ "errors": self.errors }));

        (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
    }
}
