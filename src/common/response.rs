// src/common/response.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// O envelope uniforme de resposta. Toda rota, com sucesso ou falha,
// devolve exatamente este formato: {message, status, data}.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse {
    pub message: String,
    pub status: u16,
    pub data: Value,
}

/// Monta a resposta HTTP no envelope padrão.
pub fn handle_response<T: Serialize>(message: &str, status: StatusCode, data: T) -> Response {
    let body = ApiResponse {
        message: message.to_string(),
        status: status.as_u16(),
        data: serde_json::to_value(data).unwrap_or(Value::Null),
    };

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_carries_message_status_and_data() {
        let body = ApiResponse {
            message: "success".to_string(),
            status: 200,
            data: json!({"id": "abc"}),
        };

        let encoded = serde_json::to_value(&body).unwrap();
        assert_eq!(
            encoded,
            json!({"message": "success", "status": 200, "data": {"id": "abc"}})
        );
    }

    #[test]
    fn handle_response_sets_http_status() {
        let resp = handle_response("", StatusCode::CREATED, json!("created"));
        assert_eq!(resp.status(), StatusCode::CREATED);
    }
}
