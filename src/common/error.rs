// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use thiserror::Error;

use crate::common::response::handle_response;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// A taxonomia segue a origem do erro: entrada, não-encontrado, armazenamento.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("Registro não encontrado")]
    NotFound,

    #[error("Tempo limite excedido ao aguardar o banco de dados")]
    Timeout,

    // Variante para erros de banco de dados (sqlx). A mensagem expõe o
    // texto do driver.
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado.
    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Devolve todos os detalhes da validação no campo `data`.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                handle_response(
                    "Um ou mais campos são inválidos.",
                    StatusCode::BAD_REQUEST,
                    details,
                )
            }
            AppError::BadRequest(message) => {
                handle_response(&message, StatusCode::BAD_REQUEST, Value::Null)
            }
            AppError::NotFound => {
                handle_response(&self.to_string(), StatusCode::NOT_FOUND, Value::Null)
            }
            // Timeout, banco e erros inesperados viram 500.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                handle_response(
                    &self.to_string(),
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Value::Null,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_400() {
        let resp = AppError::BadRequest("parâmetro 'page' inválido".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        // Todo não-encontrado vira 404, inclusive em update/delete.
        let resp = AppError::NotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn database_and_timeout_map_to_500() {
        let resp = AppError::DatabaseError(sqlx::Error::PoolClosed).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let resp = AppError::Timeout.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
