// src/handlers/mod.rs

use std::future::Future;
use std::time::Duration;

use crate::common::error::AppError;

pub mod basket;
pub mod basket_product;
pub mod branch;
pub mod dealer;
pub mod income;
pub mod income_product;
pub mod product;
pub mod store;

// Prazo fixo para qualquer chamada de serviço disparada por uma requisição.
// Estourou, a query em andamento é abandonada e o cliente recebe erro.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

pub(crate) async fn with_deadline<F, T>(fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    tokio::time::timeout(REQUEST_TIMEOUT, fut)
        .await
        .map_err(|_| AppError::Timeout)?
}

// O id chega como texto na URL; um valor que não é UUID vira 400 no
// envelope padrão, e não uma rejeição crua do axum.
pub(crate) fn parse_id(id: &str) -> Result<uuid::Uuid, AppError> {
    uuid::Uuid::parse_str(id).map_err(|e| AppError::BadRequest(format!("id inválido: {e}")))
}
