// src/handlers/store.rs

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use rust_decimal::Decimal;
use serde_json::json;
use validator::ValidationError;

use crate::{
    common::{error::AppError, response::handle_response},
    config::AppState,
    handlers::{parse_id, with_deadline},
    models::store::StoreAmount,
};

// Valores monetários não passam pelo derive do validator (Decimal não é
// suportado pelo range), então a checagem é manual.
fn validate_not_negative(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

fn check_amount(payload: &StoreAmount) -> Result<(), AppError> {
    validate_not_negative(&payload.amount).map_err(|e| {
        let mut errors = validator::ValidationErrors::new();
        errors.add("amount", e);
        AppError::ValidationError(errors)
    })
}

pub async fn add_profit(
    State(app_state): State<AppState>,
    payload: Result<Json<StoreAmount>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    check_amount(&payload)?;

    with_deadline(
        app_state
            .store_service
            .add_profit(payload.amount, payload.branch_id),
    )
    .await?;

    Ok(handle_response("success", StatusCode::OK, json!(null)))
}

pub async fn withdrawal_delivered_sum(
    State(app_state): State<AppState>,
    payload: Result<Json<StoreAmount>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    check_amount(&payload)?;

    with_deadline(
        app_state
            .store_service
            .withdrawal_delivered_sum(payload.amount, payload.branch_id),
    )
    .await?;

    Ok(handle_response("success", StatusCode::OK, json!(null)))
}

pub async fn get_store_budget(
    State(app_state): State<AppState>,
    Path(branch_id): Path<String>,
) -> Result<Response, AppError> {
    let branch_id = parse_id(&branch_id)?;

    let budget = with_deadline(app_state.store_service.get_store_budget(branch_id)).await?;
    Ok(handle_response("", StatusCode::OK, json!(budget)))
}
