// src/handlers/income.rs

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde_json::json;
use validator::Validate;

use crate::{
    common::{error::AppError, request::ListParams, response::handle_response},
    config::AppState,
    handlers::{parse_id, with_deadline},
    models::income::UpdateIncome,
};

// A criação não recebe corpo: o registro nasce vazio e os produtos da
// entrada são anexados depois via income_products.
pub async fn create_income(State(app_state): State<AppState>) -> Result<Response, AppError> {
    let income = with_deadline(app_state.income_service.create()).await?;
    Ok(handle_response("", StatusCode::CREATED, json!(income)))
}

pub async fn get_income(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;

    let income = with_deadline(app_state.income_service.get_by_id(id)).await?;
    Ok(handle_response("", StatusCode::OK, json!(income)))
}

pub async fn get_income_list(
    State(app_state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response, AppError> {
    let req = params.parse()?;

    let resp = with_deadline(app_state.income_service.get_list(req)).await?;
    Ok(handle_response("", StatusCode::OK, json!(resp)))
}

pub async fn update_income(
    State(app_state): State<AppState>,
    payload: Result<Json<UpdateIncome>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    payload.validate()?;

    let income = with_deadline(app_state.income_service.update(payload)).await?;
    Ok(handle_response("", StatusCode::OK, json!(income)))
}

pub async fn delete_income(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;

    with_deadline(app_state.income_service.delete(id)).await?;
    Ok(handle_response("success", StatusCode::OK, json!(null)))
}
