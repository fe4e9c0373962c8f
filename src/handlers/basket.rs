// src/handlers/basket.rs

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
    models::basket::{CreateBasket, UpdateBasket},
};

pub async fn create_basket(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateBasket>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    payload.validate()?;

    let basket = with_deadline(app_state.basket_service.create(payload)).await?;
    Ok(handle_response("", StatusCode::CREATED, json!(basket)))
}

pub async fn get_basket(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;

    let basket = with_deadline(app_state.basket_service.get_by_id(id)).await?;
    Ok(handle_response("", StatusCode::OK, json!(basket)))
}

pub async fn get_basket_list(
    State(app_state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response, AppError> {
    let req = params.parse()?;

    let resp = with_deadline(app_state.basket_service.get_list(req)).await?;
    Ok(handle_response("", StatusCode::OK, json!(resp)))
}

pub async fn update_basket(
    State(app_state): State<AppState>,
    payload: Result<Json<UpdateBasket>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    payload.validate()?;

    let basket = with_deadline(app_state.basket_service.update(payload)).await?;
    Ok(handle_response("", StatusCode::OK, json!(basket)))
}

pub async fn delete_basket(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;

    with_deadline(app_state.basket_service.delete(id)).await?;
    Ok(handle_response("success", StatusCode::OK, json!(null)))
}
