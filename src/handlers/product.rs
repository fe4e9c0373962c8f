// src/handlers/product.rs

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
    models::product::{CreateProduct, UpdateProduct},
};

pub async fn create_product(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateProduct>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    payload.validate()?;

    let product = with_deadline(app_state.product_service.create(payload)).await?;
    Ok(handle_response("", StatusCode::CREATED, json!(product)))
}

pub async fn get_product(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;

    let product = with_deadline(app_state.product_service.get_by_id(id)).await?;
    Ok(handle_response("", StatusCode::OK, json!(product)))
}

pub async fn get_product_list(
    State(app_state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response, AppError> {
    let req = params.parse()?;

    let resp = with_deadline(app_state.product_service.get_list(req)).await?;
    Ok(handle_response("", StatusCode::OK, json!(resp)))
}

pub async fn update_product(
    State(app_state): State<AppState>,
    payload: Result<Json<UpdateProduct>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    payload.validate()?;

    let product = with_deadline(app_state.product_service.update(payload)).await?;
    Ok(handle_response("", StatusCode::OK, json!(product)))
}

pub async fn delete_product(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;

    with_deadline(app_state.product_service.delete(id)).await?;
    Ok(handle_response("success", StatusCode::OK, json!(null)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::testing::StateBuilder;
    use crate::models::product::Product;
    use axum::{
        body::Body,
        http::{header, Request},
        routing::get,
        routing::post,
        Router,
    };
    use tower::ServiceExt;
    use uuid::Uuid;

    #[tokio::test]
    async fn create_product_with_unknown_field_types_is_400() {
        let state = StateBuilder::new().build();
        let app = Router::new()
            .route("/product", post(create_product))
            .with_state(state);

        // category_id precisa ser um UUID válido no JSON
        let resp = app
            .oneshot(
                Request::post("/product")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"name": "apple", "price": 100, "original_price": 2000,
                            "quantity": 34, "category_id": "nao-uuid", "branch_id": "nao-uuid"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_forwards_search_term() {
        let mut state = StateBuilder::new();
        state.product.expect_get_list().return_once(|req| {
            assert_eq!(req.search, "apple");
            Ok((
                vec![Product {
                    id: Uuid::new_v4(),
                    name: "apple".to_string(),
                    price: 100,
                    original_price: 2000,
                    quantity: 34,
                    category_id: Uuid::new_v4(),
                    branch_id: Uuid::new_v4(),
                    created_at: "2024-02-01 10:00:00+00".to_string(),
                    updated_at: String::new(),
                }],
                1,
            ))
        });

        let app = Router::new()
            .route("/products", get(get_product_list))
            .with_state(state.build());

        let resp = app
            .oneshot(
                Request::get("/products?search=apple")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
