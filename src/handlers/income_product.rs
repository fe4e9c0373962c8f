// src/handlers/income_product.rs

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde_json::json;
use validator::Validate;

use crate::{
    common::{error::AppError, request::ListParams, response::handle_response},
    config::AppState,
    handlers::with_deadline,
    models::income_product::{CreateIncomeProducts, DeleteIncomeProducts, UpdateIncomeProducts},
};

pub async fn create_income_products(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateIncomeProducts>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    payload.validate()?;

    with_deadline(app_state.income_product_service.create_multiple(payload)).await?;
    Ok(handle_response("", StatusCode::CREATED, json!("created")))
}

pub async fn get_income_product_list(
    State(app_state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response, AppError> {
    let req = params.parse()?;

    let resp = with_deadline(app_state.income_product_service.get_list(req)).await?;
    Ok(handle_response("", StatusCode::OK, json!(resp)))
}

pub async fn update_income_products(
    State(app_state): State<AppState>,
    payload: Result<Json<UpdateIncomeProducts>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    payload.validate()?;

    with_deadline(app_state.income_product_service.update_multiple(payload)).await?;
    Ok(handle_response("success", StatusCode::OK, json!("success")))
}

pub async fn delete_income_products(
    State(app_state): State<AppState>,
    payload: Result<Json<DeleteIncomeProducts>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    with_deadline(app_state.income_product_service.delete_multiple(payload)).await?;
    Ok(handle_response(
        "success",
        StatusCode::OK,
        json!("income products deleted!"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::testing::StateBuilder;
    use axum::{
        body::Body,
        http::{header, Request},
        routing::post,
        Router,
    };
    use tower::ServiceExt;
    use uuid::Uuid;

    fn router(state: AppState) -> Router {
        Router::new()
            .route(
                "/income_products",
                post(create_income_products)
                    .put(update_income_products)
                    .delete(delete_income_products),
            )
            .with_state(state)
    }

    #[tokio::test]
    async fn bulk_create_forwards_every_row() {
        let income_id = Uuid::new_v4();
        let product_id = Uuid::new_v4();

        let mut state = StateBuilder::new();
        state
            .income_product
            .expect_create_multiple()
            .withf(|req| req.income_products.len() == 2)
            .return_once(|_| Ok(()));

        let body = format!(
            r#"{{"income_products": [
                {{"income_id": "{income_id}", "product_id": "{product_id}", "count": 5, "price": 100}},
                {{"income_id": "{income_id}", "product_id": "{product_id}", "count": 3, "price": 250}}
            ]}}"#
        );

        let resp = router(state.build())
            .oneshot(
                Request::post("/income_products")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn bulk_delete_takes_id_list() {
        let mut state = StateBuilder::new();
        state
            .income_product
            .expect_delete_multiple()
            .withf(|req| req.ids.len() == 2)
            .return_once(|_| Ok(()));

        let body = format!(
            r#"{{"ids": ["{}", "{}"]}}"#,
            Uuid::new_v4(),
            Uuid::new_v4()
        );

        let resp = router(state.build())
            .oneshot(
                Request::delete("/income_products")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
