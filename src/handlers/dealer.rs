// src/handlers/dealer.rs

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde_json::json;

use crate::{
    common::{error::AppError, response::handle_response},
    config::AppState,
    handlers::with_deadline,
    models::store::DealerSum,
};

pub async fn add_dealer_sum(
    State(app_state): State<AppState>,
    payload: Result<Json<DealerSum>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    with_deadline(app_state.dealer_service.add_sum(payload.amount)).await?;
    Ok(handle_response("success", StatusCode::OK, json!(null)))
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
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    #[tokio::test]
    async fn dealer_sum_is_forwarded() {
        let mut state = StateBuilder::new();
        state
            .dealer
            .expect_add_sum()
            .withf(|amount| *amount == Decimal::from(150))
            .return_once(|_| Ok(()));

        let app = Router::new()
            .route("/dealer/sum", post(add_dealer_sum))
            .with_state(state.build());

        let resp = app
            .oneshot(
                Request::post("/dealer/sum")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"amount": 150.0}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
