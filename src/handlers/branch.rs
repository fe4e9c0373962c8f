// src/handlers/branch.rs

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
    models::branch::{CreateBranch, UpdateBranch},
};

pub async fn create_branch(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateBranch>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    payload.validate()?;

    let branch = with_deadline(app_state.branch_service.create(payload)).await?;
    Ok(handle_response("", StatusCode::CREATED, json!(branch)))
}

pub async fn get_branch(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;

    let branch = with_deadline(app_state.branch_service.get_by_id(id)).await?;
    Ok(handle_response("", StatusCode::OK, json!(branch)))
}

pub async fn get_branch_list(
    State(app_state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response, AppError> {
    let req = params.parse()?;

    let resp = with_deadline(app_state.branch_service.get_list(req)).await?;
    Ok(handle_response("", StatusCode::OK, json!(resp)))
}

pub async fn update_branch(
    State(app_state): State<AppState>,
    payload: Result<Json<UpdateBranch>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    payload.validate()?;

    let branch = with_deadline(app_state.branch_service.update(payload)).await?;
    Ok(handle_response("", StatusCode::OK, json!(branch)))
}

pub async fn delete_branch(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;

    with_deadline(app_state.branch_service.delete(id)).await?;
    Ok(handle_response("success", StatusCode::OK, json!(null)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::response::ApiResponse;
    use crate::config::testing::StateBuilder;
    use crate::models::branch::Branch;
    use axum::{
        body::Body,
        http::{header, Request},
        routing::post,
        Router,
    };
    use mockall::predicate::eq;
    use tower::ServiceExt;
    use uuid::Uuid;

    fn router(state: AppState) -> Router {
        Router::new()
            .route("/branch", post(create_branch).put(update_branch))
            .with_state(state)
    }

    #[tokio::test]
    async fn create_branch_round_trips_fields() {
        let id = Uuid::new_v4();
        let mut state = StateBuilder::new();
        state
            .branch
            .expect_create()
            .withf(|input| input.name == "Filial Leste")
            .return_once(move |_| Ok(id));
        state
            .branch
            .expect_get_by_id()
            .with(eq(id))
            .return_once(move |id| {
                Ok(Branch {
                    id,
                    name: "Filial Leste".to_string(),
                    address: "Av. Brasil, 100".to_string(),
                    phone_number: "+5511988887777".to_string(),
                    created_at: "2024-02-01 10:00:00+00".to_string(),
                    updated_at: String::new(),
                })
            });

        let resp = router(state.build())
            .oneshot(
                Request::post("/branch")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"name": "Filial Leste", "address": "Av. Brasil, 100", "phone_number": "+5511988887777"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ApiResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.data["name"], "Filial Leste");
        assert_eq!(body.data["address"], "Av. Brasil, 100");
        assert_eq!(body.data["phone_number"], "+5511988887777");
    }

    #[tokio::test]
    async fn empty_name_fails_validation_with_400() {
        let resp = router(StateBuilder::new().build())
            .oneshot(
                Request::post("/branch")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"name": "", "address": "x", "phone_number": "y"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
