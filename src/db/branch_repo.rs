// src/db/branch_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::{error::AppError, request::GetListRequest},
    models::branch::{Branch, CreateBranch, UpdateBranch},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BranchStorage: Send + Sync {
    async fn create(&self, branch: CreateBranch) -> Result<Uuid, AppError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Branch, AppError>;
    async fn get_list(&self, req: GetListRequest) -> Result<(Vec<Branch>, i64), AppError>;
    async fn update(&self, branch: UpdateBranch) -> Result<Uuid, AppError>;
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct BranchRepository {
    pool: PgPool,
}

impl BranchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_BRANCH: &str = r#"
    SELECT id, name, address, phone_number,
           COALESCE(created_at::text, '') AS created_at,
           COALESCE(updated_at::text, '') AS updated_at
    FROM branches
"#;

#[async_trait]
impl BranchStorage for BranchRepository {
    async fn create(&self, branch: CreateBranch) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO branches (id, name, address, phone_number) VALUES ($1, $2, $3, $4)",
        )
        .bind(id)
        .bind(&branch.name)
        .bind(&branch.address)
        .bind(&branch.phone_number)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Branch, AppError> {
        sqlx::query_as::<_, Branch>(&format!("{SELECT_BRANCH} WHERE id = $1 AND deleted_at = 0"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn get_list(&self, req: GetListRequest) -> Result<(Vec<Branch>, i64), AppError> {
        let pattern = req.like_pattern();

        let count: i64 = sqlx::query_scalar(
            "SELECT count(1) FROM branches WHERE deleted_at = 0 AND name ILIKE $1",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        let branches = sqlx::query_as::<_, Branch>(&format!(
            "{SELECT_BRANCH} WHERE deleted_at = 0 AND name ILIKE $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(&pattern)
        .bind(req.limit as i64)
        .bind(req.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok((branches, count))
    }

    async fn update(&self, branch: UpdateBranch) -> Result<Uuid, AppError> {
        let result = sqlx::query(
            "UPDATE branches SET name = $1, address = $2, phone_number = $3, updated_at = now() \
             WHERE id = $4 AND deleted_at = 0",
        )
        .bind(&branch.name)
        .bind(&branch.address)
        .bind(&branch.phone_number)
        .bind(branch.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(branch.id)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE branches SET deleted_at = extract(epoch from current_timestamp) WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
