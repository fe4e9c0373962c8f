// src/db/income_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::{error::AppError, request::GetListRequest},
    models::income::{Income, UpdateIncome},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IncomeStorage: Send + Sync {
    /// Cria um income vazio (total_sum = 0) e devolve o id gerado.
    async fn create(&self) -> Result<Uuid, AppError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Income, AppError>;
    async fn get_list(&self, req: GetListRequest) -> Result<(Vec<Income>, i64), AppError>;
    async fn update(&self, income: UpdateIncome) -> Result<Uuid, AppError>;
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct IncomeRepository {
    pool: PgPool,
}

impl IncomeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_INCOME: &str = r#"
    SELECT id, total_sum,
           COALESCE(created_at::text, '') AS created_at,
           COALESCE(updated_at::text, '') AS updated_at
    FROM incomes
"#;

#[async_trait]
impl IncomeStorage for IncomeRepository {
    async fn create(&self) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();

        sqlx::query("INSERT INTO incomes (id) VALUES ($1)")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Income, AppError> {
        sqlx::query_as::<_, Income>(&format!("{SELECT_INCOME} WHERE id = $1 AND deleted_at = 0"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn get_list(&self, req: GetListRequest) -> Result<(Vec<Income>, i64), AppError> {
        let pattern = req.like_pattern();

        let count: i64 = sqlx::query_scalar(
            "SELECT count(1) FROM incomes \
             WHERE deleted_at = 0 AND CAST(total_sum AS TEXT) ILIKE $1",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        let incomes = sqlx::query_as::<_, Income>(&format!(
            "{SELECT_INCOME} WHERE deleted_at = 0 AND CAST(total_sum AS TEXT) ILIKE $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(&pattern)
        .bind(req.limit as i64)
        .bind(req.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok((incomes, count))
    }

    async fn update(&self, income: UpdateIncome) -> Result<Uuid, AppError> {
        let result = sqlx::query(
            "UPDATE incomes SET total_sum = $1, updated_at = now() \
             WHERE id = $2 AND deleted_at = 0",
        )
        .bind(income.total_sum)
        .bind(income.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(income.id)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE incomes SET deleted_at = extract(epoch from current_timestamp) WHERE id = $1",
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
