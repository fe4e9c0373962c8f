// src/db/basket_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::{error::AppError, request::GetListRequest},
    models::basket::{Basket, CreateBasket, UpdateBasket},
};

// Contrato de armazenamento de baskets. O service só conhece esta trait,
// o que permite trocar o Postgres por um mock nos testes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BasketStorage: Send + Sync {
    async fn create(&self, basket: CreateBasket) -> Result<Uuid, AppError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Basket, AppError>;
    async fn get_list(&self, req: GetListRequest) -> Result<(Vec<Basket>, i64), AppError>;
    async fn update(&self, basket: UpdateBasket) -> Result<Uuid, AppError>;
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct BasketRepository {
    pool: PgPool,
}

impl BasketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Os timestamps saem do banco como texto (string vazia quando nulos) e as
// leituras filtram deleted_at = 0, então linhas soft-deleted são invisíveis.
const SELECT_BASKET: &str = r#"
    SELECT id, customer_id, total_sum,
           COALESCE(created_at::text, '') AS created_at,
           COALESCE(updated_at::text, '') AS updated_at
    FROM baskets
"#;

#[async_trait]
impl BasketStorage for BasketRepository {
    async fn create(&self, basket: CreateBasket) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();

        sqlx::query("INSERT INTO baskets (id, customer_id, total_sum) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(&basket.customer_id)
            .bind(basket.total_sum)
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Basket, AppError> {
        sqlx::query_as::<_, Basket>(&format!("{SELECT_BASKET} WHERE id = $1 AND deleted_at = 0"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn get_list(&self, req: GetListRequest) -> Result<(Vec<Basket>, i64), AppError> {
        // A coluna de busca desta entidade é total_sum convertido para texto.
        // O padrão vai como parâmetro ligado, nunca interpolado na query.
        let pattern = req.like_pattern();

        let count: i64 = sqlx::query_scalar(
            "SELECT count(1) FROM baskets WHERE deleted_at = 0 AND CAST(total_sum AS TEXT) ILIKE $1",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        let baskets = sqlx::query_as::<_, Basket>(&format!(
            "{SELECT_BASKET} WHERE deleted_at = 0 AND CAST(total_sum AS TEXT) ILIKE $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(&pattern)
        .bind(req.limit as i64)
        .bind(req.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok((baskets, count))
    }

    async fn update(&self, basket: UpdateBasket) -> Result<Uuid, AppError> {
        let result = sqlx::query(
            "UPDATE baskets SET customer_id = $1, total_sum = $2, updated_at = now() \
             WHERE id = $3 AND deleted_at = 0",
        )
        .bind(&basket.customer_id)
        .bind(basket.total_sum)
        .bind(basket.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(basket.id)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE baskets SET deleted_at = extract(epoch from current_timestamp) WHERE id = $1",
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
