// src/db/basket_product_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::{error::AppError, request::GetListRequest},
    models::basket_product::{BasketProduct, CreateBasketProduct, UpdateBasketProduct},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BasketProductStorage: Send + Sync {
    async fn create(&self, basket_product: CreateBasketProduct) -> Result<Uuid, AppError>;
    async fn get_by_id(&self, id: Uuid) -> Result<BasketProduct, AppError>;
    async fn get_list(&self, req: GetListRequest) -> Result<(Vec<BasketProduct>, i64), AppError>;
    async fn update(&self, basket_product: UpdateBasketProduct) -> Result<Uuid, AppError>;
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct BasketProductRepository {
    pool: PgPool,
}

impl BasketProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_BASKET_PRODUCT: &str = r#"
    SELECT id, basket_id, product_id, quantity,
           COALESCE(created_at::text, '') AS created_at,
           COALESCE(updated_at::text, '') AS updated_at
    FROM basket_products
"#;

#[async_trait]
impl BasketProductStorage for BasketProductRepository {
    async fn create(&self, basket_product: CreateBasketProduct) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO basket_products (id, basket_id, product_id, quantity) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(id)
        .bind(basket_product.basket_id)
        .bind(basket_product.product_id)
        .bind(basket_product.quantity)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<BasketProduct, AppError> {
        sqlx::query_as::<_, BasketProduct>(&format!(
            "{SELECT_BASKET_PRODUCT} WHERE id = $1 AND deleted_at = 0"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound)
    }

    async fn get_list(&self, req: GetListRequest) -> Result<(Vec<BasketProduct>, i64), AppError> {
        let pattern = req.like_pattern();

        let count: i64 = sqlx::query_scalar(
            "SELECT count(1) FROM basket_products \
             WHERE deleted_at = 0 AND CAST(quantity AS TEXT) ILIKE $1",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        let basket_products = sqlx::query_as::<_, BasketProduct>(&format!(
            "{SELECT_BASKET_PRODUCT} WHERE deleted_at = 0 AND CAST(quantity AS TEXT) ILIKE $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(&pattern)
        .bind(req.limit as i64)
        .bind(req.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok((basket_products, count))
    }

    async fn update(&self, basket_product: UpdateBasketProduct) -> Result<Uuid, AppError> {
        let result = sqlx::query(
            "UPDATE basket_products \
             SET basket_id = $1, product_id = $2, quantity = $3, updated_at = now() \
             WHERE id = $4 AND deleted_at = 0",
        )
        .bind(basket_product.basket_id)
        .bind(basket_product.product_id)
        .bind(basket_product.quantity)
        .bind(basket_product.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(basket_product.id)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE basket_products SET deleted_at = extract(epoch from current_timestamp) \
             WHERE id = $1",
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
