// src/db/product_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::{error::AppError, request::GetListRequest},
    models::product::{CreateProduct, Product, UpdateProduct},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductStorage: Send + Sync {
    async fn create(&self, product: CreateProduct) -> Result<Uuid, AppError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, AppError>;
    async fn get_list(&self, req: GetListRequest) -> Result<(Vec<Product>, i64), AppError>;
    async fn update(&self, product: UpdateProduct) -> Result<Uuid, AppError>;
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_PRODUCT: &str = r#"
    SELECT id, name, price, original_price, quantity, category_id, branch_id,
           COALESCE(created_at::text, '') AS created_at,
           COALESCE(updated_at::text, '') AS updated_at
    FROM products
"#;

#[async_trait]
impl ProductStorage for ProductRepository {
    async fn create(&self, product: CreateProduct) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO products (id, name, price, original_price, quantity, category_id, branch_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.original_price)
        .bind(product.quantity)
        .bind(product.category_id)
        .bind(product.branch_id)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, AppError> {
        sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCT} WHERE id = $1 AND deleted_at = 0"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn get_list(&self, req: GetListRequest) -> Result<(Vec<Product>, i64), AppError> {
        // Busca por nome, sem diferenciar maiúsculas/minúsculas.
        let pattern = req.like_pattern();

        let count: i64 = sqlx::query_scalar(
            "SELECT count(1) FROM products WHERE deleted_at = 0 AND name ILIKE $1",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        let products = sqlx::query_as::<_, Product>(&format!(
            "{SELECT_PRODUCT} WHERE deleted_at = 0 AND name ILIKE $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(&pattern)
        .bind(req.limit as i64)
        .bind(req.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok((products, count))
    }

    async fn update(&self, product: UpdateProduct) -> Result<Uuid, AppError> {
        let result = sqlx::query(
            "UPDATE products \
             SET name = $1, price = $2, original_price = $3, quantity = $4, category_id = $5, \
                 updated_at = now() \
             WHERE id = $6 AND deleted_at = 0",
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.original_price)
        .bind(product.quantity)
        .bind(product.category_id)
        .bind(product.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(product.id)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE products SET deleted_at = extract(epoch from current_timestamp) WHERE id = $1",
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
