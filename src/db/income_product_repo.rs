// src/db/income_product_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::{error::AppError, request::GetListRequest},
    models::income_product::{
        CreateIncomeProducts, DeleteIncomeProducts, IncomeProduct, UpdateIncomeProducts,
    },
};

// Diferente das demais entidades, income_products só tem operações em lote.
// Cada lote roda dentro de uma única transação: ou todas as linhas são
// aplicadas, ou nenhuma.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IncomeProductStorage: Send + Sync {
    async fn create_multiple(&self, req: CreateIncomeProducts) -> Result<(), AppError>;
    async fn get_list(&self, req: GetListRequest) -> Result<(Vec<IncomeProduct>, i64), AppError>;
    async fn update_multiple(&self, req: UpdateIncomeProducts) -> Result<(), AppError>;
    async fn delete_multiple(&self, req: DeleteIncomeProducts) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct IncomeProductRepository {
    pool: PgPool,
}

impl IncomeProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_INCOME_PRODUCT: &str = r#"
    SELECT id, income_id, product_id, count, price,
           COALESCE(created_at::text, '') AS created_at,
           COALESCE(updated_at::text, '') AS updated_at
    FROM income_products
"#;

#[async_trait]
impl IncomeProductStorage for IncomeProductRepository {
    async fn create_multiple(&self, req: CreateIncomeProducts) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        for income_product in &req.income_products {
            sqlx::query(
                "INSERT INTO income_products (id, income_id, product_id, count, price) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(Uuid::new_v4())
            .bind(income_product.income_id)
            .bind(income_product.product_id)
            .bind(income_product.count)
            .bind(income_product.price)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn get_list(&self, req: GetListRequest) -> Result<(Vec<IncomeProduct>, i64), AppError> {
        let pattern = req.like_pattern();

        let count: i64 = sqlx::query_scalar(
            "SELECT count(1) FROM income_products \
             WHERE deleted_at = 0 AND CAST(price AS TEXT) ILIKE $1",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        let income_products = sqlx::query_as::<_, IncomeProduct>(&format!(
            "{SELECT_INCOME_PRODUCT} WHERE deleted_at = 0 AND CAST(price AS TEXT) ILIKE $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(&pattern)
        .bind(req.limit as i64)
        .bind(req.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok((income_products, count))
    }

    async fn update_multiple(&self, req: UpdateIncomeProducts) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        for income_product in &req.income_products {
            let result = sqlx::query(
                "UPDATE income_products SET count = $1, price = $2, updated_at = now() \
                 WHERE id = $3 AND deleted_at = 0",
            )
            .bind(income_product.count)
            .bind(income_product.price)
            .bind(income_product.id)
            .execute(&mut *tx)
            .await?;

            // Uma linha inexistente aborta o lote inteiro (rollback no drop).
            if result.rows_affected() == 0 {
                return Err(AppError::NotFound);
            }
        }

        tx.commit().await?;
        Ok(())
    }

    async fn delete_multiple(&self, req: DeleteIncomeProducts) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE income_products SET deleted_at = extract(epoch from current_timestamp) \
             WHERE id = ANY($1)",
        )
        .bind(&req.ids)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
