// src/db/dealer_repo.rs

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::common::error::AppError;

// Saldo do dealer: uma única linha, criada pela migração inicial.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DealerStorage: Send + Sync {
    async fn add_sum(&self, amount: Decimal) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct DealerRepository {
    pool: PgPool,
}

impl DealerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DealerStorage for DealerRepository {
    async fn add_sum(&self, amount: Decimal) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE dealer SET sum = sum + $1")
            .bind(amount)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
