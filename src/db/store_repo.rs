// src/db/store_repo.rs

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::error::AppError;

// Caixa por filial: um contador mutável por branch_id. Toda mutação é um
// único statement atômico no banco; nunca fazemos read-then-write na
// aplicação para não reintroduzir corrida entre requisições concorrentes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreStorage: Send + Sync {
    async fn add_profit(&self, amount: Decimal, branch_id: Uuid) -> Result<(), AppError>;
    async fn withdrawal_delivered_sum(
        &self,
        amount: Decimal,
        branch_id: Uuid,
    ) -> Result<(), AppError>;
    async fn get_store_budget(&self, branch_id: Uuid) -> Result<Decimal, AppError>;
}

#[derive(Clone)]
pub struct StoreRepository {
    pool: PgPool,
}

impl StoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreStorage for StoreRepository {
    async fn add_profit(&self, amount: Decimal, branch_id: Uuid) -> Result<(), AppError> {
        // UPSERT: cria o caixa da filial na primeira entrada e soma nas
        // seguintes, de forma atômica.
        sqlx::query(
            "INSERT INTO stores (branch_id, budget) VALUES ($1, $2) \
             ON CONFLICT (branch_id) DO UPDATE SET budget = stores.budget + EXCLUDED.budget",
        )
        .bind(branch_id)
        .bind(amount)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn withdrawal_delivered_sum(
        &self,
        amount: Decimal,
        branch_id: Uuid,
    ) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE stores SET budget = budget - $1 WHERE branch_id = $2")
            .bind(amount)
            .bind(branch_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn get_store_budget(&self, branch_id: Uuid) -> Result<Decimal, AppError> {
        sqlx::query_scalar::<_, Decimal>("SELECT budget FROM stores WHERE branch_id = $1")
            .bind(branch_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)
    }
}
