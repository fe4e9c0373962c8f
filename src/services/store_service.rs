// src/services/store_service.rs

use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{common::error::AppError, db::StoreStorage, models::store::StoreBudget};

// Caixa por filial. O service não faz aritmética: soma e subtração são
// statements atômicos no repositório.
#[derive(Clone)]
pub struct StoreService {
    storage: Arc<dyn StoreStorage>,
}

impl StoreService {
    pub fn new(storage: Arc<dyn StoreStorage>) -> Self {
        Self { storage }
    }

    pub async fn add_profit(&self, amount: Decimal, branch_id: Uuid) -> Result<(), AppError> {
        self.storage
            .add_profit(amount, branch_id)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, %branch_id, "erro ao creditar lucro no caixa");
                err
            })
    }

    pub async fn withdrawal_delivered_sum(
        &self,
        amount: Decimal,
        branch_id: Uuid,
    ) -> Result<(), AppError> {
        self.storage
            .withdrawal_delivered_sum(amount, branch_id)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, %branch_id, "erro ao debitar entrega do caixa");
                err
            })
    }

    pub async fn get_store_budget(&self, branch_id: Uuid) -> Result<StoreBudget, AppError> {
        let budget = self
            .storage
            .get_store_budget(branch_id)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, %branch_id, "erro ao consultar saldo do caixa");
                err
            })?;

        Ok(StoreBudget { branch_id, budget })
    }
}
