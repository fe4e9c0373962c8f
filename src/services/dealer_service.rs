// src/services/dealer_service.rs

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::{common::error::AppError, db::DealerStorage};

#[derive(Clone)]
pub struct DealerService {
    storage: Arc<dyn DealerStorage>,
}

impl DealerService {
    pub fn new(storage: Arc<dyn DealerStorage>) -> Self {
        Self { storage }
    }

    pub async fn add_sum(&self, amount: Decimal) -> Result<(), AppError> {
        self.storage.add_sum(amount).await.map_err(|err| {
            tracing::error!(error = %err, "erro ao creditar saldo do dealer");
            err
        })
    }
}
