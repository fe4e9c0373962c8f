// src/services/income_service.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    common::{error::AppError, request::GetListRequest},
    db::IncomeStorage,
    models::income::{Income, IncomesResponse, UpdateIncome},
};

#[derive(Clone)]
pub struct IncomeService {
    storage: Arc<dyn IncomeStorage>,
}

impl IncomeService {
    pub fn new(storage: Arc<dyn IncomeStorage>) -> Self {
        Self { storage }
    }

    pub async fn create(&self) -> Result<Income, AppError> {
        let id = self.storage.create().await.map_err(|err| {
            tracing::error!(error = %err, "erro ao criar income");
            err
        })?;

        self.storage.get_by_id(id).await.map_err(|err| {
            tracing::error!(error = %err, %id, "erro ao reler income criado");
            err
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Income, AppError> {
        self.storage.get_by_id(id).await.map_err(|err| {
            tracing::error!(error = %err, %id, "erro ao buscar income");
            err
        })
    }

    pub async fn get_list(&self, req: GetListRequest) -> Result<IncomesResponse, AppError> {
        let (incomes, count) = self.storage.get_list(req).await.map_err(|err| {
            tracing::error!(error = %err, "erro ao listar incomes");
            err
        })?;

        Ok(IncomesResponse { incomes, count })
    }

    pub async fn update(&self, income: UpdateIncome) -> Result<Income, AppError> {
        let id = self.storage.update(income).await.map_err(|err| {
            tracing::error!(error = %err, "erro ao atualizar income");
            err
        })?;

        self.storage.get_by_id(id).await.map_err(|err| {
            tracing::error!(error = %err, %id, "erro ao reler income atualizado");
            err
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.storage.delete(id).await.map_err(|err| {
            tracing::error!(error = %err, %id, "erro ao deletar income");
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::income_repo::MockIncomeStorage;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn create_without_body_starts_with_zero_total() {
        let id = Uuid::new_v4();
        let mut storage = MockIncomeStorage::new();

        storage.expect_create().return_once(move || Ok(id));
        storage
            .expect_get_by_id()
            .with(eq(id))
            .return_once(move |id| {
                Ok(Income {
                    id,
                    total_sum: 0,
                    created_at: "2024-02-01 10:00:00+00".to_string(),
                    updated_at: String::new(),
                })
            });

        let service = IncomeService::new(Arc::new(storage));
        let created = service.create().await.unwrap();

        assert_eq!(created.id, id);
        assert_eq!(created.total_sum, 0);
        assert_eq!(created.updated_at, "");
    }
}
