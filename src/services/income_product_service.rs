// src/services/income_product_service.rs

use std::sync::Arc;

use crate::{
    common::{error::AppError, request::GetListRequest},
    db::IncomeProductStorage,
    models::income_product::{
        CreateIncomeProducts, DeleteIncomeProducts, IncomeProductsResponse, UpdateIncomeProducts,
    },
};

#[derive(Clone)]
pub struct IncomeProductService {
    storage: Arc<dyn IncomeProductStorage>,
}

impl IncomeProductService {
    pub fn new(storage: Arc<dyn IncomeProductStorage>) -> Self {
        Self { storage }
    }

    pub async fn create_multiple(&self, req: CreateIncomeProducts) -> Result<(), AppError> {
        self.storage.create_multiple(req).await.map_err(|err| {
            tracing::error!(error = %err, "erro ao criar income products em lote");
            err
        })
    }

    pub async fn get_list(&self, req: GetListRequest) -> Result<IncomeProductsResponse, AppError> {
        let (income_products, count) = self.storage.get_list(req).await.map_err(|err| {
            tracing::error!(error = %err, "erro ao listar income products");
            err
        })?;

        Ok(IncomeProductsResponse {
            income_products,
            count,
        })
    }

    pub async fn update_multiple(&self, req: UpdateIncomeProducts) -> Result<(), AppError> {
        self.storage.update_multiple(req).await.map_err(|err| {
            tracing::error!(error = %err, "erro ao atualizar income products em lote");
            err
        })
    }

    pub async fn delete_multiple(&self, req: DeleteIncomeProducts) -> Result<(), AppError> {
        self.storage.delete_multiple(req).await.map_err(|err| {
            tracing::error!(error = %err, "erro ao deletar income products em lote");
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::income_product_repo::MockIncomeProductStorage;
    use crate::models::income_product::UpdateIncomeProduct;
    use uuid::Uuid;

    #[tokio::test]
    async fn bulk_update_error_propagates_without_partial_success() {
        let mut storage = MockIncomeProductStorage::new();
        // O lote roda em transação: uma linha inexistente aborta o todo.
        storage
            .expect_update_multiple()
            .return_once(|_| Err(AppError::NotFound));

        let service = IncomeProductService::new(Arc::new(storage));
        let err = service
            .update_multiple(UpdateIncomeProducts {
                income_products: vec![UpdateIncomeProduct {
                    id: Uuid::new_v4(),
                    count: 2,
                    price: 30,
                }],
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound));
    }
}
