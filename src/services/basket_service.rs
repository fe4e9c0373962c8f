// src/services/basket_service.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    common::{error::AppError, request::GetListRequest},
    db::BasketStorage,
    models::basket::{Basket, BasketsResponse, CreateBasket, UpdateBasket},
};

// Camada fina: repassa ao repositório, loga falhas com contexto e, em
// create/update, relê a linha afetada para devolver o estado atual.
#[derive(Clone)]
pub struct BasketService {
    storage: Arc<dyn BasketStorage>,
}

impl BasketService {
    pub fn new(storage: Arc<dyn BasketStorage>) -> Self {
        Self { storage }
    }

    pub async fn create(&self, basket: CreateBasket) -> Result<Basket, AppError> {
        let id = self.storage.create(basket).await.map_err(|err| {
            tracing::error!(error = %err, "erro ao criar basket");
            err
        })?;

        self.storage.get_by_id(id).await.map_err(|err| {
            tracing::error!(error = %err, %id, "erro ao reler basket criado");
            err
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Basket, AppError> {
        self.storage.get_by_id(id).await.map_err(|err| {
            tracing::error!(error = %err, %id, "erro ao buscar basket");
            err
        })
    }

    pub async fn get_list(&self, req: GetListRequest) -> Result<BasketsResponse, AppError> {
        let (baskets, count) = self.storage.get_list(req).await.map_err(|err| {
            tracing::error!(error = %err, "erro ao listar baskets");
            err
        })?;

        Ok(BasketsResponse { baskets, count })
    }

    pub async fn update(&self, basket: UpdateBasket) -> Result<Basket, AppError> {
        let id = self.storage.update(basket).await.map_err(|err| {
            tracing::error!(error = %err, "erro ao atualizar basket");
            err
        })?;

        self.storage.get_by_id(id).await.map_err(|err| {
            tracing::error!(error = %err, %id, "erro ao reler basket atualizado");
            err
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.storage.delete(id).await.map_err(|err| {
            tracing::error!(error = %err, %id, "erro ao deletar basket");
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::basket_repo::MockBasketStorage;
    use mockall::predicate::eq;

    fn basket(id: Uuid, customer_id: &str, total_sum: i64) -> Basket {
        Basket {
            id,
            customer_id: customer_id.to_string(),
            total_sum,
            created_at: "2024-02-01 10:00:00+00".to_string(),
            updated_at: String::new(),
        }
    }

    #[tokio::test]
    async fn create_reads_back_the_inserted_row() {
        let id = Uuid::new_v4();
        let mut storage = MockBasketStorage::new();

        storage
            .expect_create()
            .withf(|input| input.customer_id == "c1" && input.total_sum == 1111)
            .return_once(move |_| Ok(id));
        storage
            .expect_get_by_id()
            .with(eq(id))
            .return_once(move |id| Ok(basket(id, "c1", 1111)));

        let service = BasketService::new(Arc::new(storage));
        let created = service
            .create(CreateBasket {
                customer_id: "c1".to_string(),
                total_sum: 1111,
            })
            .await
            .unwrap();

        assert_eq!(created.id, id);
        assert_eq!(created.customer_id, "c1");
        assert_eq!(created.total_sum, 1111);
    }

    #[tokio::test]
    async fn update_returns_refreshed_entity_with_same_id() {
        let id = Uuid::new_v4();
        let mut storage = MockBasketStorage::new();

        storage
            .expect_update()
            .withf(move |input| input.id == id && input.total_sum == 12222)
            .return_once(move |input| Ok(input.id));
        storage
            .expect_get_by_id()
            .with(eq(id))
            .return_once(move |id| Ok(basket(id, "c1", 12222)));

        let service = BasketService::new(Arc::new(storage));
        let updated = service
            .update(UpdateBasket {
                id,
                customer_id: "c1".to_string(),
                total_sum: 12222,
            })
            .await
            .unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.total_sum, 12222);
    }

    #[tokio::test]
    async fn delete_then_get_surfaces_not_found() {
        let id = Uuid::new_v4();
        let mut storage = MockBasketStorage::new();

        storage.expect_delete().with(eq(id)).return_once(|_| Ok(()));
        // Depois do soft delete a linha fica invisível para as leituras.
        storage
            .expect_get_by_id()
            .with(eq(id))
            .return_once(|_| Err(AppError::NotFound));

        let service = BasketService::new(Arc::new(storage));
        service.delete(id).await.unwrap();

        assert!(matches!(
            service.get_by_id(id).await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn get_list_wraps_items_and_independent_count() {
        let mut storage = MockBasketStorage::new();

        storage.expect_get_list().return_once(|req| {
            assert_eq!(req.offset(), 10);
            // count vem da query própria, independente de page/limit
            Ok((vec![basket(Uuid::new_v4(), "c9", 500)], 37))
        });

        let service = BasketService::new(Arc::new(storage));
        let resp = service
            .get_list(GetListRequest {
                page: 2,
                limit: 10,
                search: String::new(),
            })
            .await
            .unwrap();

        assert_eq!(resp.baskets.len(), 1);
        assert_eq!(resp.count, 37);
    }

    #[tokio::test]
    async fn storage_errors_propagate_unchanged() {
        let mut storage = MockBasketStorage::new();
        storage
            .expect_create()
            .return_once(|_| Err(AppError::DatabaseError(sqlx::Error::PoolClosed)));

        let service = BasketService::new(Arc::new(storage));
        let err = service
            .create(CreateBasket {
                customer_id: "c1".to_string(),
                total_sum: 1,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::DatabaseError(_)));
    }
}
