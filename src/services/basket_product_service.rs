// src/services/basket_product_service.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    common::{error::AppError, request::GetListRequest},
    db::BasketProductStorage,
    models::basket_product::{
        BasketProduct, BasketProductsResponse, CreateBasketProduct, UpdateBasketProduct,
    },
};

#[derive(Clone)]
pub struct BasketProductService {
    storage: Arc<dyn BasketProductStorage>,
}

impl BasketProductService {
    pub fn new(storage: Arc<dyn BasketProductStorage>) -> Self {
        Self { storage }
    }

    pub async fn create(
        &self,
        basket_product: CreateBasketProduct,
    ) -> Result<BasketProduct, AppError> {
        let id = self.storage.create(basket_product).await.map_err(|err| {
            tracing::error!(error = %err, "erro ao criar basket product");
            err
        })?;

        self.storage.get_by_id(id).await.map_err(|err| {
            tracing::error!(error = %err, %id, "erro ao reler basket product criado");
            err
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<BasketProduct, AppError> {
        self.storage.get_by_id(id).await.map_err(|err| {
            tracing::error!(error = %err, %id, "erro ao buscar basket product");
            err
        })
    }

    pub async fn get_list(&self, req: GetListRequest) -> Result<BasketProductsResponse, AppError> {
        let (basket_products, count) = self.storage.get_list(req).await.map_err(|err| {
            tracing::error!(error = %err, "erro ao listar basket products");
            err
        })?;

        Ok(BasketProductsResponse {
            basket_products,
            count,
        })
    }

    pub async fn update(
        &self,
        basket_product: UpdateBasketProduct,
    ) -> Result<BasketProduct, AppError> {
        let id = self.storage.update(basket_product).await.map_err(|err| {
            tracing::error!(error = %err, "erro ao atualizar basket product");
            err
        })?;

        self.storage.get_by_id(id).await.map_err(|err| {
            tracing::error!(error = %err, %id, "erro ao reler basket product atualizado");
            err
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.storage.delete(id).await.map_err(|err| {
            tracing::error!(error = %err, %id, "erro ao deletar basket product");
            err
        })
    }
}
