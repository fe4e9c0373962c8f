// src/services/product_service.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    common::{error::AppError, request::GetListRequest},
    db::ProductStorage,
    models::product::{CreateProduct, Product, ProductsResponse, UpdateProduct},
};

#[derive(Clone)]
pub struct ProductService {
    storage: Arc<dyn ProductStorage>,
}

impl ProductService {
    pub fn new(storage: Arc<dyn ProductStorage>) -> Self {
        Self { storage }
    }

    pub async fn create(&self, product: CreateProduct) -> Result<Product, AppError> {
        let id = self.storage.create(product).await.map_err(|err| {
            tracing::error!(error = %err, "erro ao criar produto");
            err
        })?;

        self.storage.get_by_id(id).await.map_err(|err| {
            tracing::error!(error = %err, %id, "erro ao reler produto criado");
            err
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Product, AppError> {
        self.storage.get_by_id(id).await.map_err(|err| {
            tracing::error!(error = %err, %id, "erro ao buscar produto");
            err
        })
    }

    pub async fn get_list(&self, req: GetListRequest) -> Result<ProductsResponse, AppError> {
        let (products, count) = self.storage.get_list(req).await.map_err(|err| {
            tracing::error!(error = %err, "erro ao listar produtos");
            err
        })?;

        Ok(ProductsResponse { products, count })
    }

    pub async fn update(&self, product: UpdateProduct) -> Result<Product, AppError> {
        let id = self.storage.update(product).await.map_err(|err| {
            tracing::error!(error = %err, "erro ao atualizar produto");
            err
        })?;

        self.storage.get_by_id(id).await.map_err(|err| {
            tracing::error!(error = %err, %id, "erro ao reler produto atualizado");
            err
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.storage.delete(id).await.map_err(|err| {
            tracing::error!(error = %err, %id, "erro ao deletar produto");
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::product_repo::MockProductStorage;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn create_preserves_caller_supplied_fields() {
        let id = Uuid::new_v4();
        let category_id = Uuid::new_v4();
        let branch_id = Uuid::new_v4();

        let mut storage = MockProductStorage::new();
        storage
            .expect_create()
            .withf(|input| input.name == "apple" && input.price == 100)
            .return_once(move |_| Ok(id));
        storage
            .expect_get_by_id()
            .with(eq(id))
            .return_once(move |id| {
                Ok(Product {
                    id,
                    name: "apple".to_string(),
                    price: 100,
                    original_price: 2000,
                    quantity: 34,
                    category_id,
                    branch_id,
                    created_at: "2024-02-01 10:00:00+00".to_string(),
                    updated_at: String::new(),
                })
            });

        let service = ProductService::new(Arc::new(storage));
        let created = service
            .create(CreateProduct {
                name: "apple".to_string(),
                price: 100,
                original_price: 2000,
                quantity: 34,
                category_id,
                branch_id,
            })
            .await
            .unwrap();

        assert_eq!(created.name, "apple");
        assert_eq!(created.price, 100);
        assert_eq!(created.original_price, 2000);
        assert_eq!(created.quantity, 34);
        assert_eq!(created.category_id, category_id);
        assert_eq!(created.branch_id, branch_id);
    }
}
