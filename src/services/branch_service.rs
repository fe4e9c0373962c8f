// src/services/branch_service.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    common::{error::AppError, request::GetListRequest},
    db::BranchStorage,
    models::branch::{Branch, BranchesResponse, CreateBranch, UpdateBranch},
};

#[derive(Clone)]
pub struct BranchService {
    storage: Arc<dyn BranchStorage>,
}

impl BranchService {
    pub fn new(storage: Arc<dyn BranchStorage>) -> Self {
        Self { storage }
    }

    pub async fn create(&self, branch: CreateBranch) -> Result<Branch, AppError> {
        let id = self.storage.create(branch).await.map_err(|err| {
            tracing::error!(error = %err, "erro ao criar branch");
            err
        })?;

        self.storage.get_by_id(id).await.map_err(|err| {
            tracing::error!(error = %err, %id, "erro ao reler branch criada");
            err
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Branch, AppError> {
        self.storage.get_by_id(id).await.map_err(|err| {
            tracing::error!(error = %err, %id, "erro ao buscar branch");
            err
        })
    }

    pub async fn get_list(&self, req: GetListRequest) -> Result<BranchesResponse, AppError> {
        let (branches, count) = self.storage.get_list(req).await.map_err(|err| {
            tracing::error!(error = %err, "erro ao listar branches");
            err
        })?;

        Ok(BranchesResponse { branches, count })
    }

    pub async fn update(&self, branch: UpdateBranch) -> Result<Branch, AppError> {
        let id = self.storage.update(branch).await.map_err(|err| {
            tracing::error!(error = %err, "erro ao atualizar branch");
            err
        })?;

        self.storage.get_by_id(id).await.map_err(|err| {
            tracing::error!(error = %err, %id, "erro ao reler branch atualizada");
            err
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.storage.delete(id).await.map_err(|err| {
            tracing::error!(error = %err, %id, "erro ao deletar branch");
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::branch_repo::MockBranchStorage;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn update_reflects_every_field() {
        let id = Uuid::new_v4();
        let mut storage = MockBranchStorage::new();

        storage
            .expect_update()
            .return_once(move |input| Ok(input.id));
        storage
            .expect_get_by_id()
            .with(eq(id))
            .return_once(move |id| {
                Ok(Branch {
                    id,
                    name: "Filial Centro".to_string(),
                    address: "Rua Nova, 10".to_string(),
                    phone_number: "+5511999990000".to_string(),
                    created_at: "2024-02-01 10:00:00+00".to_string(),
                    updated_at: "2024-02-02 09:00:00+00".to_string(),
                })
            });

        let service = BranchService::new(Arc::new(storage));
        let updated = service
            .update(UpdateBranch {
                id,
                name: "Filial Centro".to_string(),
                address: "Rua Nova, 10".to_string(),
                phone_number: "+5511999990000".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Filial Centro");
        assert_eq!(updated.address, "Rua Nova, 10");
        assert_eq!(updated.phone_number, "+5511999990000");
        // updated_at é re-estampado pelo banco na atualização
        assert!(!updated.updated_at.is_empty());
    }
}
