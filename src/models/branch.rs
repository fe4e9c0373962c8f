// src/models/branch.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Branch {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBranch {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(length(min = 1, message = "O endereço é obrigatório."))]
    pub address: String,

    #[validate(length(min = 1, message = "O telefone é obrigatório."))]
    pub phone_number: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBranch {
    pub id: Uuid,

    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(length(min = 1, message = "O endereço é obrigatório."))]
    pub address: String,

    #[validate(length(min = 1, message = "O telefone é obrigatório."))]
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BranchesResponse {
    pub branches: Vec<Branch>,
    pub count: i64,
}
