// src/models/product.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub original_price: i64,
    pub quantity: i64,
    pub category_id: Uuid,
    pub branch_id: Uuid,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(range(min = 0, message = "O valor não pode ser negativo."))]
    pub price: i64,

    #[validate(range(min = 0, message = "O valor não pode ser negativo."))]
    pub original_price: i64,

    #[validate(range(min = 0, message = "O valor não pode ser negativo."))]
    pub quantity: i64,

    pub category_id: Uuid,
    pub branch_id: Uuid,
}

// branch_id não é alterável depois da criação (o produto pertence à filial).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProduct {
    pub id: Uuid,

    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(range(min = 0, message = "O valor não pode ser negativo."))]
    pub price: i64,

    #[validate(range(min = 0, message = "O valor não pode ser negativo."))]
    pub original_price: i64,

    #[validate(range(min = 0, message = "O valor não pode ser negativo."))]
    pub quantity: i64,

    pub category_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    pub count: i64,
}
