// src/models/income_product.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

// Produto dentro de um registro de entrada. Só existem operações em lote
// para esta entidade (create/update/delete múltiplos).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct IncomeProduct {
    pub id: Uuid,
    pub income_id: Uuid,
    pub product_id: Uuid,
    pub count: i64,
    pub price: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateIncomeProduct {
    pub income_id: Uuid,
    pub product_id: Uuid,

    #[validate(range(min = 0, message = "O valor não pode ser negativo."))]
    pub count: i64,

    #[validate(range(min = 0, message = "O valor não pode ser negativo."))]
    pub price: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateIncomeProducts {
    #[validate(nested)]
    pub income_products: Vec<CreateIncomeProduct>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateIncomeProduct {
    pub id: Uuid,

    #[validate(range(min = 0, message = "O valor não pode ser negativo."))]
    pub count: i64,

    #[validate(range(min = 0, message = "O valor não pode ser negativo."))]
    pub price: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateIncomeProducts {
    #[validate(nested)]
    pub income_products: Vec<UpdateIncomeProduct>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteIncomeProducts {
    pub ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncomeProductsResponse {
    pub income_products: Vec<IncomeProduct>,
    pub count: i64,
}
