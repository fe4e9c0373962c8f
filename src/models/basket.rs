// src/models/basket.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

// Carrinho de compras de um cliente. Os timestamps chegam do banco já como
// texto (string vazia quando nulos), espelhando o contrato da API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Basket {
    pub id: Uuid,
    pub customer_id: String,
    pub total_sum: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBasket {
    #[validate(length(min = 1, message = "O campo 'customer_id' é obrigatório."))]
    pub customer_id: String,

    #[validate(range(min = 0, message = "O valor não pode ser negativo."))]
    pub total_sum: i64,
}

// Atualização é sobrescrita total dos campos mutáveis.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBasket {
    pub id: Uuid,

    #[validate(length(min = 1, message = "O campo 'customer_id' é obrigatório."))]
    pub customer_id: String,

    #[validate(range(min = 0, message = "O valor não pode ser negativo."))]
    pub total_sum: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BasketsResponse {
    pub baskets: Vec<Basket>,
    pub count: i64,
}
