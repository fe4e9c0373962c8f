// src/models/basket_product.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

// Item dentro de um carrinho: liga um produto a um basket com a quantidade.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct BasketProduct {
    pub id: Uuid,
    pub basket_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBasketProduct {
    pub basket_id: Uuid,
    pub product_id: Uuid,

    #[validate(range(min = 0, message = "O valor não pode ser negativo."))]
    pub quantity: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBasketProduct {
    pub id: Uuid,
    pub basket_id: Uuid,
    pub product_id: Uuid,

    #[validate(range(min = 0, message = "O valor não pode ser negativo."))]
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BasketProductsResponse {
    pub basket_products: Vec<BasketProduct>,
    pub count: i64,
}
