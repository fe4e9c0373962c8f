// src/models/income.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

// Registro de entrada de mercadoria. A criação não recebe corpo: a linha
// nasce com total_sum = 0 e os income_products são anexados depois.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Income {
    pub id: Uuid,
    pub total_sum: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateIncome {
    pub id: Uuid,

    #[validate(range(min = 0, message = "O valor não pode ser negativo."))]
    pub total_sum: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncomesResponse {
    pub incomes: Vec<Income>,
    pub count: i64,
}
