// src/models/store.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Movimentação do caixa de uma filial. O saldo usa Decimal para que pares
// de crédito/débito de mesma magnitude devolvam o saldo exato, sem drift
// de ponto flutuante.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreAmount {
    pub branch_id: Uuid,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreBudget {
    pub branch_id: Uuid,
    pub budget: Decimal,
}

// Repasse ao dealer: o saldo é uma única linha global.
#[derive(Debug, Clone, Deserialize)]
pub struct DealerSum {
    pub amount: Decimal,
}
