// src/models/customer.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Ficha de cliente, ligada 1:1 con su usuario. Se crea en el alta con
// saldo 0 y solo la muta el checkout (saldo) o la administración (vip).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vip: bool,
    pub balance: Decimal,
}
