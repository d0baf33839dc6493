// src/models/report.rs

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::catalog::Product;

// 1. Top ten de productos por número de compras (eventos, no unidades)
#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopProductEntry {
    pub id: Uuid,
    pub name: String,
    pub model: String,
    pub brand_name: String,
    pub purchase_count: i64,
}

// 2. Top ten de clientes por dinero gastado.
// 'totalSpent' es null para clientes sin compras (LEFT JOIN).
#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopCustomerEntry {
    pub id: Uuid,
    pub username: String,
    pub vip: bool,
    pub total_spent: Option<Decimal>,
}

// 3. Informe de productos agrupados por marca
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandWithProducts {
    pub id: Uuid,
    pub name: String,
    pub products: Vec<Product>,
}
