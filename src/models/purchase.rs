// src/models/purchase.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Registro de compra. Lo crea exclusivamente el checkout y es inmutable.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: Uuid,
    pub product_id: Uuid,
    pub customer_id: Uuid,
    pub purchase_date: NaiveDate,
    pub units: i32,
    pub amount: Decimal,
    pub tax_rate: Decimal,
}

// Línea del histórico de compras del cliente, con el producto resuelto
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseLine {
    pub id: Uuid,
    pub purchase_date: NaiveDate,
    pub units: i32,
    pub amount: Decimal,
    pub tax_rate: Decimal,
    pub product_name: String,
    pub product_model: String,
}

// Datos del formulario de checkout
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayload {
    #[validate(range(min = 1, message = "Las unidades deben ser un entero positivo."))]
    #[schema(example = 3)]
    pub units: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_payload_rejects_zero_units() {
        assert!(CheckoutPayload { units: 0 }.validate().is_err());
    }

    #[test]
    fn checkout_payload_rejects_negative_units() {
        assert!(CheckoutPayload { units: -3 }.validate().is_err());
    }

    #[test]
    fn checkout_payload_accepts_positive_units() {
        assert!(CheckoutPayload { units: 3 }.validate().is_ok());
    }
}
