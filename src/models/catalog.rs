// src/models/catalog.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

// --- Marcas ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
}

// --- Productos ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub name: String,
    pub model: String,
    pub units: i32,
    pub price: Decimal,
    pub vip: bool,
}

// Producto con el nombre de su marca ya resuelto (para los listados)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductWithBrand {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub brand_name: String,
    pub name: String,
    pub model: String,
    pub units: i32,
    pub price: Decimal,
    pub vip: bool,
}

// ---
// Validación personalizada
// ---
fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.message = Some("El valor no puede ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

// Datos para crear o editar un producto
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[validate(required(message = "El campo 'brandId' es obligatorio."))]
    pub brand_id: Option<Uuid>,

    #[validate(length(min = 1, max = 50, message = "El nombre es obligatorio."))]
    #[schema(example = "Portátil 14\"")]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "El modelo es obligatorio."))]
    #[schema(example = "X1")]
    pub model: String,

    #[validate(range(min = 0, message = "Las unidades no pueden ser negativas."))]
    pub units: i32,

    #[validate(custom(function = validate_not_negative))]
    pub price: Decimal,

    #[serde(default)]
    pub vip: bool,
}

// Datos para crear una marca
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandPayload {
    #[validate(length(min = 1, max = 50, message = "El nombre es obligatorio."))]
    #[schema(example = "Acme")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(price: Decimal, units: i32) -> ProductPayload {
        ProductPayload {
            brand_id: Some(Uuid::new_v4()),
            name: "Portátil".into(),
            model: "X1".into(),
            units,
            price,
            vip: false,
        }
    }

    #[test]
    fn product_payload_rejects_negative_price() {
        assert!(payload(Decimal::new(-100, 2), 5).validate().is_err());
    }

    #[test]
    fn product_payload_rejects_negative_units() {
        assert!(payload(Decimal::new(100, 2), -1).validate().is_err());
    }

    #[test]
    fn product_payload_requires_brand() {
        let mut p = payload(Decimal::new(100, 2), 5);
        p.brand_id = None;
        assert!(p.validate().is_err());
    }

    #[test]
    fn product_payload_accepts_zero_stock() {
        assert!(payload(Decimal::ZERO, 0).validate().is_ok());
    }
}
