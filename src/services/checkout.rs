// src/services/checkout.rs

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{CustomerRepository, ProductRepository, PurchaseRepository},
    models::purchase::Purchase,
};

// Tipo de IVA por defecto de toda compra
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(21, 0, 0, false, 2);

/// importe = unidades × precio, redondeado a 2 decimales (half-even),
/// la escala del NUMERIC(12,2) en que se almacena.
pub(crate) fn purchase_amount(units: i32, unit_price: Decimal) -> Decimal {
    (Decimal::from(units) * unit_price).round_dp(2)
}

#[derive(Clone)]
pub struct CheckoutService {
    product_repo: ProductRepository,
    customer_repo: CustomerRepository,
    purchase_repo: PurchaseRepository,
    pool: PgPool,
}

impl CheckoutService {
    pub fn new(
        product_repo: ProductRepository,
        customer_repo: CustomerRepository,
        purchase_repo: PurchaseRepository,
        pool: PgPool,
    ) -> Self {
        Self {
            product_repo,
            customer_repo,
            purchase_repo,
            pool,
        }
    }

    /// Ejecuta una compra como UNA transacción atómica:
    ///   1. carga el producto bloqueando su fila (FOR UPDATE),
    ///   2. carga el cliente ligado a la identidad autenticada,
    ///   3. rechaza si no hay stock suficiente (sin mutar nada),
    ///   4. descuenta las unidades del stock,
    ///   5. calcula el importe,
    ///   6. inserta la compra (la terna fecha/producto/cliente es única),
    ///   7. resta el importe del saldo del cliente.
    /// Cualquier fallo suelta la transacción sin commit: rollback de todo.
    /// El invariante que protege: las unidades vendidas de un producto
    /// siempre igualan la suma de unidades de sus compras registradas.
    pub async fn checkout(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        units: i32,
    ) -> Result<Purchase, AppError> {
        let mut tx = self.pool.begin().await?;

        let product = self
            .product_repo
            .find_by_id_for_update(&mut *tx, product_id)
            .await?
            .ok_or(AppError::ProductNotFound)?;

        let customer = self
            .customer_repo
            .find_by_user_id_tx(&mut *tx, user_id)
            .await?
            .ok_or(AppError::CustomerNotFound)?;

        if units > product.units {
            return Err(AppError::InsufficientStock);
        }

        self.product_repo
            .decrement_units(&mut *tx, product.id, units)
            .await?;

        let amount = purchase_amount(units, product.price);
        let today = Utc::now().date_naive();

        let purchase = self
            .purchase_repo
            .create(
                &mut *tx,
                product.id,
                customer.id,
                today,
                units,
                amount,
                DEFAULT_TAX_RATE,
            )
            .await?;

        self.customer_repo
            .debit_balance(&mut *tx, customer.id, amount)
            .await?;

        tx.commit().await?;

        tracing::info!(
            "🛒 Compra registrada: producto {} x{} unidades, importe {}",
            product.id,
            units,
            amount
        );
        Ok(purchase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn amount_is_units_times_price() {
        // El escenario de ejemplo: 3 unidades a 20.00 son 60.00
        assert_eq!(purchase_amount(3, dec("20.00")), dec("60.00"));
    }

    #[test]
    fn amount_keeps_two_decimal_scale() {
        assert_eq!(purchase_amount(2, dec("9.99")), dec("19.98"));
    }

    #[test]
    fn amount_rounds_half_even() {
        // 0.125 -> 0.12 y 0.135 -> 0.14 (redondeo del banquero)
        assert_eq!(purchase_amount(1, dec("0.125")), dec("0.12"));
        assert_eq!(purchase_amount(1, dec("0.135")), dec("0.14"));
    }

    #[test]
    fn default_tax_rate_is_21_percent() {
        assert_eq!(DEFAULT_TAX_RATE, dec("0.21"));
    }
}
