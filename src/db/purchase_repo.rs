// src/db/purchase_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::purchase::{Purchase, PurchaseLine},
};

#[derive(Clone)]
pub struct PurchaseRepository {
    pool: PgPool,
}

impl PurchaseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserta el registro de compra dentro de la transacción de checkout.
    /// La terna única (fecha, producto, cliente) limita a una compra por
    /// producto, cliente y día; su violación revierte toda la transacción.
    pub async fn create<'e, E>(
        &self,
        executor: E,
        product_id: Uuid,
        customer_id: Uuid,
        purchase_date: NaiveDate,
        units: i32,
        amount: Decimal,
        tax_rate: Decimal,
    ) -> Result<Purchase, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Purchase>(
            r#"
            INSERT INTO purchases (product_id, customer_id, purchase_date, units, amount, tax_rate)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(product_id)
        .bind(customer_id)
        .bind(purchase_date)
        .bind(units)
        .bind(amount)
        .bind(tax_rate)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::DuplicatePurchase;
                }
            }
            e.into()
        })
    }

    // Histórico de compras de un cliente, con el producto resuelto
    pub async fn find_by_customer(&self, customer_id: Uuid) -> Result<Vec<PurchaseLine>, AppError> {
        let purchases = sqlx::query_as::<_, PurchaseLine>(
            r#"
            SELECT c.id, c.purchase_date, c.units, c.amount, c.tax_rate,
                   p.name AS product_name, p.model AS product_model
            FROM purchases c
            JOIN products p ON p.id = c.product_id
            WHERE c.customer_id = $1
            ORDER BY c.purchase_date DESC
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(purchases)
    }
}
