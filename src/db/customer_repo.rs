// src/db/customer_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::customer::Customer};

#[derive(Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Busca la ficha de cliente ligada a un usuario
    pub async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(customer)
    }

    // Variante transaccional, para usar dentro del checkout
    pub async fn find_by_user_id_tx<'e, E>(
        &self,
        executor: E,
        user_id: Uuid,
    ) -> Result<Option<Customer>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(executor)
            .await?;
        Ok(customer)
    }

    /// Crea la ficha de cliente en el alta. Saldo 0, sin VIP.
    pub async fn create<'e, E>(&self, executor: E, user_id: Uuid) -> Result<Customer, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let customer = sqlx::query_as::<_, Customer>(
            "INSERT INTO customers (user_id, vip, balance) VALUES ($1, FALSE, 0) RETURNING *",
        )
        .bind(user_id)
        .fetch_one(executor)
        .await?;
        Ok(customer)
    }

    /// Resta el importe de una compra del saldo del cliente.
    pub async fn debit_balance<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        amount: Decimal,
    ) -> Result<Customer, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let customer = sqlx::query_as::<_, Customer>(
            "UPDATE customers SET balance = balance - $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(amount)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::CustomerNotFound)?;
        Ok(customer)
    }
}
