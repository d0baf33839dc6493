// src/db/report_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::report::{TopCustomerEntry, TopProductEntry},
};

#[derive(Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // 1. Top ten de productos por número de compras.
    // LEFT JOIN sobre todos los productos: los que no tienen compras
    // aparecen con recuento 0. El desempate entre recuentos iguales
    // queda en manos de la base de datos.
    pub async fn top_ten_products(&self) -> Result<Vec<TopProductEntry>, AppError> {
        let data = sqlx::query_as::<_, TopProductEntry>(
            r#"
            SELECT p.id, p.name, p.model, b.name AS brand_name,
                   COUNT(c.id) AS purchase_count
            FROM products p
            JOIN brands b ON b.id = p.brand_id
            LEFT JOIN purchases c ON c.product_id = p.id
            GROUP BY p.id, p.name, p.model, b.name
            ORDER BY purchase_count DESC
            LIMIT 10
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(data)
    }

    // 2. Top ten de clientes por dinero gastado.
    // NULLS LAST: los clientes sin compras (suma null) van al final.
    pub async fn top_ten_customers(&self) -> Result<Vec<TopCustomerEntry>, AppError> {
        let data = sqlx::query_as::<_, TopCustomerEntry>(
            r#"
            SELECT cl.id, u.username, cl.vip, SUM(c.amount) AS total_spent
            FROM customers cl
            JOIN users u ON u.id = cl.user_id
            LEFT JOIN purchases c ON c.customer_id = cl.id
            GROUP BY cl.id, u.username, cl.vip
            ORDER BY total_spent DESC NULLS LAST
            LIMIT 10
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(data)
    }
}
