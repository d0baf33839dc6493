// src/db/product_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::catalog::{Product, ProductWithBrand},
};

/// Escapa los comodines de LIKE para que la búsqueda sea una
/// comprobación de contención literal (sensible a mayúsculas).
pub(crate) fn escape_like(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ---
    // Lecturas
    // ---

    /// Búsqueda del catálogo: contención del texto en el nombre (LIKE, sensible
    /// a mayúsculas; texto vacío casa con todo) y filtro opcional por marcas
    /// (conjunto vacío = sin filtro). Sin paginación.
    pub async fn search(
        &self,
        text: &str,
        brand_ids: &[Uuid],
    ) -> Result<Vec<ProductWithBrand>, AppError> {
        let products = sqlx::query_as::<_, ProductWithBrand>(
            r#"
            SELECT p.id, p.brand_id, b.name AS brand_name,
                   p.name, p.model, p.units, p.price, p.vip
            FROM products p
            JOIN brands b ON b.id = p.brand_id
            WHERE p.name LIKE '%' || $1 || '%'
              AND (cardinality($2::uuid[]) = 0 OR p.brand_id = ANY($2))
            "#,
        )
        .bind(escape_like(text))
        .bind(brand_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    pub async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>("SELECT * FROM products")
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    /// Carga el producto bloqueando su fila (FOR UPDATE). Es el punto de
    /// serialización de dos checkouts concurrentes sobre el mismo producto.
    pub async fn find_by_id_for_update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<Product>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(product)
    }

    // ---
    // Escrituras
    // ---

    pub async fn create<'e, E>(
        &self,
        executor: E,
        brand_id: Uuid,
        name: &str,
        model: &str,
        units: i32,
        price: Decimal,
        vip: bool,
    ) -> Result<Product, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (brand_id, name, model, units, price, vip)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(brand_id)
        .bind(name)
        .bind(model)
        .bind(units)
        .bind(price)
        .bind(vip)
        .fetch_one(executor)
        .await
        .map_err(|e| Self::map_write_error(e))
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        brand_id: Uuid,
        name: &str,
        model: &str,
        units: i32,
        price: Decimal,
        vip: bool,
    ) -> Result<Product, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET brand_id = $2, name = $3, model = $4, units = $5, price = $6, vip = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(brand_id)
        .bind(name)
        .bind(model)
        .bind(units)
        .bind(price)
        .bind(vip)
        .fetch_optional(executor)
        .await
        .map_err(|e| Self::map_write_error(e))?
        .ok_or(AppError::ProductNotFound)
    }

    /// Resta unidades del stock dentro de la transacción de checkout.
    /// El CHECK (units >= 0) de la tabla es la red de seguridad final.
    pub async fn decrement_units<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        units: i32,
    ) -> Result<Product, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let product = sqlx::query_as::<_, Product>(
            "UPDATE products SET units = units - $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(units)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::ProductNotFound)?;
        Ok(product)
    }

    /// Elimina un producto. RESTRICT: se rechaza si tiene compras.
    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_foreign_key_violation() {
                        return AppError::ProductHasPurchases;
                    }
                }
                AppError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::ProductNotFound);
        }
        Ok(())
    }

    // La clave ajena inexistente y el par (marca, modelo) duplicado llegan
    // como errores de base de datos; aquí se traducen al dominio.
    fn map_write_error(e: sqlx::Error) -> AppError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() {
                return AppError::ProductModelAlreadyExists;
            }
            if db_err.is_foreign_key_violation() {
                return AppError::BrandNotFound;
            }
        }
        e.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_is_identity_for_plain_text() {
        assert_eq!(escape_like("portatil"), "portatil");
    }

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("50%_a\\b"), "50\\%\\_a\\\\b");
    }
}
