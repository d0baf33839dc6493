// src/services/catalog.rs

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{BrandRepository, ProductRepository},
    models::catalog::{Brand, Product, ProductWithBrand},
};

#[derive(Clone)]
pub struct CatalogService {
    brand_repo: BrandRepository,
    product_repo: ProductRepository,
    pool: PgPool,
}

impl CatalogService {
    pub fn new(brand_repo: BrandRepository, product_repo: ProductRepository, pool: PgPool) -> Self {
        Self {
            brand_repo,
            product_repo,
            pool,
        }
    }

    // La misma búsqueda sirve al catálogo público y al listado de administración
    pub async fn search(
        &self,
        text: &str,
        brand_ids: &[Uuid],
    ) -> Result<Vec<ProductWithBrand>, AppError> {
        self.product_repo.search(text, brand_ids).await
    }

    pub async fn list_brands(&self) -> Result<Vec<Brand>, AppError> {
        self.brand_repo.get_all().await
    }

    pub async fn create_product(
        &self,
        brand_id: Uuid,
        name: &str,
        model: &str,
        units: i32,
        price: Decimal,
        vip: bool,
    ) -> Result<Product, AppError> {
        // Comprobación explícita para distinguir "marca desconocida" (404)
        // del conflicto de unicidad (409) antes de escribir nada.
        self.brand_repo
            .find_by_id(brand_id)
            .await?
            .ok_or(AppError::BrandNotFound)?;

        self.product_repo
            .create(&self.pool, brand_id, name, model, units, price, vip)
            .await
    }

    pub async fn update_product(
        &self,
        id: Uuid,
        brand_id: Uuid,
        name: &str,
        model: &str,
        units: i32,
        price: Decimal,
        vip: bool,
    ) -> Result<Product, AppError> {
        self.brand_repo
            .find_by_id(brand_id)
            .await?
            .ok_or(AppError::BrandNotFound)?;

        self.product_repo
            .update(&self.pool, id, brand_id, name, model, units, price, vip)
            .await
    }

    pub async fn delete_product(&self, id: Uuid) -> Result<(), AppError> {
        self.product_repo.delete(&self.pool, id).await
    }

    pub async fn create_brand(&self, name: &str) -> Result<Brand, AppError> {
        self.brand_repo.create(&self.pool, name).await
    }

    pub async fn delete_brand(&self, id: Uuid) -> Result<(), AppError> {
        self.brand_repo.delete(&self.pool, id).await
    }
}
