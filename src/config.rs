// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        BrandRepository, CustomerRepository, ProductRepository, PurchaseRepository,
        ReportRepository, UserRepository,
    },
    services::{
        auth::AuthService, catalog::CatalogService, checkout::CheckoutService,
        report::ReportService,
    },
};

// El estado compartido, accesible desde toda la aplicación
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub catalog_service: CatalogService,
    pub checkout_service: CheckoutService,
    pub report_service: ReportService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL debe estar definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET debe estar definido");

        // Conecta a la base de datos, propagando errores con '?'
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexión con la base de datos establecida con éxito!");

        // --- Monta el grafo de dependencias ---
        let user_repo = UserRepository::new(db_pool.clone());
        let brand_repo = BrandRepository::new(db_pool.clone());
        let product_repo = ProductRepository::new(db_pool.clone());
        let customer_repo = CustomerRepository::new(db_pool.clone());
        let purchase_repo = PurchaseRepository::new(db_pool.clone());
        let report_repo = ReportRepository::new(db_pool.clone());

        let auth_service = AuthService::new(
            user_repo,
            customer_repo.clone(),
            jwt_secret,
            db_pool.clone(),
        );
        let catalog_service =
            CatalogService::new(brand_repo.clone(), product_repo.clone(), db_pool.clone());
        let checkout_service = CheckoutService::new(
            product_repo.clone(),
            customer_repo.clone(),
            purchase_repo.clone(),
            db_pool.clone(),
        );
        let report_service = ReportService::new(
            report_repo,
            brand_repo,
            product_repo,
            customer_repo,
            purchase_repo,
        );

        Ok(Self {
            db_pool,
            auth_service,
            catalog_service,
            checkout_service,
            report_service,
        })
    }
}
