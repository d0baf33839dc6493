// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Tienda ---
        handlers::catalog::welcome,
        handlers::catalog::search_products,
        handlers::catalog::list_brands,
        handlers::checkout::checkout,

        // --- Registro ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::logout,
        handlers::auth::me,

        // --- Administración ---
        handlers::catalog::admin_list_products,
        handlers::catalog::create_product,
        handlers::catalog::update_product,
        handlers::catalog::delete_product,
        handlers::catalog::create_brand,
        handlers::catalog::delete_brand,

        // --- Informes ---
        handlers::report::top_ten_products,
        handlers::report::top_ten_customers,
        handlers::report::products_by_brand,
        handlers::report::my_purchases,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::User,
            models::auth::RegisterPayload,
            models::auth::LoginPayload,
            models::auth::AuthResponse,
            models::auth::Profile,

            // --- Catálogo ---
            models::catalog::Brand,
            models::catalog::Product,
            models::catalog::ProductWithBrand,
            models::catalog::ProductPayload,
            models::catalog::BrandPayload,

            // --- Clientes y compras ---
            models::customer::Customer,
            models::purchase::Purchase,
            models::purchase::PurchaseLine,
            models::purchase::CheckoutPayload,

            // --- Informes ---
            models::report::TopProductEntry,
            models::report::TopCustomerEntry,
            models::report::BrandWithProducts,
        )
    ),
    tags(
        (name = "Tienda", description = "Catálogo público y checkout"),
        (name = "Registro", description = "Alta, inicio y fin de sesión"),
        (name = "Administración", description = "Gestión de productos y marcas (personal)"),
        (name = "Informes", description = "Informes y estadísticas")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
