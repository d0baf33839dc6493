// src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_middleware;

#[tokio::main]
async fn main() {
    // Inicializa el logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() está bien aquí: si la configuración falla, la aplicación
    // no debe arrancar.
    let app_state = AppState::new()
        .await
        .expect("Fallo al inicializar el estado de la aplicación.");

    // Ejecuta las migraciones de SQLx en el arranque
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Fallo al ejecutar las migraciones de la base de datos.");

    tracing::info!("✅ Migraciones de la base de datos ejecutadas con éxito!");

    // Rutas de registro (públicas)
    let registro_routes = Router::new()
        .route("/signin", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // Rutas que requieren sesión iniciada (cualquier usuario).
    // Los permisos de personal los comprueba el extractor StaffUser.
    let session_routes = Router::new()
        .route("/logout/", post(handlers::auth::logout))
        .route("/me/", get(handlers::auth::me))
        .route("/checkout/{id}/", post(handlers::checkout::checkout))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    let admin_routes = Router::new()
        .route("/productos/", get(handlers::catalog::admin_list_products))
        .route("/productos/nuevo/", post(handlers::catalog::create_product))
        .route(
            "/productos/edicion/{id}/",
            put(handlers::catalog::update_product),
        )
        .route(
            "/productos/eliminar/{id}/",
            delete(handlers::catalog::delete_product),
        )
        .route("/marcas/nueva/", post(handlers::catalog::create_brand))
        .route(
            "/marcas/eliminar/{id}/",
            delete(handlers::catalog::delete_brand),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    let informes_routes = Router::new()
        .route(
            "/top_ten_productos_vendidos/",
            get(handlers::report::top_ten_products),
        )
        .route(
            "/top_ten_mejores_clientes/",
            get(handlers::report::top_ten_customers),
        )
        .route(
            "/productos_por_marca/",
            get(handlers::report::products_by_brand),
        )
        .route("/compras_usuario/", get(handlers::report::my_purchases))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    // Combina todo en el router principal
    let app = Router::new()
        .route("/", get(handlers::catalog::welcome))
        .route("/tienda/", get(handlers::catalog::welcome))
        .route("/tienda/compra/", get(handlers::catalog::search_products))
        .route("/tienda/marcas/", get(handlers::catalog::list_brands))
        .nest("/tienda/registro", registro_routes)
        .nest("/tienda", session_routes)
        .nest("/tienda/admin", admin_routes)
        .nest("/tienda/informes", informes_routes)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
        )
        .with_state(app_state);

    // Arranca el servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Fallo al iniciar el listener TCP");
    tracing::info!(
        "🚀 Servidor escuchando en {}",
        listener.local_addr().expect("dirección local")
    );
    axum::serve(listener, app)
        .await
        .expect("Error en el servidor Axum");
}
