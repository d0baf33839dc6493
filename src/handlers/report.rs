// src/handlers/report.rs

use axum::{extract::State, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::{AuthenticatedUser, StaffUser},
    models::{
        purchase::PurchaseLine,
        report::{BrandWithProducts, TopCustomerEntry, TopProductEntry},
    },
};

// GET /tienda/informes/top_ten_productos_vendidos/
#[utoipa::path(
    get,
    path = "/tienda/informes/top_ten_productos_vendidos/",
    tag = "Informes",
    responses((status = 200, description = "Los diez productos con más compras", body = [TopProductEntry])),
    security(("api_jwt" = []))
)]
pub async fn top_ten_products(
    State(app_state): State<AppState>,
    _staff: StaffUser,
) -> Result<Json<Vec<TopProductEntry>>, AppError> {
    let entries = app_state.report_service.top_ten_products().await?;
    Ok(Json(entries))
}

// GET /tienda/informes/top_ten_mejores_clientes/
#[utoipa::path(
    get,
    path = "/tienda/informes/top_ten_mejores_clientes/",
    tag = "Informes",
    responses((status = 200, description = "Los diez clientes que más han gastado", body = [TopCustomerEntry])),
    security(("api_jwt" = []))
)]
pub async fn top_ten_customers(
    State(app_state): State<AppState>,
    _staff: StaffUser,
) -> Result<Json<Vec<TopCustomerEntry>>, AppError> {
    let entries = app_state.report_service.top_ten_customers().await?;
    Ok(Json(entries))
}

// GET /tienda/informes/productos_por_marca/
#[utoipa::path(
    get,
    path = "/tienda/informes/productos_por_marca/",
    tag = "Informes",
    responses((status = 200, description = "Productos agrupados por marca", body = [BrandWithProducts])),
    security(("api_jwt" = []))
)]
pub async fn products_by_brand(
    State(app_state): State<AppState>,
    _staff: StaffUser,
) -> Result<Json<Vec<BrandWithProducts>>, AppError> {
    let report = app_state.report_service.products_by_brand().await?;
    Ok(Json(report))
}

// GET /tienda/informes/compras_usuario/
// A diferencia del resto de informes, este es del propio cliente.
#[utoipa::path(
    get,
    path = "/tienda/informes/compras_usuario/",
    tag = "Informes",
    responses((status = 200, description = "Compras del cliente autenticado", body = [PurchaseLine])),
    security(("api_jwt" = []))
)]
pub async fn my_purchases(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<PurchaseLine>>, AppError> {
    let purchases = app_state.report_service.purchases_for_user(user.id).await?;
    Ok(Json(purchases))
}
