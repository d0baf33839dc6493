// src/handlers/catalog.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::Query;
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::StaffUser,
    models::catalog::{Brand, BrandPayload, Product, ProductPayload, ProductWithBrand},
};

// GET / y /tienda/
#[utoipa::path(
    get,
    path = "/tienda/",
    tag = "Tienda",
    responses((status = 200, description = "Página de bienvenida"))
)]
pub async fn welcome() -> impl IntoResponse {
    Json(json!({ "mensaje": "Bienvenido a la tienda." }))
}

// Parámetros del formulario de búsqueda: ?texto=...&marca=<id>&marca=<id>
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    #[serde(default)]
    pub texto: String,

    #[serde(default)]
    pub marca: Vec<Uuid>,
}

// GET /tienda/compra/ — catálogo público con filtros
#[utoipa::path(
    get,
    path = "/tienda/compra/",
    tag = "Tienda",
    params(SearchParams),
    responses((status = 200, description = "Productos que pasan los filtros", body = [ProductWithBrand]))
)]
pub async fn search_products(
    State(app_state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<ProductWithBrand>>, AppError> {
    let products = app_state
        .catalog_service
        .search(&params.texto, &params.marca)
        .await?;
    Ok(Json(products))
}

// GET /tienda/marcas/ — las marcas que alimentan el formulario de búsqueda
#[utoipa::path(
    get,
    path = "/tienda/marcas/",
    tag = "Tienda",
    responses((status = 200, description = "Todas las marcas", body = [Brand]))
)]
pub async fn list_brands(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Brand>>, AppError> {
    let brands = app_state.catalog_service.list_brands().await?;
    Ok(Json(brands))
}

// ---
// Administración (solo personal)
// ---

// GET /tienda/admin/productos/
#[utoipa::path(
    get,
    path = "/tienda/admin/productos/",
    tag = "Administración",
    params(SearchParams),
    responses(
        (status = 200, description = "Listado de productos", body = [ProductWithBrand]),
        (status = 403, description = "Se requieren permisos de personal")
    ),
    security(("api_jwt" = []))
)]
pub async fn admin_list_products(
    State(app_state): State<AppState>,
    _staff: StaffUser,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<ProductWithBrand>>, AppError> {
    let products = app_state
        .catalog_service
        .search(&params.texto, &params.marca)
        .await?;
    Ok(Json(products))
}

// POST /tienda/admin/productos/nuevo/
#[utoipa::path(
    post,
    path = "/tienda/admin/productos/nuevo/",
    tag = "Administración",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Producto creado", body = Product),
        (status = 409, description = "Par (marca, modelo) duplicado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    _staff: StaffUser,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let product = app_state
        .catalog_service
        .create_product(
            payload.brand_id.unwrap(),
            &payload.name,
            &payload.model,
            payload.units,
            payload.price,
            payload.vip,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

// PUT /tienda/admin/productos/edicion/{id}/
#[utoipa::path(
    put,
    path = "/tienda/admin/productos/edicion/{id}/",
    tag = "Administración",
    request_body = ProductPayload,
    params(("id" = Uuid, Path, description = "ID del producto")),
    responses(
        (status = 200, description = "Producto actualizado", body = Product),
        (status = 404, description = "Producto no encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    _staff: StaffUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let product = app_state
        .catalog_service
        .update_product(
            id,
            payload.brand_id.unwrap(),
            &payload.name,
            &payload.model,
            payload.units,
            payload.price,
            payload.vip,
        )
        .await?;

    Ok(Json(product))
}

// DELETE /tienda/admin/productos/eliminar/{id}/
#[utoipa::path(
    delete,
    path = "/tienda/admin/productos/eliminar/{id}/",
    tag = "Administración",
    params(("id" = Uuid, Path, description = "ID del producto")),
    responses(
        (status = 204, description = "Producto eliminado"),
        (status = 409, description = "El producto tiene compras asociadas")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    _staff: StaffUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalog_service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// POST /tienda/admin/marcas/nueva/
#[utoipa::path(
    post,
    path = "/tienda/admin/marcas/nueva/",
    tag = "Administración",
    request_body = BrandPayload,
    responses(
        (status = 201, description = "Marca creada", body = Brand),
        (status = 409, description = "Nombre de marca duplicado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_brand(
    State(app_state): State<AppState>,
    _staff: StaffUser,
    Json(payload): Json<BrandPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let brand = app_state.catalog_service.create_brand(&payload.name).await?;
    Ok((StatusCode::CREATED, Json(brand)))
}

// DELETE /tienda/admin/marcas/eliminar/{id}/
#[utoipa::path(
    delete,
    path = "/tienda/admin/marcas/eliminar/{id}/",
    tag = "Administración",
    params(("id" = Uuid, Path, description = "ID de la marca")),
    responses(
        (status = 204, description = "Marca eliminada"),
        (status = 409, description = "La marca tiene productos asociados")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_brand(
    State(app_state): State<AppState>,
    _staff: StaffUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalog_service.delete_brand(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
