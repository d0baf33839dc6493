// src/handlers/checkout.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::purchase::{CheckoutPayload, Purchase},
};

// POST /tienda/checkout/{id}/
#[utoipa::path(
    post,
    path = "/tienda/checkout/{id}/",
    tag = "Tienda",
    request_body = CheckoutPayload,
    params(("id" = Uuid, Path, description = "ID del producto a comprar")),
    responses(
        (status = 201, description = "Compra realizada", body = Purchase),
        (status = 404, description = "Producto o cliente no encontrado"),
        (status = 409, description = "Stock insuficiente o compra duplicada en el día")
    ),
    security(("api_jwt" = []))
)]
pub async fn checkout(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(product_id): Path<Uuid>,
    Json(payload): Json<CheckoutPayload>,
) -> Result<impl IntoResponse, AppError> {
    // Precondición del servicio: unidades > 0. Se valida aquí, antes
    // de abrir la transacción.
    payload.validate().map_err(AppError::ValidationError)?;

    let purchase = app_state
        .checkout_service
        .checkout(user.id, product_id, payload.units)
        .await?;

    Ok((StatusCode::CREATED, Json(purchase)))
}
