// src/handlers/auth.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::auth::{AuthResponse, LoginPayload, Profile, RegisterPayload},
};

// POST /tienda/registro/signin
#[utoipa::path(
    post,
    path = "/tienda/registro/signin",
    tag = "Registro",
    request_body = RegisterPayload,
    responses(
        (status = 201, description = "Cliente dado de alta, sesión iniciada", body = AuthResponse),
        (status = 409, description = "El nombre de usuario ya está en uso")
    )
)]
pub async fn register(
    State(app_state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let token = app_state
        .auth_service
        .register_user(&payload.username, &payload.email, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(AuthResponse { token })))
}

// POST /tienda/registro/login
#[utoipa::path(
    post,
    path = "/tienda/registro/login",
    tag = "Registro",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Sesión iniciada", body = AuthResponse),
        (status = 401, description = "Usuario o contraseña incorrectos")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let token = app_state
        .auth_service
        .login_user(&payload.username, &payload.password)
        .await?;

    Ok(Json(AuthResponse { token }))
}

// POST /tienda/logout/
// Con JWT sin estado el servidor no guarda sesión: el endpoint confirma
// y el cliente descarta el token.
#[utoipa::path(
    post,
    path = "/tienda/logout/",
    tag = "Registro",
    responses((status = 200, description = "Sesión finalizada")),
    security(("api_jwt" = []))
)]
pub async fn logout(AuthenticatedUser(user): AuthenticatedUser) -> impl IntoResponse {
    tracing::info!("👋 Sesión finalizada: {}", user.username);
    Json(json!({ "mensaje": "Sesión finalizada." }))
}

// GET /tienda/me/
#[utoipa::path(
    get,
    path = "/tienda/me/",
    tag = "Registro",
    responses((status = 200, description = "Perfil del usuario autenticado", body = Profile)),
    security(("api_jwt" = []))
)]
pub async fn me(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Profile>, AppError> {
    let profile = app_state.auth_service.profile(&user).await?;
    Ok(Json(profile))
}
