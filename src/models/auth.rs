// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::customer::Customer;

// Representa un usuario tal y como viene de la base de datos
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,

    #[serde(skip_serializing)] // IMPORTANTE para seguridad
    pub password_hash: String,

    // Marca a los usuarios de administración (rutas /tienda/admin/)
    pub is_staff: bool,

    pub created_at: DateTime<Utc>,
}

// Datos para el alta de un nuevo cliente
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    #[validate(length(min = 3, max = 150, message = "El usuario debe tener entre 3 y 150 caracteres."))]
    #[schema(example = "laura92")]
    pub username: String,

    #[validate(email(message = "El e-mail proporcionado no es válido."))]
    #[schema(example = "laura@example.com")]
    pub email: String,

    #[validate(length(min = 6, message = "La contraseña debe tener como mínimo 6 caracteres."))]
    pub password: String,
}

// Datos para iniciar sesión
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    #[validate(length(min = 1, message = "El usuario es obligatorio."))]
    pub username: String,

    #[validate(length(min = 1, message = "La contraseña es obligatoria."))]
    pub password: String,
}

// Respuesta de autenticación con el token
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
}

// Perfil del usuario autenticado con su ficha de cliente (si la tiene)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
    pub customer: Option<Customer>,
}

// Estructura de datos ("claims") dentro del JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,  // Subject (ID del usuario)
    pub exp: usize, // Expiration time (cuándo caduca el token)
    pub iat: usize, // Issued At (cuándo se emitió el token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_payload_rejects_short_password() {
        let payload = RegisterPayload {
            username: "laura92".into(),
            email: "laura@example.com".into(),
            password: "12345".into(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn register_payload_rejects_bad_email() {
        let payload = RegisterPayload {
            username: "laura92".into(),
            email: "no-es-un-email".into(),
            password: "secreto".into(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn register_payload_accepts_valid_data() {
        let payload = RegisterPayload {
            username: "laura92".into(),
            email: "laura@example.com".into(),
            password: "secreto".into(),
        };
        assert!(payload.validate().is_ok());
    }
}
