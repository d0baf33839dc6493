use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nuestro tipo de error, con `thiserror` para mejor ergonomía.
// Cada variante se corresponde con una categoría de la taxonomía de errores
// de la tienda; todas se recuperan en el límite de la petición.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error de validación")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("El usuario ya existe")]
    UsernameAlreadyExists,

    #[error("La marca '{0}' ya existe")]
    BrandNameAlreadyExists(String),

    #[error("Ya existe un producto de esa marca con ese modelo")]
    ProductModelAlreadyExists,

    #[error("Compra duplicada para ese producto, cliente y día")]
    DuplicatePurchase,

    #[error("La marca tiene productos asociados")]
    BrandInUse,

    #[error("El producto tiene compras asociadas")]
    ProductHasPurchases,

    #[error("Stock insuficiente")]
    InsufficientStock,

    #[error("Producto no encontrado")]
    ProductNotFound,

    #[error("Cliente no encontrado")]
    CustomerNotFound,

    #[error("Marca no encontrada")]
    BrandNotFound,

    #[error("Usuario no encontrado")]
    UserNotFound,

    #[error("Credenciales inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Se requieren permisos de personal")]
    StaffRequired,

    // Variante para errores de base de datos (sqlx)
    #[error("Error de base de datos")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para cualquier otro error inesperado.
    // `anyhow::Error` conserva el contexto del error original.
    #[error("Error interno del servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Error de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Error de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Devolvemos todos los detalles de la validación, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Uno o más campos no son válidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            AppError::UsernameAlreadyExists => {
                (StatusCode::CONFLICT, "Ese nombre de usuario ya está en uso.".to_string())
            }
            AppError::BrandNameAlreadyExists(ref name) => {
                (StatusCode::CONFLICT, format!("La marca '{name}' ya existe."))
            }
            AppError::ProductModelAlreadyExists => (
                StatusCode::CONFLICT,
                "Ya existe un producto de esa marca con ese modelo.".to_string(),
            ),
            AppError::DuplicatePurchase => (
                StatusCode::CONFLICT,
                "Ya has comprado este producto hoy.".to_string(),
            ),
            AppError::BrandInUse => (
                StatusCode::CONFLICT,
                "La marca no se puede eliminar: tiene productos asociados.".to_string(),
            ),
            AppError::ProductHasPurchases => (
                StatusCode::CONFLICT,
                "El producto no se puede eliminar: tiene compras asociadas.".to_string(),
            ),
            AppError::InsufficientStock => (
                StatusCode::CONFLICT,
                "No hay unidades suficientes en stock.".to_string(),
            ),

            AppError::ProductNotFound => {
                (StatusCode::NOT_FOUND, "Producto no encontrado.".to_string())
            }
            AppError::CustomerNotFound => {
                (StatusCode::NOT_FOUND, "Cliente no encontrado.".to_string())
            }
            AppError::BrandNotFound => (StatusCode::NOT_FOUND, "Marca no encontrada.".to_string()),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "Usuario no encontrado.".to_string()),

            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Usuario o contraseña incorrectos.".to_string(),
            ),
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Token de autenticación inválido o ausente.".to_string(),
            ),
            AppError::StaffRequired => (
                StatusCode::FORBIDDEN,
                "Esta operación requiere permisos de personal.".to_string(),
            ),

            // El resto (DatabaseError, InternalServerError...) son un 500.
            // `tracing` registra el detalle; al cliente solo le llega un mensaje genérico.
            ref e => {
                tracing::error!("Error interno del servidor: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ha ocurrido un error inesperado.".to_string(),
                )
            }
        };

        // Respuesta estándar para los errores que solo llevan un mensaje.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            AppError::ProductNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn insufficient_stock_maps_to_409() {
        assert_eq!(
            AppError::InsufficientStock.into_response().status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn duplicate_purchase_maps_to_409() {
        assert_eq!(
            AppError::DuplicatePurchase.into_response().status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn staff_required_maps_to_403() {
        assert_eq!(
            AppError::StaffRequired.into_response().status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn invalid_credentials_maps_to_401() {
        assert_eq!(
            AppError::InvalidCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
