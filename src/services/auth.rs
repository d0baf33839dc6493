// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{CustomerRepository, UserRepository},
    models::auth::{Claims, Profile, User},
};

// Emite un token firmado con caducidad de 7 días
pub(crate) fn issue_token(user_id: Uuid, secret: &str) -> Result<String, AppError> {
    let now = Utc::now();
    let expires_at = now + chrono::Duration::days(7);

    let claims = Claims {
        sub: user_id,
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?)
}

pub(crate) fn decode_claims(token: &str, secret: &str) -> Result<Claims, AppError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|_| AppError::InvalidToken)?;
    Ok(token_data.claims)
}

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    customer_repo: CustomerRepository,
    jwt_secret: String,
    pool: PgPool,
}

impl AuthService {
    pub fn new(
        user_repo: UserRepository,
        customer_repo: CustomerRepository,
        jwt_secret: String,
        pool: PgPool,
    ) -> Self {
        Self {
            user_repo,
            customer_repo,
            jwt_secret,
            pool,
        }
    }

    /// Alta de un cliente: crea el usuario y su ficha de cliente (saldo 0)
    /// en UNA transacción, y devuelve un token ya iniciado.
    pub async fn register_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<String, AppError> {
        // 1. Hashing (fuera de la transacción; no toca la base de datos)
        let password_clone = password.to_owned();
        let hashed_password =
            tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Fallo en la task de hashing: {e}"))??;

        // --- INICIO DE LA TRANSACCIÓN ---
        let mut tx = self.pool.begin().await?;

        // 2. Crea el usuario
        let new_user = self
            .user_repo
            .create_user(&mut *tx, username, email, &hashed_password)
            .await?;

        // 3. Crea su ficha de cliente. Si falla, el usuario recién creado
        // se deshace con el rollback implícito al soltar la tx.
        self.customer_repo.create(&mut *tx, new_user.id).await?;

        // 4. Si hemos llegado hasta aquí, todo bien: commit.
        tx.commit().await?;
        // --- FIN DE LA TRANSACCIÓN ---

        tracing::info!("🆕 Cliente registrado: {username}");
        issue_token(new_user.id, &self.jwt_secret)
    }

    pub async fn login_user(&self, username: &str, password: &str) -> Result<String, AppError> {
        // El mismo error para usuario inexistente y contraseña incorrecta:
        // no revelamos qué usuarios existen.
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = user.password_hash.clone();

        // Ejecuta la verificación en un hilo aparte
        let is_password_valid =
            tokio::task::spawn_blocking(move || verify(&password_clone, &password_hash_clone))
                .await
                .map_err(|e| anyhow::anyhow!("Fallo en la task de verificación: {e}"))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        issue_token(user.id, &self.jwt_secret)
    }

    pub async fn validate_token(&self, token: &str) -> Result<User, AppError> {
        let claims = decode_claims(token, &self.jwt_secret)?;

        self.user_repo
            .find_by_id(claims.sub)
            .await?
            .ok_or(AppError::UserNotFound)
    }

    // Perfil del usuario autenticado con su ficha de cliente
    pub async fn profile(&self, user: &User) -> Result<Profile, AppError> {
        let customer = self.customer_repo.find_by_user_id(user.id).await?;
        Ok(Profile {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            is_staff: user.is_staff,
            customer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip() {
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, "secreto-de-pruebas").unwrap();
        let claims = decode_claims(&token, "secreto-de-pruebas").unwrap();
        assert_eq!(claims.sub, user_id);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_with_wrong_secret_is_rejected() {
        let token = issue_token(Uuid::new_v4(), "secreto-bueno").unwrap();
        let result = decode_claims(&token, "secreto-malo");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let result = decode_claims("no.es.un-jwt", "secreto");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }
}
