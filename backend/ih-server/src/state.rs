use ih_auth::{JwtValidator, TokenIssuer};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub token_issuer: Arc<TokenIssuer>,
    pub jwt_validator: Arc<JwtValidator>,
}

impl AppState {
    /// Build state from a connected pool and the signing secret.
    pub fn new(pool: SqlitePool, jwt_secret: &[u8], token_ttl: chrono::Duration) -> Self {
        Self {
            pool,
            token_issuer: Arc::new(TokenIssuer::with_hs256(jwt_secret, token_ttl)),
            jwt_validator: Arc::new(JwtValidator::with_hs256(jwt_secret)),
        }
    }
}
