use crate::{ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_HOURS, MIN_JWT_SECRET_LENGTH};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. No default: the server refuses to start
    /// without one so tokens are never signed with a known value.
    pub jwt_secret: Option<String>,
    pub token_ttl_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set it in config.toml or IH_AUTH_JWT_SECRET)",
                ));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} bytes, got {}",
                    MIN_JWT_SECRET_LENGTH,
                    secret.len()
                )));
            }
            Some(_) => {}
        }

        if self.token_ttl_hours <= 0 {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_hours must be positive, got {}",
                self.token_ttl_hours
            )));
        }

        Ok(())
    }
}
