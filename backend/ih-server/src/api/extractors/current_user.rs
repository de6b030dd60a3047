//! Axum extractors for REST API authentication

use crate::ApiError;
use crate::state::AppState;

use ih_core::User;
use ih_db::UserRepository;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Resolves the bearer token to a full user row.
///
/// Every failure mode - missing header, wrong scheme, bad signature,
/// expired token, or a subject that no longer exists - is reported as
/// 401 so the response never reveals which check failed.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(axum::http::header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| ApiError::unauthenticated("Missing authorization header"))?;

            let token = header
                .strip_prefix("Bearer ")
                .ok_or_else(|| ApiError::unauthenticated("Expected 'Bearer' scheme"))?;

            let claims = state.jwt_validator.validate(token)?;
            let user_id = claims.subject()?;

            let user = UserRepository::new(state.pool.clone())
                .find_by_id(user_id)
                .await?
                .ok_or_else(|| ApiError::unauthenticated("Unknown token subject"))?;

            Ok(CurrentUser(user))
        }
    }
}
