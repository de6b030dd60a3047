//! Identity REST API handlers

use crate::{ApiError, ApiResult, CurrentUser, LoginRequest, SignupRequest, TokenResponse, UserDto};
use crate::state::AppState;

use ih_auth::password::{hash_password, verify_password};
use ih_core::User;
use ih_db::UserRepository;

use axum::{Form, Json, extract::State};

/// POST /auth/signup
///
/// Register a new user. A duplicate email is reported as CONFLICT.
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<Json<UserDto>> {
    if req.name.trim().is_empty() {
        return Err(ApiError::validation(
            "name cannot be empty",
            Some("name".into()),
        ));
    }
    if req.email.trim().is_empty() || !req.email.contains('@') {
        return Err(ApiError::validation(
            "a valid email is required",
            Some("email".into()),
        ));
    }
    if req.password.is_empty() {
        return Err(ApiError::validation(
            "password cannot be empty",
            Some("password".into()),
        ));
    }

    let password_hash = hash_password(&req.password)?;
    let user = User::new(req.name, req.email, password_hash);

    UserRepository::new(state.pool.clone())
        .create(&user)
        .await
        .map_err(|e| match e {
            ih_db::DbError::Conflict { .. } => ApiError::conflict("Email already registered"),
            other => other.into(),
        })?;

    Ok(Json(UserDto::from(user)))
}

/// POST /auth/login
///
/// Exchange form credentials for a bearer token. Unknown email and
/// wrong password produce the same 401.
pub async fn login(
    State(state): State<AppState>,
    Form(req): Form<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let user = UserRepository::new(state.pool.clone())
        .find_by_email(&req.username)
        .await?
        .ok_or_else(|| ApiError::unauthenticated("Incorrect email or password"))?;

    if !verify_password(&req.password, &user.password_hash)? {
        return Err(ApiError::unauthenticated("Incorrect email or password"));
    }

    let token = state.token_issuer.issue(user.id)?;

    Ok(Json(TokenResponse::bearer(token)))
}

/// GET /auth/me
///
/// Return the authenticated user.
pub async fn me(CurrentUser(user): CurrentUser) -> ApiResult<Json<UserDto>> {
    Ok(Json(UserDto::from(user)))
}
