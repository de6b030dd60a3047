use crate::state::AppState;
use crate::{api, health};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Identity
        .route("/auth/signup", post(api::auth::auth::signup))
        .route("/auth/login", post(api::auth::auth::login))
        .route("/auth/me", get(api::auth::auth::me))
        // Projects
        .route(
            "/api/projects",
            post(api::projects::projects::create_project).get(api::projects::projects::list_projects),
        )
        // Memberships
        .route(
            "/api/projects/{project_id}/members",
            post(api::members::members::add_member).get(api::members::members::list_members),
        )
        // Issues
        .route(
            "/api/projects/{project_id}/issues",
            post(api::issues::issues::create_issue).get(api::issues::issues::list_issues),
        )
        .route(
            "/api/issues/{id}",
            get(api::issues::issues::get_issue)
                .patch(api::issues::issues::update_issue)
                .delete(api::issues::issues::delete_issue),
        )
        // Comments
        .route(
            "/api/issues/{id}/comments",
            get(api::comments::comments::list_comments).post(api::comments::comments::create_comment),
        )
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
