pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;
use crate::wizard::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session lifecycle
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        // Navigation and preview
        .route("/api/v1/sessions/:id/stage", post(handlers::handle_stage))
        .route(
            "/api/v1/sessions/:id/advance",
            post(handlers::handle_advance),
        )
        .route(
            "/api/v1/sessions/:id/retreat",
            post(handlers::handle_retreat),
        )
        .route(
            "/api/v1/sessions/:id/preview",
            get(handlers::handle_preview),
        )
        // Step 3: skills
        .route(
            "/api/v1/sessions/:id/skills",
            post(handlers::handle_add_skill),
        )
        .route(
            "/api/v1/sessions/:id/skills/:index",
            delete(handlers::handle_remove_skill),
        )
        // Step 4: projects (Fresher) / work experiences (Experienced)
        .route(
            "/api/v1/sessions/:id/projects",
            post(handlers::handle_add_project),
        )
        .route(
            "/api/v1/sessions/:id/projects/:index",
            delete(handlers::handle_remove_project),
        )
        .route(
            "/api/v1/sessions/:id/experiences",
            post(handlers::handle_add_work_experience),
        )
        .route(
            "/api/v1/sessions/:id/experiences/:index",
            delete(handlers::handle_remove_work_experience),
        )
        // Drafting and export
        .route(
            "/api/v1/sessions/:id/generate",
            post(handlers::handle_generate),
        )
        .route(
            "/api/v1/sessions/:id/export",
            post(handlers::handle_export),
        )
        .with_state(state)
}
