pub mod content;
pub mod health;
pub mod site;

use axum::{
    handler::HandlerWithoutStateExt,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::contact::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let assets =
        ServeDir::new(&state.config.static_dir).not_found_service(site::handle_not_found.into_service());

    Router::new()
        .route("/", get(site::handle_index))
        .route("/resume", get(site::handle_resume))
        .route("/healthz", get(health::health_handler))
        // Read-only profile content
        .route("/api/skills", get(content::handle_skills))
        .route("/api/experience", get(content::handle_experience))
        .route("/api/projects", get(content::handle_projects))
        .route("/api/certifications", get(content::handle_certifications))
        // Contact form
        .route("/api/contact", post(handlers::handle_contact))
        .nest_service("/static", assets)
        .fallback(site::handle_not_found)
        .with_state(state)
}
