use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api/skills
pub async fn handle_skills(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "skills": state.profile.skills }))
}

/// GET /api/experience
pub async fn handle_experience(State(state): State<AppState>) -> Json<Vec<Value>> {
    Json(state.profile.experience.clone())
}

/// GET /api/projects
pub async fn handle_projects(State(state): State<AppState>) -> Json<Vec<Value>> {
    Json(state.profile.projects.clone())
}

/// GET /api/certifications
pub async fn handle_certifications(State(state): State<AppState>) -> Json<Vec<Value>> {
    Json(state.profile.certifications.clone())
}
