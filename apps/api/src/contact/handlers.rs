use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, State},
    http::{header, HeaderMap},
    Json,
};
use bytes::Bytes;
use chrono::Utc;
use serde_json::{json, Value};

use crate::contact::models::{ContactForm, ContactRecord};
use crate::contact::notifier::spawn_notification;
use crate::contact::validation::validate_contact;
use crate::errors::AppError;
use crate::state::AppState;

const FORWARDED_FOR: &str = "x-forwarded-for";

/// POST /api/contact
///
/// The body is parsed leniently: a non-JSON content type or malformed JSON is
/// an empty form and fails validation with 400 rather than being rejected by
/// the extractor.
pub async fn handle_contact(
    State(state): State<AppState>,
    peer: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    let submission = validate_contact(ContactForm::from_request(content_type, &body))?;

    let ip = client_ip(&headers, peer.map(|ConnectInfo(addr)| addr));
    let record = ContactRecord::new(submission, ip, Utc::now());

    state.contacts.append(record.clone()).await?;

    if let Some(notifier) = &state.notifier {
        spawn_notification(Arc::clone(notifier), record);
    }

    Ok(Json(json!({ "ok": true })))
}

/// Forwarded-for header verbatim when present, else the socket peer.
fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    headers
        .get(FORWARDED_FOR)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_string())
}
