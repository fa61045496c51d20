use std::sync::Arc;

use crate::config::Config;
use crate::contact::{ContactLog, ContactNotifier};
use crate::profile::Profile;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Loaded once at startup, never mutated.
    pub profile: Arc<Profile>,
    pub contacts: Arc<ContactLog>,
    /// Present only when the SMTP relay is fully configured.
    pub notifier: Option<Arc<dyn ContactNotifier>>,
}
