mod config;
mod contact;
mod errors;
mod profile;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::{ContactLog, ContactNotifier, SmtpNotifier};
use crate::profile::Profile;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparsable ports)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // No profile, no service
    let profile = Profile::load(&config.profile_path)?;

    let contacts = ContactLog::in_dir(&config.messages_dir);
    info!("Contact log at {}", contacts.path().display());

    let notifier: Option<Arc<dyn ContactNotifier>> = match &config.smtp {
        Some(smtp) => {
            info!("Email relay enabled via {}:{}", smtp.host, smtp.port);
            Some(Arc::new(SmtpNotifier::new(smtp.clone())))
        }
        None => {
            info!("Email relay disabled (SMTP_HOST/SMTP_USER/SMTP_PASS/CONTACT_DEST_EMAIL not all set)");
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        profile: Arc::new(profile),
        contacts: Arc::new(contacts),
        notifier,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
