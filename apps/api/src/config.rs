use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_SMTP_PORT: u16 = 587;

/// Application configuration loaded from environment variables.
/// Fails at startup if a numeric variable cannot be parsed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub profile_path: PathBuf,
    pub messages_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
    pub resume_file: String,
    /// `None` unless host, user, password and destination are all set.
    pub smtp: Option<SmtpConfig>,
}

/// Outbound relay settings for contact notifications.
#[derive(Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dest_email: String,
}

// Keeps the password out of startup logs.
impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("dest_email", &self.dest_email)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            profile_path: env_path("PROFILE_PATH", "data/profile.json"),
            messages_dir: env_path("MESSAGES_DIR", "messages"),
            templates_dir: env_path("TEMPLATES_DIR", "templates"),
            static_dir: env_path("STATIC_DIR", "static"),
            resume_file: std::env::var("RESUME_FILE").unwrap_or_else(|_| "resume.pdf".to_string()),
            smtp: SmtpConfig::from_lookup(|key| std::env::var(key).ok())?,
        })
    }
}

impl SmtpConfig {
    /// Builds the relay config from a key lookup. Returns `Ok(None)` when any of
    /// host, user, password or destination is missing or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Option<Self>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("SMTP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .context("SMTP_PORT must be a valid port number")?,
            None => DEFAULT_SMTP_PORT,
        };

        let (Some(host), Some(user), Some(password), Some(dest_email)) = (
            non_empty("SMTP_HOST"),
            non_empty("SMTP_USER"),
            non_empty("SMTP_PASS"),
            non_empty("CONTACT_DEST_EMAIL"),
        ) else {
            return Ok(None);
        };

        Ok(Some(SmtpConfig {
            host,
            port,
            user,
            password,
            dest_email,
        }))
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
