use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Raw contact form as posted by the landing page. Every field is optional;
/// presence is enforced by validation, not deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    /// Parses a request body leniently: anything that is not a JSON object with
    /// string-or-null fields is treated as an empty form.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// Like `from_body`, but a body not declared as JSON is an empty form.
    pub fn from_request(content_type: Option<&str>, body: &[u8]) -> Self {
        match content_type {
            Some(ct) if is_json_content_type(ct) => Self::from_body(body),
            _ => Self::default(),
        }
    }
}

/// `application/json` or any `application/*+json`, parameters ignored.
pub fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// A form that passed validation. Fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// One entry in the contact log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub message: String,
    pub ip: String,
    /// ISO-8601 UTC, microsecond precision, `Z` suffix.
    pub time: String,
}

impl ContactRecord {
    pub fn new(submission: ContactSubmission, ip: String, received_at: DateTime<Utc>) -> Self {
        let ContactSubmission {
            name,
            email,
            message,
        } = submission;
        Self {
            name,
            email,
            message,
            ip,
            time: format_timestamp(received_at),
        }
    }
}

/// Microsecond precision; the fraction is left out when it is zero.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    let precision = if at.timestamp_subsec_micros() == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    at.to_rfc3339_opts(precision, true)
}
