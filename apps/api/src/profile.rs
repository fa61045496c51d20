use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

/// The portfolio content served by the read-only API.
///
/// Entries are kept as raw JSON so the endpoints return exactly what the file
/// holds. A section missing from the file is an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    #[serde(default)]
    pub skills: Vec<Value>,
    #[serde(default)]
    pub experience: Vec<Value>,
    #[serde(default)]
    pub projects: Vec<Value>,
    #[serde(default)]
    pub certifications: Vec<Value>,
}

impl Profile {
    /// Reads and parses the profile document. Any failure here is fatal at startup.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile document {}", path.display()))?;
        let profile: Profile = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed profile document {}", path.display()))?;

        info!(
            skills = profile.skills.len(),
            experience = profile.experience.len(),
            projects = profile.projects.len(),
            certifications = profile.certifications.len(),
            "Profile loaded from {}",
            path.display()
        );
        Ok(profile)
    }
}
