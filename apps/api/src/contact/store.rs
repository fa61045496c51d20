use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::contact::models::ContactRecord;

pub const CONTACT_LOG_FILE: &str = "contacts.json";

/// Append-only JSON array of contact submissions on local disk.
///
/// Every append is a full read-modify-write of the file. The in-process lock
/// serializes appends so concurrent submissions cannot drop each other, and
/// the rewrite goes through a temp file + rename so a crash never leaves a
/// half-written log behind. The guard moves into the blocking job, so a
/// cancelled request still holds the lock until its write lands.
pub struct ContactLog {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl ContactLog {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Log file `contacts.json` inside `messages_dir`.
    pub fn in_dir(messages_dir: &Path) -> Self {
        Self::new(messages_dir.join(CONTACT_LOG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record and returns the number of records now in the log.
    pub async fn append(&self, record: ContactRecord) -> Result<usize> {
        let guard = Arc::clone(&self.lock).lock_owned().await;
        let path = self.path.clone();
        let count = tokio::task::spawn_blocking(move || {
            let _guard = guard;
            append_blocking(&path, record)
        })
        .await
        .context("Contact log writer task failed")??;

        info!(records = count, "Contact submission stored in {}", self.path.display());
        Ok(count)
    }

    /// Current log contents, with the same recovery policy as `append`.
    #[cfg(test)]
    pub async fn records(&self) -> Vec<ContactRecord> {
        let _guard = self.lock.lock().await;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || read_records(&path))
            .await
            .unwrap_or_default()
    }
}

fn append_blocking(path: &Path, record: ContactRecord) -> Result<usize> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create messages directory {}", dir.display()))?;

    let mut records = read_records(path);
    records.push(record);

    let json = serde_json::to_string_pretty(&records).context("Failed to serialize contact log")?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    tmp.write_all(json.as_bytes())
        .context("Failed to write contact log")?;
    tmp.persist(path)
        .with_context(|| format!("Failed to replace contact log {}", path.display()))?;

    Ok(records.len())
}

/// Missing file → empty. Unreadable or corrupt file → empty, with a warning;
/// the next append overwrites whatever was there.
fn read_records(path: &Path) -> Vec<ContactRecord> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!("Contact log {} unreadable, starting empty: {e}", path.display());
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(e) => {
            warn!("Contact log {} is corrupt, discarding: {e}", path.display());
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ContactRecord {
        ContactRecord {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            message: "Hello".to_string(),
            ip: "127.0.0.1".to_string(),
            time: "2025-01-01T00:00:00.000000Z".to_string(),
        }
    }

    #[tokio::test]
    async fn test_append_creates_dir_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let log = ContactLog::in_dir(&dir.path().join("messages"));

        assert_eq!(log.append(record("Jane")).await.unwrap(), 1);
        assert!(log.path().exists());
        assert_eq!(log.records().await, vec![record("Jane")]);
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let log = ContactLog::in_dir(dir.path());

        log.append(record("A")).await.unwrap();
        log.append(record("B")).await.unwrap();
        assert_eq!(log.append(record("C")).await.unwrap(), 3);

        let names: Vec<_> = log.records().await.into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_file_is_pretty_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let log = ContactLog::in_dir(dir.path());
        log.append(record("Jane")).await.unwrap();

        let raw = std::fs::read_to_string(log.path()).unwrap();
        assert!(raw.starts_with("[\n  {"));
        let parsed: Vec<ContactRecord> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_log_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let log = ContactLog::in_dir(dir.path());
        std::fs::write(log.path(), "{ this is not json").unwrap();

        assert!(log.records().await.is_empty());
        assert_eq!(log.append(record("Jane")).await.unwrap(), 1);
        assert_eq!(log.records().await, vec![record("Jane")]);
    }

    #[tokio::test]
    async fn test_wrong_shape_log_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let log = ContactLog::in_dir(dir.path());
        std::fs::write(log.path(), r#"{"name": "not an array"}"#).unwrap();

        assert_eq!(log.append(record("Jane")).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let log = Arc::new(ContactLog::in_dir(dir.path()));

        let mut tasks = Vec::new();
        for i in 0..16 {
            let log = Arc::clone(&log);
            tasks.push(tokio::spawn(async move {
                log.append(record(&format!("User{i}"))).await.unwrap();
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(log.records().await.len(), 16);
    }

    #[tokio::test]
    async fn test_cancelled_append_still_lands() {
        let dir = tempfile::tempdir().unwrap();
        let log = Arc::new(ContactLog::in_dir(dir.path()));

        // Large enough that the rewrite is still running when the caller goes away.
        let seed: Vec<ContactRecord> = (0..200_000).map(|i| record(&format!("Seed{i}"))).collect();
        std::fs::write(log.path(), serde_json::to_string(&seed).unwrap()).unwrap();

        let pending = {
            let log = Arc::clone(&log);
            tokio::spawn(async move { log.append(record("Dropped")).await })
        };
        tokio::time::sleep(std::time::Duration::from_millis(30)).await;
        pending.abort();

        assert_eq!(log.append(record("Second")).await.unwrap(), 200_002);

        let records = log.records().await;
        let tail: Vec<_> = records[200_000..].iter().map(|r| r.name.as_str()).collect();
        assert_eq!(tail, vec!["Dropped", "Second"]);
    }
}
