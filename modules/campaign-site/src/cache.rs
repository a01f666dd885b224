use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use campaign_common::{CachedContact, CampaignError};
use chrono::Utc;
use serde_json::Value;
use tracing::debug;

/// Key of the persisted newsletter contact list.
pub const NEWSLETTER_CACHE_KEY: &str = "sc_updates_list";

/// String key-value persistence in the manner of browser local storage.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, CampaignError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), CampaignError>;
}

// --- Memory Store ---

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes whose value is longer than `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            quota: Some(bytes),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CampaignError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CampaignError> {
        if let Some(quota) = self.quota {
            if value.len() > quota {
                return Err(CampaignError::Storage(format!(
                    "quota exceeded writing {key} ({} > {quota} bytes)",
                    value.len()
                )));
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- File Store ---

/// One `<key>.json` file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, CampaignError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(CampaignError::Storage(format!("invalid cache key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CampaignError> {
        match std::fs::read_to_string(self.path_for(key)?) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CampaignError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(path, value)?;
        Ok(())
    }
}

// --- Newsletter Contacts ---

/// Parse a stored list. Missing, corrupt or non-array data reads as empty.
/// Existing elements are kept as-is, whatever their shape.
fn parse_entries(raw: Option<&str>) -> Vec<Value> {
    raw.and_then(|raw| serde_json::from_str::<Value>(raw).ok())
        .and_then(|value| match value {
            Value::Array(items) => Some(items),
            _ => None,
        })
        .unwrap_or_default()
}

/// Append `{contact, ts}` to the newsletter list. Returns the new list length.
pub fn append_contact(
    store: &mut dyn KeyValueStore,
    contact: &str,
    ts: i64,
) -> Result<usize, CampaignError> {
    let raw = store.get(NEWSLETTER_CACHE_KEY)?;
    let mut entries = parse_entries(raw.as_deref());
    entries.push(serde_json::to_value(CachedContact {
        contact: contact.to_string(),
        ts,
    })?);
    store.set(NEWSLETTER_CACHE_KEY, &serde_json::to_string(&entries)?)?;
    Ok(entries.len())
}

/// Best-effort append stamped with the current time. A storage failure is a
/// deliberate no-op: the cache is never authoritative, so the error is only logged.
pub fn remember_contact(store: &mut dyn KeyValueStore, contact: &str) -> Option<usize> {
    match append_contact(store, contact, Utc::now().timestamp_millis()) {
        Ok(len) => {
            debug!(entries = len, "Cached newsletter contact");
            Some(len)
        }
        Err(e) => {
            debug!(error = %e, "Newsletter cache unavailable, ignoring");
            None
        }
    }
}
