//! Snapshot persistence between runs.
//!
//! The file is the host's copy of the relationship snapshot plus a save
//! timestamp. Anything unreadable is treated as "no prior state".

use anyhow::{Context, Result};
use atlas_core::Snapshot;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Serialize, Deserialize)]
struct StateFile {
    #[serde(flatten)]
    snapshot: Snapshot,
    #[serde(default)]
    saved_at: i64,
}

pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved snapshot. Missing or malformed files yield `None`.
    pub async fn load(&self) -> Option<Snapshot> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No saved state at {}", self.path.display());
                return None;
            }
            Err(e) => {
                tracing::warn!("Failed to read {} ({}), starting fresh", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<StateFile>(&raw) {
            Ok(file) => Some(file.snapshot),
            Err(e) => {
                tracing::warn!("Malformed state file {} ({}), starting fresh", self.path.display(), e);
                None
            }
        }
    }

    /// Write the snapshot, replacing any previous file.
    pub async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let file = StateFile {
            snapshot: snapshot.clone(),
            saved_at: chrono::Utc::now().timestamp(),
        };
        let json = serde_json::to_string_pretty(&file)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .await
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }

    /// Delete the saved snapshot, if any.
    pub async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", self.path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(affection: i64) -> Snapshot {
        Snapshot {
            affection,
            sentiment: "Neutral".to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));
        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("nested/state.json"));
        store.save(&snapshot(52)).await.unwrap();
        assert_eq!(store.load().await, Some(snapshot(52)));

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["affection"], 52);
        assert!(value["saved_at"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_malformed_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, r#"{"affection": "lots"}"#).unwrap();
        assert!(StateStore::new(path).load().await.is_none());
    }

    #[tokio::test]
    async fn test_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));
        store.clear().await.unwrap();
        store.save(&snapshot(10)).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.load().await.is_none());
    }
}
