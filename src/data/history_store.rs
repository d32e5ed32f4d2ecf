//! File-backed log of past bracelet sessions, most-recent-first.
//!
//! This is a local cache, not a ledger: every load failure degrades to an
//! empty list and every save failure is logged and swallowed. Nothing here
//! is allowed to take the app down.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::models::HistoryEntry;

pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Load the history document, or start empty if it is absent or
    /// unreadable. Parse failures are deliberate non-errors.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!(
                    "History load failed for {}, starting empty: {}",
                    path.display(),
                    e
                );
                Vec::new()
            }
        };
        Self { path, entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert at the head (most recent first) and persist.
    pub fn add(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.persist();
    }

    /// Replace the entry with the same id in place (recency position
    /// unchanged), or insert at the head if the id is new. Then persist.
    pub fn upsert(&mut self, entry: HistoryEntry) {
        match self.entries.iter().position(|e| e.id == entry.id) {
            Some(pos) => self.entries[pos] = entry,
            None => self.entries.insert(0, entry),
        }
        self.persist();
    }

    /// Remove the entries at the given positions (duplicates and
    /// out-of-range positions are ignored) and persist.
    pub fn delete(&mut self, positions: &[usize]) {
        let mut positions: Vec<usize> = positions
            .iter()
            .copied()
            .filter(|&p| p < self.entries.len())
            .collect();
        positions.sort_unstable();
        positions.dedup();
        for pos in positions.into_iter().rev() {
            self.entries.remove(pos);
        }
        self.persist();
    }

    // --- Persistence ---

    fn read_entries(path: &Path) -> Result<Vec<HistoryEntry>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let bytes = fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn persist(&self) {
        if let Err(e) = self.write_entries() {
            log::error!("History save error for {}: {}", self.path.display(), e);
        }
    }

    fn write_entries(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        // Write-to-temp-then-rename: a crash mid-write never clobbers the
        // previous document.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec(&self.entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ElementColorMap, ElementRatio, RatioContainer};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn sample_entry(analysis: &str) -> HistoryEntry {
        HistoryEntry::new(
            NaiveDate::from_ymd_opt(1988, 11, 2).unwrap(),
            "23:15",
            "male",
            12,
            analysis,
            RatioContainer {
                current: ElementRatio::new(30.0, 10.0, 20.0, 25.0, 15.0),
                goal: ElementRatio::new(20.0, 20.0, 20.0, 20.0, 20.0),
                colors: ElementColorMap {
                    metal: "#FFFFFF".into(),
                    wood: "#00A550".into(),
                    water: "#0000FF".into(),
                    fire: "#FF0000".into(),
                    earth: "#8B4513".into(),
                },
            },
        )
    }

    #[test]
    fn add_inserts_at_head_and_survives_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bracelet_history.json");

        let mut store = HistoryStore::load(&path);
        assert!(store.is_empty());
        store.add(sample_entry("first"));
        store.add(sample_entry("second"));
        assert_eq!(store.entries()[0].analysis, "second");

        let reloaded = HistoryStore::load(&path);
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.entries()[0].analysis, "second");
        assert_eq!(reloaded.entries()[1].analysis, "first");
    }

    #[test]
    fn upsert_replaces_in_place_without_moving() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bracelet_history.json");
        let mut store = HistoryStore::load(&path);

        let original = sample_entry("session");
        let id = original.id;
        store.add(sample_entry("older"));
        store.add(original);
        store.add(sample_entry("newer"));
        assert_eq!(store.len(), 3);

        // Re-save the middle session: same id, new content.
        let mut resaved = sample_entry("session revised");
        resaved.id = id;
        store.upsert(resaved);

        assert_eq!(store.len(), 3);
        assert_eq!(store.entries()[1].id, id);
        assert_eq!(store.entries()[1].analysis, "session revised");

        // A fresh id inserts at position 0.
        store.upsert(sample_entry("brand new"));
        assert_eq!(store.len(), 4);
        assert_eq!(store.entries()[0].analysis, "brand new");
    }

    #[test]
    fn delete_handles_position_sets() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bracelet_history.json");
        let mut store = HistoryStore::load(&path);
        for label in ["a", "b", "c", "d"] {
            store.add(sample_entry(label));
        }
        // Head-first order is d, c, b, a. Remove d and b; duplicates and
        // out-of-range positions must be harmless.
        store.delete(&[0, 2, 2, 99]);
        let labels: Vec<&str> = store.entries().iter().map(|e| e.analysis.as_str()).collect();
        assert_eq!(labels, vec!["c", "a"]);
    }

    #[test]
    fn corrupt_document_degrades_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bracelet_history.json");
        fs::write(&path, b"{ this is not json").unwrap();

        let store = HistoryStore::load(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn persist_replaces_atomically() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bracelet_history.json");
        let mut store = HistoryStore::load(&path);
        store.add(sample_entry("only"));

        // The temp file must not linger after a successful rename.
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }
}
