//! Named user-editable text assets with autosave-on-idle and a size-capped
//! export payload.
//!
//! Registry metadata (id, name, path) lives in one small JSON document;
//! contents live as flat files in their own subdirectory. Like the history
//! store, persistence is best-effort: failures are logged, never surfaced.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use sha1::{Digest, Sha1};
use tokio::time::Instant;
use uuid::Uuid;

use crate::config::constants::drafts::{AUTOSAVE_IDLE, PAYLOAD_MAX_BYTES};
use crate::config::{DEFAULT_DRAFT_CONTENT, DEFAULT_DRAFT_NAME, PERSISTENCE};
use crate::models::DraftFile;

pub struct DraftStore {
    drafts_dir: PathBuf,
    registry_path: PathBuf,

    files: Vec<DraftFile>,
    current: Option<Uuid>,

    /// In-memory edit buffer for the current file.
    buffer: String,
    /// Content as last persisted; the dirty flag is derived from it.
    snapshot: String,
    dirty: bool,
    /// Armed by every edit; autosave fires once the idle period passes.
    pending_since: Option<Instant>,
}

impl DraftStore {
    /// Open the registry under `base_dir`, dropping rows whose backing file
    /// has vanished, and seed the bundled default draft on first run.
    pub fn open(base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref();
        let drafts_dir = base_dir.join(PERSISTENCE.drafts.directory);
        let registry_path = base_dir.join(PERSISTENCE.drafts.registry_filename);

        let mut files = match Self::read_registry(&registry_path) {
            Ok(files) => files,
            Err(e) => {
                log::warn!(
                    "Draft registry load failed for {}, starting empty: {}",
                    registry_path.display(),
                    e
                );
                Vec::new()
            }
        };
        // Re-validate: create() is allowed to leave a registry row behind an
        // unwritten file, so existence is only checked here.
        files.retain(|f| {
            let ok = f.path.exists();
            if !ok {
                log::warn!("Dropping draft '{}': file missing at {}", f.name, f.path.display());
            }
            ok
        });

        let mut store = Self {
            drafts_dir,
            registry_path,
            files,
            current: None,
            buffer: String::new(),
            snapshot: String::new(),
            dirty: false,
            pending_since: None,
        };

        if store.files.is_empty() {
            store.create(DEFAULT_DRAFT_NAME, DEFAULT_DRAFT_CONTENT);
        } else {
            let first = store.files[0].id;
            store.select(first);
        }
        store
    }

    // --- Accessors ---

    pub fn files(&self) -> &[DraftFile] {
        &self.files
    }

    pub fn current_id(&self) -> Option<Uuid> {
        self.current
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // --- Registry operations ---

    /// Create a new named draft, write its file, and make it current.
    /// Returns false (and does nothing) if the name is already taken.
    /// A failed file write is swallowed: the registry row still lands and
    /// the next open() drops it if the file never materializes.
    pub fn create(&mut self, name: &str, content: &str) -> bool {
        if self.name_taken(name, None) {
            log::warn!("Draft name '{}' already in use", name);
            return false;
        }
        let path = self.path_for(name);
        if let Err(e) = write_text(&path, content) {
            log::warn!("Draft create failed to write {}: {}", path.display(), e);
        }

        let file = DraftFile {
            id: Uuid::new_v4(),
            name: name.to_string(),
            path,
        };
        let id = file.id;
        self.files.push(file);

        self.current = Some(id);
        self.buffer = content.to_string();
        self.snapshot = content.to_string();
        self.dirty = false;
        self.pending_since = None;

        self.persist_registry();
        true
    }

    /// Move the draft's storage to the location derived from `new_name`.
    /// If the move itself fails the rename is abandoned and the old state
    /// is kept. Returns whether the rename took effect.
    pub fn rename(&mut self, id: Uuid, new_name: &str) -> bool {
        if self.name_taken(new_name, Some(id)) {
            log::warn!("Draft rename rejected: '{}' already in use", new_name);
            return false;
        }
        let new_path = self.path_for(new_name);
        let Some(pos) = self.files.iter().position(|f| f.id == id) else {
            return false;
        };

        match fs::rename(&self.files[pos].path, &new_path) {
            Ok(()) => {
                self.files[pos].name = new_name.to_string();
                self.files[pos].path = new_path;
                self.persist_registry();
                true
            }
            Err(e) => {
                log::warn!(
                    "Draft rename abandoned, keeping '{}': {}",
                    self.files[pos].name,
                    e
                );
                false
            }
        }
    }

    /// Delete drafts by id, removing both storage and registry rows. If the
    /// current selection was among them, fall back to the first remaining
    /// draft, or to no selection at all.
    pub fn delete(&mut self, ids: &[Uuid]) {
        for id in ids {
            let Some(pos) = self.files.iter().position(|f| f.id == *id) else {
                continue;
            };
            let removed = self.files.remove(pos);
            if let Err(e) = fs::remove_file(&removed.path) {
                log::warn!("Draft file removal failed for {}: {}", removed.path.display(), e);
            }
        }

        if let Some(current) = self.current {
            if !self.files.iter().any(|f| f.id == current) {
                match self.files.first().map(|f| f.id) {
                    Some(next) => {
                        self.select(next);
                    }
                    None => {
                        self.current = None;
                        self.buffer.clear();
                        self.snapshot.clear();
                        self.dirty = false;
                        self.pending_since = None;
                    }
                }
            }
        }
        self.persist_registry();
    }

    /// Make a draft current, loading its content from disk and resetting
    /// the dirty state. Unknown ids are ignored.
    pub fn select(&mut self, id: Uuid) -> bool {
        let Some(entry) = self.files.iter().find(|f| f.id == id) else {
            return false;
        };
        let content = match fs::read_to_string(&entry.path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Draft read failed for {}: {}", entry.path.display(), e);
                String::new()
            }
        };
        self.current = Some(id);
        self.buffer = content.clone();
        self.snapshot = content;
        self.dirty = false;
        self.pending_since = None;
        true
    }

    // --- Editing and saving ---

    /// Replace the edit buffer, recompute the dirty flag, and re-arm the
    /// autosave timer (a new edit always replaces the pending one).
    pub fn edit(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.dirty = self.buffer != self.snapshot;
        self.pending_since = if self.dirty { Some(Instant::now()) } else { None };
    }

    /// Immediate save of the edit buffer. Clears the dirty flag on success;
    /// on failure the flag stays set and the error is only logged.
    pub fn save(&mut self) {
        self.pending_since = None;
        let Some(current) = self.current else {
            return;
        };
        let Some(entry) = self.files.iter().find(|f| f.id == current) else {
            return;
        };
        match write_text(&entry.path, &self.buffer) {
            Ok(()) => {
                self.snapshot = self.buffer.clone();
                self.dirty = false;
            }
            Err(e) => {
                log::error!("Draft save error for {}: {}", entry.path.display(), e);
            }
        }
        // Registry metadata is persisted after every content save.
        self.persist_registry();
    }

    /// Drive autosave from the app's per-frame update loop: saves once the
    /// buffer has been dirty and untouched for the full idle period.
    pub fn autosave_tick(&mut self) {
        let Some(armed_at) = self.pending_since else {
            return;
        };
        if !self.dirty {
            self.pending_since = None;
            return;
        }
        if armed_at.elapsed() >= AUTOSAVE_IDLE {
            log::info!("Autosave firing after idle period");
            self.save();
        }
    }

    // --- Export payload ---

    /// `(fingerprint, base64)` of the current buffer, or None when no draft
    /// is selected or the content exceeds the attachment size cap. The
    /// fingerprint is for de-duplication only, not integrity.
    pub fn payload(&self) -> Option<(String, String)> {
        self.current?;
        let bytes = self.buffer.as_bytes();
        if bytes.len() > PAYLOAD_MAX_BYTES {
            log::debug!(
                "Draft payload skipped: {} bytes exceeds the {} cap",
                bytes.len(),
                PAYLOAD_MAX_BYTES
            );
            return None;
        }
        let mut hasher = Sha1::new();
        hasher.update(bytes);
        let fingerprint = hex::encode(hasher.finalize());
        Some((fingerprint, BASE64.encode(bytes)))
    }

    // --- Internal ---

    fn name_taken(&self, name: &str, exclude: Option<Uuid>) -> bool {
        let slugged = slug(name);
        self.files
            .iter()
            .filter(|f| Some(f.id) != exclude)
            .any(|f| f.name == name || slug(&f.name) == slugged)
    }

    /// Names map 1:1 to stable on-disk locations inside the drafts dir.
    fn path_for(&self, name: &str) -> PathBuf {
        self.drafts_dir
            .join(format!("{}.{}", slug(name), PERSISTENCE.drafts.extension))
    }

    fn read_registry(path: &Path) -> Result<Vec<DraftFile>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let bytes = fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn persist_registry(&self) {
        if let Err(e) = self.write_registry() {
            log::error!(
                "Draft registry save error for {}: {}",
                self.registry_path.display(),
                e
            );
        }
    }

    fn write_registry(&self) -> Result<()> {
        if let Some(dir) = self.registry_path.parent() {
            fs::create_dir_all(dir)?;
        }
        let tmp = self.registry_path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec(&self.files)?)?;
        fs::rename(&tmp, &self.registry_path)?;
        Ok(())
    }
}

fn write_text(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Lowercased filename stem derived from a user-chosen name: alphanumerics
/// kept, everything else collapsed into single dashes.
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_dash = true; // suppress leading dashes
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() {
        out.push_str("draft");
    }
    out
}
