use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

/// Completion flags keyed by lab id. Serialized as a single JSON object;
/// marking only ever sets `true`, so absent and `false` read the same.
pub type ProgressRecord = BTreeMap<String, bool>;

pub type ProgressResult<T> = std::result::Result<T, ProgressError>;

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Storage seam for the progress blob. Swapping the backend changes where
/// the blob lives without touching load/save semantics.
pub trait ProgressBackend: Send + Sync {
    /// Raw stored blob, or `None` when nothing is stored or it cannot be read.
    fn read(&self) -> Option<String>;
    fn write(&self, blob: &str) -> ProgressResult<()>;
}

/// Blob in a file on disk. Reads that fail for any reason count as absent;
/// writes create missing parent directories.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ProgressBackend for FileBackend {
    fn read(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }

    fn write(&self, blob: &str) -> ProgressResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, blob)?;
        Ok(())
    }
}

/// In-memory blob for tests and benches.
#[derive(Default)]
pub struct MemoryBackend {
    cell: Mutex<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the stored blob, e.g. with garbage to exercise recovery.
    pub fn seed(self, blob: impl Into<String>) -> Self {
        *self.cell.lock().expect("progress cell poisoned") = Some(blob.into());
        self
    }
}

impl ProgressBackend for MemoryBackend {
    fn read(&self) -> Option<String> {
        self.cell.lock().ok().and_then(|guard| guard.clone())
    }

    fn write(&self, blob: &str) -> ProgressResult<()> {
        if let Ok(mut guard) = self.cell.lock() {
            *guard = Some(blob.to_string());
        }
        Ok(())
    }
}

pub struct ProgressStore {
    backend: Box<dyn ProgressBackend>,
}

impl ProgressStore {
    pub fn new<B>(backend: B) -> Self
    where
        B: ProgressBackend + 'static,
    {
        Self {
            backend: Box::new(backend),
        }
    }

    pub fn with_file(path: impl AsRef<Path>) -> Self {
        Self::new(FileBackend::new(path))
    }

    /// Read the record. Missing or malformed blobs yield an empty record.
    pub fn load(&self) -> ProgressRecord {
        self.backend
            .read()
            .and_then(|blob| serde_json::from_str(&blob).ok())
            .unwrap_or_default()
    }

    /// Replace the stored blob with `record`. Whole-blob overwrite: keys
    /// absent from `record` are gone afterwards.
    pub fn save(&self, record: &ProgressRecord) -> ProgressResult<()> {
        let blob = serde_json::to_string(record)?;
        self.backend.write(&blob)
    }

    /// Set the completion flag for `lab_id` and persist.
    pub fn mark_complete(&self, lab_id: &str) -> ProgressResult<ProgressRecord> {
        let mut record = self.load();
        record.insert(lab_id.to_string(), true);
        self.save(&record)?;
        Ok(record)
    }

    pub fn is_complete(&self, lab_id: &str) -> bool {
        self.load().get(lab_id).copied().unwrap_or(false)
    }
}

/// Leading checkbox for a rail entry.
pub const COMPLETE_GLYPH: char = '☑';
pub const INCOMPLETE_GLYPH: char = '☐';

pub fn glyph_for(done: bool) -> char {
    if done { COMPLETE_GLYPH } else { INCOMPLETE_GLYPH }
}

/// Strip a leading checkbox glyph and its following whitespace, so a rail
/// label can be re-prefixed without stacking glyphs.
pub fn strip_glyph(label: &str) -> &str {
    let rest = label
        .strip_prefix(COMPLETE_GLYPH)
        .or_else(|| label.strip_prefix(INCOMPLETE_GLYPH));
    match rest {
        Some(rest) => rest.trim_start(),
        None => label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_round_trip_marks_storage_complete() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labdeck-progress.json");
        let store = ProgressStore::with_file(&path);

        assert!(store.load().is_empty());
        store.mark_complete("storage").unwrap();

        let reopened = ProgressStore::with_file(&path);
        assert!(reopened.is_complete("storage"));
        assert!(!reopened.is_complete("compute"));

        let blob = std::fs::read_to_string(&path).unwrap();
        assert_eq!(blob, r#"{"storage":true}"#);
    }

    #[test]
    fn file_backend_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("labdeck-progress.json");
        let store = ProgressStore::with_file(&path);

        store.mark_complete("compute").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn malformed_blob_reads_as_empty_and_recovers() {
        let store = ProgressStore::new(MemoryBackend::new().seed("{not json!"));
        assert!(store.load().is_empty());

        store.mark_complete("iam").unwrap();
        let record = store.load();
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("iam"), Some(&true));
    }

    #[test]
    fn unexpected_json_shape_reads_as_empty() {
        let store = ProgressStore::new(MemoryBackend::new().seed(r#"[1, 2, 3]"#));
        assert!(store.load().is_empty());
    }

    #[test]
    fn marking_twice_is_idempotent() {
        let store = ProgressStore::new(MemoryBackend::new());
        store.mark_complete("oke").unwrap();
        let record = store.mark_complete("oke").unwrap();
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn marking_a_second_lab_keeps_the_first() {
        let store = ProgressStore::new(MemoryBackend::new());
        store.mark_complete("storage").unwrap();
        let record = store.mark_complete("networking").unwrap();
        assert_eq!(record.get("storage"), Some(&true));
        assert_eq!(record.get("networking"), Some(&true));
    }

    #[test]
    fn save_replaces_the_whole_blob() {
        let store = ProgressStore::new(MemoryBackend::new());
        let mut first = ProgressRecord::new();
        first.insert("compute".to_string(), true);
        store.save(&first).unwrap();

        let mut second = ProgressRecord::new();
        second.insert("db".to_string(), true);
        store.save(&second).unwrap();

        let record = store.load();
        assert_eq!(record.len(), 1);
        assert!(record.contains_key("db"));
    }

    #[test]
    fn glyph_stripping_matches_prefixes() {
        assert_eq!(strip_glyph("☑ Compute"), "Compute");
        assert_eq!(strip_glyph("☐  Networking"), "Networking");
        assert_eq!(strip_glyph("Storage"), "Storage");
        assert_eq!(glyph_for(true), '☑');
        assert_eq!(glyph_for(false), '☐');
    }
}
