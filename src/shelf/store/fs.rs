use super::{LoadOutcome, RecordStore};
use crate::error::{Result, ShelfError};
use crate::model::Record;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed store: the full collection as one pretty-printed JSON array.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ShelfError::Io)?;
            }
        }
        Ok(())
    }
}

impl RecordStore for FileStore {
    fn load(&self) -> Result<LoadOutcome> {
        let meta = match fs::metadata(&self.path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(LoadOutcome::Empty),
            Err(e) => return Err(ShelfError::Io(e)),
        };
        if meta.len() == 0 {
            return Ok(LoadOutcome::Empty);
        }

        let content = fs::read_to_string(&self.path).map_err(ShelfError::Io)?;
        match serde_json::from_str::<Vec<Record>>(&content) {
            Ok(records) => Ok(LoadOutcome::Records(records)),
            Err(_) => Ok(LoadOutcome::Corrupt),
        }
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(records).map_err(ShelfError::Serialization)?;

        // Write to a sibling temp file, then rename over the target, so a
        // reader never observes a half-written file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(ShelfError::Io)?;
        fs::rename(&tmp, &self.path).map_err(ShelfError::Io)?;
        Ok(())
    }
}
