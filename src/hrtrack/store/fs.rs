use super::{Collection, StateStore};
use crate::error::{HrError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store: one JSON file per collection under a data directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_path(&self, collection: Collection) -> PathBuf {
        self.root.join(format!("{}.json", collection.key()))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(HrError::Io)?;
        }
        Ok(())
    }
}

impl StateStore for FileStore {
    fn load(&self, collection: Collection) -> Result<Option<String>> {
        let path = self.collection_path(collection);
        if !path.exists() {
            return Ok(None);
        }
        let payload = fs::read_to_string(path).map_err(HrError::Io)?;
        Ok(Some(payload))
    }

    fn save(&mut self, collection: Collection, payload: &str) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.collection_path(collection), payload).map_err(HrError::Io)?;
        Ok(())
    }
}
