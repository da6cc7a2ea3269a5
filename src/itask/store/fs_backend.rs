use super::backend::SlotBackend;
use crate::error::{ItaskError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const SLOT_EXT: &str = ".json";

/// Filesystem slots: one `<key>.json` file per key under a root directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ItaskError::Io)?;
        }
        Ok(())
    }
}

impl SlotBackend for FsBackend {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(ItaskError::Io)?;
        Ok(Some(content))
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir(&self.root)?;

        let tmp_file = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_file, value).map_err(ItaskError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, self.slot_path(key)) {
            let _ = fs::remove_file(&tmp_file);
            return Err(ItaskError::Io(e));
        }

        Ok(())
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}{}", key, SLOT_EXT))
    }
}
