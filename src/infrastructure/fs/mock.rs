//! In-memory file system for tests
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::FileSystem;
use crate::error::{HoligenError, HoligenResult};

#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.into());
        self
    }

    pub fn get(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn get_string(&self, path: &Path) -> Option<String> {
        self.get(path).map(|b| String::from_utf8(b).unwrap())
    }

    fn not_found(path: &Path) -> HoligenError {
        HoligenError::Read {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "File not found"),
        }
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> HoligenResult<String> {
        let bytes = self.read_bytes(path)?;
        String::from_utf8(bytes).map_err(|e| HoligenError::Read {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })
    }

    fn read_bytes(&self, path: &Path) -> HoligenResult<Vec<u8>> {
        self.get(path).ok_or_else(|| Self::not_found(path))
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> HoligenResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}
