//! FileSystem port - abstraction over artifact I/O
//!
//! Use cases read inputs and replace artifacts through this trait so they
//! can be exercised against an in-memory implementation.

use std::path::Path;

use crate::error::HoligenResult;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic replace
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Read file content as string
    fn read_to_string(&self, path: &Path) -> HoligenResult<String>;

    /// Read raw file bytes
    fn read_bytes(&self, path: &Path) -> HoligenResult<Vec<u8>>;

    /// Replace the whole file with `content`, never leaving a partial write
    fn write_atomic(&self, path: &Path, content: &[u8]) -> HoligenResult<()>;

    /// Replace several files, staging every one before any is replaced
    ///
    /// The default replaces them one after another.
    fn write_atomic_all(&self, files: &[(&Path, &[u8])]) -> HoligenResult<()> {
        for (path, content) in files {
            self.write_atomic(path, content)?;
        }
        Ok(())
    }

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;
}
