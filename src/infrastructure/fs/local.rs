//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::FileSystem;
use crate::error::{HoligenError, HoligenResult};

/// Local file system implementation
///
/// Writes go to a temporary file in the destination directory which is then
/// renamed over the target, so readers see either the old or the new file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read_to_string(&self, path: &Path) -> HoligenResult<String> {
        std::fs::read_to_string(path).map_err(|source| HoligenError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    fn read_bytes(&self, path: &Path) -> HoligenResult<Vec<u8>> {
        std::fs::read(path).map_err(|source| HoligenError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> HoligenResult<()> {
        let tmp = stage(path, content)?;
        persist(tmp, path)
    }

    fn write_atomic_all(&self, files: &[(&Path, &[u8])]) -> HoligenResult<()> {
        let mut staged = Vec::with_capacity(files.len());
        for (path, content) in files {
            staged.push((stage(path, content)?, *path));
        }
        for (tmp, path) in staged {
            persist(tmp, path)?;
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn write_err(path: &Path) -> impl Fn(std::io::Error) -> HoligenError + '_ {
    move |source| HoligenError::Write {
        path: path.to_path_buf(),
        source,
    }
}

/// Write `content` to a synced temp file next to `path`
fn stage(path: &Path, content: &[u8]) -> HoligenResult<NamedTempFile> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(write_err(path))?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(write_err(path))?;
    tmp.write_all(content).map_err(write_err(path))?;
    tmp.as_file().sync_all().map_err(write_err(path))?;

    // Temp files are created owner-only; keep the target's mode.
    let permissions = match std::fs::metadata(path) {
        Ok(meta) => std::fs::set_permissions(tmp.path(), meta.permissions()),
        Err(_) => set_default_permissions(tmp.path()),
    };
    permissions.map_err(write_err(path))?;

    Ok(tmp)
}

fn persist(tmp: NamedTempFile, path: &Path) -> HoligenResult<()> {
    tmp.persist(path).map_err(|e| write_err(path)(e.error))?;
    Ok(())
}

#[cfg(unix)]
fn set_default_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
