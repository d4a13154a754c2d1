//! Atomic filesystem operations for webbuild.
//!
//! All atomic writes follow this pattern:
//! 1. Stream content to a temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename it over the target
//!
//! `std::fs::rename` replaces an existing target on every supported platform
//! as long as source and destination share a filesystem, which holds because
//! the temporary file lives next to the target. On failure a `.{name}.tmp`
//! file may remain; it is overwritten by the next attempt.

use crate::error::{BuildError, Result};
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Atomically write everything read from `reader` to `path`.
///
/// Parent directories are created as needed. Returns the number of bytes
/// written.
pub fn atomic_write_from<P: AsRef<Path>, R: Read>(path: P, reader: &mut R) -> Result<u64> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            BuildError::UserError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = generate_temp_path(path)?;
    let written = copy_and_sync(&temp_path, reader)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BuildError::UserError(format!(
            "failed to atomically replace '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(written)
}

/// Set mode `0o755` on a file. No-op on non-Unix platforms.
#[cfg(unix)]
pub fn make_executable<P: AsRef<Path>>(path: P) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let path = path.as_ref();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(|e| {
        BuildError::UserError(format!(
            "failed to mark '{}' as executable: {}",
            path.display(),
            e
        ))
    })
}

#[cfg(not(unix))]
pub fn make_executable<P: AsRef<Path>>(_path: P) -> Result<()> {
    Ok(())
}

/// Generate a temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| BuildError::UserError("invalid file path".to_string()))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

/// Stream content into a file and sync it to disk.
fn copy_and_sync<R: Read>(path: &Path, reader: &mut R) -> Result<u64> {
    let mut file = File::create(path).map_err(|e| {
        BuildError::UserError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let written = io::copy(reader, &mut file).map_err(|e| {
        let _ = fs::remove_file(path);
        BuildError::UserError(format!("failed to write to temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        BuildError::UserError(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(written)
}
