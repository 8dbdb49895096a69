use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::{Builder, NamedTempFile};

/// Replace `path` with `content` in a single step.
///
/// The content goes to a temporary file next to the target first and is then
/// renamed over it, so readers see either the old file or the new one. The
/// result keeps the permissions of the file it replaces; a new file gets the
/// same mode a plain `fs::write` would give it.
fn write_file(path: &Path, content: &str) -> io::Result<WriteResult> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let previous = std::fs::metadata(path).ok();
    let mut tmp = temp_file_in(parent)?;
    if let Some(meta) = &previous {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    let existed = previous.is_some();
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(if existed {
        WriteResult::Overwritten
    } else {
        WriteResult::Created
    })
}

/// Temporary file created with the default mode for new files (0o666 less
/// the umask) instead of tempfile's owner-only 0o600.
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// The file did not exist before
    Created,
    /// A previous version of the file was replaced
    Overwritten,
}

/// A file to be generated
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, replacing any previous content
    pub fn write(&self) -> io::Result<WriteResult> {
        write_file(&self.path, &self.content)
    }
}
