//! Entry-point file discovery.

use std::path::{Path, PathBuf};

use nodebind_core::path_segments;

use crate::{Config, Error, Result, naming::relative_entry};

/// Finds the entry files of every node below a source directory.
///
/// Scans `<src_dir>/<root>/**/<entry_file>`. Results are sorted by the
/// directory segments of their path relative to `src_dir`, so a parent node
/// precedes its children and the order is the same on every platform and
/// every run.
#[derive(Debug, Clone)]
pub struct Discoverer {
    /// Directory the generated module lives in.
    src_dir: PathBuf,
    /// Root node directory name (e.g., "main").
    root: String,
    /// Entry file name (e.g., "index.js").
    entry_file: String,
}

impl Discoverer {
    pub fn new(
        src_dir: impl Into<PathBuf>,
        root: impl Into<String>,
        entry_file: impl Into<String>,
    ) -> Self {
        Self {
            src_dir: src_dir.into(),
            root: root.into(),
            entry_file: entry_file.into(),
        }
    }

    pub fn from_config(src_dir: impl Into<PathBuf>, config: &Config) -> Self {
        Self::new(src_dir, &config.root, &config.entry_file)
    }

    /// The directory holding the root node.
    pub fn root_dir(&self) -> PathBuf {
        self.src_dir.join(&self.root)
    }

    /// Find all entry files, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Discovery`] when no entry file exists (including when
    /// the root directory itself is missing) and [`Error::Io`] when a
    /// directory cannot be read.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let root_dir = self.root_dir();
        let mut files = Vec::new();
        self.scan(&root_dir, &mut files)?;

        if files.is_empty() {
            return Err(Box::new(Error::Discovery {
                dir: root_dir,
                entry_file: self.entry_file.clone(),
            }));
        }

        let mut keyed = files
            .into_iter()
            .map(|file| Ok((sort_key(&relative_entry(&self.src_dir, &file)?), file)))
            .collect::<Result<Vec<_>>>()?;
        keyed.sort_by(|a, b| a.0.cmp(&b.0));

        tracing::debug!(count = keyed.len(), dir = %root_dir.display(), "discovered entry files");
        Ok(keyed.into_iter().map(|(_, file)| file).collect())
    }

    fn scan(&self, dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
        if !dir.is_dir() {
            return Ok(());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(dir, e))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;

            if file_type.is_dir() {
                self.scan(&path, found)?;
            } else if entry.file_name() == self.entry_file.as_str() {
                found.push(path);
            }
        }

        Ok(())
    }
}

/// Directory segments first, then the full path as a tie-break.
fn sort_key(relative: &str) -> (Vec<String>, String) {
    let mut segments: Vec<String> = path_segments(relative)
        .into_iter()
        .map(str::to_string)
        .collect();
    segments.pop();
    (segments, relative.to_string())
}
