//! Node identifiers and import specifiers derived from entry-file paths.
//!
//! Everything here works on forward-slash relative paths so the generated
//! module is identical on every platform.

use std::{
    path::{Component, Path},
    sync::LazyLock,
};

use nodebind_core::{path_segments, to_forward_slashes};
use nodebind_ir::{HandlerDescriptor, NodeId};
use url::Url;

use crate::{Error, Result};

/// Derive the node identifier for an entry file.
///
/// `relative_entry` is the entry file's path relative to the source
/// directory. The file name is dropped and the remaining directories are
/// joined with `:`.
///
/// ```
/// use nodebind_codegen::naming::node_id;
///
/// assert_eq!(node_id("main/index.js").as_str(), "main");
/// assert_eq!(node_id("main/B/A/index.js").as_str(), "main:B:A");
/// assert_eq!(node_id("main\\B\\A\\index.js").as_str(), "main:B:A");
/// ```
pub fn node_id(relative_entry: &str) -> NodeId {
    let segments = path_segments(relative_entry);
    let dirs = match segments.split_last() {
        Some((_file, dirs)) => dirs,
        None => &[],
    };
    NodeId::from_segments(dirs.iter().copied())
}

static SPECIFIER_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("file:///").expect("base URL literal is valid"));

/// Module specifier for importing an entry file from the generated module,
/// which sits in the source directory (e.g. `./main/B/index.js`).
///
/// Specifiers are relative URLs, so each segment is percent-encoded: a
/// directory named `C#1` is imported as `./C%231/...`.
///
/// ```
/// use nodebind_codegen::naming::import_path;
///
/// assert_eq!(import_path("main/B/index.js"), "./main/B/index.js");
/// assert_eq!(import_path("main/C#1/index.js"), "./main/C%231/index.js");
/// ```
pub fn import_path(relative_entry: &str) -> String {
    let mut url = SPECIFIER_BASE.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().extend(path_segments(relative_entry));
    }
    format!(".{}", url.path())
}

/// Path of `file` relative to `root`, with forward slashes.
pub fn relative_entry(root: &Path, file: &Path) -> Result<String> {
    let relative = file.strip_prefix(root).map_err(|_| {
        Box::new(Error::OutsideRoot {
            path: file.to_path_buf(),
            root: root.to_path_buf(),
        })
    })?;

    let parts = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .map(|part| {
            part.to_str().map(to_forward_slashes).ok_or_else(|| {
                Box::new(Error::NonUtf8Path {
                    path: file.to_path_buf(),
                })
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(parts.join("/"))
}

/// Build one descriptor per entry file, preserving the given order.
///
/// Binding names come from the position in `files`, never from the path.
pub fn describe<P: AsRef<Path>>(root: &Path, files: &[P]) -> Result<Vec<HandlerDescriptor>> {
    files
        .iter()
        .enumerate()
        .map(|(position, file)| {
            let relative = relative_entry(root, file.as_ref())?;
            Ok(HandlerDescriptor::new(
                node_id(&relative),
                import_path(&relative),
                position,
            ))
        })
        .collect()
}
