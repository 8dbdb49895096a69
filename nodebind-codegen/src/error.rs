use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use nodebind_ir::NodeId;
use thiserror::Error;

/// Result type for nodebind operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no '{entry_file}' files found under '{}'", .dir.display())]
    #[diagnostic(
        code(nodebind::no_handlers),
        help("add an '{entry_file}' file to the root node directory")
    )]
    Discovery { dir: PathBuf, entry_file: String },

    #[error("node '{node_id}' is defined more than once")]
    #[diagnostic(
        code(nodebind::naming_collision),
        help(
            "'{first}' and '{second}' map to the same node; rename one of the directories, or set `collisions = \"last-wins\"` in nodebind.toml"
        )
    )]
    NamingCollision {
        node_id: NodeId,
        first: String,
        second: String,
    },

    #[error("failed to read '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}'", .path.display())]
    #[diagnostic(code(nodebind::write_failed))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not inside '{}'", .path.display(), .root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("'{}' is not valid UTF-8", .path.display())]
    #[diagnostic(
        code(nodebind::non_utf8_path),
        help("node identifiers are built from directory names; rename the directory")
    )]
    NonUtf8Path { path: PathBuf },

    #[error("failed to parse nodebind.toml")]
    #[diagnostic(code(nodebind::config))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid configuration")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create an I/O error for a path that could not be read
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create an error for an output file that could not be written
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Write {
            path: path.into(),
            source,
        })
    }

    /// Create a config parse error from a toml error with source context
    pub fn config(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}
