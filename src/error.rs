//! Error types for `NameSync`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `NameSync` operations.
///
/// Directory-resolution variants (`DirectoryNotFound`, `NoValidModFolders`)
/// are fatal for a run; the remaining variants are local to a single mod
/// folder and are carried in its outcome rather than aborting the scan.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The resolved mods directory does not exist or is not a directory.
    #[error("'{}' is not a valid directory path", path.display())]
    DirectoryNotFound {
        /// The path that failed validation.
        path: PathBuf,
    },

    /// The mods directory exists but holds no subdirectory with an info.json.
    #[error("no valid mod folders with 'info.json' found in '{}'", path.display())]
    NoValidModFolders {
        /// The directory that was scanned.
        path: PathBuf,
    },

    /// A folder's info.json could not be parsed.
    #[error("failed to parse '{}': {source}", path.display())]
    MetadataParse {
        /// Path to the malformed info.json.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// A required metadata field is absent or empty.
    #[error("'{field}' missing or empty in '{}'", path.display())]
    MissingField {
        /// Path to the info.json missing the field.
        path: PathBuf,
        /// The field name (`name` or `version`).
        field: &'static str,
    },

    /// The filesystem rejected a folder rename.
    #[error("failed to rename '{}' to '{}': {source}", from.display(), to.display())]
    Rename {
        /// The folder's current path.
        from: PathBuf,
        /// The canonical target path.
        to: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },
}

/// A specialized Result type for `NameSync` operations.
pub type Result<T> = std::result::Result<T, Error>;
