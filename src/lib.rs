//! # NameSync
//!
//! Folder name synchronizer for Factorio mods.
//!
//! Factorio expects every installed mod folder to be named
//! `<name>_<version>`, matching the `name` and `version` fields of the
//! folder's `info.json`. Unpacked or hand-renamed mods drift from that
//! form and fail to load; `NameSync` scans the mods directory and renames
//! each folder back to its canonical name.
//!
//! ## Quick Start
//!
//! ```no_run
//! use namesync::prelude::*;
//!
//! let summary = process_mods_directory("~/.factorio/mods".as_ref(), &NullReporter)?;
//! println!("{} folders renamed", summary.renamed());
//! # Ok::<(), namesync::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `namesync` command-line binary

pub mod error;
pub mod mods;
pub mod report;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::mods::{
        FolderOutcome, FolderReport, LocatorConfig, ModInfo, PathPrompt, RenameSummary,
        locate_mods_directory, process_mods_directory, read_mod_info,
    };
    pub use crate::report::{MemoryReporter, NullReporter, Reporter, Severity};
}
