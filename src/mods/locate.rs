//! Mods directory resolution
//!
//! Probes the platform default mods directory and falls back to asking
//! the operator for a path. A candidate directory is accepted only when
//! it contains at least one subdirectory carrying an info.json, so an
//! empty or wrong directory is never selected silently.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::report::Reporter;

use super::info_json::INFO_JSON;

/// Configuration for resolving the mods directory.
///
/// Explicit input rather than ambient lookup so tests can inject fake
/// default paths.
#[derive(Clone, Debug, Default)]
pub struct LocatorConfig {
    /// Skip the default-path probe and go straight to the prompt.
    pub force_manual: bool,
    /// Override the platform default path (tests, portable installs).
    pub default_path: Option<PathBuf>,
}

/// Source of a manually entered directory path.
///
/// Implemented by the CLI's stdin prompt and by fakes in tests.
pub trait PathPrompt {
    /// Ask the operator for a mods directory path, returning the raw line.
    fn prompt_path(&mut self) -> std::io::Result<String>;
}

/// Default Factorio mods directory for the current platform.
#[must_use]
pub fn default_mods_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA%\Factorio\mods
        dirs::config_dir().map(|p| p.join("Factorio").join("mods"))
    }
    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support/factorio/mods
        dirs::data_dir().map(|p| p.join("factorio").join("mods"))
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        dirs::home_dir().map(|p| p.join(".factorio").join("mods"))
    }
}

/// Check whether a directory contains at least one mod subfolder with an
/// info.json.
#[must_use]
pub fn has_mod_folders(directory: &Path) -> bool {
    let Ok(entries) = std::fs::read_dir(directory) else {
        return false;
    };
    entries
        .flatten()
        .any(|entry| entry.path().is_dir() && entry.path().join(INFO_JSON).is_file())
}

/// Resolve the mods directory to operate on.
///
/// Unless [`LocatorConfig::force_manual`] is set, the platform default is
/// probed first; on rejection (or bypass) the operator is prompted once.
/// Surrounding quotes are stripped from the entered path, as shells and
/// file managers commonly paste paths quoted.
///
/// # Errors
/// [`Error::DirectoryNotFound`] if the entered path is not a directory,
/// [`Error::NoValidModFolders`] if it holds no metadata-bearing
/// subdirectory. Both end the run; there is no retry loop.
pub fn locate_mods_directory(
    config: &LocatorConfig,
    prompt: &mut dyn PathPrompt,
    reporter: &dyn Reporter,
) -> Result<PathBuf> {
    if !config.force_manual {
        let default_path = config.default_path.clone().or_else(default_mods_dir);

        if let Some(path) = default_path {
            if path.is_dir() && has_mod_folders(&path) {
                reporter.info(&format!(
                    "Default Factorio mods directory found and will be used: {}",
                    path.display()
                ));
                return Ok(path);
            }
            if path.is_dir() {
                reporter.warning(&format!("No valid mod folders found in: {}", path.display()));
            } else {
                reporter.warning("Default Factorio mods directory not found.");
            }
        } else {
            reporter.warning("Default Factorio mods directory not found.");
        }
    }

    let line = prompt.prompt_path()?;
    let manual_path = PathBuf::from(line.trim().trim_matches(['"', '\'']));
    tracing::debug!(path = %manual_path.display(), "manual mods directory entered");

    if !manual_path.is_dir() {
        return Err(Error::DirectoryNotFound { path: manual_path });
    }

    if !has_mod_folders(&manual_path) {
        return Err(Error::NoValidModFolders { path: manual_path });
    }

    Ok(manual_path)
}
