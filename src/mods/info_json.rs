//! Mod metadata parsing from info.json files

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// File name of the metadata file expected inside every mod folder.
pub const INFO_JSON: &str = "info.json";

/// Mod metadata extracted from info.json
///
/// Only `name` and `version` matter for folder naming; Factorio's other
/// info.json fields (title, author, dependencies, ...) are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ModInfo {
    /// Internal mod name, as the game resolves it.
    #[serde(default)]
    pub name: String,
    /// Mod version string, e.g. `1.2.3`.
    #[serde(default)]
    pub version: String,
}

impl ModInfo {
    /// The folder name this mod's directory should carry: `name_version`.
    #[must_use]
    pub fn canonical_folder_name(&self) -> String {
        format!("{}_{}", self.name, self.version)
    }
}

/// Read and validate the info.json inside a mod folder.
///
/// Absence of a field and an empty field are reported identically as
/// [`Error::MissingField`]; the game rejects both the same way.
pub fn read_mod_info(mod_dir: &Path) -> Result<ModInfo> {
    let info_path = mod_dir.join(INFO_JSON);
    let content = std::fs::read_to_string(&info_path)?;

    let info: ModInfo = serde_json::from_str(&content).map_err(|source| Error::MetadataParse {
        path: info_path.clone(),
        source,
    })?;

    if info.name.is_empty() {
        return Err(Error::MissingField {
            path: info_path,
            field: "name",
        });
    }
    if info.version.is_empty() {
        return Err(Error::MissingField {
            path: info_path,
            field: "version",
        });
    }

    Ok(info)
}
