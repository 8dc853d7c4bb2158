//! Mod folder operations - locating the mods directory and renaming
//! folders to their canonical `name_version` form.

pub mod info_json;
pub mod locate;
pub mod rename;

pub use info_json::{INFO_JSON, ModInfo, read_mod_info};
pub use locate::{
    LocatorConfig, PathPrompt, default_mods_dir, has_mod_folders, locate_mods_directory,
};
pub use rename::{FolderOutcome, FolderReport, RenameSummary, process_mods_directory};
