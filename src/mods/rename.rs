//! Folder rename processing
//!
//! Scans the immediate children of the mods directory and renames each
//! mod folder to its canonical `name_version` form. Every folder is
//! handled independently: a failure is recorded in that folder's outcome
//! and the scan moves on. Nothing is rolled back.

use std::path::Path;

use crate::error::{Error, Result};
use crate::report::Reporter;

use super::info_json::{INFO_JSON, read_mod_info};

/// Outcome of processing a single child of the mods directory.
#[derive(Debug)]
pub enum FolderOutcome {
    /// The folder was renamed to its canonical name.
    Renamed {
        /// Folder name before the rename.
        from: String,
        /// Canonical folder name after the rename.
        to: String,
    },
    /// The folder name already matches `name_version`.
    AlreadyCanonical,
    /// The child is not a directory.
    SkippedNotADirectory,
    /// The folder has no info.json.
    SkippedNoMetadata,
    /// A folder-local failure (parse, missing field, or rename refusal).
    Failed(Error),
}

/// One processed child with its outcome.
#[derive(Debug)]
pub struct FolderReport {
    /// The child's name as listed, before any rename.
    pub folder: String,
    /// What happened to it.
    pub outcome: FolderOutcome,
}

/// Accumulated results of one scan over the mods directory.
#[derive(Debug, Default)]
pub struct RenameSummary {
    /// Per-child reports in native listing order.
    pub folders: Vec<FolderReport>,
}

impl RenameSummary {
    /// Number of folders renamed.
    #[must_use]
    pub fn renamed(&self) -> usize {
        self.count(|o| matches!(o, FolderOutcome::Renamed { .. }))
    }

    /// Number of folders already carrying their canonical name.
    #[must_use]
    pub fn up_to_date(&self) -> usize {
        self.count(|o| matches!(o, FolderOutcome::AlreadyCanonical))
    }

    /// Number of children skipped (non-directories, missing metadata).
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|o| {
            matches!(
                o,
                FolderOutcome::SkippedNotADirectory | FolderOutcome::SkippedNoMetadata
            )
        })
    }

    /// Number of folder-local failures.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FolderOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&FolderOutcome) -> bool) -> usize {
        self.folders.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Rename every mod folder under `base_dir` to its canonical name.
///
/// The listing is snapshotted up front so no folder is visited twice,
/// even though renames mutate the directory mid-scan. Folder-local
/// failures are reported and recorded in the summary; only failing to
/// list `base_dir` itself aborts the run.
pub fn process_mods_directory(base_dir: &Path, reporter: &dyn Reporter) -> Result<RenameSummary> {
    reporter.info(&format!("Scanning directory: {}", base_dir.display()));

    if !base_dir.is_dir() {
        return Err(Error::DirectoryNotFound {
            path: base_dir.to_path_buf(),
        });
    }

    let entries: Vec<_> = std::fs::read_dir(base_dir)?.flatten().collect();
    tracing::debug!(count = entries.len(), "directory listing snapshotted");

    let mut summary = RenameSummary::default();
    for entry in entries {
        let folder = entry.file_name().to_string_lossy().into_owned();
        let outcome = process_folder(base_dir, &entry.path(), reporter);
        summary.folders.push(FolderReport { folder, outcome });
    }

    Ok(summary)
}

fn process_folder(base_dir: &Path, folder_path: &Path, reporter: &dyn Reporter) -> FolderOutcome {
    if !folder_path.is_dir() {
        reporter.warning(&format!(
            "Skipping '{}' as it is not a directory.",
            folder_path.display()
        ));
        return FolderOutcome::SkippedNotADirectory;
    }

    reporter.info(&format!("Processing folder: {}", folder_path.display()));

    if !folder_path.join(INFO_JSON).is_file() {
        reporter.warning(&format!(
            "'{INFO_JSON}' not found in '{}'. Skipping.",
            folder_path.display()
        ));
        return FolderOutcome::SkippedNoMetadata;
    }

    let info = match read_mod_info(folder_path) {
        Ok(info) => info,
        Err(err) => {
            reporter.error(&format!("{err}. Skipping."));
            return FolderOutcome::Failed(err);
        }
    };

    let folder_name = folder_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let canonical = info.canonical_folder_name();

    if folder_name == canonical {
        reporter.info(&format!(
            "No rename needed for '{folder_name}' (already correct)."
        ));
        return FolderOutcome::AlreadyCanonical;
    }

    let target_path = base_dir.join(&canonical);
    match std::fs::rename(folder_path, &target_path) {
        Ok(()) => {
            reporter.success(&format!("Renamed '{folder_name}' to '{canonical}'."));
            FolderOutcome::Renamed {
                from: folder_name,
                to: canonical,
            }
        }
        Err(source) => {
            let err = Error::Rename {
                from: folder_path.to_path_buf(),
                to: target_path,
                source,
            };
            reporter.error(&format!("{err}. Skipping."));
            FolderOutcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use crate::report::{MemoryReporter, NullReporter, Severity};

    use super::*;

    fn make_mod_folder(root: &Path, folder: &str, name: &str, version: &str) {
        let dir = root.join(folder);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(INFO_JSON),
            format!(r#"{{"name": "{name}", "version": "{version}"}}"#),
        )
        .unwrap();
    }

    #[test]
    fn test_renames_to_canonical_name() {
        let temp = TempDir::new().unwrap();
        make_mod_folder(temp.path(), "boblibrary", "boblibrary", "1.1.6");

        let summary = process_mods_directory(temp.path(), &NullReporter).unwrap();

        assert_eq!(summary.renamed(), 1);
        assert!(temp.path().join("boblibrary_1.1.6").is_dir());
        assert!(!temp.path().join("boblibrary").exists());
        // Metadata travels with the renamed folder.
        assert!(temp.path().join("boblibrary_1.1.6").join(INFO_JSON).is_file());
    }

    #[test]
    fn test_second_run_is_idempotent() {
        let temp = TempDir::new().unwrap();
        make_mod_folder(temp.path(), "a-mod", "a-mod", "0.1.0");
        make_mod_folder(temp.path(), "b", "b-mod", "2.0.0");

        let first = process_mods_directory(temp.path(), &NullReporter).unwrap();
        assert_eq!(first.renamed(), 2);

        let second = process_mods_directory(temp.path(), &NullReporter).unwrap();
        assert_eq!(second.renamed(), 0);
        assert_eq!(second.up_to_date(), 2);
    }

    #[test]
    fn test_already_canonical_folder_is_untouched() {
        let temp = TempDir::new().unwrap();
        make_mod_folder(temp.path(), "tidy_3.2.1", "tidy", "3.2.1");

        let reporter = MemoryReporter::new();
        let summary = process_mods_directory(temp.path(), &reporter).unwrap();

        assert_eq!(summary.up_to_date(), 1);
        assert!(
            reporter
                .events()
                .iter()
                .any(|(_, m)| m.contains("No rename needed"))
        );
    }

    #[test]
    fn test_folder_without_metadata_warns_and_is_untouched() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("saves")).unwrap();

        let reporter = MemoryReporter::new();
        let summary = process_mods_directory(temp.path(), &reporter).unwrap();

        assert_eq!(summary.skipped(), 1);
        assert!(temp.path().join("saves").is_dir());
        assert_eq!(reporter.count(Severity::Warning), 1);
    }

    #[test]
    fn test_non_directory_child_warns() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("mod-settings.dat"), b"binary").unwrap();

        let reporter = MemoryReporter::new();
        let summary = process_mods_directory(temp.path(), &reporter).unwrap();

        assert_eq!(summary.skipped(), 1);
        assert_eq!(reporter.count(Severity::Warning), 1);
        assert!(temp.path().join("mod-settings.dat").is_file());
    }

    #[test]
    fn test_empty_version_fails_locally_but_sibling_is_processed() {
        let temp = TempDir::new().unwrap();
        make_mod_folder(temp.path(), "broken", "broken", "");
        make_mod_folder(temp.path(), "fine", "fine", "1.0.0");

        let reporter = MemoryReporter::new();
        let summary = process_mods_directory(temp.path(), &reporter).unwrap();

        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.renamed(), 1);
        assert!(temp.path().join("broken").is_dir());
        assert!(temp.path().join("fine_1.0.0").is_dir());
        assert_eq!(reporter.count(Severity::Error), 1);

        let failure = summary
            .folders
            .iter()
            .find(|r| r.folder == "broken")
            .unwrap();
        assert!(matches!(
            failure.outcome,
            FolderOutcome::Failed(Error::MissingField {
                field: "version",
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_metadata_fails_locally() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("corrupt");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join(INFO_JSON), "{\"name\": ").unwrap();

        let summary = process_mods_directory(temp.path(), &NullReporter).unwrap();

        assert_eq!(summary.failed(), 1);
        assert!(temp.path().join("corrupt").is_dir());
        assert!(matches!(
            summary.folders[0].outcome,
            FolderOutcome::Failed(Error::MetadataParse { .. })
        ));
    }

    #[test]
    fn test_duplicate_canonical_name_leaves_one_winner() {
        let temp = TempDir::new().unwrap();
        make_mod_folder(temp.path(), "copy-a", "Foo", "1.0");
        make_mod_folder(temp.path(), "copy-b", "Foo", "1.0");

        let reporter = MemoryReporter::new();
        let summary = process_mods_directory(temp.path(), &reporter).unwrap();

        // The filesystem decides which copy wins; exactly one does.
        assert_eq!(summary.renamed(), 1);
        assert_eq!(summary.failed(), 1);
        assert!(temp.path().join("Foo_1.0").is_dir());
        assert_eq!(reporter.count(Severity::Success), 1);
        assert_eq!(reporter.count(Severity::Error), 1);

        let failures: Vec<_> = summary
            .folders
            .iter()
            .filter(|r| matches!(r.outcome, FolderOutcome::Failed(Error::Rename { .. })))
            .collect();
        assert_eq!(failures.len(), 1);
    }

    #[test]
    fn test_missing_root_is_directory_not_found() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("never-created");

        let err = process_mods_directory(&gone, &NullReporter).unwrap_err();
        assert!(matches!(err, Error::DirectoryNotFound { .. }));
    }
}
