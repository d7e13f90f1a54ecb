//! Index-preserving batch renaming.
//!
//! A rename pass walks one directory, keeps only files with a given
//! extension, and renames each to `{name}_{index:02}{suffix}{ext}` where
//! `index` is the integer prefix of the old file name. Files without an
//! index prefix are skipped, as are renames whose target already exists.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::CliError;

/// One planned or performed rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    /// Old file name, without its directory.
    pub from: String,
    /// New file name, without its directory.
    pub to: String,
}

/// One directory's worth of renaming work.
#[derive(Debug, Clone)]
pub struct RenamePass {
    /// Directory whose files are renamed.
    pub dir: PathBuf,
    /// Base for every new file name.
    pub new_name: String,
    /// Extension filter, without the leading dot (e.g. `jpg`).
    pub extension: String,
    /// Text inserted between the index and the extension.
    pub suffix: String,
}

impl RenamePass {
    /// Runs the pass, returning the renames performed (or, with
    /// `dry_run`, the renames that would have been performed).
    ///
    /// A missing directory yields an empty result rather than an error,
    /// since the variant subdirectories are optional per project.
    pub fn run(&self, dry_run: bool) -> Result<Vec<RenameEntry>, CliError> {
        if !self.dir.is_dir() {
            debug!(dir = %self.dir.display(), "skipping missing directory");
            return Ok(Vec::new());
        }

        let mut files: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| self.matches_extension(path))
            .collect();
        files.sort();

        let mut entries = Vec::new();
        for path in files {
            let Some(from) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            let Some(index) = extract_index(from) else {
                warn!(file = from, "no numeric index prefix, skipping");
                continue;
            };

            let to = compose_name(&self.new_name, index, &self.suffix, &self.extension);
            let target = self.dir.join(&to);
            if target.exists() {
                warn!(file = from, target = %target.display(), "target exists, skipping");
                continue;
            }

            if !dry_run {
                fs::rename(&path, &target)?;
            }
            entries.push(RenameEntry {
                from: from.to_string(),
                to,
            });
        }
        Ok(entries)
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
    }
}

/// Extracts the integer prefix of a file name: the text up to the first
/// space, or the first dot when there is no space.
pub fn extract_index(file_name: &str) -> Option<u32> {
    let cut = file_name
        .find(' ')
        .or_else(|| file_name.find('.'))
        .unwrap_or(file_name.len());
    file_name[..cut].parse().ok()
}

fn compose_name(new_name: &str, index: u32, suffix: &str, extension: &str) -> String {
    format!("{new_name}_{index:02}{suffix}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pass(dir: &Path, suffix: &str) -> RenamePass {
        RenamePass {
            dir: dir.to_path_buf(),
            new_name: "Sunset Valley".to_string(),
            extension: "jpg".to_string(),
            suffix: suffix.to_string(),
        }
    }

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn test_extract_index_variants() {
        assert_eq!(extract_index("3 draft.jpg"), Some(3));
        assert_eq!(extract_index("12.jpg"), Some(12));
        assert_eq!(extract_index("7"), Some(7));
        assert_eq!(extract_index("draft.jpg"), None);
        assert_eq!(extract_index(""), None);
    }

    #[test]
    fn test_run_renames_indexed_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "1 old.jpg");
        touch(dir.path(), "02.jpg");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "cover.jpg");

        let mut entries = pass(dir.path(), "").run(false).unwrap();
        entries.sort_by(|a, b| a.to.cmp(&b.to));

        assert_eq!(
            entries,
            vec![
                RenameEntry {
                    from: "1 old.jpg".to_string(),
                    to: "Sunset Valley_01.jpg".to_string(),
                },
                RenameEntry {
                    from: "02.jpg".to_string(),
                    to: "Sunset Valley_02.jpg".to_string(),
                },
            ]
        );
        assert!(dir.path().join("Sunset Valley_01.jpg").exists());
        assert!(dir.path().join("Sunset Valley_02.jpg").exists());
        // Unindexed and non-matching files stay put.
        assert!(dir.path().join("notes.txt").exists());
        assert!(dir.path().join("cover.jpg").exists());
    }

    #[test]
    fn test_run_applies_suffix() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "5.jpg");

        let entries = pass(dir.path(), " вр").run(false).unwrap();
        assert_eq!(entries[0].to, "Sunset Valley_05 вр.jpg");
        assert!(dir.path().join("Sunset Valley_05 вр.jpg").exists());
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "1.jpg");

        let entries = pass(dir.path(), "").run(true).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(dir.path().join("1.jpg").exists());
        assert!(!dir.path().join("Sunset Valley_01.jpg").exists());
    }

    #[test]
    fn test_existing_target_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "1.jpg");
        touch(dir.path(), "Sunset Valley_01.jpg");

        let entries = pass(dir.path(), "").run(false).unwrap();
        assert!(entries.is_empty());
        assert!(dir.path().join("1.jpg").exists());
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let entries = pass(&dir.path().join("BP"), "").run(false).unwrap();
        assert!(entries.is_empty());
    }
}
