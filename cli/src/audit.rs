//! File size auditing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CliError;

/// A file exceeding its directory's size limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Oversized {
    /// File name, without its directory.
    pub name: String,
    /// Actual size in bytes.
    pub size: u64,
}

/// Lists the files in `dir` larger than `limit_mb` megabytes.
///
/// A missing directory yields an empty result, since the variant
/// subdirectories are optional per project.
pub fn oversized_files(dir: &Path, limit_mb: u64) -> Result<Vec<Oversized>, CliError> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "skipping missing directory");
        return Ok(Vec::new());
    }

    let limit_bytes = limit_mb * 1024 * 1024;
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    let mut oversized = Vec::new();
    for path in files {
        let size = fs::metadata(&path)?.len();
        if size <= limit_bytes {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        oversized.push(Oversized {
            name: name.to_string(),
            size,
        });
    }
    Ok(oversized)
}
