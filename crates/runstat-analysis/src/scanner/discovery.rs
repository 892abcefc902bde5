//! Glob-based discovery of candidate log files.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use runstat_core::errors::ScanError;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Regular files in `dir` matching `pattern`, sorted by path.
///
/// The directory part is escaped, so glob metacharacters in `dir` are taken
/// literally. An empty result is an error: there is nothing to summarize.
pub fn discover(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, ScanError> {
    let escaped_dir = Pattern::escape(&dir.to_string_lossy());
    let full_pattern = Path::new(&escaped_dir).join(pattern);
    let full_pattern = full_pattern.to_string_lossy();

    let entries =
        glob::glob_with(&full_pattern, MATCH_OPTIONS).map_err(|e| ScanError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(path) => {
                tracing::debug!(path = %path.display(), "skipping non-file match");
            }
            Err(e) => {
                tracing::warn!(path = %e.path().display(), error = %e.error(), "unreadable glob entry");
            }
        }
    }

    if files.is_empty() {
        return Err(ScanError::NoInput {
            dir: dir.to_path_buf(),
            pattern: pattern.to_string(),
        });
    }

    files.sort();
    Ok(files)
}
