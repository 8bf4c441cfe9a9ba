//! Input collection for the CLI: glob expansion and stdin

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;

use crate::error::{CliError, CliResult};

/// Expand file arguments, treating each as a literal path or glob pattern.
///
/// Fails if a pattern is malformed or matches nothing, so typos surface
/// instead of silently annotating zero files.
pub fn resolve_patterns(patterns: &[String]) -> CliResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let matches = glob::glob(pattern)
            .map_err(|_| CliError::InvalidPattern(pattern.clone()))?
            .filter_map(Result::ok)
            .filter(|p| p.is_file())
            .collect::<Vec<_>>();

        if matches.is_empty() {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }
        files.extend(matches);
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Read all of stdin as verse text.
pub fn read_stdin() -> CliResult<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read from stdin")?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_literal_path_resolves() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("verse.txt");
        fs::write(&file, "نْي").unwrap();

        let files = resolve_patterns(&[file.to_string_lossy().into_owned()]).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_glob_pattern_resolves_sorted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "x").unwrap();
        fs::write(dir.path().join("a.txt"), "y").unwrap();

        let pattern = format!("{}/*.txt", dir.path().display());
        let files = resolve_patterns(&[pattern]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.txt"));
    }

    #[test]
    fn test_unmatched_pattern_is_error() {
        let dir = TempDir::new().unwrap();
        let pattern = format!("{}/*.missing", dir.path().display());
        assert!(resolve_patterns(&[pattern]).is_err());
    }
}
