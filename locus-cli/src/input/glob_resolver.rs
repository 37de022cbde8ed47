//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths, sorted and deduplicated
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoFilesFound(patterns.join(", ")).into());
    }

    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_sorted_and_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "B.").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "A.").unwrap();
        fs::create_dir(temp_dir.path().join("dir.txt")).unwrap();

        let pattern = temp_dir.path().join("*.txt").display().to_string();
        let exact = temp_dir.path().join("a.txt").display().to_string();
        let files = resolve_patterns(&[pattern, exact]).unwrap();

        assert_eq!(
            files,
            vec![temp_dir.path().join("a.txt"), temp_dir.path().join("b.txt")]
        );
    }

    #[test]
    fn test_no_match_is_an_error() {
        let err = resolve_patterns(&["/nonexistent/*.txt".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NoFilesFound(_))
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }
}
