use crate::models::error::{EditBackupError, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collects files below `dir` whose extension equals `extension`, sorted by path.
/// Only an unreadable `dir` is an error; bad entries below it are skipped.
pub fn get_payload_files_in_path(
    dir: &Path,
    extension: &str,
    max_depth: usize,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .max_depth(max_depth)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(EditBackupError::DirectoryRead(format!(
                    "{}: {}",
                    dir.display(),
                    e
                )));
            }
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        if entry.path().extension().is_some_and(|ext| ext == extension) {
            files.push(entry.path().to_path_buf());
        } else {
            debug!("Skipping non-payload file: {}", entry.path().display());
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_collects_matching_files_sorted() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("a.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

        let files = get_payload_files_in_path(temp_dir.path(), "json", usize::MAX).unwrap();

        assert_eq!(
            files,
            vec![temp_dir.path().join("a.json"), temp_dir.path().join("b.json")]
        );
    }

    #[test]
    fn test_honors_max_depth() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(temp_dir.path().join("top.json"), "{}").unwrap();
        fs::write(nested.join("deep.json"), "{}").unwrap();

        let shallow = get_payload_files_in_path(temp_dir.path(), "json", 1).unwrap();
        assert_eq!(shallow, vec![temp_dir.path().join("top.json")]);

        let all = get_payload_files_in_path(temp_dir.path(), "json", usize::MAX).unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&nested.join("deep.json")));
    }

    #[test]
    fn test_custom_extension() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("edit.payload"), "{}").unwrap();
        fs::write(temp_dir.path().join("edit.json"), "{}").unwrap();

        let files = get_payload_files_in_path(temp_dir.path(), "payload", usize::MAX).unwrap();
        assert_eq!(files, vec![temp_dir.path().join("edit.payload")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_skips_dangling_symlink() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("good.json"), "{}").unwrap();
        std::os::unix::fs::symlink(
            temp_dir.path().join("gone.json"),
            temp_dir.path().join("dangling.json"),
        )
        .unwrap();

        let files = get_payload_files_in_path(temp_dir.path(), "json", usize::MAX).unwrap();
        assert_eq!(files, vec![temp_dir.path().join("good.json")]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let result = get_payload_files_in_path(Path::new("/this/does/not/exist"), "json", 1);
        match result {
            Err(EditBackupError::DirectoryRead(message)) => {
                assert!(message.contains("/this/does/not/exist"));
            }
            _ => panic!("Expected DirectoryRead error"),
        }
    }
}
