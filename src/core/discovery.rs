use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{ClassdocError, Result};

/// Recursively collect every file under `root` whose name ends in `.{extension}`.
///
/// Entries are visited depth-first with siblings sorted by file name, so the
/// returned order is stable across platforms. No directory is excluded and
/// symlinked directories are not descended into.
pub fn discover_source_files<P: AsRef<Path>>(root: P, extension: &str) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    let metadata = std::fs::metadata(root)
        .map_err(|e| ClassdocError::FileSystem(format!("cannot access {}: {}", root.display(), e)))?;
    if !metadata.is_dir() {
        return Err(ClassdocError::FileSystem(format!("{} is not a directory", root.display())));
    }

    let suffix = format!(".{}", extension);
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| ClassdocError::FileSystem(e.to_string()))?;
        let path = entry.path();

        let matches = entry
            .file_name()
            .to_str()
            .map(|name| name.ends_with(&suffix))
            .unwrap_or(false);

        if !matches || entry.file_type().is_dir() {
            continue;
        }

        // A dangling link is still a discovered file; failing here keeps it fatal.
        if entry.path_is_symlink() {
            let target = std::fs::metadata(path).map_err(|e| {
                ClassdocError::FileSystem(format!("cannot resolve {}: {}", path.display(), e))
            })?;
            if target.is_dir() {
                continue;
            }
        }

        debug!("Discovered {}", path.display());
        files.push(path.to_path_buf());
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_discovers_nested_files_with_extension() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("a.py").write_str("x = 1\n").unwrap();
        temp.child("pkg/b.py").write_str("x = 2\n").unwrap();
        temp.child("pkg/deep/er/c.py").write_str("x = 3\n").unwrap();
        temp.child("venv/lib/site.py").write_str("x = 4\n").unwrap();
        temp.child("notes.txt").write_str("not python").unwrap();
        temp.child("pkg/script.pyc").write_binary(&[0, 1, 2]).unwrap();

        let found: BTreeSet<PathBuf> = discover_source_files(temp.path(), "py")
            .unwrap()
            .into_iter()
            .collect();

        let expected: BTreeSet<PathBuf> = [
            temp.child("a.py").path().to_path_buf(),
            temp.child("pkg/b.py").path().to_path_buf(),
            temp.child("pkg/deep/er/c.py").path().to_path_buf(),
            temp.child("venv/lib/site.py").path().to_path_buf(),
        ]
        .into_iter()
        .collect();

        assert_eq!(found, expected);
    }

    #[test]
    fn test_order_is_depth_first_by_name() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("b.py").write_str("").unwrap();
        temp.child("a/z.py").write_str("").unwrap();
        temp.child("a.py").write_str("").unwrap();

        let found = discover_source_files(temp.path(), "py").unwrap();
        let relative: Vec<PathBuf> = found
            .iter()
            .map(|p| p.strip_prefix(temp.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            relative,
            vec![PathBuf::from("a").join("z.py"), PathBuf::from("a.py"), PathBuf::from("b.py")]
        );
    }

    #[test]
    fn test_directory_named_like_source_is_not_a_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("weird.py").create_dir_all().unwrap();
        temp.child("weird.py/inner.py").write_str("").unwrap();

        let found = discover_source_files(temp.path(), "py").unwrap();
        assert_eq!(found, vec![temp.child("weird.py/inner.py").path().to_path_buf()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_a_filesystem_error() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("real.py").write_str("x = 1\n").unwrap();
        temp.child("broken.py")
            .symlink_to_file(temp.child("missing.py").path())
            .unwrap();

        match discover_source_files(temp.path(), "py").unwrap_err() {
            ClassdocError::FileSystem(message) => assert!(message.contains("broken.py")),
            other => panic!("expected filesystem error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_to_files_are_kept_and_to_dirs_skipped() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("pkg/real.py").write_str("x = 1\n").unwrap();
        temp.child("alias.py")
            .symlink_to_file(temp.child("pkg/real.py").path())
            .unwrap();
        temp.child("linked.py")
            .symlink_to_dir(temp.child("pkg").path())
            .unwrap();

        let found = discover_source_files(temp.path(), "py").unwrap();
        assert_eq!(
            found,
            vec![
                temp.child("alias.py").path().to_path_buf(),
                temp.child("pkg/real.py").path().to_path_buf(),
            ]
        );
    }

    #[test]
    fn test_empty_directory_yields_nothing() {
        let temp = assert_fs::TempDir::new().unwrap();
        assert!(discover_source_files(temp.path(), "py").unwrap().is_empty());
    }

    #[test]
    fn test_missing_root_is_a_filesystem_error() {
        let temp = assert_fs::TempDir::new().unwrap();
        let missing = temp.child("does-not-exist");

        let err = discover_source_files(missing.path(), "py").unwrap_err();
        assert!(matches!(err, ClassdocError::FileSystem(_)));
    }

    #[test]
    fn test_file_root_is_a_filesystem_error() {
        let file = tempfile::Builder::new().suffix(".py").tempfile().unwrap();

        let err = discover_source_files(file.path(), "py").unwrap_err();
        assert!(matches!(err, ClassdocError::FileSystem(_)));
    }
}
