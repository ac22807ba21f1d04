// ABOUTME: Integration tests for the filesystem helpers.
// ABOUTME: Builds small directory trees in temp dirs and checks finding, copying and cleanup.

use std::fs;
use std::path::{Path, PathBuf};

use dreamy_core::{
    copy_tree, find_files, prepend_to_path_var, read_text_file, read_text_lines,
    remove_empty_directories, write_text_file, CoreError,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Lays out:
///   ABC.txt
///   A/1.txt
///   A/B/2.sql
fn sample_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("A/B")).unwrap();
    fs::write(root.join("ABC.txt"), "abc").unwrap();
    fs::write(root.join("A/1.txt"), "one").unwrap();
    fs::write(root.join("A/B/2.sql"), "select 2;").unwrap();
    temp
}

fn relative(root: &Path, paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths
        .into_iter()
        .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

mod find_files_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn recursive_lists_every_file() {
        let temp = sample_tree();
        let found = find_files(Some(temp.path()), true, None).unwrap();
        assert_eq!(
            relative(temp.path(), found),
            vec![
                PathBuf::from("ABC.txt"),
                PathBuf::from("A/1.txt"),
                PathBuf::from("A/B/2.sql"),
            ]
        );
    }

    #[test]
    fn flat_lists_top_level_only() {
        let temp = sample_tree();
        let found = find_files(Some(temp.path()), false, None).unwrap();
        assert_eq!(relative(temp.path(), found), vec![PathBuf::from("ABC.txt")]);
    }

    #[test]
    fn suffix_filter_is_case_insensitive() {
        let temp = sample_tree();
        fs::write(temp.path().join("A/LOUD.SQL"), "").unwrap();

        let found = find_files(Some(temp.path()), true, Some(&[".sql"])).unwrap();
        assert_eq!(
            relative(temp.path(), found),
            vec![PathBuf::from("A/LOUD.SQL"), PathBuf::from("A/B/2.sql")]
        );
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = find_files(Some(&temp.path().join("nope")), true, None).unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
    }
}

mod copy_and_cleanup_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn copy_tree_copies_contents_and_creates_parents() {
        let temp = sample_tree();
        let dst = temp.path().join("backup/nested/copy");

        copy_tree(&temp.path().join("A"), &dst).unwrap();

        assert_eq!(read_text_file(dst.join("1.txt")).as_deref(), Some("one"));
        assert_eq!(read_text_file(dst.join("B/2.sql")).as_deref(), Some("select 2;"));
    }

    #[test]
    fn copy_tree_ignores_non_directories() {
        let temp = sample_tree();
        let dst = temp.path().join("copy");
        copy_tree(&temp.path().join("ABC.txt"), &dst).unwrap();
        assert!(!dst.exists());
    }

    #[test]
    fn copy_tree_refuses_existing_destination() {
        let temp = sample_tree();
        let err = copy_tree(&temp.path().join("A"), temp.path()).unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
    }

    #[test]
    fn remove_empty_directories_only_removes_empty_children() {
        let temp = sample_tree();
        fs::create_dir(temp.path().join("empty1")).unwrap();
        fs::create_dir(temp.path().join("empty2")).unwrap();

        let removed = remove_empty_directories(temp.path()).unwrap();

        assert_eq!(removed, 2);
        assert!(!temp.path().join("empty1").exists());
        assert!(temp.path().join("A").is_dir());
    }
}

mod text_file_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn write_creates_directories_and_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deep/er/note.txt");

        write_text_file(&path, "first").unwrap();
        write_text_file(&path, "second\nline").unwrap();

        assert_eq!(read_text_file(&path).as_deref(), Some("second\nline"));
        assert_eq!(
            read_text_lines(&path),
            Some(vec!["second".to_string(), "line".to_string()])
        );
    }

    #[test]
    fn read_directory_is_none() {
        let temp = TempDir::new().unwrap();
        assert_eq!(read_text_file(temp.path()), None);
    }

    #[test]
    fn prepend_to_path_var_puts_dir_first() {
        let temp = TempDir::new().unwrap();
        let joined = prepend_to_path_var(temp.path()).unwrap().unwrap();
        let first = std::env::split_paths(&joined).next().unwrap();
        assert_eq!(first, temp.path());

        assert_eq!(prepend_to_path_var(&temp.path().join("missing")).unwrap(), None);
    }
}
