// ABOUTME: Filesystem convenience wrappers: finding, copying, reading and writing files.
// ABOUTME: Read helpers return Option like "not there"; mutating helpers return Result.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;
use walkdir::WalkDir;

use crate::error::{CoreError, Result};

/// Characters kept by [`get_sanitized_file_name`], besides ASCII letters and digits.
pub const VALID_FILE_NAME_CHARACTERS: &str = "-',_.()[] ";

/// Builds a file name from arbitrary text by dropping every character that is
/// not an ASCII letter, digit, or one of [`VALID_FILE_NAME_CHARACTERS`].
pub fn get_sanitized_file_name(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric() || VALID_FILE_NAME_CHARACTERS.contains(*c))
        .collect()
}

/// A fresh random file name: 32 lowercase hex digits.
pub fn get_unique_file_name() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Lists regular files under `dir` (the current directory when None).
///
/// With `recursive` unset only the top level is listed. `suffixes` filters on
/// the last extension, compared case-insensitively and written with its dot
/// (".sql"). Results are ordered by depth, then by path.
pub fn find_files(
    dir: Option<&Path>,
    recursive: bool,
    suffixes: Option<&[&str]>,
) -> Result<Vec<PathBuf>> {
    let root = dir.unwrap_or_else(|| Path::new("."));
    let suffixes: Option<Vec<String>> =
        suffixes.map(|list| list.iter().map(|s| s.to_lowercase()).collect());

    let mut walker = WalkDir::new(root).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut found: Vec<(usize, PathBuf)> = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            CoreError::io("walk", path, io::Error::from(e))
        })?;

        if !entry.path().is_file() {
            continue;
        }

        if let Some(accepted) = &suffixes {
            let suffix = entry
                .path()
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()));
            match suffix {
                Some(suffix) if accepted.contains(&suffix) => {}
                _ => continue,
            }
        }

        let path = if dir.is_none() {
            entry.path().strip_prefix(root).unwrap_or(entry.path()).to_path_buf()
        } else {
            entry.path().to_path_buf()
        };
        found.push((entry.depth(), path));
    }

    found.sort();
    Ok(found.into_iter().map(|(_, path)| path).collect())
}

/// Locates an executable by name.
///
/// Looks on `PATH`, then in `/usr/bin` and `/bin`, then under the Windows
/// program directories as `<Program Files>\application\relative\name.exe`.
/// On Unix a match on `PATH` or in the system directories must have an
/// execute bit set.
pub fn find_executable(
    name: &str,
    application: Option<&str>,
    relative: Option<&str>,
) -> Option<PathBuf> {
    find_executable_in(name, &ExecutableRoots::from_env(), application, relative)
}

/// Directories searched by [`find_executable`], in order.
#[derive(Debug, Clone, Default)]
struct ExecutableRoots {
    path_dirs: Vec<PathBuf>,
    system_dirs: Vec<PathBuf>,
    program_dirs: Vec<PathBuf>,
}

impl ExecutableRoots {
    fn from_env() -> Self {
        Self {
            path_dirs: env::var_os("PATH")
                .map(|path| env::split_paths(&path).collect())
                .unwrap_or_default(),
            system_dirs: vec![PathBuf::from("/usr/bin"), PathBuf::from("/bin")],
            program_dirs: ["ProgramW6432", "ProgramFiles(x86)"]
                .into_iter()
                .filter_map(env::var_os)
                .map(PathBuf::from)
                .collect(),
        }
    }
}

fn find_executable_in(
    name: &str,
    roots: &ExecutableRoots,
    application: Option<&str>,
    relative: Option<&str>,
) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    for dir in &roots.path_dirs {
        for candidate in [dir.join(name), dir.join(format!("{name}.exe"))] {
            if is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }

    for dir in &roots.system_dirs {
        let candidate = dir.join(name);
        if is_executable(&candidate) {
            return Some(candidate);
        }
    }

    for base in &roots.program_dirs {
        let mut candidate = base.clone();
        if let Some(application) = application {
            candidate.push(application);
        }
        if let Some(relative) = relative {
            candidate.push(relative);
        }
        candidate.push(format!("{name}.exe"));
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    None
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Copies the directory `src` with all its contents to `dst`.
///
/// Does nothing when `src` is not a directory. Missing parents of `dst` are
/// created; `dst` itself must not exist yet.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    if !src.is_dir() {
        return Ok(());
    }
    if dst.exists() {
        return Err(CoreError::io(
            "copy into",
            dst,
            io::Error::new(io::ErrorKind::AlreadyExists, "destination exists"),
        ));
    }

    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent).map_err(|e| CoreError::io("create", parent, e))?;
    }

    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            CoreError::io("walk", path, io::Error::from(e))
        })?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| CoreError::io("create", &target, e))?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| CoreError::io("copy", entry.path(), e))?;
        }
    }

    Ok(())
}

/// Removes the empty immediate subdirectories of `dir`, returning how many went.
pub fn remove_empty_directories(dir: &Path) -> Result<usize> {
    let mut removed = 0;

    for entry in fs::read_dir(dir).map_err(|e| CoreError::io("read", dir, e))? {
        let entry = entry.map_err(|e| CoreError::io("read", dir, e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let is_empty = fs::read_dir(&path)
            .map_err(|e| CoreError::io("read", &path, e))?
            .next()
            .is_none();
        if is_empty {
            fs::remove_dir(&path).map_err(|e| CoreError::io("remove", &path, e))?;
            debug!(path = %path.display(), "removed empty directory");
            removed += 1;
        }
    }

    Ok(removed)
}

/// Reads a UTF-8 text file. None if the path is not a file or cannot be read.
pub fn read_text_file(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    if !path.is_file() {
        return None;
    }

    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "could not read text file");
            None
        }
    }
}

/// Reads a UTF-8 text file as lines, without line terminators.
pub fn read_text_lines(path: impl AsRef<Path>) -> Option<Vec<String>> {
    read_text_file(path).map(|content| content.lines().map(str::to_string).collect())
}

/// Writes `content` to `path`, creating parent directories and replacing any existing file.
pub fn write_text_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CoreError::io("create", parent, e))?;
    }
    fs::write(path, content).map_err(|e| CoreError::io("write", path, e))
}

/// Returns the current `PATH` with `dir` prepended, for handing to child processes.
///
/// None when `dir` is not a directory. The process environment is not touched.
pub fn prepend_to_path_var(dir: &Path) -> Result<Option<OsString>> {
    if !dir.is_dir() {
        return Ok(None);
    }

    let current = env::var_os("PATH").unwrap_or_default();
    let paths = std::iter::once(dir.to_path_buf()).chain(env::split_paths(&current));
    let joined = env::join_paths(paths).map_err(|e| {
        CoreError::io("join PATH with", dir, io::Error::new(io::ErrorKind::InvalidInput, e))
    })?;
    Ok(Some(joined))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_file_name() {
        assert_eq!(get_sanitized_file_name("A/B: C?*.txt"), "AB C.txt");
        assert_eq!(get_sanitized_file_name("Tom's [Draft] (v2)"), "Tom's [Draft] (v2)");
        assert_eq!(get_sanitized_file_name("żółw"), "w");
    }

    #[test]
    fn test_unique_file_name() {
        let a = get_unique_file_name();
        let b = get_unique_file_name();
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_find_executable_empty_name() {
        assert_eq!(find_executable("", None, None), None);
    }

    fn write_tool(path: &Path, mode: u32) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
        }
        #[cfg(not(unix))]
        let _ = mode;
    }

    #[test]
    fn test_find_executable_prefers_earlier_path_entries() {
        let first = tempfile::TempDir::new().unwrap();
        let second = tempfile::TempDir::new().unwrap();
        let system = tempfile::TempDir::new().unwrap();
        write_tool(&first.path().join("tool"), 0o755);
        write_tool(&second.path().join("tool"), 0o755);
        write_tool(&system.path().join("tool"), 0o755);

        let roots = ExecutableRoots {
            path_dirs: vec![first.path().to_path_buf(), second.path().to_path_buf()],
            system_dirs: vec![system.path().to_path_buf()],
            program_dirs: Vec::new(),
        };
        assert_eq!(
            find_executable_in("tool", &roots, None, None),
            Some(first.path().join("tool"))
        );
    }

    #[test]
    fn test_find_executable_falls_back_to_system_then_program_dirs() {
        let system = tempfile::TempDir::new().unwrap();
        let programs = tempfile::TempDir::new().unwrap();
        write_tool(&programs.path().join("Calibre/bin/convert.exe"), 0o644);

        let mut roots = ExecutableRoots {
            path_dirs: vec![PathBuf::from("/definitely/not/here")],
            system_dirs: vec![system.path().to_path_buf()],
            program_dirs: vec![programs.path().to_path_buf()],
        };
        assert_eq!(
            find_executable_in("convert", &roots, Some("Calibre"), Some("bin")),
            Some(programs.path().join("Calibre/bin/convert.exe"))
        );

        write_tool(&system.path().join("convert"), 0o755);
        assert_eq!(
            find_executable_in("convert", &roots, Some("Calibre"), Some("bin")),
            Some(system.path().join("convert"))
        );

        roots.program_dirs.clear();
        assert_eq!(find_executable_in("missing", &roots, None, None), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_find_executable_skips_files_without_execute_bit() {
        let plain = tempfile::TempDir::new().unwrap();
        let runnable = tempfile::TempDir::new().unwrap();
        write_tool(&plain.path().join("tool"), 0o644);
        write_tool(&runnable.path().join("tool"), 0o755);

        let roots = ExecutableRoots {
            path_dirs: vec![plain.path().to_path_buf(), runnable.path().to_path_buf()],
            ..ExecutableRoots::default()
        };
        assert_eq!(
            find_executable_in("tool", &roots, None, None),
            Some(runnable.path().join("tool"))
        );
    }

    #[test]
    fn test_read_missing_file() {
        assert_eq!(read_text_file("/definitely/not/here.txt"), None);
        assert_eq!(read_text_lines("/definitely/not/here.txt"), None);
    }
}
