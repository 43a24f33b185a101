// src/fs/browser.rs
//! Directory enumeration, filtering and navigation primitives.
//!
//! Every function takes the directory it works on explicitly; nothing here
//! reads or changes the process working directory.

use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

use tracing::debug;

use super::error::BrowseError;

/// One entry directly inside a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub is_dir: bool,
}

impl Entry {
    /// Extension including the leading dot (`".txt"`), or an empty string
    /// when the name has none. Dot-files such as `.bashrc` have none.
    pub fn extension(&self) -> String {
        match Path::new(&self.name).extension() {
            Some(ext) => format!(".{}", ext.to_string_lossy()),
            None => String::new(),
        }
    }
}

/// Load the entries of `dir` (non-recursive).
///
/// With `sorted` the names are ordered case-insensitively, otherwise the
/// order is whatever the OS iterator yields.
pub fn load_entries(dir: &Path, sorted: bool) -> Result<Vec<Entry>, BrowseError> {
    let iter = fs::read_dir(dir).map_err(|e| BrowseError::io("read_dir", dir, e))?;

    let mut list = Vec::new();
    for item in iter {
        let item = item.map_err(|e| BrowseError::io("read_dir", dir, e))?;
        let is_dir = item.file_type().map(|t| t.is_dir()).unwrap_or(false);
        list.push(Entry {
            name: item.file_name().to_string_lossy().into_owned(),
            is_dir,
        });
    }

    if sorted {
        list.sort_by_key(|e| e.name.to_lowercase());
    }
    debug!(dir = %dir.display(), count = list.len(), "loaded entries");
    Ok(list)
}

/// Entries whose extension is exactly `ext` (dot included).
pub fn filter_by_extension<'a>(entries: &'a [Entry], ext: &str) -> Vec<&'a Entry> {
    entries.iter().filter(|e| e.extension() == ext).collect()
}

/// The part of `pattern` before the first `*`, or all of it.
pub fn pattern_prefix(pattern: &str) -> &str {
    match pattern.find('*') {
        Some(star) => &pattern[..star],
        None => pattern,
    }
}

/// Entries whose name starts with the prefix of `pattern`.
///
/// This is a prefix match, not a glob: anything after the first `*` is
/// ignored, so `a*.md` also matches `a.txt`.
pub fn filter_by_pattern<'a>(entries: &'a [Entry], pattern: &str) -> Vec<&'a Entry> {
    let prefix = pattern_prefix(pattern);
    entries
        .iter()
        .filter(|e| e.name.starts_with(prefix))
        .collect()
}

/// Create a single directory `name`, relative to `base` unless absolute.
///
/// Returns the created path. Existing entries of any kind are refused before
/// the create call is made.
pub fn create_directory(base: &Path, name: &str) -> Result<PathBuf, BrowseError> {
    if name.is_empty() {
        return Err(BrowseError::EmptyName);
    }

    let target = base.join(name);
    if target.exists() {
        return Err(BrowseError::AlreadyExists(name.to_string()));
    }

    match fs::create_dir(&target) {
        Ok(()) => Ok(target),
        Err(e) => Err(create_error(name, target, e)),
    }
}

/// Map a failed `create_dir` call. `AlreadyExists` here means someone else
/// created the path between the existence check and the call.
fn create_error(name: &str, target: PathBuf, err: io::Error) -> BrowseError {
    if err.kind() == io::ErrorKind::AlreadyExists {
        BrowseError::CreateFailed(name.to_string())
    } else {
        BrowseError::io("create_dir", target, err)
    }
}

/// Parent of `current`, checked to be an enterable directory.
pub fn parent_of(current: &Path) -> Result<PathBuf, BrowseError> {
    let parent = current
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(BrowseError::AtRoot)?;
    ensure_dir(parent)?;
    Ok(parent.to_path_buf())
}

/// Root of `current` (drive prefix plus root separator where present).
pub fn root_of(current: &Path) -> Result<PathBuf, BrowseError> {
    let root: PathBuf = current
        .components()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect();
    if root.as_os_str().is_empty() {
        return Err(BrowseError::NoRoot(current.to_path_buf()));
    }
    ensure_dir(&root)?;
    Ok(root)
}

/// Resolve a user-supplied path against `current` into an absolute,
/// canonical directory path.
pub fn resolve_dir(current: &Path, input: impl AsRef<Path>) -> Result<PathBuf, BrowseError> {
    let input = input.as_ref();
    let joined = current.join(input);
    if input.as_os_str().is_empty() {
        return Err(BrowseError::NotFound(joined));
    }

    match fs::canonicalize(&joined) {
        Ok(path) if path.is_dir() => Ok(path),
        Ok(path) => Err(BrowseError::NotFound(path)),
        Err(e) => {
            debug!(path = %joined.display(), error = %e, "cannot resolve directory");
            Err(BrowseError::NotFound(joined))
        }
    }
}

/// Show only the last `n` components of `path`, prefixed with `…/` when
/// anything was cut.
pub fn tail_path(path: &Path, n: usize) -> String {
    let parts: Vec<String> = path
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if parts.len() <= n {
        return path.display().to_string();
    }
    format!("…/{}", parts[parts.len() - n..].join("/"))
}

fn ensure_dir(path: &Path) -> Result<(), BrowseError> {
    let meta = fs::metadata(path).map_err(|e| BrowseError::io("chdir", path, e))?;
    if !meta.is_dir() {
        return Err(BrowseError::io(
            "chdir",
            path,
            io::Error::new(io::ErrorKind::NotADirectory, "Not a directory"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), b"").unwrap();
        }
    }

    fn names(entries: &[&Entry]) -> Vec<String> {
        entries.iter().map(|e| e.name.clone()).collect()
    }

    #[test]
    fn load_entries_lists_each_name_once() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), &["b.txt", "c.md", "a.txt"]);

        let entries = load_entries(tmp.path(), true).unwrap();
        let got: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(got, vec!["a.txt", "b.txt", "c.md"]);
    }

    #[test]
    fn load_entries_unsorted_keeps_the_same_set() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), &["b.txt", "c.md", "a.txt"]);

        let mut got: Vec<String> = load_entries(tmp.path(), false)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        got.sort();
        assert_eq!(got, vec!["a.txt", "b.txt", "c.md"]);
    }

    #[test]
    fn load_entries_marks_directories() {
        let tmp = tempdir().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        touch(tmp.path(), &["file"]);

        let entries = load_entries(tmp.path(), true).unwrap();
        assert_eq!(
            entries,
            vec![
                Entry {
                    name: "file".into(),
                    is_dir: false,
                },
                Entry {
                    name: "sub".into(),
                    is_dir: true,
                },
            ]
        );
    }

    #[test]
    fn load_entries_missing_dir_is_filesystem_error() {
        let tmp = tempdir().unwrap();
        let err = load_entries(&tmp.path().join("gone"), true).unwrap_err();
        assert!(err.is_filesystem());
    }

    #[test]
    fn extension_follows_last_dot() {
        let ext = |n: &str| {
            Entry {
                name: n.into(),
                is_dir: false,
            }
            .extension()
        };
        assert_eq!(ext("a.txt"), ".txt");
        assert_eq!(ext("archive.tar.gz"), ".gz");
        assert_eq!(ext("README"), "");
        assert_eq!(ext(".bashrc"), "");
    }

    #[test]
    fn filter_by_extension_matches_exactly() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), &["a.txt", "b.txt", "c.md"]);
        let entries = load_entries(tmp.path(), true).unwrap();

        assert_eq!(names(&filter_by_extension(&entries, ".txt")), vec!["a.txt", "b.txt"]);
        assert!(filter_by_extension(&entries, ".csv").is_empty());
        assert!(filter_by_extension(&entries, "txt").is_empty());
    }

    #[test]
    fn pattern_prefix_stops_at_first_star() {
        assert_eq!(pattern_prefix("moha*.*"), "moha");
        assert_eq!(pattern_prefix("a*b*"), "a");
        assert_eq!(pattern_prefix("plain"), "plain");
        assert_eq!(pattern_prefix("*.txt"), "");
    }

    #[test]
    fn filter_by_pattern_is_prefix_match() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), &["a1.txt", "a2.txt", "b.txt"]);
        let entries = load_entries(tmp.path(), true).unwrap();

        assert_eq!(names(&filter_by_pattern(&entries, "a*")), vec!["a1.txt", "a2.txt"]);
        // the suffix after the star is ignored
        assert_eq!(names(&filter_by_pattern(&entries, "a*.md")), vec!["a1.txt", "a2.txt"]);
        assert_eq!(filter_by_pattern(&entries, "*").len(), 3);
        assert!(filter_by_pattern(&entries, "z*").is_empty());
    }

    #[test]
    fn create_directory_then_refuse_duplicate() {
        let tmp = tempdir().unwrap();

        let created = create_directory(tmp.path(), "newdir").unwrap();
        assert!(created.is_dir());

        let err = create_directory(tmp.path(), "newdir").unwrap_err();
        assert!(matches!(err, BrowseError::AlreadyExists(ref n) if n == "newdir"));
        assert_eq!(load_entries(tmp.path(), true).unwrap().len(), 1);
    }

    #[test]
    fn create_directory_refuses_existing_file() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), &["taken"]);

        let err = create_directory(tmp.path(), "taken").unwrap_err();
        assert!(matches!(err, BrowseError::AlreadyExists(_)));
        assert!(tmp.path().join("taken").is_file());
    }

    #[test]
    fn create_error_maps_lost_race_to_create_failed() {
        let target = PathBuf::from("/tmp/racy");

        let lost = io::Error::new(io::ErrorKind::AlreadyExists, "File exists");
        let err = create_error("racy", target.clone(), lost);
        assert!(matches!(err, BrowseError::CreateFailed(ref n) if n == "racy"));
        assert_eq!(err.to_string(), "Failed to create directory 'racy'!");

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
        let err = create_error("racy", target, denied);
        assert!(matches!(err, BrowseError::Io { op: "create_dir", .. }));
        assert!(err.is_filesystem());
    }

    #[test]
    fn create_directory_rejects_empty_name() {
        let tmp = tempdir().unwrap();
        assert!(matches!(
            create_directory(tmp.path(), ""),
            Err(BrowseError::EmptyName)
        ));
    }

    #[test]
    fn create_directory_without_parent_is_filesystem_error() {
        let tmp = tempdir().unwrap();
        let err = create_directory(tmp.path(), "missing/child").unwrap_err();
        assert!(err.is_filesystem());
    }

    #[test]
    fn parent_of_root_is_refused() {
        let root = root_of(&std::env::temp_dir()).unwrap();
        assert!(matches!(parent_of(&root), Err(BrowseError::AtRoot)));
    }

    #[test]
    fn parent_of_nested_dir() {
        let tmp = tempdir().unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        assert_eq!(parent_of(&sub).unwrap(), tmp.path());
    }

    #[test]
    fn root_of_relative_path_fails() {
        assert!(matches!(
            root_of(Path::new("relative/dir")),
            Err(BrowseError::NoRoot(_))
        ));
    }

    #[test]
    fn resolve_dir_accepts_relative_and_rejects_missing() {
        let tmp = tempdir().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        touch(tmp.path(), &["file"]);
        let base = fs::canonicalize(tmp.path()).unwrap();

        assert_eq!(resolve_dir(&base, "sub").unwrap(), base.join("sub"));
        assert_eq!(resolve_dir(&base.join("sub"), "..").unwrap(), base);
        assert!(matches!(resolve_dir(&base, "nope"), Err(BrowseError::NotFound(_))));
        assert!(matches!(resolve_dir(&base, "file"), Err(BrowseError::NotFound(_))));
        assert!(matches!(resolve_dir(&base, ""), Err(BrowseError::NotFound(_))));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn resolve_dir_keeps_non_utf8_paths_intact() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let tmp = tempdir().unwrap();
        let base = fs::canonicalize(tmp.path()).unwrap();
        let odd = PathBuf::from(OsStr::from_bytes(b"caf\xe9"));
        fs::create_dir(base.join(&odd)).unwrap();

        assert_eq!(resolve_dir(&base, &odd).unwrap(), base.join(&odd));
    }

    #[test]
    fn tail_path_keeps_last_components() {
        let p = Path::new("/home/user/music/albums/live");
        assert_eq!(tail_path(p, 3), "…/music/albums/live");
        assert_eq!(tail_path(Path::new("/tmp/x"), 3), "/tmp/x");
    }
}
