use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum FsError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("walker error: {0}")]
  Walker(String),
}

/// What to pick up while walking a data directory.
#[derive(Debug, Clone)]
pub struct ScanOptions {
  /// Extensions (without the dot) to keep; compared case-insensitively.
  pub extensions: Vec<String>,
  /// Skip files and directories whose name starts with `.`.
  pub ignore_hidden: bool,
  /// Directory levels to descend below the root. `Some(0)` keeps the walk
  /// on the root itself; `None` is unbounded.
  pub max_depth: Option<u32>,
}

/// A file found by [`scan_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
  pub path: PathBuf,
  pub size: u64,
  /// Last modification, unix seconds.
  pub modified: u64,
}

impl ScannedFile {
  /// Lowercased extension, if any.
  pub fn extension(&self) -> Option<String> {
    extension_of(&self.path)
  }
}

fn extension_of(path: &Path) -> Option<String> {
  path.extension().and_then(|e| e.to_str()).map(|e| e.to_lowercase())
}

fn is_hidden(path: &Path) -> bool {
  path.file_name().is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

fn file_metadata(path: &Path) -> Result<(u64, u64), FsError> {
  let meta = fs::metadata(path)?;
  let size = meta.len();

  let modified = meta.modified()?.duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();

  Ok((size, modified))
}

/// Walks `root` and returns the files matching `opts`, sorted by path.
///
/// Temporary `*.tmp` files (left over by an interrupted atomic write) are
/// always skipped. Symlinked directories are not descended into, so link
/// loops cannot repeat files. Unreadable subdirectories are logged and
/// skipped; an unreadable root is an error.
pub fn scan_files(root: &Path, opts: &ScanOptions) -> Result<Vec<ScannedFile>, FsError> {
  if !root.is_dir() {
    return Err(FsError::Walker(format!("{} is not a directory", root.display())));
  }

  let wanted: Vec<String> = opts.extensions.iter().map(|e| e.trim_start_matches('.').to_lowercase()).collect();

  let mut files = Vec::new();
  let mut pending: Vec<(PathBuf, u32)> = vec![(root.to_path_buf(), 0)];

  while let Some((dir, depth)) = pending.pop() {
    let entries = match fs::read_dir(&dir) {
      Ok(entries) => entries,
      Err(e) if dir == root => return Err(e.into()),
      Err(e) => {
        warn!(dir = %dir.display(), error = %e, "skipping unreadable directory");
        continue;
      }
    };

    for entry in entries {
      let entry = match entry {
        Ok(e) => e,
        Err(e) => {
          warn!(dir = %dir.display(), error = %e, "walker error");
          continue;
        }
      };

      let path = entry.path();

      if opts.ignore_hidden && is_hidden(&path) {
        continue;
      }

      let file_type = match entry.file_type() {
        Ok(t) => t,
        Err(e) => {
          warn!(path = %path.display(), error = %e, "file type error");
          continue;
        }
      };

      if file_type.is_dir() {
        if opts.max_depth.is_none_or(|max| depth < max) {
          pending.push((path, depth + 1));
        }
        continue;
      }

      if file_type.is_symlink() && path.is_dir() {
        debug!(path = %path.display(), "not following symlinked directory");
        continue;
      }

      let Some(ext) = extension_of(&path) else {
        continue;
      };

      if ext == "tmp" || !wanted.contains(&ext) {
        continue;
      }

      match file_metadata(&path) {
        Ok((size, modified)) => files.push(ScannedFile { path, size, modified }),
        Err(e) => warn!(path = %path.display(), error = %e, "metadata error"),
      }
    }
  }

  files.sort_by(|a, b| a.path.cmp(&b.path));
  debug!(root = %root.display(), found = files.len(), "scan finished");

  Ok(files)
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  fn touch(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
  }

  fn options() -> ScanOptions {
    ScanOptions { extensions: vec!["json".into(), ".TXT".into()], ignore_hidden: true, max_depth: None }
  }

  fn names(files: &[ScannedFile], root: &Path) -> Vec<String> {
    files.iter().map(|f| f.path.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/")).collect()
  }

  #[test]
  fn keeps_matching_extensions_sorted() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    touch(&root.join("b.json"), "{}");
    touch(&root.join("a.txt"), "x");
    touch(&root.join("notes.md"), "ignored");
    touch(&root.join("sub").join("C.JSON"), "{}");

    let files = scan_files(root, &options()).unwrap();

    assert_eq!(names(&files, root), vec!["a.txt", "b.json", "sub/C.JSON"]);
    assert_eq!(files[0].size, 1);
    assert_eq!(files[2].extension().as_deref(), Some("json"));
  }

  #[test]
  fn skips_hidden_and_tmp_files() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    touch(&root.join(".hidden.json"), "{}");
    touch(&root.join(".cache").join("x.json"), "{}");
    touch(&root.join("half.tmp"), "{}");
    touch(&root.join("ok.json"), "{}");

    let files = scan_files(root, &options()).unwrap();
    assert_eq!(names(&files, root), vec!["ok.json"]);

    let all = scan_files(root, &ScanOptions { ignore_hidden: false, ..options() }).unwrap();
    assert_eq!(names(&all, root), vec![".cache/x.json", ".hidden.json", "ok.json"]);
  }

  #[test]
  fn max_depth_bounds_the_walk() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    touch(&root.join("top.json"), "{}");
    touch(&root.join("one").join("mid.json"), "{}");
    touch(&root.join("one").join("two").join("deep.json"), "{}");

    let flat = scan_files(root, &ScanOptions { max_depth: Some(0), ..options() }).unwrap();
    assert_eq!(names(&flat, root), vec!["top.json"]);

    let one = scan_files(root, &ScanOptions { max_depth: Some(1), ..options() }).unwrap();
    assert_eq!(names(&one, root), vec!["one/mid.json", "top.json"]);
  }

  #[cfg(unix)]
  #[test]
  fn symlink_loops_are_not_followed() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    touch(&root.join("a.json"), "{}");
    touch(&root.join("real").join("b.json"), "{}");
    std::os::unix::fs::symlink(root, root.join("loop")).unwrap();
    std::os::unix::fs::symlink(root.join("a.json"), root.join("alias.json")).unwrap();

    let files = scan_files(root, &options()).unwrap();

    assert_eq!(names(&files, root), vec!["a.json", "alias.json", "real/b.json"]);
  }

  #[test]
  fn missing_root_is_an_error() {
    let tmp = tempdir().unwrap();
    let err = scan_files(&tmp.path().join("nope"), &options()).unwrap_err();
    assert!(matches!(err, FsError::Walker(_)));
  }
}
