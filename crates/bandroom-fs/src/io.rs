use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Writes `contents` to `path` through a sibling `.tmp` file and a rename,
/// so readers never observe a half-written file.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  if let Some(parent) = path.parent() {
    if !parent.as_os_str().is_empty() {
      fs::create_dir_all(parent)?;
    }
  }

  let tmp_path = path.with_extension("tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn writes_and_replaces_without_leftovers() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("nested").join("band.json");

    atomic_write_str(&path, "first").unwrap();
    atomic_write_str(&path, "second").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    assert!(!path.with_extension("tmp").exists());
  }
}
