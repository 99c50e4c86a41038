use std::path::{Path, PathBuf};

/// Sub-directories of the catalog, one per entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
  Musician,
  Band,
  Studio,
}

impl EntityKind {
  pub const ALL: [EntityKind; 3] = [EntityKind::Musician, EntityKind::Band, EntityKind::Studio];

  pub fn dir_name(self) -> &'static str {
    match self {
      EntityKind::Musician => "musicians",
      EntityKind::Band => "bands",
      EntityKind::Studio => "studios",
    }
  }

  pub fn dir(self, root: &Path) -> PathBuf {
    root.join(self.dir_name())
  }

  /// `<root>/<kind>/<slug>.json`
  pub fn file(self, root: &Path, name: &str) -> PathBuf {
    self.dir(root).join(format!("{}.json", slug(name)))
  }
}

/// File-name friendly form of a name: lowercase ASCII alphanumerics, every
/// other run of characters collapsed to a single `_`.
///
/// `The Beatles` -> `the_beatles`, `AC/DC` -> `ac_dc`.
pub fn slug(name: &str) -> String {
  let mut out = String::with_capacity(name.len());
  let mut pending_sep = false;

  for c in name.chars() {
    if c.is_ascii_alphanumeric() {
      if pending_sep && !out.is_empty() {
        out.push('_');
      }
      pending_sep = false;
      out.push(c.to_ascii_lowercase());
    } else {
      pending_sep = true;
    }
  }

  if out.is_empty() { "unnamed".to_string() } else { out }
}
