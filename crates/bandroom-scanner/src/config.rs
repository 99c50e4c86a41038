use bandroom_config::{BandroomPaths, CONFIG_BACKEND, ConfigBackend, ConfigError, TomlConfigBackend};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[scanner]` section of bandroom.toml.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScannerConfig {
  /// Directories holding record files. Empty means `<data_dir>/records`.
  #[serde(default)]
  pub roots: Vec<PathBuf>,

  /// Skip hidden files and directories.
  #[serde(default = "default_ignore_hidden")]
  pub ignore_hidden: bool,

  /// Optional maximum depth below each root.
  pub max_depth: Option<u32>,
}

fn default_ignore_hidden() -> bool {
  true
}

impl Default for ScannerConfig {
  fn default() -> Self {
    ScannerConfig { roots: Vec::new(), ignore_hidden: default_ignore_hidden(), max_depth: None }
  }
}

impl ScannerConfig {
  /// Scans only `root`, with the default filters.
  pub fn for_root(root: impl Into<PathBuf>) -> Self {
    ScannerConfig { roots: vec![root.into()], ..Default::default() }
  }

  fn with_default_roots(mut self, paths: &BandroomPaths) -> Self {
    if self.roots.is_empty() {
      self.roots.push(paths.data_dir.join("records"));
    }
    self
  }

  /// Loads the section, writing the defaults back on first use.
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&CONFIG_BACKEND)
  }

  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg = backend.load_section_with_default::<Self>("scanner")?.with_default_roots(backend.paths());
    backend.save_section("scanner", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("scanner", self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn explicit_section_wins_over_defaults() {
    let tmp = tempdir().unwrap();
    let paths = BandroomPaths::from_base(tmp.path()).unwrap();
    std::fs::write(paths.config_file(), "[scanner]\nroots = [\"/srv/music\"]\nmax_depth = 2\n").unwrap();
    let backend = TomlConfigBackend::new(paths);

    let cfg = ScannerConfig::load_from(&backend).unwrap();

    assert_eq!(cfg.roots, vec![PathBuf::from("/srv/music")]);
    assert!(cfg.ignore_hidden);
    assert_eq!(cfg.max_depth, Some(2));
  }

  #[test]
  fn first_load_writes_defaults_back() {
    let tmp = tempdir().unwrap();
    let paths = BandroomPaths::from_base(tmp.path()).unwrap();
    std::fs::write(paths.config_file(), "").unwrap();
    let backend = TomlConfigBackend::new(paths.clone());

    let cfg = ScannerConfig::load_from(&backend).unwrap();
    assert_eq!(cfg.roots, vec![paths.data_dir.join("records")]);
    assert!(cfg.ignore_hidden);

    let stored: ScannerConfig = backend.load_section("scanner").unwrap();
    assert_eq!(stored, cfg);
  }

  #[test]
  fn partial_section_keeps_defaults() {
    let tmp = tempdir().unwrap();
    let paths = BandroomPaths::from_base(tmp.path()).unwrap();
    std::fs::write(paths.config_file(), "[scanner]\nignore_hidden = false\n").unwrap();
    let backend = TomlConfigBackend::new(paths.clone());

    let cfg = ScannerConfig::load_from(&backend).unwrap();

    assert_eq!(cfg.roots, vec![paths.data_dir.join("records")]);
    assert!(!cfg.ignore_hidden);
    assert_eq!(cfg.max_depth, None);
  }
}
