use bandroom_config::{BandroomPaths, CONFIG_BACKEND, ConfigBackend, ConfigError, TomlConfigBackend};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[storage]` section of bandroom.toml.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
  /// Root of the JSON catalog. Empty means `<data_dir>/catalog`.
  #[serde(default)]
  pub catalog_dir: PathBuf,
  /// Indent written JSON files.
  #[serde(default = "default_pretty")]
  pub pretty: bool,
}

fn default_pretty() -> bool {
  true
}

impl Default for StorageConfig {
  fn default() -> Self {
    StorageConfig { catalog_dir: PathBuf::new(), pretty: default_pretty() }
  }
}

impl StorageConfig {
  fn with_default_dir(mut self, paths: &BandroomPaths) -> Self {
    if self.catalog_dir.as_os_str().is_empty() {
      self.catalog_dir = paths.data_dir.join("catalog");
    }
    self
  }

  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&CONFIG_BACKEND)
  }

  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg = backend.load_section_with_default::<Self>("storage")?.with_default_dir(backend.paths());
    backend.save_section("storage", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("storage", self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn first_load_writes_defaults_back() {
    let tmp = tempdir().unwrap();
    let paths = BandroomPaths::from_base(tmp.path()).unwrap();
    std::fs::write(paths.config_file(), "").unwrap();
    let backend = TomlConfigBackend::new(paths.clone());

    let cfg = StorageConfig::load_from(&backend).unwrap();
    assert_eq!(cfg, StorageConfig { catalog_dir: paths.data_dir.join("catalog"), pretty: true });

    let written = std::fs::read_to_string(paths.config_file()).unwrap();
    assert!(written.contains("[storage]"));
    let stored: StorageConfig = backend.load_section("storage").unwrap();
    assert_eq!(stored, cfg);
  }

  #[test]
  fn partial_section_keeps_defaults() {
    let tmp = tempdir().unwrap();
    let paths = BandroomPaths::from_base(tmp.path()).unwrap();
    std::fs::write(paths.config_file(), "[storage]\npretty = false\n").unwrap();
    let backend = TomlConfigBackend::new(paths.clone());

    let cfg = StorageConfig::load_from(&backend).unwrap();

    assert_eq!(cfg.catalog_dir, paths.data_dir.join("catalog"));
    assert!(!cfg.pretty);
  }
}
