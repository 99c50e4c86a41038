mod backend;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use paths::{BASE_DIR_ENV, BandroomPaths, ConfigError};

use once_cell::sync::Lazy;

// Paths singleton (env override / system dirs)
pub static PATHS: Lazy<BandroomPaths> =
  Lazy::new(|| BandroomPaths::new().expect("failed to init BandroomPaths"));

// Config backend singleton
pub static CONFIG_BACKEND: Lazy<TomlConfigBackend> = Lazy::new(|| TomlConfigBackend::new(PATHS.clone()));
