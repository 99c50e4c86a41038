use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bandroom_core::codec;
use bandroom_core::domain::{Band, Studio};
use bandroom_core::services::CatalogService;
use bandroom_storage::JsonCatalogStore;
use tracing::info;

use super::Sessions;

pub fn check(sessions: &Sessions, band_files: &[PathBuf]) -> anyhow::Result<()> {
  let bands = band_files.iter().map(PathBuf::as_path).map(read_band).collect::<anyhow::Result<Vec<_>>>()?;

  match Studio::new(&sessions.name, &sessions.location, bands, sessions.start, sessions.end) {
    Ok(studio) => {
      println!("{studio}");
      Ok(())
    }
    Err(e) => anyhow::bail!("studio rejected: {e}"),
  }
}

fn read_band(file: &Path) -> anyhow::Result<Band> {
  let json = fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
  codec::band_from_json(&json).with_context(|| format!("decoding {}", file.display()))
}

pub fn register(sessions: &Sessions, band_names: &[String]) -> anyhow::Result<()> {
  let service = CatalogService::for_repository(JsonCatalogStore::new_from_config()?);

  let names: Vec<&str> = band_names.iter().map(String::as_str).collect();
  let studio = service.register_studio(&sessions.name, &sessions.location, &names, sessions.start, sessions.end)?;

  info!(studio = studio.name(), bands = names.len(), "studio registered");
  println!("{studio}");
  Ok(())
}
