use std::path::PathBuf;

use bandroom_core::services::CatalogService;
use bandroom_scanner::{DataDirSource, ScannerConfig};
use bandroom_storage::JsonCatalogStore;

use crate::reporter::TracingReporter;

pub fn import(dir: Option<PathBuf>) -> anyhow::Result<()> {
  let source = match dir {
    Some(dir) => DataDirSource::new(ScannerConfig::for_root(dir)),
    None => DataDirSource::from_config()?,
  };
  let store = JsonCatalogStore::new_from_config()?;
  let service = CatalogService::new(source, store, TracingReporter);

  let summary = service.import_all()?;

  println!("imported {} record(s), {} entities, {} failed", summary.imported, summary.entities, summary.failed);
  Ok(())
}

pub fn list() -> anyhow::Result<()> {
  let service = CatalogService::for_repository(JsonCatalogStore::new_from_config()?);

  let bands = service.list_bands()?;
  println!("Bands ({}):", bands.len());
  for band in &bands {
    println!("  {} ({} members)", band.name, band.members.len());
  }

  let studios = service.list_studios()?;
  println!("Studios ({}):", studios.len());
  for studio in &studios {
    println!("  {} - {}, {} to {}", studio.name(), studio.location(), studio.start_date(), studio.end_date());
  }
  Ok(())
}
