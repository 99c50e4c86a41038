pub mod config;
pub mod layout;
pub mod roster;

use std::fs;
use std::path::{Path, PathBuf};

use bandroom_core::codec::{self, Record};
use bandroom_core::domain::{Band, Musician, Studio};
use bandroom_core::ports::{CatalogRepository, RepoError};
use bandroom_fs::{ScanOptions, atomic_write_str, scan_files};
use tracing::debug;

pub use config::StorageConfig;
use layout::EntityKind;

/// Catalog kept as one JSON record file per entity.
///
/// Files hold the same envelopes the codec produces, so a catalog directory
/// can itself be imported. Names whose slugs collide share a file; the last
/// save wins.
#[derive(Debug, Clone)]
pub struct JsonCatalogStore {
  root: PathBuf,
  pretty: bool,
}

fn storage_err(e: impl std::fmt::Display) -> RepoError {
  RepoError::Storage(e.to_string())
}

impl JsonCatalogStore {
  pub fn new(root: impl Into<PathBuf>, pretty: bool) -> Result<Self, RepoError> {
    let root = root.into();
    for kind in EntityKind::ALL {
      fs::create_dir_all(kind.dir(&root)).map_err(storage_err)?;
    }
    Ok(Self { root, pretty })
  }

  /// Opens the catalog described by the `[storage]` config section.
  pub fn new_from_config() -> Result<Self, RepoError> {
    let cfg = StorageConfig::load().map_err(storage_err)?;
    Self::new(cfg.catalog_dir, cfg.pretty)
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  fn write(&self, kind: EntityKind, record: Record) -> Result<(), RepoError> {
    let path = kind.file(&self.root, record.name());
    let json = codec::encode(&record, self.pretty).map_err(storage_err)?;
    atomic_write_str(&path, &json).map_err(storage_err)?;
    debug!(path = %path.display(), kind = record.kind(), "record saved");
    Ok(())
  }

  fn read(path: &Path) -> Result<Record, RepoError> {
    let json = fs::read_to_string(path).map_err(storage_err)?;
    codec::decode(&json).map_err(|e| RepoError::Storage(format!("{}: {e}", path.display())))
  }

  fn find(&self, kind: EntityKind, name: &str) -> Result<Option<Record>, RepoError> {
    let path = kind.file(&self.root, name);
    if !path.is_file() {
      return Ok(None);
    }
    let record = Self::read(&path)?;
    // A different name behind the same slug is not a match.
    Ok((record.name() == name).then_some(record))
  }

  fn read_all(&self, kind: EntityKind) -> Result<Vec<Record>, RepoError> {
    let opts = ScanOptions { extensions: vec!["json".into()], ignore_hidden: true, max_depth: Some(0) };
    let files = scan_files(&kind.dir(&self.root), &opts).map_err(storage_err)?;

    files.iter().map(|f| Self::read(&f.path)).collect()
  }
}

fn unexpected(kind: EntityKind, record: &Record) -> RepoError {
  RepoError::Storage(format!("{} directory holds a {} record", kind.dir_name(), record.kind()))
}

impl CatalogRepository for JsonCatalogStore {
  fn save_musician(&self, musician: &Musician) -> Result<(), RepoError> {
    self.write(EntityKind::Musician, Record::Musician(musician.clone()))
  }

  fn save_band(&self, band: &Band) -> Result<(), RepoError> {
    self.write(EntityKind::Band, Record::Band(band.clone()))
  }

  fn save_studio(&self, studio: &Studio) -> Result<(), RepoError> {
    self.write(EntityKind::Studio, Record::Studio(studio.clone()))
  }

  fn find_band(&self, name: &str) -> Result<Option<Band>, RepoError> {
    match self.find(EntityKind::Band, name)? {
      Some(Record::Band(b)) => Ok(Some(b)),
      Some(other) => Err(unexpected(EntityKind::Band, &other)),
      None => Ok(None),
    }
  }

  fn find_studio(&self, name: &str) -> Result<Option<Studio>, RepoError> {
    match self.find(EntityKind::Studio, name)? {
      Some(Record::Studio(s)) => Ok(Some(s)),
      Some(other) => Err(unexpected(EntityKind::Studio, &other)),
      None => Ok(None),
    }
  }

  fn list_musicians(&self) -> Result<Vec<Musician>, RepoError> {
    self
      .read_all(EntityKind::Musician)?
      .into_iter()
      .map(|r| match r {
        Record::Musician(m) => Ok(m),
        other => Err(unexpected(EntityKind::Musician, &other)),
      })
      .collect()
  }

  fn list_bands(&self) -> Result<Vec<Band>, RepoError> {
    self
      .read_all(EntityKind::Band)?
      .into_iter()
      .map(|r| match r {
        Record::Band(b) => Ok(b),
        other => Err(unexpected(EntityKind::Band, &other)),
      })
      .collect()
  }

  fn list_studios(&self) -> Result<Vec<Studio>, RepoError> {
    self
      .read_all(EntityKind::Studio)?
      .into_iter()
      .map(|r| match r {
        Record::Studio(s) => Ok(s),
        other => Err(unexpected(EntityKind::Studio, &other)),
      })
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use bandroom_core::dates::PartialDate;
  use chrono::NaiveDate;
  use tempfile::tempdir;

  fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn pink_floyd() -> Band {
    Band::new(
      "Pink Floyd",
      [Musician::new("Roger Waters").with_instrument("bass"), Musician::new("Nick Mason").with_instrument("drums")],
      ymd(1965, 2, 12),
      Some(PartialDate::Exact(ymd(1995, 3, 14))),
    )
  }

  #[test]
  fn saves_and_finds_entities() {
    let tmp = tempdir().unwrap();
    let store = JsonCatalogStore::new(tmp.path(), true).unwrap();
    let studio = Studio::new("Abbey Road", "London", [pink_floyd()], ymd(1967, 1, 1), ymd(1967, 12, 31)).unwrap();

    store.save_band(&pink_floyd()).unwrap();
    store.save_studio(&studio).unwrap();
    store.save_musician(&Musician::new("Syd Barrett")).unwrap();

    assert!(tmp.path().join("bands").join("pink_floyd.json").is_file());
    let band = store.find_band("Pink Floyd").unwrap().unwrap();
    assert_eq!(band, pink_floyd());
    assert_eq!(band.formed, pink_floyd().formed);
    assert_eq!(store.find_studio("Abbey Road").unwrap(), Some(studio));
    assert_eq!(store.list_musicians().unwrap(), vec![Musician::new("Syd Barrett")]);
  }

  #[test]
  fn missing_and_colliding_names_are_none() {
    let tmp = tempdir().unwrap();
    let store = JsonCatalogStore::new(tmp.path(), false).unwrap();
    store.save_band(&pink_floyd()).unwrap();

    assert_eq!(store.find_band("The Who").unwrap(), None);
    assert_eq!(store.find_band("pink floyd").unwrap(), None);
  }

  #[test]
  fn lists_sorted_by_file_name() {
    let tmp = tempdir().unwrap();
    let store = JsonCatalogStore::new(tmp.path(), false).unwrap();
    store.save_band(&pink_floyd()).unwrap();
    store.save_band(&Band::new("Cream", [], PartialDate::Year(1966), Some(PartialDate::Year(1968)))).unwrap();

    let names: Vec<String> = store.list_bands().unwrap().into_iter().map(|b| b.name).collect();
    assert_eq!(names, vec!["Cream", "Pink Floyd"]);
    assert!(store.list_studios().unwrap().is_empty());
  }

  #[test]
  fn malformed_file_is_a_storage_error() {
    let tmp = tempdir().unwrap();
    let store = JsonCatalogStore::new(tmp.path(), false).unwrap();
    fs::write(tmp.path().join("bands").join("cream.json"), "{ not json").unwrap();

    assert!(matches!(store.find_band("Cream"), Err(RepoError::Storage(_))));
    assert!(matches!(store.list_bands(), Err(RepoError::Storage(_))));
  }

  #[test]
  fn wrong_record_type_is_rejected() {
    let tmp = tempdir().unwrap();
    let store = JsonCatalogStore::new(tmp.path(), false).unwrap();
    let json = codec::musician_to_json(&Musician::new("Cream"), false).unwrap();
    fs::write(tmp.path().join("bands").join("cream.json"), json).unwrap();

    assert!(matches!(store.find_band("Cream"), Err(RepoError::Storage(_))));
  }
}
