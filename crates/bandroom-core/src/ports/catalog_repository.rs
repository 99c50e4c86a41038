use crate::domain::{Band, Musician, Studio};

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
  #[error("entity not found")]
  NotFound,
  #[error("storage error: {0}")]
  Storage(String),
}

/// Persistence port for the catalog. Entities are keyed by name.
pub trait CatalogRepository {
  fn save_musician(&self, musician: &Musician) -> Result<(), RepoError>;
  fn save_band(&self, band: &Band) -> Result<(), RepoError>;
  fn save_studio(&self, studio: &Studio) -> Result<(), RepoError>;

  fn find_band(&self, name: &str) -> Result<Option<Band>, RepoError>;
  fn find_studio(&self, name: &str) -> Result<Option<Studio>, RepoError>;

  fn list_musicians(&self) -> Result<Vec<Musician>, RepoError>;
  fn list_bands(&self) -> Result<Vec<Band>, RepoError>;
  fn list_studios(&self) -> Result<Vec<Studio>, RepoError>;
}
