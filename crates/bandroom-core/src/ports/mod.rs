pub mod catalog_repository;
pub mod progress;
pub mod record_source;

pub use catalog_repository::{CatalogRepository, RepoError};
pub use progress::{ImportSummary, ProgressReporter};
pub use record_source::{RawRecord, RecordEntry, RecordFormat, RecordSource, SourceError};
