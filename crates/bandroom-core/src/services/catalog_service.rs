use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::codec::{self, Record};
use crate::domain::{Band, Musician, Studio};
use crate::errors::CoreError;
use crate::ports::{
  CatalogRepository, ImportSummary, ProgressReporter, RawRecord, RecordEntry, RecordFormat, RecordSource, RepoError,
};

fn repo_err(e: RepoError) -> CoreError {
  CoreError::Repository(e.to_string())
}

/// Imports records into a catalog and answers queries about it.
///
/// Only [`CatalogService::import_all`] needs a source and a reporter; the
/// rest works on the repository alone (see [`CatalogService::for_repository`]).
pub struct CatalogService<S, R, P> {
  source: S,
  repo: R,
  reporter: P,
}

impl<R: CatalogRepository> CatalogService<(), R, ()> {
  pub fn for_repository(repo: R) -> Self {
    Self { source: (), repo, reporter: () }
  }
}

impl<S, R, P> CatalogService<S, R, P>
where
  S: RecordSource,
  R: CatalogRepository,
  P: ProgressReporter,
{
  pub fn new(source: S, repo: R, reporter: P) -> Self {
    Self { source, repo, reporter }
  }

  /// Imports every record the source offers:
  /// - reads it and decodes it according to its format
  /// - saves each decoded entity
  ///
  /// A record that fails to read, decode or save is reported, counted and
  /// skipped. Entities saved before a failure within the same record stay
  /// saved and are counted. Only a failing listing aborts the import.
  pub fn import_all(&self) -> Result<ImportSummary, CoreError> {
    let entries = self.source.list_records().map_err(|e| CoreError::Scan(e.to_string()))?;

    self.reporter.start(entries.len());
    let mut summary = ImportSummary::default();

    for entry in &entries {
      match self.import_one(entry, &mut summary.entities) {
        Ok(()) => {
          summary.imported += 1;
          self.reporter.on_success(&entry.origin);
        }
        Err(e) => {
          summary.failed += 1;
          warn!(origin = %entry.origin, format = %entry.format, error = %e, "record skipped");
          self.reporter.on_error(&entry.origin, &e.to_string());
        }
      }
    }

    info!(imported = summary.imported, failed = summary.failed, entities = summary.entities, "import finished");
    self.reporter.finish(&summary);

    Ok(summary)
  }

  fn import_one(&self, entry: &RecordEntry, saved: &mut usize) -> Result<(), CoreError> {
    let raw = self.source.read_record(entry).map_err(|e| CoreError::Scan(e.to_string()))?;
    let records = decode_raw(&raw)?;
    for record in &records {
      self.save_record(record)?;
      *saved += 1;
    }
    debug!(origin = %raw.origin, count = records.len(), "record imported");
    Ok(())
  }
}

impl<S, R: CatalogRepository, P> CatalogService<S, R, P> {
  pub fn repository(&self) -> &R {
    &self.repo
  }

  pub fn save_record(&self, record: &Record) -> Result<(), CoreError> {
    let saved = match record {
      Record::Musician(m) => self.repo.save_musician(m),
      Record::Band(b) => self.repo.save_band(b),
      Record::Studio(s) => self.repo.save_studio(s),
    };
    saved.map_err(repo_err)
  }

  /// Books already stored bands into a new studio and saves it.
  pub fn register_studio(
    &self,
    name: &str,
    location: &str,
    band_names: &[&str],
    start_date: NaiveDate,
    end_date: NaiveDate,
  ) -> Result<Studio, CoreError> {
    let mut bands = Vec::with_capacity(band_names.len());
    for band_name in band_names {
      let band = self.repo.find_band(band_name).map_err(repo_err)?;
      bands.push(band.ok_or_else(|| CoreError::NotFound(format!("band {band_name:?}")))?);
    }

    let studio = Studio::new(name, location, bands, start_date, end_date)?;
    self.repo.save_studio(&studio).map_err(repo_err)?;

    Ok(studio)
  }

  // -------- QUERY (read) --------

  pub fn list_musicians(&self) -> Result<Vec<Musician>, CoreError> {
    self.repo.list_musicians().map_err(repo_err)
  }

  pub fn list_bands(&self) -> Result<Vec<Band>, CoreError> {
    self.repo.list_bands().map_err(repo_err)
  }

  pub fn list_studios(&self) -> Result<Vec<Studio>, CoreError> {
    self.repo.list_studios().map_err(repo_err)
  }

  pub fn get_band(&self, name: &str) -> Result<Option<Band>, CoreError> {
    self.repo.find_band(name).map_err(repo_err)
  }

  pub fn get_studio(&self, name: &str) -> Result<Option<Studio>, CoreError> {
    self.repo.find_studio(name).map_err(repo_err)
  }
}

/// Turns a raw record into domain records.
pub fn decode_raw(raw: &RawRecord) -> Result<Vec<Record>, CoreError> {
  match raw.format {
    RecordFormat::Json => codec::decode_all(&raw.body).map_err(|e| CoreError::Decode(e.to_string())),
    RecordFormat::Roster => parse_roster(&raw.body)
      .map(|members| members.into_iter().map(Record::Musician).collect())
      .map_err(|e| CoreError::Decode(e.to_string())),
    RecordFormat::BandSheet => raw
      .body
      .parse::<Band>()
      .map(|b| vec![Record::Band(b)])
      .map_err(|e| CoreError::Decode(e.to_string())),
  }
}

/// Parses one musician per line, skipping blank lines.
pub fn parse_roster(text: &str) -> Result<Vec<Musician>, CoreError> {
  text
    .lines()
    .enumerate()
    .filter(|(_, line)| !line.trim().is_empty())
    .map(|(idx, line)| line.parse::<Musician>().map_err(|e| CoreError::Decode(format!("line {}: {e}", idx + 1))))
    .collect()
}
