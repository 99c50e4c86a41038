/// Outcome of a catalog import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
  /// Records decoded and saved.
  pub imported: usize,
  /// Records skipped because of an error.
  pub failed: usize,
  /// Entities saved across all imported records.
  pub entities: usize,
}

// Implemented by the front end (CLI logs, tests collect).
pub trait ProgressReporter {
  fn start(&self, total_records: usize);
  fn on_success(&self, origin: &str);
  fn on_error(&self, origin: &str, error: &str);
  fn finish(&self, summary: &ImportSummary);
}
