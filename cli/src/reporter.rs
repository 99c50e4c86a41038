use bandroom_core::ports::{ImportSummary, ProgressReporter};
use tracing::{error, info};

/// A `ProgressReporter` that turns import events into log lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ProgressReporter for TracingReporter {
  fn start(&self, total_records: usize) {
    info!(total_records, "import started");
  }

  fn on_success(&self, origin: &str) {
    info!(origin, "imported");
  }

  fn on_error(&self, origin: &str, error: &str) {
    error!(origin, error, "import failed");
  }

  fn finish(&self, summary: &ImportSummary) {
    info!(imported = summary.imported, failed = summary.failed, "import done");
  }
}
