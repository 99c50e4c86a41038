pub mod adapter;
pub mod config;
pub mod record_scanner;

pub use adapter::DataDirSource;
pub use config::ScannerConfig;
pub use record_scanner::{RecordFile, ScannerError, scan_record_files};
