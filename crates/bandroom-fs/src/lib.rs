pub mod io;
pub mod scanner;

pub use io::atomic_write_str;
pub use scanner::{FsError, ScanOptions, ScannedFile, scan_files};
