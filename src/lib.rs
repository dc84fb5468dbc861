// Source file loading
pub mod file;

// Character position tracking
pub mod position;

// Delimiter pairs
pub mod delimiter;

// Balance scanner
pub mod scan;

// Scan report and verdict
pub mod report;

// JSON output module
pub mod json;

// Re-exports
pub use delimiter::{Delimiter, DelimiterError, DelimiterPair};
pub use file::{FileContent, FileError, read_file};
pub use json::{ExtraClosingJson, ScanResponse};
pub use position::{Cursor, Located, Position};
pub use report::{ExtraClosing, Report, Verdict};
pub use scan::{ScannedFile, scan, scan_str, scan_with};
