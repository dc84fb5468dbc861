use crate::delimiter::DelimiterPair;
use crate::file::{FileError, read_file};
use crate::position::Cursor;
use crate::report::{ExtraClosing, Report};
use std::path::Path;
use tracing::{debug, info};

/// A scanned file: where it came from, which bytes were read, what was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Path the file was read from, as given
    pub path: String,
    /// BLAKE3 hash of the bytes that were scanned (hex-encoded)
    pub checksum: String,
    pub report: Report,
}

/// Scan a file for unbalanced `{` / `}`
pub fn scan<P: AsRef<Path>>(path: P) -> Result<Report, FileError> {
    scan_with(path, DelimiterPair::default()).map(|scanned| scanned.report)
}

/// Scan a file for an unbalanced delimiter pair
///
/// The file is read completely and closed before the scan starts.
pub fn scan_with<P: AsRef<Path>>(path: P, pair: DelimiterPair) -> Result<ScannedFile, FileError> {
    let file = read_file(path)?;
    let report = scan_str(&file.content, pair);

    info!(
        path = %file.path,
        balance = report.balance,
        extra_closing = report.extra_closing.len(),
        verdict = report.verdict().name(),
        "scan complete"
    );

    Ok(ScannedFile {
        path: file.path,
        checksum: file.checksum,
        report,
    })
}

/// Single pass over `content`, counting `pair.open` up and `pair.close` down.
///
/// Every closing character that leaves the balance negative is recorded;
/// the scan always runs to the end of the input.
pub fn scan_str(content: &str, pair: DelimiterPair) -> Report {
    let mut report = Report {
        pair,
        ..Default::default()
    };
    let mut balance: i64 = 0;

    for (located, ch) in Cursor::new(content) {
        report.chars_scanned += 1;

        if ch == pair.open {
            balance += 1;
            report.opened += 1;
        } else if ch == pair.close {
            balance -= 1;
            report.closed += 1;

            if balance < 0 {
                debug!(
                    char_index = located.char_index,
                    line = located.position.line,
                    column = located.position.column,
                    balance,
                    "extra closing delimiter"
                );
                report.extra_closing.push(ExtraClosing {
                    char_index: located.char_index,
                    byte_offset: located.byte_offset,
                    position: located.position,
                    balance,
                });
            }
        }
    }

    report.balance = balance;
    report
}
