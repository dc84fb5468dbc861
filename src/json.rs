use crate::report::{Report, Verdict};
use serde::Serialize;

/// One extra closing character in JSON form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtraClosingJson {
    pub char_index: usize,
    pub byte_offset: usize,
    pub line: usize,
    pub column: usize,
    pub balance: i64,
}

/// Machine-readable result of one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResponse {
    pub success: bool,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    pub delimiters: String,
    pub balance: i64,
    /// `balanced`, `missing` or `overclosed`; absent on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<String>,
    pub missing: u64,
    pub opened: u64,
    pub closed: u64,
    pub chars_scanned: usize,
    pub extra_closing: Vec<ExtraClosingJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScanResponse {
    pub fn success(path: String, checksum: String, delimiters: String, report: &Report) -> Self {
        let verdict = report.verdict();
        let missing = match verdict {
            Verdict::Missing(n) => n,
            _ => 0,
        };

        ScanResponse {
            success: true,
            path,
            checksum: Some(checksum),
            delimiters,
            balance: report.balance,
            verdict: Some(verdict.name().to_string()),
            missing,
            opened: report.opened,
            closed: report.closed,
            chars_scanned: report.chars_scanned,
            extra_closing: report
                .extra_closing
                .iter()
                .map(|e| ExtraClosingJson {
                    char_index: e.char_index,
                    byte_offset: e.byte_offset,
                    line: e.position.line,
                    column: e.position.column,
                    balance: e.balance,
                })
                .collect(),
            error: None,
        }
    }

    pub fn failure(path: String, delimiters: String, error: String) -> Self {
        ScanResponse {
            success: false,
            path,
            checksum: None,
            delimiters,
            balance: 0,
            verdict: None,
            missing: 0,
            opened: 0,
            closed: 0,
            chars_scanned: 0,
            extra_closing: Vec::new(),
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delimiter::DelimiterPair;
    use crate::scan::scan_str;

    #[test]
    fn test_success_json_shape() {
        let report = scan_str("}\n{{", DelimiterPair::default());
        let response = ScanResponse::success(
            "Foo.kt".to_string(),
            "abc".to_string(),
            "{}".to_string(),
            &report,
        );
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["verdict"], "missing");
        assert_eq!(json["missing"], 1);
        assert_eq!(json["balance"], 1);
        assert_eq!(json["extra_closing"][0]["char_index"], 0);
        assert_eq!(json["extra_closing"][0]["line"], 1);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_overclosed_is_named() {
        let report = scan_str("}", DelimiterPair::default());
        let response =
            ScanResponse::success("x".to_string(), "c".to_string(), "{}".to_string(), &report);

        assert_eq!(response.verdict.as_deref(), Some("overclosed"));
        assert_eq!(response.missing, 0);
    }

    #[test]
    fn test_failure_json_shape() {
        let response = ScanResponse::failure(
            "missing.kt".to_string(),
            "{}".to_string(),
            "File not found: missing.kt".to_string(),
        );
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "File not found: missing.kt");
        assert!(json.get("verdict").is_none());
        assert!(json.get("checksum").is_none());
    }
}
