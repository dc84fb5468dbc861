use crate::delimiter::DelimiterPair;
use crate::position::Position;
use std::fmt;

/// A closing character that drove the balance below zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraClosing {
    /// Zero-based character offset of the closing character
    pub char_index: usize,
    /// Zero-based byte offset of the closing character
    pub byte_offset: usize,
    /// Line and column of the closing character
    pub position: Position,
    /// Balance right after the closing character (always negative)
    pub balance: i64,
}

/// Final state of the balance counter once the scan finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Counter ended at zero
    Balanced,
    /// Counter ended positive; that many closing characters are missing
    Missing(u64),
    /// Counter ended negative; that many closing characters are surplus
    Overclosed(u64),
}

impl Verdict {
    pub fn from_balance(balance: i64) -> Self {
        match balance {
            0 => Verdict::Balanced,
            b if b > 0 => Verdict::Missing(b.unsigned_abs()),
            b => Verdict::Overclosed(b.unsigned_abs()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Verdict::Balanced => "balanced",
            Verdict::Missing(_) => "missing",
            Verdict::Overclosed(_) => "overclosed",
        }
    }

    /// Closing line for this verdict; none is printed when overclosed
    pub fn message(&self, pair: &DelimiterPair) -> Option<String> {
        match self {
            Verdict::Balanced => Some(format!("{} are balanced", pair.plural_capitalized())),
            Verdict::Missing(n) => Some(format!("Missing {} closing {}", n, pair.plural)),
            Verdict::Overclosed(_) => None,
        }
    }
}

/// Outcome of a single scan
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    /// Delimiters that were counted
    pub pair: DelimiterPair,
    /// Every point where the balance went negative, in scan order
    pub extra_closing: Vec<ExtraClosing>,
    /// Final balance: opened minus closed
    pub balance: i64,
    /// Number of opening characters seen
    pub opened: u64,
    /// Number of closing characters seen
    pub closed: u64,
    /// Number of characters examined
    pub chars_scanned: usize,
}

impl Report {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_balance(self.balance)
    }

    pub fn is_balanced(&self) -> bool {
        self.balance == 0 && self.extra_closing.is_empty()
    }

    /// Diagnostic lines in output order
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .extra_closing
            .iter()
            .map(|e| format!("Extra closing {} at char {}", self.pair.noun, e.char_index))
            .collect();
        lines.extend(self.verdict().message(&self.pair));
        lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extra(char_index: usize, balance: i64) -> ExtraClosing {
        ExtraClosing {
            char_index,
            byte_offset: char_index,
            position: Position { line: 1, column: char_index + 1 },
            balance,
        }
    }

    #[test]
    fn test_verdict_from_balance() {
        assert_eq!(Verdict::from_balance(0), Verdict::Balanced);
        assert_eq!(Verdict::from_balance(3), Verdict::Missing(3));
        assert_eq!(Verdict::from_balance(-2), Verdict::Overclosed(2));
    }

    #[test]
    fn test_lines_missing() {
        let report = Report { balance: 2, opened: 2, ..Default::default() };
        assert_eq!(report.lines(), vec!["Missing 2 closing braces"]);
    }

    #[test]
    fn test_lines_extra_then_balanced() {
        let report = Report {
            extra_closing: vec![extra(0, -1)],
            balance: 0,
            opened: 1,
            closed: 1,
            chars_scanned: 2,
            ..Default::default()
        };

        assert_eq!(
            report.to_string(),
            "Extra closing brace at char 0\nBraces are balanced"
        );
        assert!(!report.is_balanced());
    }

    #[test]
    fn test_overclosed_has_no_final_line() {
        let report = Report {
            extra_closing: vec![extra(0, -1), extra(1, -2)],
            balance: -2,
            closed: 2,
            chars_scanned: 2,
            ..Default::default()
        };

        assert_eq!(report.verdict().message(&report.pair), None);
        assert_eq!(
            report.lines(),
            vec!["Extra closing brace at char 0", "Extra closing brace at char 1"]
        );
    }

    #[test]
    fn test_lines_name_the_delimiter() {
        use crate::delimiter::Delimiter;

        let report = Report {
            pair: Delimiter::Paren.pair(),
            extra_closing: vec![extra(0, -1)],
            balance: 0,
            ..Default::default()
        };
        assert_eq!(
            report.lines(),
            vec!["Extra closing parenthesis at char 0", "Parentheses are balanced"]
        );

        let report = Report {
            pair: Delimiter::Square.pair(),
            balance: 3,
            ..Default::default()
        };
        assert_eq!(report.lines(), vec!["Missing 3 closing brackets"]);
    }
}
