use clap::ValueEnum;

/// An opening character and the closing character that cancels it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterPair {
    /// Raises the balance by one
    pub open: char,
    /// Lowers the balance by one
    pub close: char,
    /// Word used for one delimiter in diagnostics ("brace")
    pub noun: &'static str,
    /// Word used for several ("braces")
    pub plural: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DelimiterError {
    #[error("opening and closing delimiter are both {0:?}")]
    SameCharacter(char),
}

impl DelimiterPair {
    /// A custom pair, reported as "delimiter"
    pub fn new(open: char, close: char) -> Result<Self, DelimiterError> {
        if open == close {
            return Err(DelimiterError::SameCharacter(open));
        }
        Ok(DelimiterPair {
            open,
            close,
            noun: "delimiter",
            plural: "delimiters",
        })
    }

    /// `plural` with its first letter upper-cased, for the start of a line
    pub fn plural_capitalized(&self) -> String {
        let mut chars = self.plural.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl Default for DelimiterPair {
    fn default() -> Self {
        Delimiter::Curly.pair()
    }
}

/// Delimiter presets selectable from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Delimiter {
    /// `{` and `}`
    #[default]
    Curly,
    /// `(` and `)`
    Paren,
    /// `[` and `]`
    Square,
    /// `<` and `>`
    Angle,
}

impl Delimiter {
    pub fn pair(self) -> DelimiterPair {
        let (open, close, noun, plural) = match self {
            Delimiter::Curly => ('{', '}', "brace", "braces"),
            Delimiter::Paren => ('(', ')', "parenthesis", "parentheses"),
            Delimiter::Square => ('[', ']', "bracket", "brackets"),
            Delimiter::Angle => ('<', '>', "angle bracket", "angle brackets"),
        };
        DelimiterPair {
            open,
            close,
            noun,
            plural,
        }
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pair = self.pair();
        write!(f, "{}{}", pair.open, pair.close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_curly() {
        let pair = DelimiterPair::default();
        assert_eq!(pair.open, '{');
        assert_eq!(pair.close, '}');
        assert_eq!(pair.noun, "brace");
        assert_eq!(pair.plural_capitalized(), "Braces");
    }

    #[test]
    fn test_presets() {
        let paren = Delimiter::Paren.pair();
        assert_eq!((paren.open, paren.close), ('(', ')'));
        assert_eq!(paren.plural, "parentheses");

        let angle = Delimiter::Angle.pair();
        assert_eq!((angle.open, angle.close), ('<', '>'));
        assert_eq!(angle.plural_capitalized(), "Angle brackets");

        assert_eq!(Delimiter::Square.to_string(), "[]");
    }

    #[test]
    fn test_same_character_rejected() {
        assert_eq!(
            DelimiterPair::new('|', '|'),
            Err(DelimiterError::SameCharacter('|'))
        );

        let custom = DelimiterPair::new('«', '»').unwrap();
        assert_eq!(custom.noun, "delimiter");
    }
}
