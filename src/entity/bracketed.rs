//! Plain-text bracketed-name format.
//!
//! A body is one or more names, each wrapped in square brackets and
//! optionally separated by whitespace:
//!
//! ```text
//! [Ada] [Grace]
//! [Linus]
//! ```
//!
//! Names are trimmed and must not be empty. Brackets do not nest.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced while decoding the bracketed format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected at least one [name]")]
    Empty,

    #[error("unexpected character '{ch}' at byte {pos}, names must be wrapped in brackets")]
    Unexpected { ch: char, pos: usize },

    #[error("nested '[' at byte {pos}")]
    Nested { pos: usize },

    #[error("unterminated '[' opened at byte {pos}")]
    Unterminated { pos: usize },

    #[error("empty name in brackets at byte {pos}")]
    EmptyName { pos: usize },

    #[error("name {name:?} cannot be written in brackets")]
    InvalidName { name: String },
}

/// A list of names decoded from (or encoded into) the bracketed format.
///
/// Every instance holds at least one trimmed, non-empty name free of `[` and
/// `]`, so its `Display` output always parses back to the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketedNames(Vec<String>);

impl BracketedNames {
    /// Build a list from plain names, trimming each one.
    pub fn new<I, S>(names: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names
            .into_iter()
            .map(|name| {
                let name = name.into();
                let trimmed = name.trim();
                if trimmed.is_empty() || trimmed.contains(['[', ']']) {
                    Err(ParseError::InvalidName { name })
                } else {
                    Ok(trimmed.to_string())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if names.is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(Self(names))
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn into_names(self) -> Vec<String> {
        self.0
    }
}

impl FromStr for BracketedNames {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut names = Vec::new();
        // Byte offset of the currently open '[', if any.
        let mut open: Option<usize> = None;

        for (pos, ch) in input.char_indices() {
            match (ch, open) {
                ('[', None) => open = Some(pos),
                ('[', Some(_)) => return Err(ParseError::Nested { pos }),
                (']', Some(start)) => {
                    let name = input[start + 1..pos].trim();
                    if name.is_empty() {
                        return Err(ParseError::EmptyName { pos: start });
                    }
                    names.push(name.to_string());
                    open = None;
                }
                (_, Some(_)) => {}
                (c, None) if c.is_ascii_whitespace() => {}
                (c, None) => return Err(ParseError::Unexpected { ch: c, pos }),
            }
        }

        if let Some(pos) = open {
            return Err(ParseError::Unterminated { pos });
        }
        if names.is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(Self(names))
    }
}

impl fmt::Display for BracketedNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "[{}]", name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_name() {
        let parsed: BracketedNames = "[Alice]".parse().unwrap();
        assert_eq!(parsed.names(), ["Alice"]);
    }

    #[test]
    fn test_multiple_names_with_whitespace() {
        let parsed: BracketedNames = "  [Alice]\n[ Bob Smith ]\t[Carol]\n".parse().unwrap();
        assert_eq!(parsed.names(), ["Alice", "Bob Smith", "Carol"]);
    }

    #[test]
    fn test_adjacent_names() {
        let parsed: BracketedNames = "[a][b]".parse().unwrap();
        assert_eq!(parsed.into_names(), vec!["a", "b"]);
    }

    #[test]
    fn test_unicode_names() {
        let parsed: BracketedNames = "[Zoë] [李]".parse().unwrap();
        assert_eq!(parsed.names(), ["Zoë", "李"]);
    }

    #[test]
    fn test_errors() {
        assert_eq!("".parse::<BracketedNames>(), Err(ParseError::Empty));
        assert_eq!("   ".parse::<BracketedNames>(), Err(ParseError::Empty));
        assert_eq!(
            "Alice".parse::<BracketedNames>(),
            Err(ParseError::Unexpected { ch: 'A', pos: 0 })
        );
        assert_eq!(
            "[Alice] x".parse::<BracketedNames>(),
            Err(ParseError::Unexpected { ch: 'x', pos: 8 })
        );
        assert_eq!(
            "[Al[ice]".parse::<BracketedNames>(),
            Err(ParseError::Nested { pos: 3 })
        );
        assert_eq!(
            "[Alice] [Bob".parse::<BracketedNames>(),
            Err(ParseError::Unterminated { pos: 8 })
        );
        assert_eq!(
            "[Alice] [  ]".parse::<BracketedNames>(),
            Err(ParseError::EmptyName { pos: 8 })
        );
        assert_eq!(
            "]".parse::<BracketedNames>(),
            Err(ParseError::Unexpected { ch: ']', pos: 0 })
        );
    }

    #[test]
    fn test_display_matches_format() {
        let names = BracketedNames::new(["Ada", "Grace"]).unwrap();
        assert_eq!(names.to_string(), "[Ada] [Grace]");
        assert_eq!(names.to_string().parse::<BracketedNames>().unwrap(), names);
    }

    #[test]
    fn test_new_trims_and_round_trips() {
        let names = BracketedNames::new(["  Bob Smith ", "Zoë"]).unwrap();
        assert_eq!(names.names(), ["Bob Smith", "Zoë"]);
        assert_eq!(names.to_string(), "[Bob Smith] [Zoë]");
        assert_eq!(names.to_string().parse::<BracketedNames>().unwrap(), names);
    }

    #[test]
    fn test_new_rejects_unencodable_names() {
        for bad in ["a]b", "[a", "", "   "] {
            assert_eq!(
                BracketedNames::new(["ok", bad]),
                Err(ParseError::InvalidName { name: bad.into() }),
                "{:?}",
                bad
            );
        }
        assert_eq!(
            BracketedNames::new(Vec::<String>::new()),
            Err(ParseError::Empty)
        );
    }
}
