//! Four-slot tokenized version
//!
//! A version string is split into major, minor and micro numeric slots plus a
//! trailing qualifier:
//! - `8` -> [8, -, -, -]
//! - `8.+` -> [8, +, -, -]
//! - `1.8.0_25` -> [1, 8, 0, "25"]
//! - `1.0.0.GA` -> [1, 0, 0, "GA"]

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::version::error::FormatError;
use crate::version::token::{Token, WILDCARD};

/// Number of slots in every tokenized version
pub const SLOT_COUNT: usize = 4;

/// Specifier shape: numeric groups or `+`, optional qualifier after the micro group
static STRICT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d+|\+)(?:\.(\d+|\+)(?:\.(\d+|\+)(?:([._-])([A-Za-z0-9_-]+|\+))?)?)?$",
    )
    .expect("strict version regex should compile")
});

/// Catalog shape: same groups, qualifier may hold any text
static LENIENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+|\+)(?:\.(\d+|\+)(?:\.(\d+|\+)(?:([._-])(.+))?)?)?$")
        .expect("lenient version regex should compile")
});

/// How strictly a version string is validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Specifiers: canonical shape only, wildcards allowed
    Strict,
    /// Catalog entries: any qualifier text, wildcards rejected
    Lenient,
}

/// Separator written between the micro slot and the qualifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub(crate) enum QualifierSeparator {
    #[default]
    Dot,
    Underscore,
    Hyphen,
}

impl QualifierSeparator {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Dot),
            '_' => Some(Self::Underscore),
            '-' => Some(Self::Hyphen),
            _ => None,
        }
    }

    fn as_char(&self) -> char {
        match self {
            Self::Dot => '.',
            Self::Underscore => '_',
            Self::Hyphen => '-',
        }
    }
}

/// An immutable version split into four typed slots
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenizedVersion {
    slots: [Token; SLOT_COUNT],
    separator: QualifierSeparator,
}

impl TokenizedVersion {
    /// Parse a version string
    ///
    /// Strict mode is used for specifiers and lenient mode for catalog entries.
    pub fn parse(text: &str, mode: ParseMode) -> Result<Self, FormatError> {
        let text = match mode {
            ParseMode::Strict => text,
            ParseMode::Lenient => text.trim(),
        };
        if text.is_empty() {
            return Err(FormatError::Empty);
        }

        let re = match mode {
            ParseMode::Strict => &STRICT_RE,
            ParseMode::Lenient => &LENIENT_RE,
        };
        let Some(captures) = re.captures(text) else {
            return Err(FormatError::Malformed {
                version: text.to_string(),
            });
        };

        let version = Self::from_captures(text, &captures)?;
        if mode == ParseMode::Lenient && !version.is_concrete() {
            return Err(FormatError::WildcardNotAllowed {
                version: text.to_string(),
            });
        }
        version.validate_wildcards(text)?;
        Ok(version)
    }

    fn from_captures(text: &str, captures: &Captures<'_>) -> Result<Self, FormatError> {
        let numeric = |index: usize| -> Result<Token, FormatError> {
            match captures.get(index).map(|m| m.as_str()) {
                None => Ok(Token::Absent),
                Some(WILDCARD) => Ok(Token::Wildcard),
                Some(digits) => digits
                    .parse::<u64>()
                    .map(Token::Numeric)
                    .map_err(|_| FormatError::Malformed {
                        version: text.to_string(),
                    }),
            }
        };

        let qualifier = match captures.get(5).map(|m| m.as_str()) {
            None => Token::Absent,
            Some(WILDCARD) => Token::Wildcard,
            Some(q) => Token::Qualifier(q.to_string()),
        };

        let separator = captures
            .get(4)
            .and_then(|m| m.as_str().chars().next())
            .and_then(QualifierSeparator::from_char)
            .unwrap_or_default();

        Ok(Self {
            slots: [numeric(1)?, numeric(2)?, numeric(3)?, qualifier],
            separator,
        })
    }

    /// A wildcard must be the last supplied slot
    fn validate_wildcards(&self, text: &str) -> Result<(), FormatError> {
        let mut wildcarded = false;
        for slot in &self.slots {
            if wildcarded && !slot.is_absent() {
                return Err(FormatError::CharactersAfterWildcard {
                    version: text.to_string(),
                });
            }
            wildcarded |= slot.is_wildcard();
        }
        Ok(())
    }

    /// Slot at `index`; indices past the last slot read as absent
    pub fn slot(&self, index: usize) -> &Token {
        self.slots.get(index).unwrap_or(&Token::Absent)
    }

    /// True when no slot holds a wildcard
    pub fn is_concrete(&self) -> bool {
        !self.slots.iter().any(Token::is_wildcard)
    }

    /// Whether this concrete version satisfies `specifier`
    pub fn matches(&self, specifier: &TokenizedVersion) -> bool {
        crate::version::matcher::matches(specifier, self)
    }
}

impl Ord for TokenizedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.slots
            .cmp(&other.slots)
            .then_with(|| self.separator.cmp(&other.separator))
    }
}

impl PartialOrd for TokenizedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for TokenizedVersion {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, ParseMode::Strict)
    }
}

impl fmt::Display for TokenizedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [major, minor, micro, qualifier] = &self.slots;

        let mut first = true;
        for slot in [major, minor, micro] {
            if slot.is_absent() {
                break;
            }
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{}", slot)?;
            first = false;
        }

        if !qualifier.is_absent() {
            write!(f, "{}{}", self.separator.as_char(), qualifier)?;
        }
        Ok(())
    }
}
