//! Single slot of a tokenized version

use std::fmt;

/// Marker used in specifiers to match any value at a slot
pub const WILDCARD: &str = "+";

/// Value held by one of the four slots of a [`TokenizedVersion`]
///
/// Variant order is the slot ordering: an absent slot sorts below every
/// present value, numbers compare numerically and qualifiers compare by byte.
/// `Wildcard` is placed last only to keep the order total; it never appears
/// in a concrete catalog version.
///
/// [`TokenizedVersion`]: crate::version::tokenized::TokenizedVersion
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    /// Slot not supplied (e.g. micro in "8.0")
    Absent,
    /// Major, minor or micro component
    Numeric(u64),
    /// Trailing qualifier such as "GA", "25" or "b13"
    Qualifier(String),
    /// The `+` marker
    Wildcard,
}

impl Token {
    /// True for a slot the version string did not supply
    pub fn is_absent(&self) -> bool {
        matches!(self, Token::Absent)
    }

    /// True for the `+` marker
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Token::Wildcard)
    }

    /// Whether a specifier slot accepts the given concrete slot
    ///
    /// Absent and wildcard specifier slots accept anything.
    pub fn accepts(&self, other: &Token) -> bool {
        match self {
            Token::Absent | Token::Wildcard => true,
            _ => self == other,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Absent => Ok(()),
            Token::Numeric(n) => write!(f, "{}", n),
            Token::Qualifier(q) => f.write_str(q),
            Token::Wildcard => f.write_str(WILDCARD),
        }
    }
}
