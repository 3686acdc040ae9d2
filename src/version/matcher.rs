//! Wildcard-aware matching between a specifier and concrete versions
//!
//! A concrete version matches a specifier when every slot of the specifier is
//! absent, a wildcard, or equal to the concrete slot:
//! - `8.+` matches 8.0.1, 8.1.2, etc.
//! - `8` matches 8.0.1 and 8.1.2 (absent slots match anything)
//! - `1.8.0_+` matches 1.8.0_25 and 1.8.0 (the qualifier may be absent)
//! - `1.8.0` matches 1.8.0_25 as well, since the qualifier slot is absent

use crate::version::tokenized::{SLOT_COUNT, TokenizedVersion};

/// Check whether `version` satisfies `specifier`
pub fn matches(specifier: &TokenizedVersion, version: &TokenizedVersion) -> bool {
    (0..SLOT_COUNT).all(|i| specifier.slot(i).accepts(version.slot(i)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::tokenized::ParseMode;
    use rstest::rstest;

    fn specifier_of(text: &str) -> TokenizedVersion {
        TokenizedVersion::parse(text, ParseMode::Strict).unwrap()
    }

    fn concrete(text: &str) -> TokenizedVersion {
        TokenizedVersion::parse(text, ParseMode::Lenient).unwrap()
    }

    #[rstest]
    #[case("+", "1.2.3", true)]
    #[case("8", "8.0.1", true)]
    #[case("8", "9.0.1", false)]
    #[case("8.+", "8.1.2", true)]
    #[case("8.+", "7.9.9", false)]
    #[case("8.0.+", "8.0.5", true)]
    #[case("8.0.+", "8.1.0", false)]
    #[case("1.8.0_+", "1.8.0_25", true)]
    #[case("1.8.0_+", "1.8.0", true)]
    #[case("1.8.0_+", "1.8.1_25", false)]
    #[case("1.8.0", "1.8.0_25", true)]
    #[case("1.8.0_25", "1.8.0_25", true)]
    #[case("1.8.0_25", "1.8.0-25", true)]
    #[case("1.8.0_25", "1.8.0_251", false)]
    #[case("1.8.0_25", "1.8.0", false)]
    #[case("8.0", "8", false)]
    #[case("8.0.0", "8.0", false)]
    fn matches_returns_expected(
        #[case] specifier: &str,
        #[case] version: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(matches(&specifier_of(specifier), &concrete(version)), expected);
        assert_eq!(concrete(version).matches(&specifier_of(specifier)), expected);
    }
}
