//! Wildcard version resolution
//!
//! Resolves a specifier such as `8.+` or `1.7.0_+` against a catalog of
//! concrete versions and returns the highest match.
//!
//! ```
//! use version_resolver::version::resolver::resolve;
//!
//! let versions = ["8.0.1", "8.1.2", "7.9.9"];
//! assert_eq!(resolve(Some("8.+"), "+", &versions).unwrap(), "8.1.2");
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod version;
