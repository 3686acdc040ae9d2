//! Version tokenizing, matching and resolution
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Tokenized  │────▶│   Matcher   │────▶│  Resolver   │
//! │  (parse)    │     │ (wildcards) │     │ (max match) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`token`]: Single slot value (absent, numeric, qualifier, wildcard)
//! - [`tokenized`]: Four-slot version with ordering and canonical rendering
//! - [`matcher`]: Wildcard-aware matching rule
//! - [`resolver`]: Selects the maximum matching catalog version
//! - [`error`]: Error types for parsing, resolution and configuration

pub mod error;
pub mod matcher;
pub mod resolver;
pub mod token;
pub mod tokenized;
