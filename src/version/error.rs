use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Invalid version '': must not be empty")]
    Empty,

    #[error("Invalid version '{version}': expected up to three numeric components and an optional qualifier")]
    Malformed { version: String },

    #[error("Invalid version '{version}': wildcards are not allowed in this context")]
    WildcardNotAllowed { version: String },

    #[error("Invalid version '{version}': no characters are allowed after a wildcard")]
    CharactersAfterWildcard { version: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("No version resolvable for '{specifier}' in {}", .candidates.join(", "))]
    NoMatch {
        specifier: String,
        candidates: Vec<String>,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}
