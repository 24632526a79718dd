//! Error type for the storefront crate.

use thiserror::Error;

/// Everything that can go wrong while loading or driving storefront state.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// The embedded catalog JSON could not be parsed
    #[error("catalog is malformed: {0}")]
    Catalog(#[from] serde_json::Error),

    /// The site configuration TOML could not be parsed
    #[error("site config is malformed: {0}")]
    Config(#[from] toml::de::Error),

    /// A slide deck needs at least one slide
    #[error("slide deck has no slides")]
    EmptyDeck,

    /// A form sink refused a submission
    #[error("{form} submission rejected: {reason}")]
    Submission {
        /// Which form was submitted ("contact", "newsletter")
        form: &'static str,
        /// Sink-provided reason
        reason: String,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, StorefrontError>;
