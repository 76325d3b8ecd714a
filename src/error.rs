use thiserror::Error;

/// Reasons a card could not be assembled.
///
/// A field that is missing from an otherwise valid page is not an error; the
/// extractors report it as an empty value instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CardError {
    /// The page could not be retrieved. Worth trying again later.
    #[error("failed to fetch {url}: {message}")]
    Transport { url: String, message: String },

    /// The catalog answered with its own "not found" page.
    #[error("card not found: {0}")]
    NotFound(String),

    /// A batch worker stopped before producing a result.
    #[error("card fetch was interrupted: {0}")]
    Interrupted(String),
}

impl CardError {
    pub fn transport(url: impl Into<String>, message: impl ToString) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.to_string(),
        }
    }
}
