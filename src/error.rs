use serde::{ser::Serializer, Serialize};
use thiserror::Error;

/// A specialized `Result` type for the module request crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for the module request crate.
///
/// These never reach the caller of `send_get`/`send_post`; a failed exchange
/// is folded into [`crate::outcome::Outcome::Dropped`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Message error: {0}")]
    Message(String),
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
