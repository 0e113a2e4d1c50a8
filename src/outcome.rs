//! Terminal states of a single request/response exchange.

use serde::Serialize;
use std::fmt;

/// Why an exchange produced no response text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum DropReason {
    /// The exchange finished with a status other than 200.
    Status(u16),
    /// The exchange never finished (connection refused, DNS, aborted body, bad URL).
    Transport(String),
}

/// The result of one exchange. Only `Delivered` reaches a completion handler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// Status 200; carries the raw response body.
    Delivered(String),
    /// Anything else.
    Dropped(DropReason),
}

impl Outcome {
    /// The response text, if the exchange succeeded.
    pub fn into_text(self) -> Option<String> {
        match self {
            Outcome::Delivered(text) => Some(text),
            Outcome::Dropped(_) => None,
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, Outcome::Delivered(_))
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::Status(code) => write!(f, "status {}", code),
            DropReason::Transport(msg) => write!(f, "transport failure: {}", msg),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Delivered(text) => write!(f, "Delivered: {}", text),
            Outcome::Dropped(reason) => write!(f, "Dropped: {}", reason),
        }
    }
}
