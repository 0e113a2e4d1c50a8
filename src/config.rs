//! Configuration options for the request dispatcher.

/// How `class` and `message` are written into the query string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QueryEncoding {
    /// Values are concatenated as given. Reserved characters (`&`, `=`, `#`)
    /// inside a value change the meaning of the query.
    #[default]
    Raw,
    /// Values are `application/x-www-form-urlencoded` before concatenation.
    Percent,
}

/// Configuration for the dispatcher.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL the relative endpoint is resolved against (e.g. "http://localhost:8888/").
    pub base_url: String,
    /// Relative endpoint path.
    pub endpoint: String,
    /// Query string encoding for the two parameters.
    pub encoding: QueryEncoding,
}

impl Config {
    /// Configuration for `base_url` with every other option at its default.
    pub fn new<U: Into<String>>(base_url: U) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8888/".into(),
            endpoint: "request".into(),
            encoding: QueryEncoding::Raw,
        }
    }
}
