//! Request parameters and target URL construction.

use url::{form_urlencoded, Url};

use crate::{config::QueryEncoding, error::Result};

/// The two opaque values sent to the endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleRequest {
    /// Selects which backend module handles the request.
    pub module_class: String,
    /// Payload handed to that module.
    pub message: String,
}

impl ModuleRequest {
    pub fn new<C: Into<String>, M: Into<String>>(module_class: C, message: M) -> Self {
        Self {
            module_class: module_class.into(),
            message: message.into(),
        }
    }

    /// Builds `<endpoint>?class=<module_class>&message=<message>`.
    pub fn target(&self, endpoint: &str, encoding: QueryEncoding) -> String {
        format!(
            "{}?class={}&message={}",
            endpoint,
            encode(&self.module_class, encoding),
            encode(&self.message, encoding)
        )
    }

    /// Resolves the relative target against `base_url`.
    pub fn resolve(&self, base_url: &Url, endpoint: &str, encoding: QueryEncoding) -> Result<Url> {
        Ok(base_url.join(&self.target(endpoint, encoding))?)
    }
}

fn encode(value: &str, encoding: QueryEncoding) -> String {
    match encoding {
        QueryEncoding::Raw => value.to_string(),
        QueryEncoding::Percent => form_urlencoded::byte_serialize(value.as_bytes()).collect(),
    }
}
