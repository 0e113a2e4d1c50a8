//! The HTTP exchange behind the dispatcher.

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, Url};

use crate::error::Result;

/// A finished exchange: the status line and the body decoded as text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs one HTTP exchange.
///
/// An `Err` means the exchange never finished; any status, including
/// errors, comes back as `Ok(Reply)`. Implementations must not retry or
/// impose a timeout.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn execute(&self, method: Method, url: Url) -> Result<Reply>;
}

/// Transport backed by `reqwest`. Sends no headers of its own and an empty body.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
        })
    }

    /// Wraps an existing client (e.g. one with a cookie store or custom TLS).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, method: Method, url: Url) -> Result<Reply> {
        let resp = self.client.request(method, url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        Ok(Reply { status, body })
    }
}
