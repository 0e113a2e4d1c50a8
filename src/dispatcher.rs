//! # Request Dispatcher
//!
//! Sends a module class and message to the `request` endpoint and hands the
//! response text to a completion handler. Every call is fire-and-forget:
//! it spawns one task on the current tokio runtime and returns at once.
//!
//! The handler runs only when the exchange finishes with status 200. Any
//! other status, and any transport failure, ends the task without calling
//! it and without reporting anything to the caller. There is no timeout, so
//! a server that never answers leaves the handler pending for good.
//!
//! POST is preferred for large messages, but both methods put `class` and
//! `message` in the query string and send an empty body.

use log::{debug, trace};
use reqwest::{Method, StatusCode, Url};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    config::Config,
    error::Result,
    outcome::{DropReason, Outcome},
    query::ModuleRequest,
    transport::{ReqwestTransport, Transport},
};

/// A completion handler: receives the raw response body.
pub type Completion = Box<dyn FnOnce(String) + Send + 'static>;

/// Dispatches module requests over a [`Transport`].
pub struct RequestDispatcher<T: Transport = ReqwestTransport> {
    base_url: Url,
    config: Config,
    transport: Arc<T>,
}

impl RequestDispatcher<ReqwestTransport> {
    /// Creates a dispatcher for `base_url` with default configuration.
    pub fn new<U: Into<String>>(base_url: U) -> Result<Self> {
        Self::with_config(Config::new(base_url))
    }

    /// Creates a dispatcher with custom configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        Self::with_transport(config, ReqwestTransport::new()?)
    }
}

impl<T: Transport> RequestDispatcher<T> {
    /// Creates a dispatcher over a caller-supplied transport.
    pub fn with_transport(config: Config, transport: T) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        Ok(Self {
            base_url,
            config,
            transport: Arc::new(transport),
        })
    }

    /// The configuration this dispatcher was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Performs one exchange and returns how it ended.
    pub async fn dispatch(&self, method: Method, request: &ModuleRequest) -> Outcome {
        let target = request.resolve(&self.base_url, &self.config.endpoint, self.config.encoding);
        exchange(self.transport.as_ref(), method, target).await
    }

    /// Sends a GET and calls `on_complete` with the body on status 200.
    ///
    /// # Panics
    ///
    /// Panics if called outside the context of a Tokio runtime.
    pub fn send_get<C, M, F>(&self, module_class: C, message: M, on_complete: F)
    where
        C: Into<String>,
        M: Into<String>,
        F: FnOnce(String) + Send + 'static,
    {
        self.spawn(
            Method::GET,
            ModuleRequest::new(module_class, message),
            Some(Box::new(on_complete)),
        );
    }

    /// Sends a POST and calls `on_complete`, if any, with the body on status 200.
    ///
    /// # Panics
    ///
    /// Panics if called outside the context of a Tokio runtime.
    pub fn send_post<C, M>(&self, module_class: C, message: M, on_complete: Option<Completion>)
    where
        C: Into<String>,
        M: Into<String>,
    {
        self.spawn(Method::POST, ModuleRequest::new(module_class, message), on_complete);
    }

    fn spawn(&self, method: Method, request: ModuleRequest, on_complete: Option<Completion>) {
        let target = request.resolve(&self.base_url, &self.config.endpoint, self.config.encoding);
        let transport = Arc::clone(&self.transport);
        tokio::spawn(async move {
            let outcome = exchange(transport.as_ref(), method, target).await;
            if let (Outcome::Delivered(text), Some(on_complete)) = (outcome, on_complete) {
                on_complete(text);
            }
        });
    }
}

async fn exchange<T: Transport>(transport: &T, method: Method, target: Result<Url>) -> Outcome {
    let id = Uuid::new_v4();
    let url = match target {
        Ok(url) => url,
        Err(e) => {
            debug!("[{}] {} not sent, bad target: {}", id, method, e);
            return Outcome::Dropped(DropReason::Transport(e.to_string()));
        }
    };
    debug!("[{}] {} {}", id, method, url);
    match transport.execute(method, url).await {
        Ok(reply) if reply.status == StatusCode::OK => {
            trace!("[{}] delivered {} bytes", id, reply.body.len());
            Outcome::Delivered(reply.body)
        }
        Ok(reply) => {
            debug!("[{}] dropped, status {}", id, reply.status);
            Outcome::Dropped(DropReason::Status(reply.status.as_u16()))
        }
        Err(e) => {
            debug!("[{}] dropped: {}", id, e);
            Outcome::Dropped(DropReason::Transport(e.to_string()))
        }
    }
}
