//! # Module Request
//!
//! Fire-and-forget dispatch of device module requests to a `request`
//! endpoint. A caller names a module class and a message; the dispatcher
//! sends them as `request?class=<class>&message=<message>` over GET or POST
//! and, when the server answers with status 200, passes the raw response
//! text to a completion handler. Failures are dropped without notifying
//! the caller.
//!
//! - [`RequestDispatcher::send_get`] / [`RequestDispatcher::send_post`]:
//!   spawn the exchange and return immediately
//! - [`RequestDispatcher::dispatch`]: await one exchange and inspect its [`Outcome`]
//! - [`Transport`]: the HTTP seam, backed by `reqwest` by default
//!
//! For usage, see `demos/simple.rs`.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod outcome;
pub mod query;
pub mod transport;

pub use config::{Config, QueryEncoding};
pub use dispatcher::{Completion, RequestDispatcher};
pub use error::{Error, Result};
pub use outcome::{DropReason, Outcome};
pub use query::ModuleRequest;
pub use transport::{Reply, ReqwestTransport, Transport};
