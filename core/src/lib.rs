//! Synchronous client for the accounts API.
//!
//! # Overview
//! Creates, fetches and deletes resources in the `organisation/accounts`
//! collection over HTTP/JSON, translating status codes into a small error
//! taxonomy: connection, client (3xx/4xx), server (5xx) and unexpected.
//!
//! # Design
//! - `AccountClient` is stateless: it holds only the base URL and a
//!   `Transport`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit and the
//!   status handling can be tested without a server.
//! - All responses go through one `classify` function parameterized by a
//!   per-operation `StatusPolicy`.
//! - The base URL comes from `BASEURL` and is checked when the client is
//!   built, never mid-request.

pub mod classify;
pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;
pub mod url;

pub use classify::{classify, Outcome, StatusPolicy, SuccessCodes};
pub use client::AccountClient;
pub use config::Config;
pub use error::{ApiError, BoxError, ConfigError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{AccountAttributes, AccountData, Envelope};
