//! HTTP transport types for the accounts client.
//!
//! # Design
//! Requests and responses are described as plain data. `AccountClient`
//! builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network itself; a `Transport` implementation performs the
//! actual round-trip in between. This keeps request building and status
//! classification deterministic and easy to test.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `AccountClient::build_*` methods and handed to a `Transport`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` once the whole body has been read, then passed
/// to `AccountClient::parse_*` methods for classification and decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    /// Response headers as received. Classification ignores them; they are
    /// kept for callers driving `parse_*` themselves who need e.g.
    /// `content-type` or rate-limit headers.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}
