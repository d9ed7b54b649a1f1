//! Stateless client for the accounts API.
//!
//! # Design
//! `AccountClient` holds only the base URL and a transport, and carries no
//! mutable state between calls. Each operation is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`; `create_account`, `fetch_account` and
//! `delete_account` glue the two halves together through the `Transport`.
//! Every response goes through the shared `classify` step, each operation
//! supplying its own `StatusPolicy`.

use tracing::{debug, warn};

use crate::classify::{classify, StatusPolicy};
use crate::codec;
use crate::config::Config;
use crate::error::{ApiError, ConfigError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::AccountData;
use crate::url::build_url;

const ACCOUNTS_PATH: &str = "/organisation/accounts";

/// Synchronous client for the accounts collection.
///
/// Each call is a single best-effort request: no retries, no timeouts beyond
/// the transport's defaults.
#[derive(Debug, Clone)]
pub struct AccountClient<T = UreqTransport> {
    base_url: String,
    transport: T,
}

impl AccountClient<UreqTransport> {
    pub fn new(config: &Config) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }

    /// Build a client from the `BASEURL` environment variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(&Config::from_env()?))
    }
}

impl<T: Transport> AccountClient<T> {
    pub fn with_transport(config: &Config, transport: T) -> Self {
        Self {
            base_url: config.base_url.clone(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create `account` and return the server's enriched copy. Callers should
    /// continue with the returned value, which carries the assigned `version`.
    pub fn create_account(&self, account: &AccountData) -> Result<AccountData, ApiError> {
        let request = self.build_create_account(account)?;
        self.parse_create_account(self.send(request)?)
    }

    /// Fetch the account with `id`. A missing account is `Ok(None)`.
    pub fn fetch_account(&self, id: &str) -> Result<Option<AccountData>, ApiError> {
        let request = self.build_fetch_account(id)?;
        self.parse_fetch_account(self.send(request)?)
    }

    /// Delete the account with `id` at `version`.
    ///
    /// A missing account is reported as `ApiError::Client` with status 404;
    /// callers that tolerate it must check for that themselves. A stale
    /// `version` is rejected by the server with a client error as well.
    pub fn delete_account(&self, id: &str, version: i64) -> Result<(), ApiError> {
        let request = self.build_delete_account(id, version)?;
        self.parse_delete_account(self.send(request)?)
    }

    pub fn build_create_account(&self, account: &AccountData) -> Result<HttpRequest, ApiError> {
        let body = codec::encode(account)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: build_url(&self.base_url, ACCOUNTS_PATH),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Fails with a 400 `ApiError::Client` for an empty `id`, which would
    /// otherwise address the collection itself.
    pub fn build_fetch_account(&self, id: &str) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: build_url(&self.base_url, &account_path(id)?),
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn build_delete_account(&self, id: &str, version: i64) -> Result<HttpRequest, ApiError> {
        let path = format!("{}?version={version}", account_path(id)?);
        Ok(HttpRequest {
            method: HttpMethod::Delete,
            url: build_url(&self.base_url, &path),
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn parse_create_account(&self, response: HttpResponse) -> Result<AccountData, ApiError> {
        match check(StatusPolicy::CREATE, response)? {
            Some(body) => codec::decode(body.as_bytes()),
            None => Err(ApiError::Integrity(
                "create reported an absent resource".to_string(),
            )),
        }
    }

    pub fn parse_fetch_account(
        &self,
        response: HttpResponse,
    ) -> Result<Option<AccountData>, ApiError> {
        check(StatusPolicy::FETCH, response)?
            .map(|body| codec::decode(body.as_bytes()))
            .transpose()
    }

    pub fn parse_delete_account(&self, response: HttpResponse) -> Result<(), ApiError> {
        check(StatusPolicy::DELETE, response)?;
        Ok(())
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), url = %request.url, "sending request");
        let response = self.transport.execute(request)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}

/// Path of a single account, with `id` escaped as one path segment so it
/// cannot alter the route or the query string.
fn account_path(id: &str) -> Result<String, ApiError> {
    if id.is_empty() {
        return Err(ApiError::Client {
            status: 400,
            message: "account id must not be empty".to_string(),
        });
    }
    Ok(format!("{ACCOUNTS_PATH}/{}", urlencoding::encode(id)))
}

/// Classify `response` under `policy`, logging any failure.
fn check(policy: StatusPolicy, response: HttpResponse) -> Result<Option<String>, ApiError> {
    classify(policy, response).into_result().inspect_err(|e| {
        warn!(status = e.status(), error = %e, "accounts API request failed");
    })
}
