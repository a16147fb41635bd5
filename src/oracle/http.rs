//! Remote user-existence oracle
//!
//! Asks a user registry over HTTP: `GET {base_url}/users/{id}`.
//! - 200 → exists
//! - 404 carrying the registry's "record not found" envelope (code 4004)
//!   → does not exist
//! - any other 404 (e.g. a URL that is not a user registry), any other
//!   status, or a transport failure → `OracleError::Unavailable`
//!
//! Connect errors and timeouts are considered transient and retried once
//! (when enabled) before giving up.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use super::{ExistenceOracle, OracleError};
use crate::core_types::RecordId;
use crate::gateway::types::error_codes;

/// Error envelope of the user registry; only the code matters here.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    code: i32,
}

pub struct HttpUserOracle {
    client: reqwest::Client,
    base_url: String,
    retry_transient: bool,
}

impl HttpUserOracle {
    /// Create an oracle for the user registry at `base_url`.
    ///
    /// `timeout` bounds each individual HTTP attempt.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        retry_transient: bool,
    ) -> Result<Self, OracleError> {
        // The user registry is an internal peer, reached directly.
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .no_proxy()
            .build()
            .map_err(|e| {
                OracleError::Unavailable(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            retry_transient,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn user_url(&self, id: RecordId) -> String {
        format!("{}/users/{}", self.base_url, id)
    }

    async fn lookup(&self, url: &str) -> Result<Response, reqwest::Error> {
        self.client.get(url).send().await
    }
}

/// A 404 means "no such user" only if the user registry itself said so.
async fn is_record_not_found(response: Response) -> bool {
    match response.json::<ErrorEnvelope>().await {
        Ok(envelope) => envelope.code == error_codes::RECORD_NOT_FOUND,
        Err(_) => false,
    }
}

fn is_transient(e: &reqwest::Error) -> bool {
    e.is_connect() || e.is_timeout()
}

#[async_trait]
impl ExistenceOracle for HttpUserOracle {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn exists(&self, id: RecordId) -> Result<bool, OracleError> {
        let url = self.user_url(id);

        let response = match self.lookup(&url).await {
            Ok(response) => response,
            Err(e) if self.retry_transient && is_transient(&e) => {
                warn!("[ORACLE] GET {} failed ({}), retrying once", url, e);
                self.lookup(&url).await.map_err(|e| {
                    OracleError::Unavailable(format!("GET {} failed after retry: {}", url, e))
                })?
            }
            Err(e) => {
                return Err(OracleError::Unavailable(format!(
                    "GET {} failed: {}",
                    url, e
                )));
            }
        };

        let status = response.status();
        debug!("[ORACLE] GET {} -> {}", url, status);
        match status {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => {
                if is_record_not_found(response).await {
                    Ok(false)
                } else {
                    Err(OracleError::Unavailable(format!(
                        "GET {} returned 404 without a user registry error body",
                        url
                    )))
                }
            }
            other => Err(OracleError::Unavailable(format!(
                "GET {} returned unexpected status {}",
                url, other
            ))),
        }
    }
}
