//! HTTP client for the TruthForge verification service
//!
//! The service is opaque: this client only knows its two endpoints and
//! their JSON shapes. Transport failures, non-2xx statuses and
//! undecodable bodies all surface as `ClientError::Connectivity`; there
//! is no retry. Requests are validated first, so an invalid request
//! never reaches the network.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::models::{FixedSolution, VerificationRequest, VerificationResult};

/// Maximum time to establish a TCP connection
const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Maximum time for the entire request (connection + transfer)
const HTTP_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Default origin of the verification service
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Client for the remote verification service
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    /// Create a client for the given origin (e.g. `http://localhost:8000`).
    ///
    /// Trailing slashes on the origin are ignored.
    pub fn new(base: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("truthforge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Connectivity(format!("failed to build HTTP client: {e}")))?;

        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }

        Ok(Self { http, base })
    }

    /// The configured service origin
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Submit a verification request and decode the verdict
    pub fn verify(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationResult, ClientError> {
        request.validate()?;
        self.post_json("/api/verify", request)
    }

    /// Request a corrected solution for a failed answer
    pub fn request_fix(&self, request: &VerificationRequest) -> Result<FixedSolution, ClientError> {
        request.validate()?;
        self.post_json("/api/fix", request)
    }

    fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        request: &VerificationRequest,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base, path);
        log::debug!("POST {url}");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| ClientError::Connectivity(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Connectivity(format!(
                "{url}: HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown error")
            )));
        }

        response
            .json::<T>()
            .map_err(|e| ClientError::Connectivity(format!("invalid response from {url}: {e}")))
    }
}
