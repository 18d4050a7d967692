//! HTTP access to the remote BRSR report service.

use reqwest::StatusCode;
use thiserror::Error;

use super::model::{Report, ReportEnvelope};

/// Report service endpoint, queried with `?cin=<identifier>`.
pub const DEFAULT_BASE_URL: &str = "http://20.197.35.82:8000/brsr-report/";

/// Batch-level fetch failures, worded exactly as the form surfaces them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("One or more CINs not found.")]
    NotFound,
    #[error("Bad request, check if your API endpoint exists and is functional")]
    InvalidRequest,
    #[error("Error fetching data. Please try again later.")]
    Unknown,
}

/// Client for the report service. Cheap to clone; the inner
/// `reqwest::Client` is reference-counted.
#[derive(Debug, Clone)]
pub struct ReportClient {
    http: reqwest::Client,
    base_url: String,
}

impl ReportClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: build_http_client(),
            base_url: base_url.into(),
        }
    }

    /// Fetch one report by CIN and unwrap its `parsed_response` payload.
    pub async fn fetch_report(&self, cin: &str) -> Result<Report, FetchError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("cin", cin)])
            .send()
            .await
            .map_err(|err| {
                tracing::error!(cin, error = %err, "report request failed");
                FetchError::Unknown
            })?;

        if let Some(failure) = error_for_status(response.status()) {
            return Err(failure);
        }

        let envelope = response.json::<ReportEnvelope>().await.map_err(|err| {
            tracing::error!(cin, error = %err, "report payload could not be parsed");
            FetchError::Unknown
        })?;

        Ok(envelope.parsed_response)
    }

    /// Fetch reports for every non-blank identifier, sequentially and in
    /// submission order. The first failure aborts the batch and discards
    /// any earlier results.
    pub async fn fetch_reports(&self, cins: &[String]) -> Result<Vec<Report>, FetchError> {
        let mut reports = Vec::new();
        for cin in pending_cins(cins) {
            reports.push(self.fetch_report(cin).await?);
        }
        Ok(reports)
    }
}

impl Default for ReportClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifiers that will actually be queried: trimmed, blanks dropped.
/// The result can be shorter than the input; downstream alignment is by
/// result order, never by input slot.
pub fn pending_cins(cins: &[String]) -> Vec<&str> {
    cins.iter()
        .map(|cin| cin.trim())
        .filter(|cin| !cin.is_empty())
        .collect()
}

fn error_for_status(status: StatusCode) -> Option<FetchError> {
    match status {
        StatusCode::NOT_FOUND => Some(FetchError::NotFound),
        StatusCode::BAD_REQUEST => Some(FetchError::InvalidRequest),
        status if status.is_success() => None,
        status => {
            tracing::error!(%status, "report service returned an unexpected status");
            Some(FetchError::Unknown)
        }
    }
}

/// The upstream service ships a self-signed certificate, so certificate
/// validation is disabled on native transports. Browsers own transport
/// trust on wasm and expose no such switch.
fn build_http_client() -> reqwest::Client {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new())
    }

    #[cfg(target_arch = "wasm32")]
    {
        reqwest::Client::new()
    }
}
