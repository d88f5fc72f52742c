//! Client for the unofficial MeteoSwiss app backend.
//!
//! The API is reverse-engineered from the official MeteoSwiss iOS/Android
//! app. It is not an officially documented public API; use at your own risk.

use std::time::Duration;

use reqwest::{Client, StatusCode, header};
use thiserror::Error;
use tracing::debug;

use crate::model::PlzDetail;

const BASE_URL: &str = "https://app-prod-ws.meteoswiss-app.ch/v1";
const USER_AGENT: &str = concat!("meteocli/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP {status} from {url}: {body}")]
    Status { status: StatusCode, url: String, body: String },

    #[error("decoding plzDetail response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client for the MeteoSwiss app API.
#[derive(Debug, Clone)]
pub struct MeteoClient {
    http: Client,
    base_url: String,
}

impl MeteoClient {
    /// Create a client against the production backend.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(BASE_URL)
    }

    /// Create a client against an alternative base URL (configuration
    /// override, local test server).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { http, base_url: base_url.into() })
    }

    /// Fetch current weather, forecast, warnings and precipitation graph for
    /// a Swiss postal code.
    pub async fn plz_detail(&self, plz: u32) -> Result<PlzDetail, ApiError> {
        let url = self.plz_detail_url(plz);
        debug!(%url, "fetching plzDetail");

        let res = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, bytes = body.len(), "plzDetail response");

        if !status.is_success() {
            return Err(ApiError::Status { status, url, body: truncate_body(&body) });
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn plz_detail_url(&self, plz: u32) -> String {
        format!("{}/plzDetail?plz={}", self.base_url, plz6(plz))
    }
}

/// The backend expects a 6-digit PLZ (e.g. 8000 → 800000, 3012 → 301200).
fn plz6(plz: u32) -> u32 {
    plz * 100
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let cut = body.char_indices().take_while(|(i, _)| *i <= MAX).last().map_or(0, |(i, _)| i);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
