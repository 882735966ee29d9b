//! Endpoint constants and the outbound transport for the scouter lookup.
use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::error::ScoutError;
use crate::result::Result;

/// Endpoint that resolves a match/color/driverstation to its scouter.
pub const SCOUTER_LOOKUP_URL: &str = "https://tagciccone.com/scouterLookup";
/// Upper bound on a single lookup call, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Content type a spreadsheet host sends for a string payload.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// One-shot outbound call carrying a lookup payload.
pub trait Transport {
    /// Sends `payload` and returns the response body as text.
    fn fetch(&self, payload: &str) -> Result<String>;
}

/// `Transport` over blocking HTTP: a `GET` whose body is the payload.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Transport for `endpoint`, giving up on a call after `timeout`.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Self::with_client(endpoint, client)
    }

    /// Transport for `endpoint` over a preconfigured client.
    pub fn with_client(endpoint: &str, client: Client) -> Result<Self> {
        let endpoint = endpoint.trim();
        reqwest::Url::parse(endpoint)
            .map_err(|e| ScoutError::Format(format!("Invalid endpoint {:?}: {}", endpoint, e)))?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    /// The URL every lookup is sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self {
            client: Client::new(),
            endpoint: SCOUTER_LOOKUP_URL.to_string(),
        }
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, payload: &str) -> Result<String> {
        debug!("GET {} payload={}", self.endpoint, payload);
        let response = self
            .client
            .get(&self.endpoint)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(payload.to_string())
            .send()
            .and_then(|r| r.error_for_status())
            .inspect_err(|e| warn!("Lookup call to {} failed: {}", self.endpoint, e))?;
        debug!("Lookup answered with {}", response.status());
        Ok(response.text()?)
    }
}
