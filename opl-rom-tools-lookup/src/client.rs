use crate::error::LookupError;
use crate::html::extract_title;

/// Redump site root used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://redump.org";

/// Resolves a normalized disc serial (e.g. `SCES-12345`) to a title.
pub trait TitleLookup {
    fn resolve_title(&self, serial: &str) -> Result<String, LookupError>;
}

/// Blocking HTTP client for Redump's quicksearch pages.
///
/// One request per lookup: no retries and no caching.
pub struct RedumpClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl RedumpClient {
    /// Create a client for the public Redump site.
    pub fn new() -> Result<Self, LookupError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client for a Redump-compatible site at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, LookupError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("opl-rom-tools/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_http_client(http, base_url))
    }

    /// Wrap an existing HTTP client (custom proxy or TLS settings).
    pub fn with_http_client(http: reqwest::blocking::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Quicksearch URL for a serial.
    pub fn quicksearch_url(&self, serial: &str) -> String {
        format!("{}/discs/quicksearch/{}/", self.base_url, serial)
    }
}

impl TitleLookup for RedumpClient {
    fn resolve_title(&self, serial: &str) -> Result<String, LookupError> {
        let url = self.quicksearch_url(serial);
        log::debug!("GET {}", url);

        let resp = self.http.get(&url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                serial: serial.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.text()?;
        let title =
            extract_title(&body).ok_or_else(|| LookupError::TitleNotFound(serial.to_string()))?;

        log::debug!("Game name found: {}", title);
        Ok(title)
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
