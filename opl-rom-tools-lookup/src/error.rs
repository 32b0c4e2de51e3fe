/// Errors that can occur while resolving a disc title.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid web response for {serial} (HTTP {status})")]
    Status { serial: String, status: u16 },

    #[error("Game name not found in web response for {0}")]
    TitleNotFound(String),
}
