//! SOSS client error types.

/// Broad category of a [`SossError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not be completed (network, timeout, non-2xx).
    Transport,
    /// The response was not the JSON shape we expected.
    Parse,
    /// A value assumed present in the station page HTML was missing.
    Extraction,
    /// A station listed in the message index had no message rows.
    MissingMessageData,
}

/// Errors that can occur when fetching SOSS or CAFCP data.
#[derive(Debug, thiserror::Error)]
pub enum SossError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned an error status
    #[error("API error {status} from {url}: {message}")]
    Api {
        url: String,
        status: u16,
        message: String,
    },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Status record carried a non-numeric `modified` value
    #[error("invalid timestamp {value:?} for station {station}")]
    InvalidTimestamp { station: String, value: String },

    /// Renewable percentage not found in the station page
    #[error("renewable percentage not found in {text:?}")]
    RenewableNotFound { text: String },

    /// Message index listed a station but its message output was empty
    #[error("no message data for station {station}")]
    MissingMessageData { station: String },
}

impl SossError {
    /// The category this error falls into.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SossError::Http(_) | SossError::Api { .. } => ErrorKind::Transport,
            SossError::Json { .. } | SossError::InvalidTimestamp { .. } => ErrorKind::Parse,
            SossError::RenewableNotFound { .. } => ErrorKind::Extraction,
            SossError::MissingMessageData { .. } => ErrorKind::MissingMessageData,
        }
    }

    /// Build a `Json` error, keeping the first 500 characters of the body.
    pub(crate) fn json(err: serde_json::Error, body: &str) -> Self {
        SossError::Json {
            message: err.to_string(),
            body: Some(body.chars().take(500).collect()),
        }
    }
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_ref()
        .map(|b| format!(" (body: {b})"))
        .unwrap_or_default()
}
