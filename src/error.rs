use thiserror::Error;

/// Failures of a single API request or of the output sink.
#[derive(Error, Debug)]
pub enum ScopeError {
    /// Connection, TLS, timeout or body read failure
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Body is not JSON or does not fit the expected envelope
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Credentials rejected (401/403)
    #[error("authentication rejected by {url} (HTTP {status})")]
    Auth { url: String, status: u16 },

    /// Any other 4xx/5xx
    #[error("unexpected HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl ScopeError {
    /// Short label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            ScopeError::Transport { .. } => "transport",
            ScopeError::Decode { .. } => "decode",
            ScopeError::Auth { .. } => "auth",
            ScopeError::Status { .. } => "status",
            ScopeError::Output(_) => "output",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScopeError>;
