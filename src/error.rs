use std::error::Error as StdError;

use thiserror::Error;

pub type Result<T, E = FetchError> = std::result::Result<T, E>;

/// Why a random page could not be fetched.
///
/// Both kinds are terminal for the call that produced them; nothing is
/// retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a usable response: connection or DNS
    /// failure, timeout, or a non-2xx status.
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not a JSON object with string `title` and `extract`.
    #[error("{message}")]
    InvalidResponse {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn message(&self) -> &str {
        match self {
            FetchError::Transport { message, .. } => message,
            FetchError::InvalidResponse { message, .. } => message,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport { .. })
    }

    pub fn is_invalid_response(&self) -> bool {
        matches!(self, FetchError::InvalidResponse { .. })
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(source: reqwest::Error) -> Self {
        FetchError::Transport {
            message: describe(&source),
            source,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(source: serde_json::Error) -> Self {
        FetchError::InvalidResponse {
            message: describe(&source),
            source,
        }
    }
}

/// Flattens an error and its `source()` chain into one line.
///
/// reqwest hides the interesting part (timeout, DNS) behind a generic
/// "error sending request" message.
fn describe(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut cause = error.source();
    while let Some(inner) = cause {
        let text = inner.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        cause = inner.source();
    }
    message
}
