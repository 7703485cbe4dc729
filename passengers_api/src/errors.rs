//! Error types for the API client.

/// Errors that can occur when fetching from the passenger service.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The request could not be sent or no response arrived (connection
    /// refused, DNS failure, timeout, body read failure).
    #[error("{0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("HTTP error! Status: {status}")]
    HttpStatus { status: u16, body: String },
    /// The body was not valid JSON or did not match the expected shape.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
    /// The base URL and path did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// Builds a transport error from a `reqwest` failure, keeping the whole
    /// source chain so the cause ("Connection refused", ...) is not lost.
    pub(crate) fn transport(err: &reqwest::Error) -> Self {
        let mut message = err.to_string();
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        Self::Transport(message)
    }

    /// HTTP status code, when the failure was a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
