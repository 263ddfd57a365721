use std::error::Error as _;

use thiserror::Error;

/// Remote-facing failures. `Display` is the text surfaced to the user verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The call never produced a response (connectivity, timeout, client setup).
    #[error("{0}")]
    Transport(String),
    /// The service answered with a non-success status; `body` is its own explanation.
    #[error("{body}")]
    Application { status: u16, body: String },
    /// A success response whose body is not a valid trajectory.
    #[error("{0}")]
    Decode(String),
}

impl ServiceError {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Application { .. } => "application",
            Self::Decode(_) => "decode",
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        let mut text = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            text.push_str(": ");
            text.push_str(&cause.to_string());
            source = cause.source();
        }
        if err.is_timeout() {
            text = format!("request timed out: {text}");
        }
        ServiceError::Transport(text)
    }
}
