use crate::lifecycle::Event;
use crate::model::State;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum TextdeskError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("Text not found: {0}")]
    NotFound(Uuid),

    #[error("Incorrect language: {0}")]
    InvalidLanguage(String),

    #[error("Illegal operation: cannot {event} a {state} text")]
    IllegalTransition { state: State, event: Event },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl TextdeskError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Process exit code for the CLI. Each caller-facing error kind gets its own code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } => 2,
            Self::NotFound(_) => 3,
            Self::InvalidLanguage(_) => 4,
            Self::IllegalTransition { .. } => 5,
            Self::Io(_) | Self::Serialization(_) | Self::Store(_) => 1,
        }
    }

    /// HTTP status for boundaries that speak HTTP.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } | Self::InvalidLanguage(_) => 400,
            Self::NotFound(_) => 404,
            Self::IllegalTransition { .. } => 409,
            Self::Io(_) | Self::Serialization(_) | Self::Store(_) => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, TextdeskError>;
