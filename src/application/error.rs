// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    /// The request never produced a readable response (connect, DNS, reset).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The service answered with an `error` envelope.
    #[error("rejected by service: {0}")]
    Rejected(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Message meant for the person at the keyboard, when the failure carries one.
    ///
    /// Service rejections and local validation failures are shown verbatim;
    /// transport and decoding failures are not.
    pub fn user_message(&self) -> Option<String> {
        match self {
            ApplicationError::Rejected(msg)
            | ApplicationError::NotFound(msg)
            | ApplicationError::Validation(msg) => Some(msg.clone()),
            ApplicationError::Domain(DomainError::Validation(msg)) => Some(msg.clone()),
            _ => None,
        }
    }
}
