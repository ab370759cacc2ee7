// src/application/dto/envelope.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use serde::{Deserialize, Serialize};

const MISSING_MESSAGE: &str = "the service reported a failure without a message";

/// The `{status, message, data}` wrapper every backend answers with.
///
/// `status` selects the variant; an unknown status fails to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ServiceEnvelope<T> {
    Success {
        message: Option<String>,
        data: Option<T>,
    },
    Error {
        message: Option<String>,
    },
    NotFound {
        message: Option<String>,
    },
}

impl<T> ServiceEnvelope<T> {
    /// Payload of a success envelope. A success without `data` is malformed.
    pub fn into_data(self) -> ApplicationResult<T> {
        match self {
            Self::Success {
                data: Some(data), ..
            } => Ok(data),
            Self::Success { data: None, .. } => Err(ApplicationError::malformed(
                "success envelope carried no data",
            )),
            Self::Error { message } => Err(ApplicationError::rejected(or_default(message))),
            Self::NotFound { message } => Err(ApplicationError::not_found(or_default(message))),
        }
    }

    /// Success message of an envelope whose payload is irrelevant.
    pub fn into_ack(self) -> ApplicationResult<Option<String>> {
        match self {
            Self::Success { message, .. } => Ok(message),
            Self::Error { message } => Err(ApplicationError::rejected(or_default(message))),
            Self::NotFound { message } => Err(ApplicationError::not_found(or_default(message))),
        }
    }
}

fn or_default(message: Option<String>) -> String {
    message.unwrap_or_else(|| MISSING_MESSAGE.to_string())
}
