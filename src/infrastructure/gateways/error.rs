use crate::application::error::ApplicationError;

pub fn map_reqwest(err: reqwest::Error) -> ApplicationError {
    if err.is_decode() {
        return ApplicationError::malformed(err.to_string());
    }
    if err.is_builder() {
        return ApplicationError::infrastructure(format!("invalid request: {err}"));
    }
    ApplicationError::transport(err.to_string())
}
