// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    audit_service_url: String,
    auth_service_url: String,
    registration_service_url: String,
    reservations_service_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".into()
}

fn default_audit_service_url() -> String {
    "http://localhost:3400".into()
}

fn default_auth_service_url() -> String {
    "http://127.0.0.1:3200".into()
}

fn default_reservations_service_url() -> String {
    "http://localhost:3100".into()
}

fn validate_service_url(key: &str, value: String) -> Result<String, ConfigError> {
    let parsed = reqwest::Url::parse(&value)
        .map_err(|err| ConfigError::Invalid(format!("{key} is not a valid URL: {err}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid(format!(
            "{key} must use http or https, got {}",
            parsed.scheme()
        )));
    }
    Ok(value.trim_end_matches('/').to_string())
}

impl AppConfig {
    /// Build configuration from environment variables. Every key has a
    /// default pointing at the local development services.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading keys through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let audit_service_url = validate_service_url(
            "AUDIT_SERVICE_URL",
            lookup("AUDIT_SERVICE_URL")
                .unwrap_or_else(default_audit_service_url),
        )?;
        let auth_service_url = validate_service_url(
            "AUTH_SERVICE_URL",
            lookup("AUTH_SERVICE_URL")
                .unwrap_or_else(default_auth_service_url),
        )?;
        // Registration lives next to login unless pointed elsewhere.
        let registration_service_url = match lookup("REGISTRATION_SERVICE_URL") {
            Some(url) => validate_service_url("REGISTRATION_SERVICE_URL", url)?,
            None => auth_service_url.clone(),
        };
        let reservations_service_url = validate_service_url(
            "RESERVATIONS_SERVICE_URL",
            lookup("RESERVATIONS_SERVICE_URL")
                .unwrap_or_else(default_reservations_service_url),
        )?;

        Ok(Self {
            listen_addr,
            audit_service_url,
            auth_service_url,
            registration_service_url,
            reservations_service_url,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn audit_service_url(&self) -> &str {
        &self.audit_service_url
    }

    pub fn auth_service_url(&self) -> &str {
        &self.auth_service_url
    }

    pub fn registration_service_url(&self) -> &str {
        &self.registration_service_url
    }

    pub fn reservations_service_url(&self) -> &str {
        &self.reservations_service_url
    }
}
