// src/domain/account/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::Serialize;
use std::fmt;

fn require(value: &str, field: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        Err(DomainError::Validation(format!("{field} is required")))
    } else {
        Ok(())
    }
}

/// Email/password pair submitted to the authentication service.
///
/// Only presence is checked; the authentication service owns every other rule.
#[derive(Clone, Serialize)]
pub struct Credentials {
    #[serde(rename = "correo")]
    email: String,
    #[serde(rename = "contrasena")]
    password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> DomainResult<Self> {
        let email = email.into().trim().to_string();
        let password = password.into();
        require(&email, "email")?;
        require(&password, "password")?;
        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// New account request sent to the registration service.
#[derive(Clone, Serialize)]
pub struct Registration {
    #[serde(rename = "nombre")]
    name: String,
    #[serde(flatten)]
    credentials: Credentials,
}

impl Registration {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        require(&name, "name")?;
        let credentials = Credentials::new(email, password)?;
        Ok(Self { name, credentials })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        self.credentials.email()
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("credentials", &self.credentials)
            .finish()
    }
}
