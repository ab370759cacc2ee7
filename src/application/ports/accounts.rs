// src/application/ports/accounts.rs
use crate::{
    application::ApplicationResult,
    domain::account::{Credentials, Registration},
};
use async_trait::async_trait;

#[async_trait]
pub trait AuthenticationGateway: Send + Sync {
    /// `Ok` when the service accepted the credentials.
    async fn authenticate(&self, credentials: &Credentials) -> ApplicationResult<()>;
}

#[async_trait]
pub trait RegistrationGateway: Send + Sync {
    async fn register(&self, registration: &Registration) -> ApplicationResult<()>;
}
