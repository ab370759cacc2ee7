// src/infrastructure/gateways/accounts.rs
use super::ServiceClient;
use crate::{
    application::{
        ApplicationResult,
        ports::accounts::{AuthenticationGateway, RegistrationGateway},
    },
    domain::account::{Credentials, Registration},
};
use async_trait::async_trait;
use serde_json::Value;

#[derive(Clone)]
pub struct HttpAuthenticationGateway {
    client: ServiceClient,
}

impl HttpAuthenticationGateway {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthenticationGateway for HttpAuthenticationGateway {
    async fn authenticate(&self, credentials: &Credentials) -> ApplicationResult<()> {
        // Anything besides the status is passed through by the service and not needed here.
        self.client
            .post::<_, Value>("login", credentials)
            .await?
            .into_ack()
            .map(|_| ())
    }
}

#[derive(Clone)]
pub struct HttpRegistrationGateway {
    client: ServiceClient,
}

impl HttpRegistrationGateway {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RegistrationGateway for HttpRegistrationGateway {
    async fn register(&self, registration: &Registration) -> ApplicationResult<()> {
        self.client
            .post::<_, Value>("register", registration)
            .await?
            .into_ack()
            .map(|_| ())
    }
}
