// src/infrastructure/gateways/audit_ledger.rs
use super::ServiceClient;
use crate::{
    application::{ApplicationResult, ports::ledger::AuditLedger},
    domain::audit::AuditRecord,
};
use async_trait::async_trait;

/// Audit ledger reached over `GET /auditoria`.
#[derive(Clone)]
pub struct HttpAuditLedger {
    client: ServiceClient,
}

impl HttpAuditLedger {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuditLedger for HttpAuditLedger {
    async fn fetch_all(&self) -> ApplicationResult<Vec<AuditRecord>> {
        self.client
            .get::<Vec<AuditRecord>>("auditoria")
            .await?
            .into_data()
    }
}
