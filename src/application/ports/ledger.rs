// src/application/ports/ledger.rs
use crate::{application::ApplicationResult, domain::audit::AuditRecord};
use async_trait::async_trait;

/// Read side of the append-only audit ledger.
#[async_trait]
pub trait AuditLedger: Send + Sync {
    /// Every record the ledger holds, in the ledger's own order.
    async fn fetch_all(&self) -> ApplicationResult<Vec<AuditRecord>>;
}
