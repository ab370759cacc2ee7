use super::AuditQueryService;
use crate::{application::error::ApplicationResult, domain::audit::AuditRecord};

impl AuditQueryService {
    /// Full record collection, exactly as the ledger returned it.
    ///
    /// Issues a single parameterless read; the ledger offers no filtering or
    /// paging and none is layered on top.
    pub async fn list_records(&self) -> ApplicationResult<Vec<AuditRecord>> {
        let records = self.ledger.fetch_all().await?;
        tracing::debug!(count = records.len(), "audit records fetched");
        Ok(records)
    }
}
