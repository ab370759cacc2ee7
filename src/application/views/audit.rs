// src/application/views/audit.rs
use super::snapshot::Snapshot;
use crate::{
    application::{ApplicationResult, dto::TableView, queries::audit::AuditQueryService},
    domain::audit::{AUDIT_COLUMNS, AuditRecord},
};
use std::sync::Arc;

/// Read-only table of the audit ledger.
///
/// Records are shown in the order the ledger returned them; nothing is
/// sorted, filtered, or merged.
pub struct AuditViewer {
    queries: Arc<AuditQueryService>,
    snapshot: Snapshot<AuditRecord>,
}

impl AuditViewer {
    pub fn new(queries: Arc<AuditQueryService>) -> Self {
        Self {
            queries,
            snapshot: Snapshot::default(),
        }
    }

    /// Fetch the ledger once. Later calls on the same viewer are no-ops.
    pub async fn mount(&mut self) -> ApplicationResult<()> {
        let queries = Arc::clone(&self.queries);
        self.snapshot
            .load("audit", || async move { queries.list_records().await })
            .await
    }

    pub fn records(&self) -> &[AuditRecord] {
        self.snapshot.items()
    }

    pub fn table(&self) -> TableView {
        TableView::new(AUDIT_COLUMNS, self.records().iter().map(AuditRecord::cells))
    }
}
