use std::sync::Arc;

use crate::application::ports::AuditLedgerPort;

pub struct AuditQueryService {
    pub(super) ledger: Arc<AuditLedgerPort>,
}

impl AuditQueryService {
    pub fn new(ledger: Arc<AuditLedgerPort>) -> Self {
        Self { ledger }
    }
}
