use std::sync::Arc;

use crate::application::{
    commands::{accounts::AccountCommandService, reservations::ReservationCommandService},
    ports::{
        AuditLedgerPort, AuthenticationGatewayPort, RegistrationGatewayPort,
        ReservationCatalogPort,
    },
    queries::{audit::AuditQueryService, reservations::ReservationQueryService},
    views::{AuditViewer, ItemsView},
};

pub struct ApplicationServices {
    pub account_commands: Arc<AccountCommandService>,
    pub reservation_commands: Arc<ReservationCommandService>,
    pub reservation_queries: Arc<ReservationQueryService>,
    pub audit_queries: Arc<AuditQueryService>,
}

impl ApplicationServices {
    pub fn new(
        ledger: Arc<AuditLedgerPort>,
        authenticator: Arc<AuthenticationGatewayPort>,
        registrar: Arc<RegistrationGatewayPort>,
        catalog: Arc<ReservationCatalogPort>,
    ) -> Self {
        let account_commands = Arc::new(AccountCommandService::new(authenticator, registrar));
        let reservation_commands = Arc::new(ReservationCommandService::new(Arc::clone(&catalog)));
        let reservation_queries = Arc::new(ReservationQueryService::new(catalog));
        let audit_queries = Arc::new(AuditQueryService::new(ledger));

        Self {
            account_commands,
            reservation_commands,
            reservation_queries,
            audit_queries,
        }
    }

    /// Fresh, unmounted audit viewer.
    pub fn audit_viewer(&self) -> AuditViewer {
        AuditViewer::new(Arc::clone(&self.audit_queries))
    }

    /// Fresh, unmounted items view.
    pub fn items_view(&self) -> ItemsView {
        ItemsView::new(
            Arc::clone(&self.reservation_queries),
            Arc::clone(&self.reservation_commands),
        )
    }
}
