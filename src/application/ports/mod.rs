// src/application/ports/mod.rs
pub mod accounts;
pub mod ledger;
pub mod reservations;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type AuditLedgerPort = dyn ledger::AuditLedger;
pub type AuthenticationGatewayPort = dyn accounts::AuthenticationGateway;
pub type RegistrationGatewayPort = dyn accounts::RegistrationGateway;
pub type ReservationCatalogPort = dyn reservations::ReservationCatalog;
