pub mod accounts;
pub mod audit_ledger;
pub mod client;
pub mod error;
pub mod reservations;

pub use accounts::{HttpAuthenticationGateway, HttpRegistrationGateway};
pub use audit_ledger::HttpAuditLedger;
pub use client::{ServiceClient, build_http_client};
pub use error::map_reqwest;
pub use reservations::HttpReservationCatalog;
