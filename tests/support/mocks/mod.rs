// tests/support/mocks/mod.rs
pub mod gateways;
pub mod navigation;
pub mod records;
pub mod scripted;

pub use gateways::{StubAuthenticator, StubCatalog, StubLedger, StubRegistrar};
pub use navigation::RecordingNavigator;
pub use records::{sample_record, sample_reservation};
pub use scripted::{Outcome, Scripted};
