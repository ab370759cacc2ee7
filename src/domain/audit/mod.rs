pub mod entity;
pub mod value_objects;


pub use entity::{AUDIT_COLUMNS, AuditRecord};
pub use value_objects::{AuditCode, LedgerTimestamp};
