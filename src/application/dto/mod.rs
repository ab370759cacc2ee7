pub mod envelope;
pub mod table;

pub use envelope::ServiceEnvelope;
pub use table::TableView;
