pub mod audit;
pub mod reservations;
