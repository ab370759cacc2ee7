pub mod account;
pub mod audit;
pub mod errors;
pub mod reservation;
