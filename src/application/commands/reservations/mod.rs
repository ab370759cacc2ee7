mod create;
mod delete;
mod service;

pub use create::CreateReservationCommand;
pub use service::ReservationCommandService;
