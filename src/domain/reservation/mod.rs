pub mod entity;

pub use entity::{NewReservation, RESERVATION_COLUMNS, Reservation, ReservationId};
