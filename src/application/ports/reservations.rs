// src/application/ports/reservations.rs
use crate::{
    application::ApplicationResult,
    domain::reservation::{NewReservation, Reservation, ReservationId},
};
use async_trait::async_trait;

#[async_trait]
pub trait ReservationCatalog: Send + Sync {
    async fn list(&self) -> ApplicationResult<Vec<Reservation>>;
    async fn create(&self, reservation: &NewReservation) -> ApplicationResult<Reservation>;
    async fn delete(&self, id: ReservationId) -> ApplicationResult<()>;
}
