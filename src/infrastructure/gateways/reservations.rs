// src/infrastructure/gateways/reservations.rs
use super::ServiceClient;
use crate::{
    application::{ApplicationResult, ports::reservations::ReservationCatalog},
    domain::reservation::{NewReservation, Reservation, ReservationId},
};
use async_trait::async_trait;
use serde_json::Value;

#[derive(Clone)]
pub struct HttpReservationCatalog {
    client: ServiceClient,
}

impl HttpReservationCatalog {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReservationCatalog for HttpReservationCatalog {
    async fn list(&self) -> ApplicationResult<Vec<Reservation>> {
        self.client
            .get::<Vec<Reservation>>("reservas")
            .await?
            .into_data()
    }

    async fn create(&self, reservation: &NewReservation) -> ApplicationResult<Reservation> {
        self.client
            .post::<_, Reservation>("create_reserva", reservation)
            .await?
            .into_data()
    }

    async fn delete(&self, id: ReservationId) -> ApplicationResult<()> {
        self.client
            .delete::<Value>(&format!("delete_reserva/{id}"))
            .await?
            .into_ack()
            .map(|_| ())
    }
}
