use super::ReservationCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::reservation::{NewReservation, Reservation},
};

/// Raw form fields; parsed into a [`NewReservation`] before anything is sent.
#[derive(Debug, Clone, Default)]
pub struct CreateReservationCommand {
    pub date: String,
    pub time: String,
    pub status: String,
    pub detail: String,
    pub responsible_user: String,
    pub table_number: String,
}

impl ReservationCommandService {
    pub async fn create(
        &self,
        command: CreateReservationCommand,
    ) -> ApplicationResult<Reservation> {
        let reservation = NewReservation::parse(
            &command.date,
            &command.time,
            &command.status,
            &command.detail,
            &command.responsible_user,
            &command.table_number,
        )?;
        let created = self.catalog.create(&reservation).await?;
        tracing::info!(id = %created.id, table = created.table_number, "reservation created");
        Ok(created)
    }
}
