use super::ReservationQueryService;
use crate::{application::error::ApplicationResult, domain::reservation::Reservation};

impl ReservationQueryService {
    pub async fn list_reservations(&self) -> ApplicationResult<Vec<Reservation>> {
        let reservations = self.catalog.list().await?;
        tracing::debug!(count = reservations.len(), "reservations fetched");
        Ok(reservations)
    }
}
