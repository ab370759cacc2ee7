use super::ReservationCommandService;
use crate::{application::error::ApplicationResult, domain::reservation::ReservationId};

impl ReservationCommandService {
    pub async fn delete(&self, id: ReservationId) -> ApplicationResult<()> {
        self.catalog.delete(id).await?;
        tracing::info!(%id, "reservation deleted");
        Ok(())
    }
}
