use std::sync::Arc;

use crate::application::ports::ReservationCatalogPort;

pub struct ReservationCommandService {
    pub(super) catalog: Arc<ReservationCatalogPort>,
}

impl ReservationCommandService {
    pub fn new(catalog: Arc<ReservationCatalogPort>) -> Self {
        Self { catalog }
    }
}
