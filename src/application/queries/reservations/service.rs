use std::sync::Arc;

use crate::application::ports::ReservationCatalogPort;

pub struct ReservationQueryService {
    pub(super) catalog: Arc<ReservationCatalogPort>,
}

impl ReservationQueryService {
    pub fn new(catalog: Arc<ReservationCatalogPort>) -> Self {
        Self { catalog }
    }
}
