// src/application/views/items.rs
use super::{
    navigation::{Navigator, Route},
    snapshot::Snapshot,
};
use crate::{
    application::{
        ApplicationResult,
        commands::reservations::{CreateReservationCommand, ReservationCommandService},
        dto::TableView,
        queries::reservations::ReservationQueryService,
    },
    domain::reservation::{RESERVATION_COLUMNS, Reservation, ReservationId},
};
use std::sync::Arc;

const CREATE_FAILURE_MESSAGE: &str = "The reservation could not be created. Please try again.";
const DELETE_FAILURE_MESSAGE: &str = "The reservation could not be deleted. Please try again.";

/// Reservation list with its create form and per-row delete action.
pub struct ItemsView {
    queries: Arc<ReservationQueryService>,
    commands: Arc<ReservationCommandService>,
    snapshot: Snapshot<Reservation>,
    draft: CreateReservationCommand,
    error: Option<String>,
}

impl ItemsView {
    pub fn new(
        queries: Arc<ReservationQueryService>,
        commands: Arc<ReservationCommandService>,
    ) -> Self {
        Self {
            queries,
            commands,
            snapshot: Snapshot::default(),
            draft: CreateReservationCommand::default(),
            error: None,
        }
    }

    pub async fn mount(&mut self) -> ApplicationResult<()> {
        let queries = Arc::clone(&self.queries);
        self.snapshot
            .load("reservations", || async move {
                queries.list_reservations().await
            })
            .await
    }

    pub fn reservations(&self) -> &[Reservation] {
        self.snapshot.items()
    }

    pub fn table(&self) -> TableView {
        TableView::new(
            RESERVATION_COLUMNS,
            self.reservations().iter().map(Reservation::cells),
        )
    }

    /// Form values to echo back when a create attempt failed.
    pub fn draft(&self) -> &CreateReservationCommand {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn create(
        &mut self,
        command: CreateReservationCommand,
        navigator: &mut impl Navigator,
    ) {
        self.error = None;
        self.draft = command.clone();

        match self.commands.create(command).await {
            Ok(_) => {
                self.draft = CreateReservationCommand::default();
                navigator.navigate(Route::Items);
            }
            Err(err) => {
                tracing::error!(error = %err, "reservation create failed");
                self.error = Some(
                    err.user_message()
                        .unwrap_or_else(|| CREATE_FAILURE_MESSAGE.to_string()),
                );
            }
        }
    }

    pub async fn delete(&mut self, id: ReservationId, navigator: &mut impl Navigator) {
        self.error = None;

        match self.commands.delete(id).await {
            Ok(()) => navigator.navigate(Route::Items),
            Err(err) => {
                tracing::error!(%id, error = %err, "reservation delete failed");
                self.error = Some(
                    err.user_message()
                        .unwrap_or_else(|| DELETE_FAILURE_MESSAGE.to_string()),
                );
            }
        }
    }
}
