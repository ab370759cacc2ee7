// tests/support/mocks/gateways.rs
use super::scripted::{Outcome, Scripted};
use async_trait::async_trait;
use reservafacil_front::application::ApplicationResult;
use reservafacil_front::application::ports::{
    accounts::{AuthenticationGateway, RegistrationGateway},
    ledger::AuditLedger,
    reservations::ReservationCatalog,
};
use reservafacil_front::domain::{
    account::{Credentials, Registration},
    audit::AuditRecord,
    reservation::{NewReservation, Reservation, ReservationId},
};
use std::sync::Mutex;

pub struct StubLedger {
    pub script: Scripted<Vec<AuditRecord>>,
}

impl StubLedger {
    pub fn new(outcome: Outcome<Vec<AuditRecord>>) -> Self {
        Self {
            script: Scripted::once(outcome),
        }
    }

    pub fn calls(&self) -> usize {
        self.script.calls()
    }
}

#[async_trait]
impl AuditLedger for StubLedger {
    async fn fetch_all(&self) -> ApplicationResult<Vec<AuditRecord>> {
        self.script.next()
    }
}

pub struct StubAuthenticator {
    pub script: Scripted<()>,
    pub seen_emails: Mutex<Vec<String>>,
}

impl StubAuthenticator {
    pub fn new(outcomes: Vec<Outcome<()>>) -> Self {
        Self {
            script: Scripted::new(outcomes),
            seen_emails: Mutex::new(Vec::new()),
        }
    }

    pub fn accepting() -> Self {
        Self::new(vec![Outcome::Ok(())])
    }

    pub fn calls(&self) -> usize {
        self.script.calls()
    }
}

#[async_trait]
impl AuthenticationGateway for StubAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> ApplicationResult<()> {
        self.seen_emails
            .lock()
            .unwrap()
            .push(credentials.email().to_string());
        self.script.next()
    }
}

pub struct StubRegistrar {
    pub script: Scripted<()>,
}

impl StubRegistrar {
    pub fn new(outcome: Outcome<()>) -> Self {
        Self {
            script: Scripted::once(outcome),
        }
    }

    pub fn accepting() -> Self {
        Self::new(Outcome::Ok(()))
    }

    pub fn calls(&self) -> usize {
        self.script.calls()
    }
}

#[async_trait]
impl RegistrationGateway for StubRegistrar {
    async fn register(&self, _registration: &Registration) -> ApplicationResult<()> {
        self.script.next()
    }
}

pub struct StubCatalog {
    pub list: Scripted<Vec<Reservation>>,
    pub create: Scripted<Reservation>,
    pub delete: Scripted<()>,
    pub deleted: Mutex<Vec<ReservationId>>,
}

impl StubCatalog {
    pub fn new(
        list: Outcome<Vec<Reservation>>,
        create: Outcome<Reservation>,
        delete: Outcome<()>,
    ) -> Self {
        Self {
            list: Scripted::once(list),
            create: Scripted::once(create),
            delete: Scripted::once(delete),
            deleted: Mutex::new(Vec::new()),
        }
    }

    pub fn listing(reservations: Vec<Reservation>) -> Self {
        Self::new(
            Outcome::Ok(reservations),
            Outcome::Transport("create not scripted".into()),
            Outcome::Transport("delete not scripted".into()),
        )
    }
}

#[async_trait]
impl ReservationCatalog for StubCatalog {
    async fn list(&self) -> ApplicationResult<Vec<Reservation>> {
        self.list.next()
    }

    async fn create(&self, _reservation: &NewReservation) -> ApplicationResult<Reservation> {
        self.create.next()
    }

    async fn delete(&self, id: ReservationId) -> ApplicationResult<()> {
        self.deleted.lock().unwrap().push(id);
        self.delete.next()
    }
}
