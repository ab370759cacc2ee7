// tests/support/helpers.rs
use super::mocks::{StubAuthenticator, StubCatalog, StubLedger, StubRegistrar};
use axum::body::{self, Body};
use axum::http::Response;
use reservafacil_front::application::services::ApplicationServices;
use reservafacil_front::presentation::http::{
    routes::build_router, state::HttpState, templates::load_templates,
};
use std::sync::Arc;

pub struct TestPorts {
    pub ledger: Arc<StubLedger>,
    pub authenticator: Arc<StubAuthenticator>,
    pub registrar: Arc<StubRegistrar>,
    pub catalog: Arc<StubCatalog>,
}

impl TestPorts {
    pub fn new(
        ledger: StubLedger,
        authenticator: StubAuthenticator,
        registrar: StubRegistrar,
        catalog: StubCatalog,
    ) -> Self {
        Self {
            ledger: Arc::new(ledger),
            authenticator: Arc::new(authenticator),
            registrar: Arc::new(registrar),
            catalog: Arc::new(catalog),
        }
    }

    pub fn services(&self) -> Arc<ApplicationServices> {
        Arc::new(ApplicationServices::new(
            self.ledger.clone(),
            self.authenticator.clone(),
            self.registrar.clone(),
            self.catalog.clone(),
        ))
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: self.services(),
            templates: Arc::new(load_templates().expect("templates")),
        };
        build_router(state)
    }
}

pub async fn body_text(resp: Response<Body>) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}
