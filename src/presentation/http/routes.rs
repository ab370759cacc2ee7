// src/presentation/http/routes.rs
use crate::application::views::Route;
use crate::presentation::http::controllers::{audit, auth, items, register};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(Route::Login.path(), get(auth::login_page).post(auth::login))
        .route(
            Route::Register.path(),
            get(register::register_page).post(register::register),
        )
        .route(
            Route::Items.path(),
            get(items::items_page).post(items::create_item),
        )
        .route("/items/{id}/delete", post(items::delete_item))
        .route(Route::Audit.path(), get(audit::audit_page))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
