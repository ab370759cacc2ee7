use crate::application::{
    commands::reservations::CreateReservationCommand,
    views::{ItemsView, PendingNavigation},
};
use crate::domain::reservation::ReservationId;
use crate::presentation::http::{error::HttpResult, state::HttpState, templates::render};
use axum::{
    Extension, Form,
    extract::Path,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::json;
use tera::Context;

#[derive(Debug, Deserialize)]
pub struct ReservationForm {
    #[serde(default)]
    pub fecha: String,
    #[serde(default)]
    pub hora: String,
    #[serde(default)]
    pub estado: String,
    #[serde(default)]
    pub detalle: String,
    #[serde(default)]
    pub usuario_responsable: String,
    #[serde(default)]
    pub numero_mesa: String,
}

impl From<ReservationForm> for CreateReservationCommand {
    fn from(form: ReservationForm) -> Self {
        Self {
            date: form.fecha,
            time: form.hora,
            status: form.estado,
            detail: form.detalle,
            responsible_user: form.usuario_responsable,
            table_number: form.numero_mesa,
        }
    }
}

/// Mount the list (if not yet mounted) and render it with any pending error.
async fn render_items(state: &HttpState, view: &mut ItemsView) -> HttpResult<Html<String>> {
    if let Err(err) = view.mount().await {
        tracing::debug!(error = %err, "rendering items page without reservations");
    }

    let draft = view.draft();
    let mut context = Context::new();
    context.insert("table", &view.table());
    context.insert("error", &view.error());
    context.insert(
        "draft",
        &json!({
            "fecha": draft.date,
            "hora": draft.time,
            "estado": draft.status,
            "detalle": draft.detail,
            "usuario_responsable": draft.responsible_user,
            "numero_mesa": draft.table_number,
        }),
    );
    render(&state.templates, "items.html", &context)
}

pub async fn items_page(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    let mut view = state.services.items_view();
    render_items(&state, &mut view).await
}

pub async fn create_item(
    Extension(state): Extension<HttpState>,
    Form(form): Form<ReservationForm>,
) -> HttpResult<Response> {
    let mut view = state.services.items_view();
    let mut navigation = PendingNavigation::new();
    view.create(form.into(), &mut navigation).await;

    if let Some(route) = navigation.target() {
        return Ok(Redirect::to(route.path()).into_response());
    }
    Ok(render_items(&state, &mut view).await?.into_response())
}

pub async fn delete_item(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let mut view = state.services.items_view();
    let mut navigation = PendingNavigation::new();
    view.delete(ReservationId(id), &mut navigation).await;

    if let Some(route) = navigation.target() {
        return Ok(Redirect::to(route.path()).into_response());
    }
    Ok(render_items(&state, &mut view).await?.into_response())
}
