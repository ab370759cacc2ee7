use crate::application::views::{PendingNavigation, RegisterView};
use crate::presentation::http::{error::HttpResult, state::HttpState, templates::render};
use axum::{
    Extension, Form,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tera::Context;

#[derive(Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub correo: String,
    #[serde(default)]
    pub contrasena: String,
}

fn register_context(view: &RegisterView) -> Context {
    let mut context = Context::new();
    context.insert("name", view.name());
    context.insert("email", view.email());
    context.insert("error", &view.error());
    context
}

pub async fn register_page(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    render(
        &state.templates,
        "register.html",
        &register_context(&RegisterView::default()),
    )
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    Form(form): Form<RegisterForm>,
) -> HttpResult<Response> {
    let mut view = RegisterView::new(form.nombre, form.correo, form.contrasena);
    let mut navigation = PendingNavigation::new();
    view.submit(&state.services.account_commands, &mut navigation)
        .await;

    if let Some(route) = navigation.target() {
        return Ok(Redirect::to(route.path()).into_response());
    }
    let page = render(&state.templates, "register.html", &register_context(&view))?;
    Ok(page.into_response())
}
