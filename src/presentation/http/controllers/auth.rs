use crate::application::views::{LoginView, PendingNavigation};
use crate::presentation::http::{error::HttpResult, state::HttpState, templates::render};
use axum::{
    Extension, Form,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tera::Context;

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub correo: String,
    #[serde(default)]
    pub contrasena: String,
}

fn login_context(view: &LoginView) -> Context {
    let mut context = Context::new();
    context.insert("email", view.email());
    context.insert("error", &view.error());
    context
}

pub async fn login_page(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    render(
        &state.templates,
        "login.html",
        &login_context(&LoginView::default()),
    )
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Form(form): Form<LoginForm>,
) -> HttpResult<Response> {
    let mut view = LoginView::new(form.correo, form.contrasena);
    let mut navigation = PendingNavigation::new();
    view.submit(&state.services.account_commands, &mut navigation)
        .await;

    if let Some(route) = navigation.target() {
        return Ok(Redirect::to(route.path()).into_response());
    }
    let page = render(&state.templates, "login.html", &login_context(&view))?;
    Ok(page.into_response())
}
