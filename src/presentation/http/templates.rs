// src/presentation/http/templates.rs
use crate::{
    application::error::ApplicationError,
    presentation::http::error::{HttpError, HttpResult},
};
use axum::response::Html;
use tera::{Context, Tera};

// Names end in `.html` so Tera auto-escapes every interpolated value.
const TEMPLATES: [(&str, &str); 5] = [
    ("base.html", include_str!("../../../templates/base.html")),
    ("login.html", include_str!("../../../templates/login.html")),
    ("register.html", include_str!("../../../templates/register.html")),
    ("items.html", include_str!("../../../templates/items.html")),
    ("audit.html", include_str!("../../../templates/audit.html")),
];

/// Compile the embedded page templates.
pub fn load_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES)?;
    Ok(tera)
}

pub fn render(templates: &Tera, name: &str, context: &Context) -> HttpResult<Html<String>> {
    templates.render(name, context).map(Html).map_err(|err| {
        tracing::error!(template = name, error = ?err, "template rendering failed");
        HttpError::from_error(ApplicationError::infrastructure(format!(
            "failed to render {name}"
        )))
    })
}
