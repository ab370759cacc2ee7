use crate::presentation::http::{error::HttpResult, state::HttpState, templates::render};
use axum::{Extension, response::Html};
use tera::Context;

/// Audit table page. Each request mounts a fresh viewer.
pub async fn audit_page(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    let mut viewer = state.services.audit_viewer();
    if let Err(err) = viewer.mount().await {
        // Already reported by the viewer; the table is shown without rows.
        tracing::debug!(error = %err, "rendering audit page without records");
    }

    let mut context = Context::new();
    context.insert("table", &viewer.table());
    render(&state.templates, "audit.html", &context)
}
