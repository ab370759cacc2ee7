//! Per-page view state.
//!
//! Each view owns its own snapshot and form fields and is built fresh for the
//! page it serves; nothing here is shared between views.

pub mod audit;
pub mod items;
pub mod login;
pub mod navigation;
pub mod register;
mod snapshot;

pub use audit::AuditViewer;
pub use items::ItemsView;
pub use login::{LOGIN_FAILURE_MESSAGE, LoginView};
pub use navigation::{Navigator, PendingNavigation, Route};
pub use register::{REGISTER_FAILURE_MESSAGE, RegisterView};
