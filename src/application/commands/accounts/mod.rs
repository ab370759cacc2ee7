mod login;
mod register;
mod service;

pub use login::LoginCommand;
pub use register::RegisterCommand;
pub use service::AccountCommandService;
