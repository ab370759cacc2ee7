// src/application/views/register.rs
use super::navigation::{Navigator, Route};
use crate::application::commands::accounts::{AccountCommandService, RegisterCommand};

pub const REGISTER_FAILURE_MESSAGE: &str =
    "An error occurred while registering. Please try again.";

#[derive(Default, Clone)]
pub struct RegisterView {
    name: String,
    email: String,
    password: String,
    error: Option<String>,
}

impl RegisterView {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            error: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// On success the user is sent to the login page.
    pub async fn submit(
        &mut self,
        commands: &AccountCommandService,
        navigator: &mut impl Navigator,
    ) {
        self.error = None;

        let command = RegisterCommand {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        };
        match commands.register(command).await {
            Ok(()) => navigator.navigate(Route::Login),
            Err(err) => {
                tracing::error!(error = %err, "registration failed");
                self.error = Some(
                    err.user_message()
                        .unwrap_or_else(|| REGISTER_FAILURE_MESSAGE.to_string()),
                );
            }
        }
    }
}
