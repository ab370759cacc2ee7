// src/application/views/login.rs
use super::navigation::{Navigator, Route};
use crate::application::commands::accounts::{AccountCommandService, LoginCommand};

pub const LOGIN_FAILURE_MESSAGE: &str = "An error occurred while logging in. Please try again.";

#[derive(Default, Clone)]
pub struct LoginView {
    email: String,
    password: String,
    error: Option<String>,
}

impl LoginView {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            error: None,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit the form: one request, then either navigate to the items page
    /// or keep the error to show inline.
    pub async fn submit(
        &mut self,
        commands: &AccountCommandService,
        navigator: &mut impl Navigator,
    ) {
        self.error = None;

        let command = LoginCommand {
            email: self.email.clone(),
            password: self.password.clone(),
        };
        match commands.login(command).await {
            Ok(()) => navigator.navigate(Route::Items),
            Err(err) => {
                tracing::error!(error = %err, "login failed");
                self.error = Some(
                    err.user_message()
                        .unwrap_or_else(|| LOGIN_FAILURE_MESSAGE.to_string()),
                );
            }
        }
    }
}
