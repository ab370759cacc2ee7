use super::AccountCommandService;
use crate::{application::error::ApplicationResult, domain::account::Credentials};

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl AccountCommandService {
    /// One authentication request per call; no retry.
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<()> {
        let credentials = Credentials::new(command.email, command.password)?;
        self.authenticator.authenticate(&credentials).await?;
        tracing::info!(email = %credentials.email(), "login accepted");
        Ok(())
    }
}
