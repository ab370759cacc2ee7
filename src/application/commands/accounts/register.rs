use super::AccountCommandService;
use crate::{application::error::ApplicationResult, domain::account::Registration};

pub struct RegisterCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AccountCommandService {
    pub async fn register(&self, command: RegisterCommand) -> ApplicationResult<()> {
        let registration = Registration::new(command.name, command.email, command.password)?;
        self.registrar.register(&registration).await?;
        tracing::info!(email = %registration.email(), "account registered");
        Ok(())
    }
}
