use std::sync::Arc;

use crate::application::ports::{AuthenticationGatewayPort, RegistrationGatewayPort};

pub struct AccountCommandService {
    pub(super) authenticator: Arc<AuthenticationGatewayPort>,
    pub(super) registrar: Arc<RegistrationGatewayPort>,
}

impl AccountCommandService {
    pub fn new(
        authenticator: Arc<AuthenticationGatewayPort>,
        registrar: Arc<RegistrationGatewayPort>,
    ) -> Self {
        Self {
            authenticator,
            registrar,
        }
    }
}
