use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::service::AuthService;
use crate::domain::session::use_cases::logout::LogoutUseCase;

pub struct LogoutUseCaseImpl {
    pub auth: Arc<dyn AuthService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogoutUseCase for LogoutUseCaseImpl {
    async fn execute(&self) -> Result<(), SessionError> {
        self.logger.info("Signing out");
        self.auth.sign_out().await
    }
}
