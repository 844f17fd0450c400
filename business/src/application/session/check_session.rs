use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::service::AuthService;
use crate::domain::session::use_cases::check_session::CheckSessionUseCase;

pub struct CheckSessionUseCaseImpl {
    pub auth: Arc<dyn AuthService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckSessionUseCase for CheckSessionUseCaseImpl {
    async fn execute(&self) -> Result<(), SessionError> {
        match self.auth.get_session().await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => {
                self.logger.debug("No active session");
                Err(SessionError::NoActiveSession)
            }
            Err(e) => {
                self.logger
                    .error(&format!("Failed to check session: {}", e));
                Err(e)
            }
        }
    }
}
