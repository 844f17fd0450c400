use std::sync::Arc;

use business::domain::session::use_cases::check_session::CheckSessionUseCase;
use business::domain::session::use_cases::login::{LoginParams, LoginUseCase};

use crate::ui::messages::{IntoErrorMessage, Operation};
use crate::ui::routes::Route;

pub struct LoginView {
    login: Arc<dyn LoginUseCase>,
    check_session: Arc<dyn CheckSessionUseCase>,
}

impl LoginView {
    pub fn new(login: Arc<dyn LoginUseCase>, check_session: Arc<dyn CheckSessionUseCase>) -> Self {
        Self {
            login,
            check_session,
        }
    }

    /// Signs in and confirms the session before leaving for the catalog.
    pub async fn submit(&self, email: &str, password: &str) -> Result<Route, String> {
        self.login
            .execute(LoginParams {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
            .map_err(|e| e.into_error_message(Operation::Login))?;

        self.check_session
            .execute()
            .await
            .map_err(|e| e.into_error_message(Operation::CheckSession))?;

        Ok(Route::Products)
    }
}
