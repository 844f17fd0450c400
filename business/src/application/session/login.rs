use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::service::AuthService;
use crate::domain::session::use_cases::login::{LoginParams, LoginUseCase};

pub struct LoginUseCaseImpl {
    pub auth: Arc<dyn AuthService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<(), SessionError> {
        if params.email.is_empty() || params.password.is_empty() {
            return Err(SessionError::MissingCredentials);
        }

        self.logger.info(&format!("Signing in: {}", params.email));

        match self.auth.sign_in(&params.email, &params.password).await {
            Ok(_) => {
                self.logger.info(&format!("Signed in: {}", params.email));
                Ok(())
            }
            Err(e) => {
                self.logger
                    .warn(&format!("Sign in failed for {}: {}", params.email, e));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockAuth, mock_logger, session};

    fn params(email: &str, password: &str) -> LoginParams {
        LoginParams {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn should_sign_in_when_credentials_are_given() {
        let mut auth = MockAuth::new();
        auth.expect_sign_in()
            .withf(|email, password| email == "admin@tienda.com" && password == "secreto1")
            .times(1)
            .returning(|_, _| Ok(session()));

        let use_case = LoginUseCaseImpl {
            auth: Arc::new(auth),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("admin@tienda.com", "secreto1")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_fail_fast_when_password_is_empty() {
        let mut auth = MockAuth::new();
        auth.expect_sign_in().never();

        let use_case = LoginUseCaseImpl {
            auth: Arc::new(auth),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("admin@tienda.com", "")).await;

        assert_eq!(result.unwrap_err(), SessionError::MissingCredentials);
    }

    #[tokio::test]
    async fn should_fail_fast_when_email_is_empty() {
        let mut auth = MockAuth::new();
        auth.expect_sign_in().never();

        let use_case = LoginUseCaseImpl {
            auth: Arc::new(auth),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("", "secreto1")).await;

        assert_eq!(result.unwrap_err(), SessionError::MissingCredentials);
    }

    #[tokio::test]
    async fn should_report_invalid_credentials_from_backend() {
        let mut auth = MockAuth::new();
        auth.expect_sign_in()
            .returning(|_, _| Err(SessionError::InvalidCredentials));

        let use_case = LoginUseCaseImpl {
            auth: Arc::new(auth),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("admin@tienda.com", "incorrecta")).await;

        assert_eq!(result.unwrap_err(), SessionError::InvalidCredentials);
    }
}
