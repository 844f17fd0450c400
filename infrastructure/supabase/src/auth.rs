use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use business::domain::session::errors::SessionError;
use business::domain::session::model::Session;
use business::domain::session::service::AuthService;

use crate::client::SupabaseClient;
use crate::error::ApiErrorBody;

const INVALID_CREDENTIALS: &str = "Invalid login credentials";

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    expires_in: Option<i64>,
    expires_at: Option<i64>,
    user: Option<TokenUser>,
}

#[derive(Debug, Deserialize)]
struct TokenUser {
    email: Option<String>,
}

impl TokenResponse {
    fn into_session(self, now: DateTime<Utc>) -> Session {
        let expires_at = self
            .expires_at
            .and_then(|timestamp| DateTime::from_timestamp(timestamp, 0))
            .or_else(|| self.expires_in.map(|seconds| now + Duration::seconds(seconds)));

        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            email: self.user.and_then(|user| user.email),
        }
    }
}

fn is_invalid_credentials(body: &ApiErrorBody) -> bool {
    body.message() == Some(INVALID_CREDENTIALS)
        || body.error.as_deref() == Some("invalid_grant")
        || body.error_code.as_deref() == Some("invalid_credentials")
}

fn session_error(body: &ApiErrorBody) -> SessionError {
    if is_invalid_credentials(body) {
        return SessionError::InvalidCredentials;
    }
    match body.message() {
        Some(message) => SessionError::Backend(message.to_string()),
        None => SessionError::Unavailable,
    }
}

/// Password sign-in against Supabase Auth. The session lives in memory on the
/// shared client for as long as the process runs.
pub struct SupabaseAuthService {
    client: Arc<SupabaseClient>,
}

impl SupabaseAuthService {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthService for SupabaseAuthService {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, SessionError> {
        let url = self.client.auth_url("token?grant_type=password");
        let response = self
            .client
            .client
            .post(&url)
            .header("apikey", &self.client.api_key)
            .json(&PasswordGrant { email, password })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Supabase sign in request failed: {e}");
                SessionError::Unavailable
            })?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(session_error(&ApiErrorBody::parse(&body)));
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            tracing::error!("Undecodable sign in response: {e}");
            SessionError::Unavailable
        })?;

        let session = token.into_session(Utc::now());
        self.client.store_session(Some(session.clone())).await;
        Ok(session)
    }

    async fn get_session(&self) -> Result<Option<Session>, SessionError> {
        match self.client.current_session().await {
            Some(session) if session.is_expired_at(Utc::now()) => {
                tracing::info!("Stored session expired, discarding it");
                self.client.store_session(None).await;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        if self.client.current_session().await.is_none() {
            return Ok(());
        }

        let url = self.client.auth_url("logout");
        let result = self
            .client
            .request(Method::POST, &url)
            .await
            .send()
            .await;
        self.client.store_session(None).await;

        match result {
            Ok(response) if response.status().is_success() => Ok(()),
            Ok(response) => {
                let body = response.text().await.unwrap_or_default();
                Err(session_error(&ApiErrorBody::parse(&body)))
            }
            Err(e) => {
                tracing::error!("Supabase sign out request failed: {e}");
                Err(SessionError::Unavailable)
            }
        }
    }
}
