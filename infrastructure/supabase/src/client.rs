use std::time::Duration;

use business::domain::session::model::Session;
use chrono::Utc;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder};
use tokio::sync::RwLock;

/// Shared Supabase HTTP client configuration plus the signed-in session.
///
/// Table requests carry the session's access token when there is one and the
/// anon key otherwise, so row-level security sees the signed-in user.
pub struct SupabaseClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
    session: RwLock<Option<Session>>,
}

impl SupabaseClient {
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            session: RwLock::new(None),
        }
    }

    /// Returns the PostgREST endpoint URL for `table`.
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Returns the GoTrue endpoint URL for `path`.
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    /// Builds the authorization header value. An expired session is not
    /// sent; the request falls back to the anon key.
    pub async fn auth_header(&self) -> String {
        match self.session.read().await.as_ref() {
            Some(session) if !session.is_expired_at(Utc::now()) => {
                format!("Bearer {}", session.access_token)
            }
            _ => format!("Bearer {}", self.api_key),
        }
    }

    /// Request with `apikey` and `Authorization` already set.
    pub async fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, self.auth_header().await)
    }

    pub async fn current_session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    pub async fn store_session(&self, session: Option<Session>) {
        *self.session.write().await = session;
    }
}
