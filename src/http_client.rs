use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{Result, ScopeError};

/// Basic-auth pair sent with every API request.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Build the transport shared by every request of a run.
pub fn create_api_client(cfg: &Config) -> reqwest::Result<Client> {
    ClientBuilder::new()
        // No idle connections are kept between requests
        .pool_max_idle_per_host(0)
        .tcp_nodelay(true)

        // Timeouts
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .connect_timeout(Duration::from_secs(cfg.timeout_secs))

        .gzip(true)
        .use_rustls_tls()

        // Stop at the first redirect and hand it back as the response
        .redirect(reqwest::redirect::Policy::none())

        .user_agent(cfg.user_agent.as_str())

        // The platform is reached with certificate checks off
        .danger_accept_invalid_certs(cfg.accept_invalid_certs)

        .build()
}

/// Authenticated JSON client for the hacker API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    creds: Credentials,
}

impl ApiClient {
    pub fn new(http: Client, creds: Credentials) -> Self {
        Self { http, creds }
    }

    pub fn from_config(cfg: &Config, creds: Credentials) -> reqwest::Result<Self> {
        Ok(Self::new(create_api_client(cfg)?, creds))
    }

    /// One authenticated GET, decoded as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url, "GET");
        let resp = self
            .http
            .get(url)
            .basic_auth(&self.creds.username, Some(&self.creds.token))
            .send()
            .await
            .map_err(|source| ScopeError::Transport { url: url.to_string(), source })?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ScopeError::Auth { url: url.to_string(), status: status.as_u16() });
        }
        if status.is_client_error() || status.is_server_error() {
            return Err(ScopeError::Status { url: url.to_string(), status: status.as_u16() });
        }
        if status.is_redirection() {
            tracing::debug!(url, status = status.as_u16(), "redirect not followed");
        }

        let body = resp
            .bytes()
            .await
            .map_err(|source| ScopeError::Transport { url: url.to_string(), source })?;
        serde_json::from_slice(&body).map_err(|source| ScopeError::Decode { url: url.to_string(), source })
    }
}
