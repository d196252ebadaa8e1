use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::auth::dto::{AuthResponse, SignUpEmailRequest};

#[derive(Debug, Error)]
pub enum AuthClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("sign-up rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Client side of the authentication service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthClient: Send + Sync {
    async fn sign_up_email(&self, request: SignUpEmailRequest) -> Result<AuthResponse, AuthClientError>;
}

/// Talks to the service's HTTP API rooted at `base_url`.
#[derive(Clone)]
pub struct HttpAuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }
}

#[async_trait]
impl AuthClient for HttpAuthClient {
    async fn sign_up_email(&self, request: SignUpEmailRequest) -> Result<AuthResponse, AuthClientError> {
        let res = self
            .http
            .post(self.url("/auth/sign-up/email"))
            .json(&request)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let message = match res.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(%status, error = %e, "could not read rejection body");
                    String::new()
                }
            };
            debug!(%status, %message, "sign-up rejected by service");
            return Err(AuthClientError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        Ok(res.json::<AuthResponse>().await?)
    }
}
