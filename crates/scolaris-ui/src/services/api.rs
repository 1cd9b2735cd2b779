//! HTTP client for the authentication endpoint.

use crate::core::auth::{AuthError, Authenticator, LoginOutcome};
use async_trait::async_trait;
use gloo_net::http::Request;
use scolaris_api_models::{LoginRequest, LoginResponse};

const LOGIN_PATH: &str = "/api/auth/login";

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait(?Send)]
impl Authenticator for ApiClient {
    async fn login(&self, identifier: &str, secret: &str) -> Result<LoginOutcome, AuthError> {
        let body = LoginRequest {
            email: identifier.to_string(),
            password: secret.to_string(),
        };
        let response = Request::post(&self.url(LOGIN_PATH))
            .json(&body)
            .map_err(|err| AuthError::Transport(err.to_string()))?
            .send()
            .await
            .map_err(|err| AuthError::Transport(err.to_string()))?;

        // Rejections arrive as 4xx with a regular login body.
        match response.json::<LoginResponse>().await {
            Ok(parsed) => Ok(LoginOutcome::from(parsed)),
            Err(_) if !response.ok() => Err(AuthError::Status(response.status())),
            Err(err) => Err(AuthError::Decode(err.to_string())),
        }
    }
}
