//! HTTP auth service.
//!
//! `POST {base_url}/login` with a JSON body of `{"email": ...}`. Each attempt
//! carries a fresh `X-Request-Id` so server logs can be matched to ours.
//!
//! Any 2xx counts as a login unless the body explicitly says
//! `{"logged_in": false}`, in which case the optional `message` becomes the
//! rejection reason.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::auth::{AuthError, AuthService, LoginRequest};

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Optional body of a 2xx response.
#[derive(Deserialize, Debug)]
struct LoginResponse {
    logged_in: bool,
    #[serde(default)]
    message: Option<String>,
}

pub struct HttpAuthService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAuthService {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    fn name(&self) -> &str {
        "http"
    }

    async fn attempt_login(&self, request: LoginRequest) -> Result<(), AuthError> {
        if self.base_url.is_empty() {
            return Err(AuthError::Config("auth base URL is not set".to_string()));
        }

        let request_id = uuid::Uuid::new_v4().to_string();
        info!(
            "Login request: url={}/login, request_id={}",
            self.base_url, request_id
        );

        let response = self
            .client
            .post(format!("{}/login", self.base_url))
            .header(REQUEST_ID_HEADER, &request_id)
            .json(&request)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        debug!("Login response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Login API error: {} - {}", status, err_body);
            return Err(AuthError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        match serde_json::from_str::<LoginResponse>(&body) {
            Ok(LoginResponse {
                logged_in: false,
                message,
            }) => {
                let reason = message.unwrap_or_else(|| "login refused".to_string());
                warn!("Login refused (request_id={}): {}", request_id, reason);
                Err(AuthError::Rejected(reason))
            }
            Ok(_) => Ok(()),
            Err(e) => {
                // Plain 2xx without the optional body
                debug!("Login body not parsed ({}), treating 2xx as success", e);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let service = HttpAuthService::new("http://localhost:8080/api/".to_string());
        assert_eq!(service.base_url(), "http://localhost:8080/api");
        assert_eq!(service.name(), "http");
    }

    #[tokio::test]
    async fn test_empty_base_url_is_config_error() {
        let service = HttpAuthService::new(String::new());
        let result = service
            .attempt_login(LoginRequest {
                email: "user@example.com".into(),
            })
            .await;
        assert!(matches!(result, Err(AuthError::Config(_))));
    }
}
