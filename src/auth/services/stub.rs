//! Always-succeeds auth service.
//!
//! Resolves immediately without looking at the request. This is the default
//! backend until a real one is configured.

use async_trait::async_trait;
use log::debug;

use crate::auth::{AuthError, AuthService, LoginRequest};

#[derive(Debug, Default, Clone, Copy)]
pub struct StubAuthService;

#[async_trait]
impl AuthService for StubAuthService {
    fn name(&self) -> &str {
        "stub"
    }

    async fn attempt_login(&self, _request: LoginRequest) -> Result<(), AuthError> {
        debug!("Stub auth service: login accepted");
        Ok(())
    }
}
