//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::auth::{AuthError, AuthService, LoginRequest, StubAuthService};
use crate::core::reactor::SignInReactor;
use crate::core::state::State;

/// Fails every attempt with the error produced by `make_error`.
pub struct FailingAuthService {
    pub make_error: fn() -> AuthError,
}

#[async_trait]
impl AuthService for FailingAuthService {
    fn name(&self) -> &str {
        "failing"
    }

    async fn attempt_login(&self, _request: LoginRequest) -> Result<(), AuthError> {
        Err((self.make_error)())
    }
}

/// Takes `delay` before succeeding.
pub struct SlowAuthService {
    pub delay: Duration,
}

#[async_trait]
impl AuthService for SlowAuthService {
    fn name(&self) -> &str {
        "slow"
    }

    async fn attempt_login(&self, _request: LoginRequest) -> Result<(), AuthError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Succeeds and remembers every request it was given.
#[derive(Default)]
pub struct RecordingAuthService {
    pub requests: Mutex<Vec<LoginRequest>>,
}

#[async_trait]
impl AuthService for RecordingAuthService {
    fn name(&self) -> &str {
        "recording"
    }

    async fn attempt_login(&self, request: LoginRequest) -> Result<(), AuthError> {
        self.requests.lock().unwrap().push(request);
        Ok(())
    }
}

/// Creates a reactor backed by the stub auth service.
pub fn test_reactor() -> SignInReactor {
    SignInReactor::new(Arc::new(StubAuthService))
}

/// Subscribes a listener that records every snapshot it sees.
pub fn record_states(reactor: &mut SignInReactor) -> Arc<Mutex<Vec<State>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    reactor.subscribe(move |state| sink.lock().unwrap().push(state.clone()));
    seen
}
