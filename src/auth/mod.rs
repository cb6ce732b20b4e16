pub mod service;
pub mod services;

pub use service::{AuthError, AuthService, LoginRequest};
pub use services::{HttpAuthService, StubAuthService};
