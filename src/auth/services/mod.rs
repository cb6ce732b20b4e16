mod http;
mod stub;

pub use http::HttpAuthService;
pub use stub::StubAuthService;
