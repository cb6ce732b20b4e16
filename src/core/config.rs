//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.signin/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::Backend;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SignInConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    pub backend: Option<Backend>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub keyboard_height: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_KEYBOARD_HEIGHT: u16 = 6;
pub const DEFAULT_AUTH_BASE_URL: &str = "http://localhost:8080/api";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub backend: Backend,
    pub auth_base_url: String,
    pub login_timeout: Duration,
    pub keyboard_height: u16,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.signin/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".signin").join("config.toml"))
}

/// Load config from `~/.signin/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SignInConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SignInConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SignInConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SignInConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. The file must exist.
pub fn load_config_from(path: &Path) -> Result<SignInConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SignInConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Sign-in Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [auth]
# backend = "stub"                        # "stub" (always succeeds) or "http"
# base_url = "http://localhost:8080/api"  # Or set SIGNIN_AUTH_URL env var
# timeout_secs = 15

# [ui]
# keyboard_height = 6                     # Rows covered by the on-screen keyboard
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_backend` and `cli_auth_url` are from CLI flags (None = not specified).
pub fn resolve(
    config: &SignInConfig,
    cli_backend: Option<Backend>,
    cli_auth_url: Option<&str>,
) -> ResolvedConfig {
    // Backend: CLI → env → config → default
    let backend = cli_backend
        .or_else(|| std::env::var("SIGNIN_AUTH_BACKEND").ok().and_then(|s| parse_backend(&s)))
        .or(config.auth.backend)
        .unwrap_or_default();

    // Auth URL: CLI → env → config → default
    let auth_base_url = cli_auth_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("SIGNIN_AUTH_URL").ok())
        .or_else(|| config.auth.base_url.clone())
        .unwrap_or_else(|| DEFAULT_AUTH_BASE_URL.to_string());

    let timeout_secs = match config.auth.timeout_secs {
        Some(0) => {
            warn!("timeout_secs = 0 would fail every login, using {}s", DEFAULT_TIMEOUT_SECS);
            DEFAULT_TIMEOUT_SECS
        }
        Some(secs) => secs,
        None => DEFAULT_TIMEOUT_SECS,
    };

    ResolvedConfig {
        backend,
        auth_base_url,
        login_timeout: Duration::from_secs(timeout_secs),
        keyboard_height: config.ui.keyboard_height.unwrap_or(DEFAULT_KEYBOARD_HEIGHT),
    }
}

fn parse_backend(value: &str) -> Option<Backend> {
    match value.trim().to_ascii_lowercase().as_str() {
        "stub" => Some(Backend::Stub),
        "http" => Some(Backend::Http),
        other => {
            warn!("Ignoring unknown SIGNIN_AUTH_BACKEND value: {}", other);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    const BACKEND_VAR: &str = "SIGNIN_AUTH_BACKEND";
    const URL_VAR: &str = "SIGNIN_AUTH_URL";

    // Env is process-global; every test that calls `resolve` holds this
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn set_or_remove(key: &str, value: Option<&str>) {
        // SAFETY: callers hold ENV_LOCK, so no other test touches env concurrently
        unsafe {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }

    /// Runs `f` with the auth env vars set to the given values, then restores them.
    fn with_env<T>(backend: Option<&str>, url: Option<&str>, f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let saved_backend = std::env::var(BACKEND_VAR).ok();
        let saved_url = std::env::var(URL_VAR).ok();
        set_or_remove(BACKEND_VAR, backend);
        set_or_remove(URL_VAR, url);
        let result = f();
        set_or_remove(BACKEND_VAR, saved_backend.as_deref());
        set_or_remove(URL_VAR, saved_url.as_deref());
        result
    }

    fn file_config() -> SignInConfig {
        SignInConfig {
            auth: AuthConfig {
                backend: Some(Backend::Http),
                base_url: Some("http://from-file".to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config_is_empty() {
        let config = SignInConfig::default();
        assert!(config.auth.backend.is_none());
        assert!(config.ui.keyboard_height.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = SignInConfig::default();
        let resolved = with_env(None, None, || resolve(&config, None, None));
        assert_eq!(resolved.backend, Backend::Stub);
        assert_eq!(resolved.login_timeout, crate::core::reactor::DEFAULT_LOGIN_TIMEOUT);
        assert_eq!(resolved.keyboard_height, DEFAULT_KEYBOARD_HEIGHT);
        assert_eq!(resolved.auth_base_url, DEFAULT_AUTH_BASE_URL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = SignInConfig {
            auth: AuthConfig {
                backend: Some(Backend::Http),
                base_url: Some("http://auth.internal".to_string()),
                timeout_secs: Some(3),
            },
            ui: UiConfig {
                keyboard_height: Some(10),
            },
        };
        let resolved = with_env(None, None, || resolve(&config, None, None));
        assert_eq!(resolved.backend, Backend::Http);
        assert_eq!(resolved.auth_base_url, "http://auth.internal");
        assert_eq!(resolved.login_timeout, Duration::from_secs(3));
        assert_eq!(resolved.keyboard_height, 10);
    }

    #[test]
    fn test_resolve_env_beats_file() {
        let config = file_config();
        let resolved = with_env(Some("stub"), Some("http://from-env"), || {
            resolve(&config, None, None)
        });
        assert_eq!(resolved.backend, Backend::Stub);
        assert_eq!(resolved.auth_base_url, "http://from-env");
    }

    #[test]
    fn test_resolve_unknown_env_backend_falls_through_to_file() {
        let config = file_config();
        let resolved = with_env(Some("carrier-pigeon"), None, || resolve(&config, None, None));
        assert_eq!(resolved.backend, Backend::Http);
        assert_eq!(resolved.auth_base_url, "http://from-file");
    }

    #[test]
    fn test_resolve_cli_beats_env() {
        let config = file_config();
        let resolved = with_env(Some("http"), Some("http://from-env"), || {
            resolve(&config, Some(Backend::Stub), Some("http://from-cli"))
        });
        assert_eq!(resolved.backend, Backend::Stub);
        assert_eq!(resolved.auth_base_url, "http://from-cli");
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let config = SignInConfig {
            auth: AuthConfig {
                timeout_secs: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = with_env(None, None, || resolve(&config, None, None));
        assert_eq!(resolved.login_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_toml_parses_all_sections() {
        let toml_str = r#"
[auth]
backend = "http"
base_url = "http://127.0.0.1:9000"
timeout_secs = 5

[ui]
keyboard_height = 8
"#;
        let config: SignInConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.auth.backend, Some(Backend::Http));
        assert_eq!(config.auth.base_url.as_deref(), Some("http://127.0.0.1:9000"));
        assert_eq!(config.auth.timeout_secs, Some(5));
        assert_eq!(config.ui.keyboard_height, Some(8));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[ui]
keyboard_height = 4
"#;
        let config: SignInConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ui.keyboard_height, Some(4));
        assert!(config.auth.backend.is_none());
        assert!(config.auth.base_url.is_none());
    }

    #[test]
    fn test_unknown_backend_is_a_parse_error() {
        let toml_str = r#"
[auth]
backend = "carrier-pigeon"
"#;
        assert!(toml::from_str::<SignInConfig>(toml_str).is_err());
    }

    #[test]
    fn test_parse_backend() {
        assert_eq!(parse_backend("stub"), Some(Backend::Stub));
        assert_eq!(parse_backend(" HTTP "), Some(Backend::Http));
        assert_eq!(parse_backend("ftp"), None);
    }

    #[test]
    fn test_load_config_from_missing_file_is_io_error() {
        let result = load_config_from(Path::new("/nonexistent/signin/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
