//! Sign-in screen library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod auth;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Always succeeds without any network call
    #[default]
    Stub,
    /// POSTs to the configured auth service
    Http,
}
