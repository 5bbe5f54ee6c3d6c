//! Typed failures that callers may want to tell apart.
//!
//! Library functions still return `anyhow::Result`; these are wrapped into
//! it and can be recovered with `downcast_ref`.

use std::time::Duration;

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("{provider} did not answer within {}s", .timeout.as_secs())]
    Timeout { provider: &'static str, timeout: Duration },

    #[error("{provider} request failed with status {status}: {body}")]
    Http { provider: &'static str, status: u16, body: String },

    #[error("Could not reach {provider}: {message}")]
    Transport { provider: &'static str, message: String },
}

impl WeatherError {
    pub(crate) fn from_reqwest(provider: &'static str, timeout: Duration, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            WeatherError::Timeout { provider, timeout }
        } else {
            WeatherError::Transport { provider, message: err.to_string() }
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ClosetError {
    #[error("No clothing item with id {0}")]
    NotFound(Uuid),

    #[error("Clothing item name must not be empty")]
    EmptyName,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Invalid storage key '{0}': only letters, digits, '-' and '_' are allowed")]
    InvalidKey(String),
}
