//! # Error Types Module
//!
//! Error types shared by the navigator, the localization catalog and the
//! transports.

use thiserror::Error;

/// Errors raised while turning an update into replies and delivering them
#[derive(Debug, Error)]
pub enum BotError {
    /// A `level_*` callback carried an id outside the fixed level set
    #[error("Unknown level: {0}")]
    UnknownLevel(String),
    /// A Fluent resource failed to parse or lacks a required message
    #[error("Localization error: {0}")]
    Localization(String),
    /// The Telegram API call failed
    #[error("Transport error: {0}")]
    Transport(#[from] teloxide::RequestError),
}

/// Errors raised while reading configuration at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("BOT_TOKEN is not set")]
    MissingToken,
    #[error("Invalid BOT_MODE '{0}', expected 'polling' or 'webhook'")]
    InvalidMode(String),
    #[error("Invalid BIND_ADDR '{0}'")]
    InvalidBindAddr(String),
    #[error("Invalid WEBHOOK_URL '{0}'")]
    InvalidWebhookUrl(String),
    #[error("Unsupported DEFAULT_LOCALE '{0}'")]
    UnsupportedLocale(String),
}
