//! # Configuration Module
//!
//! Runtime configuration read from the environment at startup. A `.env`
//! file is honoured through `dotenv` before this module is consulted.

use std::net::SocketAddr;

use reqwest::Url;

use crate::errors::ConfigError;
use crate::localization::SUPPORTED_LOCALES;

// Defaults for optional settings
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_PROMPTS_URL: &str = "https://github.com/catthecat3/engbot18/blob/main/PROMT.pdf";
pub const DEFAULT_LOCALE: &str = "ru";

/// How updates reach the bot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryMode {
    /// Long polling through the teloxide dispatcher
    #[default]
    Polling,
    /// Telegram pushes updates to our HTTP endpoint
    Webhook,
}

impl std::str::FromStr for DeliveryMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "polling" => Ok(DeliveryMode::Polling),
            "webhook" => Ok(DeliveryMode::Webhook),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

/// Bot configuration
#[derive(Clone)]
pub struct Config {
    /// Telegram bot API token
    pub bot_token: String,
    /// Polling or webhook delivery
    pub mode: DeliveryMode,
    /// Address the webhook server listens on
    pub bind_addr: SocketAddr,
    /// Public URL registered with Telegram in webhook mode
    pub webhook_url: Option<Url>,
    /// Expected value of the `X-Telegram-Bot-Api-Secret-Token` header
    pub webhook_secret: Option<String>,
    /// Link to the prompts PDF shown with the AI tools list
    pub prompts_url: String,
    /// Locale used when the user's language is unknown or unsupported
    pub default_locale: String,
}

// Keep the token out of logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("mode", &self.mode)
            .field("bind_addr", &self.bind_addr)
            .field("webhook_url", &self.webhook_url.as_ref().map(|u| u.as_str()))
            .field("webhook_secret", &self.webhook_secret.as_ref().map(|_| "<redacted>"))
            .field("prompts_url", &self.prompts_url)
            .field("default_locale", &self.default_locale)
            .finish()
    }
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bot_token = get("BOT_TOKEN")
            .or_else(|| get("TELEGRAM_BOT_TOKEN"))
            .ok_or(ConfigError::MissingToken)?;

        let mode = match get("BOT_MODE") {
            Some(raw) => raw.parse()?,
            None => DeliveryMode::default(),
        };

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_raw.clone()))?;

        let webhook_url = match get("WEBHOOK_URL") {
            Some(raw) => Some(
                Url::parse(&raw).map_err(|_| ConfigError::InvalidWebhookUrl(raw.clone()))?,
            ),
            None => None,
        };

        let default_locale = get("DEFAULT_LOCALE")
            .map(|l| l.to_ascii_lowercase())
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        if !SUPPORTED_LOCALES.contains(&default_locale.as_str()) {
            return Err(ConfigError::UnsupportedLocale(default_locale));
        }

        Ok(Self {
            bot_token,
            mode,
            bind_addr,
            webhook_url,
            webhook_secret: get("WEBHOOK_SECRET"),
            prompts_url: get("PROMPTS_URL").unwrap_or_else(|| DEFAULT_PROMPTS_URL.to_string()),
            default_locale,
        })
    }
}
