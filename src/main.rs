use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;

use english_with_ai::bot::Navigator;
use english_with_ai::config::{Config, DeliveryMode};
use english_with_ai::localization::Catalog;
use english_with_ai::{polling, webhook};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting English with AI Telegram Bot");

    // Missing token is fatal before any traffic is accepted
    let config = Config::from_env()?;
    info!(config = ?config, "Configuration loaded");

    let catalog = Catalog::load(&config.default_locale)?;
    let navigator = Arc::new(Navigator::new(catalog, config.prompts_url.clone()));

    let bot = Bot::new(config.bot_token.clone());

    match config.mode {
        DeliveryMode::Polling => polling::run(bot, navigator).await,
        DeliveryMode::Webhook => webhook::serve(&config, bot, navigator).await,
    }
}
