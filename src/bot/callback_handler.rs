//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::debug;

use super::inbound::Inbound;
use super::navigator::Navigator;
use super::transport::{deliver, TelegramTransport};

/// Polling endpoint for callback queries
pub async fn callback_handler(bot: Bot, q: CallbackQuery, navigator: Arc<Navigator>) -> Result<()> {
    debug!(user_id = %q.from.id, "Received callback query from user");

    let event = Inbound::from_callback_query(&q);
    if let Some(transition) = navigator.handle(&event) {
        deliver(&TelegramTransport::new(bot), &transition).await?;
    }

    Ok(())
}
