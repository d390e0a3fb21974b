//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::debug;

use super::inbound::Inbound;
use super::navigator::Navigator;
use super::transport::{deliver, TelegramTransport};

/// Polling endpoint for messages
pub async fn message_handler(bot: Bot, msg: Message, navigator: Arc<Navigator>) -> Result<()> {
    let Some(event) = Inbound::from_message(&msg) else {
        debug!(chat_id = %msg.chat.id, "Ignoring message without text");
        return Ok(());
    };

    if let Some(transition) = navigator.handle(&event) {
        deliver(&TelegramTransport::new(bot), &transition).await?;
    }

    Ok(())
}
