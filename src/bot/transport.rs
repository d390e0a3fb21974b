//! Outbound side: the calls a transition needs from the bot platform.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{CallbackQueryId, InlineKeyboardMarkup};
use tracing::debug;

use crate::errors::BotError;

use super::navigator::Transition;
use super::ui_builder::Reply;

/// Bot platform operations used by the navigator's transitions
#[async_trait]
pub trait Transport: Send + Sync {
    /// Stop the client's loading indicator for a callback query
    async fn answer_callback(&self, query_id: &str) -> Result<(), BotError>;

    /// Send one message, with its inline keyboard if any
    async fn send_reply(&self, chat_id: i64, reply: &Reply) -> Result<(), BotError>;
}

/// Transport backed by the Telegram Bot API
#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn answer_callback(&self, query_id: &str) -> Result<(), BotError> {
        self.bot
            .answer_callback_query(CallbackQueryId(query_id.to_string()))
            .await?;
        Ok(())
    }

    async fn send_reply(&self, chat_id: i64, reply: &Reply) -> Result<(), BotError> {
        let request = self.bot.send_message(ChatId(chat_id), reply.text.clone());
        match &reply.keyboard {
            Some(keyboard) => {
                request
                    .reply_markup(InlineKeyboardMarkup::from(keyboard))
                    .await?
            }
            None => request.await?,
        };
        Ok(())
    }
}

/// Apply a transition: acknowledge first, then send replies in order
///
/// Stops at the first failed call and returns its error; nothing is retried.
pub async fn deliver(transport: &dyn Transport, transition: &Transition) -> Result<(), BotError> {
    if let Some(query_id) = &transition.acknowledge {
        transport.answer_callback(query_id).await?;
    }

    for reply in &transition.replies {
        transport.send_reply(transition.chat_id, reply).await?;
    }

    debug!(
        chat_id = %transition.chat_id,
        replies = transition.replies.len(),
        state = ?transition.state,
        "Transition delivered"
    );

    Ok(())
}
