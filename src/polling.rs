//! Long-polling delivery through the teloxide dispatcher

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{info, warn};

use crate::bot::{callback_handler, message_handler, Navigator};

pub async fn run(bot: Bot, navigator: Arc<Navigator>) -> Result<()> {
    // Telegram refuses getUpdates while a webhook is registered
    if let Err(e) = bot.delete_webhook().await {
        warn!(error = %e, "Failed to delete webhook before polling");
    }

    info!("Bot initialized, starting dispatcher");

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(message_handler))
        .branch(Update::filter_callback_query().endpoint(callback_handler));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![navigator])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
