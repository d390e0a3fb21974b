//! Webhook delivery: Telegram POSTs updates to `/`, `GET /` answers liveness.

use anyhow::Result;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::json;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, error, info, warn};

use crate::bot::{deliver, Inbound, Navigator, TelegramTransport, Transport};
use crate::config::Config;

pub const SECRET_TOKEN_HEADER: &str = "x-telegram-bot-api-secret-token";
pub const HEALTH_TEXT: &str = "Bot is running!";

#[derive(Clone)]
pub struct WebhookState {
    pub navigator: Arc<Navigator>,
    pub transport: Arc<dyn Transport>,
    /// Expected secret token header; `None` disables the check
    pub secret_token: Option<String>,
}

pub fn router(state: WebhookState) -> Router {
    Router::new()
        .route("/", get(health_check).post(receive_update))
        .with_state(state)
}

async fn health_check() -> &'static str {
    HEALTH_TEXT
}

async fn receive_update(
    State(state): State<WebhookState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if let Some(expected) = &state.secret_token {
        match headers.get(SECRET_TOKEN_HEADER) {
            Some(received) if received.as_bytes() == expected.as_bytes() => {}
            Some(_) => {
                warn!("Invalid Telegram secret token");
                return StatusCode::UNAUTHORIZED.into_response();
            }
            None => {
                warn!("Missing Telegram secret token");
                return StatusCode::UNAUTHORIZED.into_response();
            }
        }
    }

    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            warn!(error = %e, "Unparsable update payload");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    let Some(event) = Inbound::from_update(&update) else {
        debug!("Ignoring update without message text or callback query");
        return ok_response();
    };

    let Some(transition) = state.navigator.handle(&event) else {
        return ok_response();
    };

    match deliver(state.transport.as_ref(), &transition).await {
        Ok(()) => ok_response(),
        Err(e) => {
            error!(chat_id = %transition.chat_id, error = %e, "Failed to deliver transition");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e)).into_response()
        }
    }
}

fn ok_response() -> Response {
    Json(json!({ "ok": true })).into_response()
}

/// Register the webhook if a public URL is configured, then serve until Ctrl+C
pub async fn serve(config: &Config, bot: Bot, navigator: Arc<Navigator>) -> Result<()> {
    if let Some(url) = &config.webhook_url {
        let mut request = bot.set_webhook(url.clone());
        if let Some(secret) = &config.webhook_secret {
            request = request.secret_token(secret.clone());
        }
        request.await?;
        info!(url = %url, "Webhook registered");
    } else {
        info!("WEBHOOK_URL not set, assuming the webhook is registered externally");
    }

    let state = WebhookState {
        navigator,
        transport: Arc::new(TelegramTransport::new(bot)),
        secret_token: config.webhook_secret.clone(),
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Starting webhook server on http://{}", config.bind_addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for shutdown signal");
            }
        })
        .await?;

    Ok(())
}
