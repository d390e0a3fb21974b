//! # English with AI Telegram Bot
//!
//! A Telegram bot that recommends English-learning materials for a chosen
//! proficiency level and a list of AI tools, reachable over long polling
//! or a webhook.

pub mod bot;
pub mod config;
pub mod errors;
pub mod localization;
pub mod menu;
pub mod polling;
pub mod webhook;
