//! Bot module for handling Telegram interactions
//!
//! - `inbound`: transport-neutral events built from Telegram updates
//! - `navigator`: the menu state machine
//! - `ui_builder`: keyboards and reply payloads
//! - `transport`: outbound Bot API calls and transition delivery
//! - `message_handler` / `callback_handler`: long-polling endpoints

pub mod callback_handler;
pub mod inbound;
pub mod message_handler;
pub mod navigator;
pub mod transport;
pub mod ui_builder;

pub use callback_handler::callback_handler;
pub use message_handler::message_handler;

pub use inbound::Inbound;
pub use navigator::{Navigator, Transition};
pub use transport::{deliver, TelegramTransport, Transport};
pub use ui_builder::{Button, Keyboard, Reply};
