//! Transport-neutral inbound events

use teloxide::types::{CallbackQuery, Message, Update, UpdateKind};

/// A user action the navigator can react to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inbound {
    /// A text message, possibly a command
    Message {
        chat_id: i64,
        first_name: Option<String>,
        language_code: Option<String>,
        text: String,
    },
    /// An inline button press
    Callback {
        query_id: String,
        chat_id: i64,
        first_name: Option<String>,
        language_code: Option<String>,
        data: Option<String>,
    },
}

impl Inbound {
    pub fn chat_id(&self) -> i64 {
        match self {
            Inbound::Message { chat_id, .. } | Inbound::Callback { chat_id, .. } => *chat_id,
        }
    }

    pub fn language_code(&self) -> Option<&str> {
        match self {
            Inbound::Message { language_code, .. } | Inbound::Callback { language_code, .. } => {
                language_code.as_deref()
            }
        }
    }

    pub fn first_name(&self) -> Option<&str> {
        match self {
            Inbound::Message { first_name, .. } | Inbound::Callback { first_name, .. } => {
                first_name.as_deref().filter(|name| !name.trim().is_empty())
            }
        }
    }

    /// Convert a raw update as pushed to the webhook
    ///
    /// Only text messages and callback queries produce events.
    pub fn from_update(update: &Update) -> Option<Self> {
        match &update.kind {
            UpdateKind::Message(msg) => Self::from_message(msg),
            UpdateKind::CallbackQuery(q) => Some(Self::from_callback_query(q)),
            _ => None,
        }
    }

    /// Convert a polled message; messages without text yield `None`
    pub fn from_message(msg: &Message) -> Option<Self> {
        let text = msg.text()?;
        let user = msg.from.as_ref();

        Some(Inbound::Message {
            chat_id: msg.chat.id.0,
            first_name: user.map(|u| u.first_name.clone()),
            language_code: user.and_then(|u| u.language_code.clone()),
            text: text.to_string(),
        })
    }

    /// Convert a polled callback query
    ///
    /// Falls back to the sender's id as chat when the originating message is
    /// not available; in private chats both ids coincide.
    pub fn from_callback_query(q: &CallbackQuery) -> Self {
        let chat_id = q
            .message
            .as_ref()
            .map(|m| m.chat().id.0)
            .unwrap_or(q.from.id.0 as i64);

        Inbound::Callback {
            query_id: q.id.to_string(),
            chat_id,
            first_name: Some(q.from.first_name.clone()),
            language_code: q.from.language_code.clone(),
            data: q.data.clone(),
        }
    }
}
