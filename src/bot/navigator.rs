//! Menu navigator: maps one inbound event to the replies it produces.
//!
//! The navigator holds no per-chat state. Every transition is a function of
//! the event and the injected catalog, so the same instance serves polling
//! and webhook delivery and can run concurrently for any number of chats.

use tracing::{debug, error};

use crate::errors::BotError;
use crate::localization::Catalog;
use crate::menu::{CallbackAction, Command, Level, MenuState};

use super::inbound::Inbound;
use super::ui_builder::{
    create_back_keyboard, create_follow_up_keyboard, create_level_keyboard,
    create_main_menu_keyboard, Reply,
};

/// Result of handling one event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub chat_id: i64,
    /// Callback query to acknowledge before sending replies
    pub acknowledge: Option<String>,
    /// Replies in send order
    pub replies: Vec<Reply>,
    /// Menu shown after the replies; `None` when the request failed
    pub state: Option<MenuState>,
}

pub struct Navigator {
    catalog: Catalog,
    prompts_url: String,
}

impl Navigator {
    pub fn new(catalog: Catalog, prompts_url: impl Into<String>) -> Self {
        Self {
            catalog,
            prompts_url: prompts_url.into(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn prompts_url(&self) -> &str {
        &self.prompts_url
    }

    /// Compute the transition for an event, or `None` if nothing handles it
    pub fn handle(&self, event: &Inbound) -> Option<Transition> {
        let lang = event.language_code();

        match event {
            Inbound::Message { chat_id, text, .. } => {
                let Some(command) = Command::parse(text) else {
                    debug!(chat_id = %chat_id, "Ignoring non-command message");
                    return None;
                };
                match command {
                    Command::Start => Some(Transition {
                        chat_id: *chat_id,
                        acknowledge: None,
                        replies: self.start(event.first_name(), lang),
                        state: Some(MenuState::Start),
                    }),
                }
            }
            Inbound::Callback {
                query_id,
                chat_id,
                data,
                ..
            } => {
                let data = data.as_deref().unwrap_or("");
                let Some(action) = CallbackAction::parse(data) else {
                    debug!(chat_id = %chat_id, callback_data = %data, "No handler for callback data");
                    return None;
                };

                let outcome = match action {
                    CallbackAction::SelectLevel(id) => self.select_level(&id, lang),
                    CallbackAction::ShowAiTools => Ok((self.ai_tools(lang), MenuState::AiTools)),
                    CallbackAction::ChangeLevel => Ok((self.change_level(lang), MenuState::ChangeLevel)),
                    CallbackAction::MainMenu => Ok((self.main_menu(lang), MenuState::MainMenu)),
                };

                let (replies, state) = match outcome {
                    Ok((replies, state)) => (replies, Some(state)),
                    Err(e) => {
                        error!(chat_id = %chat_id, callback_data = %data, error = %e, "Menu invariant violated");
                        (vec![Reply::text(self.catalog.t_lang("error-generic", lang))], None)
                    }
                };

                Some(Transition {
                    chat_id: *chat_id,
                    acknowledge: Some(query_id.clone()),
                    replies,
                    state,
                })
            }
        }
    }

    fn start(&self, first_name: Option<&str>, lang: Option<&str>) -> Vec<Reply> {
        let fallback;
        let name = match first_name {
            Some(name) => name,
            None => {
                fallback = self.catalog.t_lang("fallback-name", lang);
                fallback.as_str()
            }
        };

        vec![Reply::with_keyboard(
            self.catalog.t_lang_args("start-greeting", lang, &[("name", name)]),
            create_level_keyboard(&self.catalog, lang),
        )]
    }

    fn select_level(&self, id: &str, lang: Option<&str>) -> Result<(Vec<Reply>, MenuState), BotError> {
        let level: Level = id.parse()?;

        let replies = vec![
            Reply::text(self.catalog.t_lang(&level.materials_key(), lang)),
            Reply::with_keyboard(
                self.catalog.t_lang("follow-up-prompt", lang),
                create_follow_up_keyboard(&self.catalog, lang),
            ),
        ];

        Ok((replies, MenuState::LevelChosen(level)))
    }

    fn ai_tools(&self, lang: Option<&str>) -> Vec<Reply> {
        vec![
            Reply::text(self.catalog.t_lang("ai-tools", lang)),
            Reply::text(
                self.catalog
                    .t_lang_args("prompts-link", lang, &[("url", self.prompts_url.as_str())]),
            ),
            Reply::with_keyboard(
                self.catalog.t_lang("back-to-menu-prompt", lang),
                create_back_keyboard(&self.catalog, lang),
            ),
        ]
    }

    fn change_level(&self, lang: Option<&str>) -> Vec<Reply> {
        vec![Reply::with_keyboard(
            self.catalog.t_lang("choose-level", lang),
            create_level_keyboard(&self.catalog, lang),
        )]
    }

    fn main_menu(&self, lang: Option<&str>) -> Vec<Reply> {
        vec![Reply::with_keyboard(
            self.catalog.t_lang("follow-up-prompt", lang),
            create_main_menu_keyboard(&self.catalog, lang),
        )]
    }
}
