//! UI Builder module for creating keyboards and reply payloads

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::localization::Catalog;
use crate::menu::{Level, CB_CHANGE_LEVEL, CB_MAIN_MENU, CB_SHOW_AI_TOOLS};

/// Inline button: label shown to the user plus the callback data it sends
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub callback_data: String,
}

impl Button {
    pub fn new(label: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            callback_data: callback_data.into(),
        }
    }
}

/// Inline keyboard as rows of buttons
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    /// One button per row
    pub fn column(buttons: Vec<Button>) -> Self {
        Self {
            rows: buttons.into_iter().map(|b| vec![b]).collect(),
        }
    }

    pub fn button_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Callback data of every button, row by row
    pub fn callback_data(&self) -> Vec<&str> {
        self.rows
            .iter()
            .flatten()
            .map(|b| b.callback_data.as_str())
            .collect()
    }
}

impl From<&Keyboard> for InlineKeyboardMarkup {
    fn from(keyboard: &Keyboard) -> Self {
        InlineKeyboardMarkup::new(keyboard.rows.iter().map(|row| {
            row.iter()
                .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.callback_data.clone()))
                .collect::<Vec<_>>()
        }))
    }
}

/// One outgoing message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }
}

/// Three level buttons
pub fn create_level_keyboard(catalog: &Catalog, language_code: Option<&str>) -> Keyboard {
    Keyboard::column(
        Level::ALL
            .into_iter()
            .map(|level| {
                Button::new(
                    catalog.t_lang(&level.button_key(), language_code),
                    level.callback_data(),
                )
            })
            .collect(),
    )
}

/// Shown after the materials of a level
pub fn create_follow_up_keyboard(catalog: &Catalog, language_code: Option<&str>) -> Keyboard {
    Keyboard::column(vec![
        Button::new(catalog.t_lang("button-ai-tools", language_code), CB_SHOW_AI_TOOLS),
        Button::new(catalog.t_lang("button-change-level", language_code), CB_CHANGE_LEVEL),
        Button::new(catalog.t_lang("button-main-menu", language_code), CB_MAIN_MENU),
    ])
}

/// Top-level menu: materials or AI tools
pub fn create_main_menu_keyboard(catalog: &Catalog, language_code: Option<&str>) -> Keyboard {
    Keyboard::column(vec![
        Button::new(catalog.t_lang("button-pick-materials", language_code), CB_CHANGE_LEVEL),
        Button::new(catalog.t_lang("button-ai-tools", language_code), CB_SHOW_AI_TOOLS),
    ])
}

pub fn create_back_keyboard(catalog: &Catalog, language_code: Option<&str>) -> Keyboard {
    Keyboard::column(vec![Button::new(
        catalog.t_lang("button-back", language_code),
        CB_MAIN_MENU,
    )])
}
