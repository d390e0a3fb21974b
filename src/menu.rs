//! Menu model: proficiency levels, menu states and the callback dispatch table.

use crate::errors::BotError;

/// Callback data prefix shared by the three level buttons
pub const LEVEL_PREFIX: &str = "level_";

pub const CB_SHOW_AI_TOOLS: &str = "show_ai_tools";
pub const CB_AI: &str = "ai";
pub const CB_CHANGE_LEVEL: &str = "change_level";
pub const CB_MAIN_MENU: &str = "main_menu";

/// Self-reported English proficiency tier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// All levels in keyboard order
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn id(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    /// Callback data carried by this level's button
    pub fn callback_data(self) -> String {
        format!("{}{}", LEVEL_PREFIX, self.id())
    }

    /// Catalog key of the materials text
    pub fn materials_key(self) -> String {
        format!("materials-{}", self.id())
    }

    /// Catalog key of the button label
    pub fn button_key(self) -> String {
        format!("button-level-{}", self.id())
    }
}

impl std::str::FromStr for Level {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.id() == s)
            .ok_or_else(|| BotError::UnknownLevel(s.to_string()))
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Menu the user is looking at after a transition
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Start,
    LevelChosen(Level),
    AiTools,
    ChangeLevel,
    MainMenu,
}

/// Action requested by a button press
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackAction {
    /// Raw id following `level_`; validated by the navigator
    SelectLevel(String),
    ShowAiTools,
    ChangeLevel,
    MainMenu,
}

#[derive(Clone, Copy, Debug)]
enum Pattern {
    Exact(&'static str),
    Prefix(&'static str),
}

#[derive(Clone, Copy, Debug)]
enum Route {
    SelectLevel,
    ShowAiTools,
    ChangeLevel,
    MainMenu,
}

/// Evaluated top to bottom; first match wins
const CALLBACK_ROUTES: &[(Pattern, Route)] = &[
    (Pattern::Prefix(LEVEL_PREFIX), Route::SelectLevel),
    (Pattern::Exact(CB_SHOW_AI_TOOLS), Route::ShowAiTools),
    (Pattern::Exact(CB_AI), Route::ShowAiTools),
    (Pattern::Exact(CB_CHANGE_LEVEL), Route::ChangeLevel),
    (Pattern::Exact(CB_MAIN_MENU), Route::MainMenu),
];

impl CallbackAction {
    /// Match callback data against the dispatch table
    ///
    /// Returns `None` when no pattern matches; such callbacks are ignored.
    pub fn parse(data: &str) -> Option<Self> {
        CALLBACK_ROUTES.iter().find_map(|(pattern, route)| {
            let rest = match pattern {
                Pattern::Exact(expected) => (data == *expected).then_some(""),
                Pattern::Prefix(prefix) => data.strip_prefix(prefix),
            }?;

            Some(match route {
                Route::SelectLevel => CallbackAction::SelectLevel(rest.to_string()),
                Route::ShowAiTools => CallbackAction::ShowAiTools,
                Route::ChangeLevel => CallbackAction::ChangeLevel,
                Route::MainMenu => CallbackAction::MainMenu,
            })
        })
    }
}

/// Bot commands the navigator reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
}

impl Command {
    /// Parse `/start`, `/start@SomeBot` and `/start <payload>`
    pub fn parse(text: &str) -> Option<Self> {
        let first = text.split_whitespace().next()?;
        let name = first.strip_prefix('/')?;
        let name = name.split('@').next().unwrap_or(name);

        match name {
            "start" => Some(Command::Start),
            _ => None,
        }
    }
}
