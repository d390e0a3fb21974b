//! # Localization Module
//!
//! Every text the bot sends lives in a Fluent resource under
//! `locales/<lang>/main.ftl`. The resources are embedded at compile time and
//! parsed once by [`Catalog::load`]; the resulting catalog is immutable and
//! shared between updates.

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use std::collections::HashMap;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

use crate::errors::BotError;

/// Locales with a bundled resource
pub const SUPPORTED_LOCALES: &[&str] = &["ru", "en"];

const RESOURCES: &[(&str, &str)] = &[
    ("ru", include_str!("../locales/ru/main.ftl")),
    ("en", include_str!("../locales/en/main.ftl")),
];

/// Messages the navigator renders; each locale must define all of them
pub const REQUIRED_KEYS: &[&str] = &[
    "start-greeting",
    "fallback-name",
    "choose-level",
    "button-level-beginner",
    "button-level-intermediate",
    "button-level-advanced",
    "materials-beginner",
    "materials-intermediate",
    "materials-advanced",
    "follow-up-prompt",
    "button-ai-tools",
    "button-change-level",
    "button-main-menu",
    "button-pick-materials",
    "button-back",
    "ai-tools",
    "prompts-link",
    "back-to-menu-prompt",
    "error-generic",
];

/// Immutable set of localized texts
pub struct Catalog {
    bundles: HashMap<String, FluentBundle<FluentResource>>,
    default_locale: String,
}

impl Catalog {
    /// Parse all bundled resources and check that none lacks a required message
    pub fn load(default_locale: &str) -> Result<Self, BotError> {
        let mut bundles = HashMap::new();

        for (locale, source) in RESOURCES {
            let bundle = Self::create_bundle(locale, source)?;

            let missing: Vec<&str> = REQUIRED_KEYS
                .iter()
                .copied()
                .filter(|key| {
                    bundle
                        .get_message(key)
                        .and_then(|msg| msg.value().map(|_| ()))
                        .is_none()
                })
                .collect();
            if !missing.is_empty() {
                return Err(BotError::Localization(format!(
                    "locale '{}' is missing messages: {}",
                    locale,
                    missing.join(", ")
                )));
            }

            debug!(locale = %locale, "Loaded localization bundle");
            bundles.insert(locale.to_string(), bundle);
        }

        if !bundles.contains_key(default_locale) {
            return Err(BotError::Localization(format!(
                "default locale '{}' has no bundle",
                default_locale
            )));
        }

        Ok(Self {
            bundles,
            default_locale: default_locale.to_string(),
        })
    }

    /// Create a fluent bundle for a specific locale
    fn create_bundle(locale: &str, source: &str) -> Result<FluentBundle<FluentResource>, BotError> {
        let langid: LanguageIdentifier = locale
            .parse()
            .map_err(|e| BotError::Localization(format!("bad locale '{}': {}", locale, e)))?;

        let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
            BotError::Localization(format!("failed to parse '{}' resource: {:?}", locale, errors))
        })?;

        let mut bundle = FluentBundle::new_concurrent(vec![langid]);
        // Names and URLs must come out byte-for-byte, without isolation marks
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|errors| {
            BotError::Localization(format!("duplicate messages in '{}': {:?}", locale, errors))
        })?;

        Ok(bundle)
    }

    /// Locale used when nothing better is known
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Pick the bundle for a Telegram `language_code` such as `en-US`
    pub fn resolve_locale(&self, language_code: Option<&str>) -> &str {
        language_code
            .and_then(|code| code.parse::<LanguageIdentifier>().ok())
            .and_then(|langid| {
                self.bundles
                    .get_key_value(langid.language.as_str())
                    .map(|(locale, _)| locale.as_str())
            })
            .unwrap_or(&self.default_locale)
    }

    /// Get a localized message in an already resolved locale
    pub fn get_message(&self, key: &str, locale: &str, args: Option<&[(&str, &str)]>) -> String {
        let bundle = match self
            .bundles
            .get(locale)
            .or_else(|| self.bundles.get(&self.default_locale))
        {
            Some(bundle) => bundle,
            None => return format!("Missing translation: {}", key),
        };

        let pattern = match bundle.get_message(key).and_then(|msg| msg.value()) {
            Some(pattern) => pattern,
            None => return format!("Missing translation: {}", key),
        };

        let fluent_args = args.map(|pairs| {
            let mut fluent_args = FluentArgs::new();
            for (name, value) in pairs {
                fluent_args.set(*name, *value);
            }
            fluent_args
        });

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, fluent_args.as_ref(), &mut errors);
        if !errors.is_empty() {
            warn!(key = %key, locale = %locale, errors = ?errors, "Fluent formatting reported errors");
        }

        value.into_owned()
    }

    /// Localized message for a user's language code
    pub fn t_lang(&self, key: &str, language_code: Option<&str>) -> String {
        self.get_message(key, self.resolve_locale(language_code), None)
    }

    /// Localized message with arguments for a user's language code
    pub fn t_lang_args(&self, key: &str, language_code: Option<&str>, args: &[(&str, &str)]) -> String {
        self.get_message(key, self.resolve_locale(language_code), Some(args))
    }
}
