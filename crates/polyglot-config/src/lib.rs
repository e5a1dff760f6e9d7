use std::env;

use serde::{Deserialize, Serialize};

use self::completion::CompletionConfig;
use self::log::LogConfig;
use self::network::NetworkConfig;
use self::translator::TranslatorConfig;

pub mod completion;
pub mod log;
pub mod network;
pub mod translator;

/// Process configuration. API keys never live here, the front-end passes
/// them along with each action.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub translator: TranslatorConfig,
    pub completion: CompletionConfig,
    pub log: LogConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source, environment in production
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(url) = lookup("POLYGLOT_DEEPL_URL") {
            config.translator.deepl_url = url;
        }
        if let Some(url) = lookup("POLYGLOT_CHAT_URL") {
            config.translator.chat_url = url;
        }
        if let Some(model) = lookup("POLYGLOT_DEFAULT_GPT_MODEL") {
            config.translator.default_gpt_model = model;
        }
        if let Some(models) = lookup("POLYGLOT_GPT_MODELS") {
            let models: Vec<String> = models
                .split(',')
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(String::from)
                .collect();
            if !models.is_empty() {
                config.translator.gpt_models = models;
            }
        }
        config.translator.allow_any_model = lookup("POLYGLOT_ALLOW_ANY_MODEL")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        if let Some(lang) = lookup("POLYGLOT_SOURCE_LANG") {
            config.translator.source_lang = lang;
        }
        if let Some(lang) = lookup("POLYGLOT_TARGET_LANG") {
            config.translator.target_lang = lang;
        }

        if let Some(url) = lookup("POLYGLOT_COMPLETION_URL") {
            config.completion.url = url;
        }
        if let Some(model) = lookup("POLYGLOT_COMPLETION_MODEL") {
            config.completion.model = model;
        }

        config.network.timeout_seconds = lookup("POLYGLOT_TIMEOUT_SECONDS")
            .and_then(|v| v.parse().ok());

        if let Some(level) = lookup("POLYGLOT_LOG") {
            config.log.level = level;
        }
        config.log.json = lookup("POLYGLOT_LOG_JSON")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        config
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
