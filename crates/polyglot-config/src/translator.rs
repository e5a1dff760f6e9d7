use serde::{Deserialize, Serialize};

fn default_deepl_url() -> String {
    "https://api-free.deepl.com/v2/translate".to_string()
}

fn default_chat_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_gpt_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_gpt_models() -> Vec<String> {
    ["gpt-4o-mini", "gpt-4o", "gpt-4-turbo", "gpt-3.5-turbo"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_source_lang() -> String {
    "auto".to_string()
}

fn default_target_lang() -> String {
    "KO".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_deepl_url")]
    pub deepl_url: String,
    #[serde(default = "default_chat_url")]
    pub chat_url: String,
    /// Model used when the request does not name one
    #[serde(default = "default_gpt_model")]
    pub default_gpt_model: String,
    /// Fixed choices offered to the user
    #[serde(default = "default_gpt_models")]
    pub gpt_models: Vec<String>,
    /// Accept models outside `gpt_models`
    #[serde(default)]
    pub allow_any_model: bool,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

impl TranslatorConfig {
    pub fn is_model_allowed(&self, model: &str) -> bool {
        self.allow_any_model || self.gpt_models.iter().any(|m| m == model)
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            deepl_url: default_deepl_url(),
            chat_url: default_chat_url(),
            default_gpt_model: default_gpt_model(),
            gpt_models: default_gpt_models(),
            allow_any_model: false,
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
        }
    }
}
