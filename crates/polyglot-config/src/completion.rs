use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "https://api.openai.com/v1/completions".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo-instruct".to_string()
}

fn default_max_tokens() -> u32 {
    150
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct CompletionConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
        }
    }
}
