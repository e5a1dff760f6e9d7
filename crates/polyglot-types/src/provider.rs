use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Remote translation providers known to the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    DeepL,
    Gpt,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::DeepL => "deepl",
            ProviderId::Gpt => "gpt",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderId::DeepL => f.write_str("DeepL"),
            ProviderId::Gpt => f.write_str("GPT"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown provider: {0}")]
pub struct UnknownProvider(pub String);

impl FromStr for ProviderId {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deepl" => Ok(ProviderId::DeepL),
            "gpt" | "openai" => Ok(ProviderId::Gpt),
            _ => Err(UnknownProvider(s.to_string())),
        }
    }
}

/// Per-provider secret and optional model choice
#[derive(Clone, Default)]
pub struct Credential {
    pub api_key: String,
    pub model: Option<String>,
}

impl Credential {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn has_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

// Keys must never show up in logs
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &"***")
            .field("model", &self.model)
            .finish()
    }
}
