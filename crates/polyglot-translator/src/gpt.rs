use async_trait::async_trait;
use polyglot_types::{Credential, SourceLang};
use serde::Serialize;
use serde_json::Value;

use crate::{ProviderMetadata, TranslateError, Translation, Translator, status_error};

#[derive(Clone)]
pub struct GptTranslator {
    client: reqwest::Client,
    api_url: String,
    default_model: String,
}

impl GptTranslator {
    pub fn new(api_url: impl Into<String>, default_model: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url, default_model)
    }

    pub fn with_client(
        client: reqwest::Client,
        api_url: impl Into<String>,
        default_model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            default_model: default_model.into(),
        }
    }

    fn model<'a>(&'a self, credential: &'a Credential) -> &'a str {
        credential
            .model
            .as_deref()
            .map(str::trim)
            .filter(|model| !model.is_empty())
            .unwrap_or(self.default_model.as_str())
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

fn instruction(from: &SourceLang, to: &str) -> String {
    format!("Translate the following text from {} to {}", from, to)
}

/// Pulls `choices[0].message.content` out of a chat completion response
fn extract_content(json: &Value) -> Result<String, TranslateError> {
    let choices = json
        .get("choices")
        .and_then(Value::as_array)
        .ok_or(TranslateError::UnexpectedStructure)?;

    let first = choices.first().ok_or(TranslateError::ParsingError)?;

    match first.get("message").and_then(|message| message.get("content")) {
        Some(Value::String(content)) => Ok(content.trim().to_string()),
        Some(_) => Err(TranslateError::ParsingError),
        None => Err(TranslateError::UnexpectedStructure),
    }
}

#[async_trait]
impl Translator for GptTranslator {
    async fn translate(
        &self,
        credential: &Credential,
        text: &str,
        from: &SourceLang,
        to: &str,
    ) -> Result<Translation, TranslateError> {
        if !credential.has_key() {
            return Err(TranslateError::MissingApiKey);
        }

        let model = self.model(credential);
        let system = instruction(from, to);
        let request = ChatRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &system,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
        };

        tracing::debug!("GPT request: model={}, {} -> {}", model, from, to);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&credential.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let body = response.text().await?;
        let json: Value =
            serde_json::from_str(&body).map_err(|_| TranslateError::UnexpectedResponse)?;

        Ok(Translation {
            text: extract_content(&json)?,
            to: to.to_string(),
            provider: "gpt".to_string(),
            detected_source: None,
        })
    }

    fn label(&self, credential: &Credential) -> String {
        format!("GPT ({}) Ver.", self.model(credential))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "GPT".to_string(),
            requires_api_key: true,
            free_tier_available: false,
        }
    }
}
