use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_TOKENS: u32 = 150;

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("Please enter a prompt.")]
    EmptyPrompt,

    #[error("Missing API key")]
    MissingApiKey,

    #[error("Completion failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Completion failed: HTTP {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Completion failed due to unexpected API response.")]
    UnexpectedResponse(#[source] serde_json::Error),

    #[error("Completion returned no choices")]
    NoChoices,
}

/// Single-shot text completion against an OpenAI style `/completions` endpoint
#[derive(Clone)]
pub struct CompletionClient {
    client: reqwest::Client,
    api_url: String,
    max_tokens: u32,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    text: String,
}

impl CompletionClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Send the prompt and return the first choice's text, trimmed
    pub async fn complete(
        &self,
        api_key: &str,
        model: &str,
        prompt: &str,
    ) -> Result<String, CompletionError> {
        if prompt.trim().is_empty() {
            return Err(CompletionError::EmptyPrompt);
        }
        if api_key.trim().is_empty() {
            return Err(CompletionError::MissingApiKey);
        }

        let request = CompletionRequest {
            model,
            prompt,
            max_tokens: self.max_tokens,
        };

        tracing::debug!("Completion request: model={}, max_tokens={}", model, self.max_tokens);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CompletionError::ApiError {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        let parsed: CompletionResponse =
            serde_json::from_str(&body).map_err(CompletionError::UnexpectedResponse)?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::NoChoices)?;

        Ok(choice.text.trim().to_string())
    }
}
