mod deepl;
mod dispatcher;
mod gpt;
mod notify;

use std::time::Duration;

pub use deepl::DeepLTranslator;
pub use dispatcher::Dispatcher;
pub use gpt::GptTranslator;
pub use notify::{Notifier, TracingNotifier};

use polyglot_types::{Credential, LanguageCode, SourceLang};

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        credential: &Credential,
        text: &str,
        from: &SourceLang,
        to: &str,
    ) -> Result<Translation, TranslateError>;

    /// Label the result is stored under, unique per provider
    fn label(&self, credential: &Credential) -> String;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub to: LanguageCode,
    pub provider: String,
    /// Source language reported back by the provider, if any
    pub detected_source: Option<LanguageCode>,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
    pub free_tier_available: bool,
}

/// Every message starts with "Translation failed" so callers can show them as-is
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("Translation failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Translation failed: HTTP {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Translation failed: rate limit exceeded (HTTP 429)")]
    RateLimitExceeded,

    #[error("Translation failed: authentication error (HTTP {0})")]
    AuthenticationError(u16),

    #[error("Translation failed: missing API key")]
    MissingApiKey,

    #[error("Translation failed due to unexpected API response.")]
    UnexpectedResponse,

    #[error("Translation failed due to parsing error.")]
    ParsingError,

    #[error("Translation failed due to unexpected API response structure.")]
    UnexpectedStructure,
}

/// Builds the HTTP client adapters share; `None` keeps reqwest's default timeout
pub fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, TranslateError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Maps a non-2xx status to the matching error, reading the body for context
async fn status_error(response: reqwest::Response) -> TranslateError {
    let status = response.status().as_u16();
    match status {
        401 | 403 => TranslateError::AuthenticationError(status),
        429 => TranslateError::RateLimitExceeded,
        _ => {
            let body = response.text().await.unwrap_or_default();
            TranslateError::ApiError {
                status,
                body: truncate(body.trim(), 200),
            }
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
