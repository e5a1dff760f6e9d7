use async_trait::async_trait;
use polyglot_types::{Credential, SourceLang};
use serde_json::Value;

use crate::{ProviderMetadata, TranslateError, Translation, Translator, status_error};

pub const LABEL: &str = "DeepL Ver.";

#[derive(Clone)]
pub struct DeepLTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl DeepLTranslator {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }
}

/// Form body for the translate endpoint. `source_lang` is left out entirely
/// for autodetect.
fn form_params(api_key: &str, text: &str, from: &SourceLang, to: &str) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("auth_key", api_key.to_string()),
        ("text", text.to_string()),
        ("target_lang", to.to_uppercase()),
    ];
    if let Some(code) = from.code() {
        params.push(("source_lang", code.to_uppercase()));
    }
    params
}

/// Pulls `translations[0].text` (and the detected language) out of a response
fn extract_translation(json: &Value) -> Result<(String, Option<String>), TranslateError> {
    let translations = json
        .get("translations")
        .and_then(Value::as_array)
        .ok_or(TranslateError::UnexpectedStructure)?;

    let first = translations.first().ok_or(TranslateError::ParsingError)?;

    let text = match first.get("text") {
        Some(Value::String(text)) => text.clone(),
        Some(_) => return Err(TranslateError::ParsingError),
        None => return Err(TranslateError::UnexpectedStructure),
    };

    let detected = first
        .get("detected_source_language")
        .and_then(Value::as_str)
        .map(String::from);

    Ok((text, detected))
}

#[async_trait]
impl Translator for DeepLTranslator {
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

        let params = form_params(&credential.api_key, text, from, to);

        tracing::debug!(
            "DeepL request: {} chars, {} -> {}",
            text.chars().count(),
            from,
            to
        );

        let response = self.client.post(&self.api_url).form(&params).send().await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let body = response.text().await?;
        let json: Value =
            serde_json::from_str(&body).map_err(|_| TranslateError::UnexpectedResponse)?;

        let (translated_text, detected_source) = extract_translation(&json)?;

        Ok(Translation {
            text: translated_text,
            to: to.to_string(),
            provider: "deepl".to_string(),
            detected_source,
        })
    }

    fn label(&self, _credential: &Credential) -> String {
        LABEL.to_string()
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "DeepL".to_string(),
            requires_api_key: true,
            free_tier_available: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_auto_source_is_omitted() {
        let params = form_params("k", "hi", &SourceLang::Auto, "ko");
        assert!(params.iter().all(|(name, _)| *name != "source_lang"));
        assert!(params.contains(&("target_lang", "KO".to_string())));
        assert!(params.contains(&("auth_key", "k".to_string())));
    }

    #[test]
    fn test_concrete_source_is_sent() {
        let params = form_params("k", "hi", &SourceLang::Code("EN".to_string()), "KO");
        assert!(params.contains(&("source_lang", "EN".to_string())));
    }

    #[test]
    fn test_extract_translation() {
        let json = json!({
            "translations": [
                { "detected_source_language": "EN", "text": "안녕 세상" },
                { "text": "ignored" }
            ]
        });
        let (text, detected) = extract_translation(&json).unwrap();
        assert_eq!(text, "안녕 세상");
        assert_eq!(detected.as_deref(), Some("EN"));
    }

    #[test]
    fn test_extract_translation_failures() {
        let cases = [
            (json!({ "message": "nope" }), "unexpected API response structure"),
            (json!({ "translations": {} }), "unexpected API response structure"),
            (json!({ "translations": [ { "lang": "KO" } ] }), "unexpected API response structure"),
            (json!({ "translations": [] }), "parsing error"),
            (json!({ "translations": [ { "text": 42 } ] }), "parsing error"),
        ];
        for (json, expected) in cases {
            let err = extract_translation(&json).unwrap_err();
            assert!(err.to_string().contains(expected), "{json} -> {err}");
        }
    }
}
