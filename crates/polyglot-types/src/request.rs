use std::collections::HashMap;

use crate::language::{AUTO, LanguageCode, SourceLang};
use crate::provider::{Credential, ProviderId};

/// Problems caught before any provider is called
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Please enter text to translate.")]
    EmptyText,

    #[error("Please select at least one translation provider and enter its API key.")]
    NoProviderSelected,

    #[error("Target language cannot be \"auto\".")]
    AutoTarget,

    #[error("Please choose a target language.")]
    EmptyTarget,
}

/// One user-triggered translation action
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    text: String,
    source_lang: SourceLang,
    target_lang: LanguageCode,
    credentials: HashMap<ProviderId, Credential>,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source_lang: SourceLang,
        target_lang: impl Into<LanguageCode>,
    ) -> Result<Self, InputError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(InputError::EmptyText);
        }

        let target_lang = target_lang.into().trim().to_string();
        if target_lang.is_empty() {
            return Err(InputError::EmptyTarget);
        }
        if target_lang.eq_ignore_ascii_case(AUTO) {
            return Err(InputError::AutoTarget);
        }

        Ok(Self {
            text,
            source_lang,
            target_lang,
            credentials: HashMap::new(),
        })
    }

    pub fn with_credential(mut self, provider: ProviderId, credential: Credential) -> Self {
        self.credentials.insert(provider, credential);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source_lang(&self) -> &SourceLang {
        &self.source_lang
    }

    pub fn target_lang(&self) -> &str {
        &self.target_lang
    }

    /// Credential for a provider, only if it carries a non-empty key
    pub fn credential(&self, provider: ProviderId) -> Option<&Credential> {
        self.credentials
            .get(&provider)
            .filter(|credential| credential.has_key())
    }

    /// Selected providers that can actually be called, first occurrence wins
    pub fn participants(&self, selected: &[ProviderId]) -> Vec<ProviderId> {
        let mut participants = Vec::with_capacity(selected.len());
        for provider in selected {
            if participants.contains(provider) {
                continue;
            }
            if self.credential(*provider).is_some() {
                participants.push(*provider);
            }
        }
        participants
    }

    /// Checks that at least one selected provider has a key
    pub fn validate_selection(&self, selected: &[ProviderId]) -> Result<(), InputError> {
        if self.participants(selected).is_empty() {
            return Err(InputError::NoProviderSelected);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_text() {
        let err = TranslationRequest::new("  \n", SourceLang::Auto, "KO").unwrap_err();
        assert_eq!(err, InputError::EmptyText);
    }

    #[test]
    fn test_rejects_auto_target() {
        let err = TranslationRequest::new("hi", SourceLang::Auto, "AUTO").unwrap_err();
        assert_eq!(err, InputError::AutoTarget);

        let err = TranslationRequest::new("hi", SourceLang::Auto, " ").unwrap_err();
        assert_eq!(err, InputError::EmptyTarget);
    }

    #[test]
    fn test_participants_keep_order_and_skip_missing_keys() {
        let request = TranslationRequest::new("hi", SourceLang::Auto, "KO")
            .unwrap()
            .with_credential(ProviderId::Gpt, Credential::new("gpt-key"))
            .with_credential(ProviderId::DeepL, Credential::new(""));

        let selected = [ProviderId::DeepL, ProviderId::Gpt, ProviderId::Gpt];
        assert_eq!(request.participants(&selected), vec![ProviderId::Gpt]);

        let request = request.with_credential(ProviderId::DeepL, Credential::new("deepl-key"));
        assert_eq!(
            request.participants(&selected),
            vec![ProviderId::DeepL, ProviderId::Gpt]
        );
    }

    #[test]
    fn test_validate_selection() {
        let request = TranslationRequest::new("hi", SourceLang::Auto, "KO").unwrap();
        assert_eq!(
            request.validate_selection(&[ProviderId::DeepL]),
            Err(InputError::NoProviderSelected)
        );

        let request = request.with_credential(ProviderId::DeepL, Credential::new("k"));
        assert_eq!(request.validate_selection(&[]), Err(InputError::NoProviderSelected));
        assert!(request.validate_selection(&[ProviderId::DeepL]).is_ok());
    }
}
