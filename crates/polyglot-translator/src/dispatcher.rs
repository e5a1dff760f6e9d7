use std::collections::HashMap;
use std::sync::Arc;

use polyglot_types::{ProviderId, TranslationRequest, TranslationResult};
use tracing::Instrument;
use uuid::Uuid;

use crate::{Notifier, Translator};

/// Fans one request out to the selected providers and collects labeled results.
///
/// Adapters are looked up by [`ProviderId`], so a new provider only needs to be
/// registered. Providers run one after another in selection order, and a
/// failing provider leaves an error string under its label without touching
/// the others.
pub struct Dispatcher {
    adapters: HashMap<ProviderId, Arc<dyn Translator>>,
    notifier: Arc<dyn Notifier>,
}

impl Dispatcher {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            adapters: HashMap::new(),
            notifier,
        }
    }

    pub fn register(&mut self, provider: ProviderId, adapter: impl Translator + 'static) {
        let metadata = adapter.metadata();
        tracing::debug!(
            "Registered {} as {} (api key: {}, free tier: {})",
            metadata.name,
            provider.as_str(),
            metadata.requires_api_key,
            metadata.free_tier_available
        );
        self.adapters.insert(provider, Arc::new(adapter));
    }

    pub fn with_adapter(mut self, provider: ProviderId, adapter: impl Translator + 'static) -> Self {
        self.register(provider, adapter);
        self
    }

    pub fn is_registered(&self, provider: ProviderId) -> bool {
        self.adapters.contains_key(&provider)
    }

    /// Translate with every selected provider that has a key and an adapter.
    ///
    /// Returns an empty result when nothing participates; reporting that is up
    /// to the caller.
    pub async fn dispatch(
        &self,
        request: &TranslationRequest,
        selected: &[ProviderId],
    ) -> TranslationResult {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "dispatch",
            %request_id,
            from = %request.source_lang(),
            to = request.target_lang()
        );

        self.run(request, selected).instrument(span).await
    }

    async fn run(&self, request: &TranslationRequest, selected: &[ProviderId]) -> TranslationResult {
        let mut result = TranslationResult::new();

        for provider in request.participants(selected) {
            let Some(adapter) = self.adapters.get(&provider) else {
                tracing::warn!("No adapter registered for {}, skipping", provider);
                continue;
            };
            let Some(credential) = request.credential(provider) else {
                continue;
            };

            let label = adapter.label(credential);
            tracing::info!("Translating with {}", label);

            let outcome = adapter
                .translate(
                    credential,
                    request.text(),
                    request.source_lang(),
                    request.target_lang(),
                )
                .await;

            match outcome {
                Ok(translation) => {
                    if let Some(detected) = &translation.detected_source {
                        tracing::debug!("{} detected source language {}", label, detected);
                    }
                    result.insert(label, translation.text);
                }
                Err(e) => {
                    let message = e.to_string();
                    tracing::error!("{} failed: {:?}", provider, e);
                    self.notifier.error(&message);
                    result.insert(label, message);
                }
            }
        }

        tracing::info!("Dispatch finished with {} result(s)", result.len());
        result
    }
}
