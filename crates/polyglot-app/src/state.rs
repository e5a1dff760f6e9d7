use std::sync::Arc;

use polyglot_completion::CompletionClient;
use polyglot_config::Config;
use polyglot_translator::{
    DeepLTranslator, Dispatcher, GptTranslator, Notifier, TracingNotifier, build_client,
};
use polyglot_types::ProviderId;

use crate::console::ConsoleNotifier;

pub struct AppState {
    pub config: Config,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    /// JSON logging means a machine reads stderr, so alerts go through tracing too
    pub fn new(config: Config) -> Self {
        let notifier: Arc<dyn Notifier> = if config.log.json {
            Arc::new(TracingNotifier)
        } else {
            Arc::new(ConsoleNotifier)
        };
        Self::with_notifier(config, notifier)
    }

    pub fn with_notifier(config: Config, notifier: Arc<dyn Notifier>) -> Self {
        Self { config, notifier }
    }

    /// Dispatcher with every known provider registered
    pub fn dispatcher(&self) -> anyhow::Result<Dispatcher> {
        let client = build_client(self.config.network.timeout())?;
        let translator = &self.config.translator;

        let dispatcher = Dispatcher::new(Arc::clone(&self.notifier))
            .with_adapter(
                ProviderId::DeepL,
                DeepLTranslator::with_client(client.clone(), translator.deepl_url.clone()),
            )
            .with_adapter(
                ProviderId::Gpt,
                GptTranslator::with_client(
                    client,
                    translator.chat_url.clone(),
                    translator.default_gpt_model.clone(),
                ),
            );

        Ok(dispatcher)
    }

    pub fn completion_client(&self) -> anyhow::Result<CompletionClient> {
        let client = build_client(self.config.network.timeout())?;
        Ok(
            CompletionClient::with_client(client, self.config.completion.url.clone())
                .with_max_tokens(self.config.completion.max_tokens),
        )
    }
}
