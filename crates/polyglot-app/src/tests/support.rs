use std::sync::{Arc, Mutex};

use polyglot_config::Config;
use polyglot_translator::Notifier;

use crate::state::AppState;

#[derive(Default)]
pub struct RecordingNotifier {
    pub errors: Mutex<Vec<String>>,
    pub warnings: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn warning(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}

/// App state whose endpoints all point at a mock server
pub fn state_for(server_uri: &str) -> (AppState, Arc<RecordingNotifier>) {
    let mut config = Config::default();
    config.translator.deepl_url = format!("{}/v2/translate", server_uri);
    config.translator.chat_url = format!("{}/v1/chat/completions", server_uri);
    config.completion.url = format!("{}/v1/completions", server_uri);

    let notifier = Arc::new(RecordingNotifier::default());
    let state = AppState::with_notifier(config, notifier.clone());
    (state, notifier)
}
