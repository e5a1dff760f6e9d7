use std::io::Write;

use polyglot_types::{
    Credential, InputError, LanguageCatalog, ProviderId, SourceLang, TranslationRequest,
};

use super::Outcome;
use crate::cli::TranslateArgs;
use crate::console::render_result;
use crate::input::read_input;
use crate::state::AppState;

pub async fn handle_translate(
    state: &AppState,
    args: TranslateArgs,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let text = read_input(args.text.as_deref(), args.file.as_deref()).await?;
    let defaults = &state.config.translator;

    let source = SourceLang::parse(args.from.as_deref().unwrap_or(defaults.source_lang.as_str()));
    let target = args.to.as_deref().unwrap_or(defaults.target_lang.as_str());

    let request = match TranslationRequest::new(text, source, target) {
        Ok(request) => request,
        Err(e) => return Ok(reject(state, &e.to_string())),
    };

    if let Some(code) = request.source_lang().code() {
        if !LanguageCatalog::is_known(code) {
            return Ok(reject(state, &format!("Unsupported source language: {}", code)));
        }
    }
    if !LanguageCatalog::is_known(request.target_lang()) {
        return Ok(reject(
            state,
            &format!("Unsupported target language: {}", request.target_lang()),
        ));
    }

    if let Some(model) = &args.gpt_model {
        if !defaults.is_model_allowed(model) {
            return Ok(reject(
                state,
                &format!(
                    "Unsupported GPT model: {} (choose one of {})",
                    model,
                    defaults.gpt_models.join(", ")
                ),
            ));
        }
    }

    let request = with_credentials(request, &args);

    if let Err(e) = request.validate_selection(&args.providers) {
        return Ok(reject(state, &e.to_string()));
    }

    let dispatcher = state.dispatcher()?;
    let result = dispatcher.dispatch(&request, &args.providers).await;

    if result.is_empty() {
        return Ok(reject(state, &InputError::NoProviderSelected.to_string()));
    }

    render_result(out, &result)?;
    Ok(Outcome::Done)
}

fn with_credentials(mut request: TranslationRequest, args: &TranslateArgs) -> TranslationRequest {
    if let Some(key) = &args.deepl_key {
        request = request.with_credential(ProviderId::DeepL, Credential::new(key.clone()));
    }
    if let Some(key) = &args.gpt_key {
        let mut credential = Credential::new(key.clone());
        if let Some(model) = &args.gpt_model {
            credential = credential.with_model(model.clone());
        }
        request = request.with_credential(ProviderId::Gpt, credential);
    }
    request
}

fn reject(state: &AppState, message: &str) -> Outcome {
    tracing::debug!("Input rejected: {}", message);
    state.notifier.warning(message);
    Outcome::Rejected
}
