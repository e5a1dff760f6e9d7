use std::io::Write;

use polyglot_completion::CompletionError;

use super::Outcome;
use crate::cli::CompleteArgs;
use crate::input::read_input;
use crate::state::AppState;

pub async fn handle_complete(
    state: &AppState,
    args: CompleteArgs,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let prompt = read_input(args.prompt.as_deref(), args.file.as_deref()).await?;
    let model = args
        .model
        .as_deref()
        .unwrap_or(state.config.completion.model.as_str());
    let api_key = args.api_key.as_deref().unwrap_or_default();

    let client = state.completion_client()?;

    match client.complete(api_key, model, &prompt).await {
        Ok(text) => {
            writeln!(out, "[{} response]", model)?;
            writeln!(out, "{}", text)?;
            Ok(Outcome::Done)
        }
        Err(e @ (CompletionError::EmptyPrompt | CompletionError::MissingApiKey)) => {
            state.notifier.warning(&e.to_string());
            Ok(Outcome::Rejected)
        }
        Err(e) => {
            tracing::error!("Completion failed: {:?}", e);
            state.notifier.error(&e.to_string());
            Ok(Outcome::Failed)
        }
    }
}
