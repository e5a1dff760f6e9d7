use std::path::Path;

use anyhow::Context;

/// Resolve the user's text: an uploaded file replaces whatever was typed
pub async fn read_input(typed: Option<&str>, file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => {
            let bytes = tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            String::from_utf8(bytes)
                .with_context(|| format!("{} is not valid UTF-8 text", path.display()))
        }
        None => Ok(typed.unwrap_or_default().to_string()),
    }
}
