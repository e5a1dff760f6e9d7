use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use polyglot_types::ProviderId;

#[derive(Parser, Debug)]
#[command(
    name = "polyglot",
    version,
    about = "Translate text with DeepL and GPT side by side, or run a one-off completion"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate text with every selected provider
    Translate(TranslateArgs),
    /// Send a prompt to the completion endpoint
    Complete(CompleteArgs),
    /// List supported language codes
    Languages,
}

#[derive(Args, Debug, Default)]
pub struct TranslateArgs {
    /// Text to translate
    pub text: Option<String>,

    /// Read the text from a UTF-8 file, replacing TEXT
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Source language code, or "auto" to detect
    #[arg(long)]
    pub from: Option<String>,

    /// Target language code
    #[arg(long)]
    pub to: Option<String>,

    /// Provider to use, repeat to compare several (deepl, gpt)
    #[arg(short, long = "provider")]
    pub providers: Vec<ProviderId>,

    #[arg(long)]
    pub deepl_key: Option<String>,

    #[arg(long)]
    pub gpt_key: Option<String>,

    /// Chat model for the GPT provider
    #[arg(long)]
    pub gpt_model: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct CompleteArgs {
    /// Prompt text
    pub prompt: Option<String>,

    /// Read the prompt from a UTF-8 file, replacing PROMPT
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long)]
    pub model: Option<String>,
}
