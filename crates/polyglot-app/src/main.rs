use std::io;
use std::process::ExitCode;

use clap::Parser;
use polyglot_config::Config;

pub mod cli;
pub mod commands;
pub mod console;
pub mod input;
pub mod logging;
pub mod state;

use self::cli::{Cli, Command};
use self::commands::{Outcome, handle_complete, handle_languages, handle_translate};
use self::state::AppState;


#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is normal
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::new();
    logging::init_logging(&config.log);

    let state = AppState::new(config);

    match run(&state, cli.command).await {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            tracing::error!("polyglot exited: {e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

pub async fn run(state: &AppState, command: Command) -> anyhow::Result<Outcome> {
    let mut stdout = io::stdout().lock();

    match command {
        Command::Translate(args) => handle_translate(state, args, &mut stdout).await,
        Command::Complete(args) => handle_complete(state, args, &mut stdout).await,
        Command::Languages => handle_languages(&mut stdout),
    }
}
