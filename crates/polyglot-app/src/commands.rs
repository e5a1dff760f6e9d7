use std::process::ExitCode;

pub mod complete;
pub mod languages;
pub mod translate;

pub use complete::handle_complete;
pub use languages::handle_languages;
pub use translate::handle_translate;

/// How a command ended, mapped to the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// Input was rejected before any remote call
    Rejected,
    /// The remote call failed
    Failed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Done => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::FAILURE,
            Outcome::Rejected => ExitCode::from(2),
        }
    }
}
