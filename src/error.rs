use thiserror::Error;

/// Failures of the remote completion call.
///
/// Malformed model output is never reported here; the parser absorbs it.
#[derive(Error, Debug)]
pub enum AIError {
    #[error("HTTP transport error: {0}")]
    Transport(String),
    #[error("Remote service error {status}: {message}")]
    RemoteService { status: u16, message: String },
    #[error("Mock error: {0}")]
    Mock(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No API key found; set {0} in the environment or a .env file")]
    MissingKey(&'static str),
}

/// Why a single line of model output did not become a question.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordRejection {
    #[error("line has {0} fields, at least 4 are required")]
    TooFewFields(usize),
    #[error("question text is empty")]
    EmptyQuestion,
    #[error("only {0} non-empty options, at least 2 are required")]
    TooFewOptions(usize),
    #[error("answer index is not an integer")]
    InvalidAnswerIndex,
}
