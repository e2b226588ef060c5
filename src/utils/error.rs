use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Division by zero is not allowed.")]
    DivisionByZero,

    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to parse {0}")]
    Parse(String),

    #[error("Failed to serialize {0}")]
    Serialize(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

/// Outcome of a command that completed without a fatal error.
///
/// "Not found" and "unsupported" are ordinary outcomes here: they are reported
/// to the user and the invocation still exits successfully.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowResult {
    Success(String),
    Info(String),
    Listing {
        header: String,
        lines: Vec<String>,
    },
    NotFound {
        item_type: String,
        search_term: String,
    },
    Unsupported(String),
}

impl FlowResult {
    /// Plain-text rendering, one entry per output line.
    pub fn lines(&self) -> Vec<String> {
        match self {
            FlowResult::Success(msg) | FlowResult::Info(msg) | FlowResult::Unsupported(msg) => {
                vec![msg.clone()]
            }
            FlowResult::Listing { header, lines } => {
                let mut out = Vec::with_capacity(lines.len() + 1);
                out.push(header.clone());
                out.extend(lines.iter().cloned());
                out
            }
            FlowResult::NotFound {
                item_type,
                search_term,
            } => vec![format!("{} not found: {}", item_type, search_term)],
        }
    }
}

pub fn handle_flow(flow: FlowResult) {
    match flow {
        FlowResult::Success(msg) => {
            println!("{}", OutputStyle::success(&msg));
        }
        FlowResult::Info(msg) => {
            println!("{}", msg);
        }
        FlowResult::Listing { header, lines } => {
            println!("{}", OutputStyle::header(&header));
            for line in lines {
                println!("{}", line);
            }
        }
        flow @ FlowResult::NotFound { .. } => {
            for line in flow.lines() {
                println!("{}", OutputStyle::warning(&line));
            }
        }
        FlowResult::Unsupported(msg) => {
            println!("{}", OutputStyle::warning(&msg));
        }
    }
}
