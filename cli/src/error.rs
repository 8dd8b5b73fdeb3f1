//! Toolbox error kinds and their process exit codes.

use thiserror::Error;

use mcp2_discover::DiscoverError;

/// Exit code reported when the operator cancels an interactive step.
pub const EXIT_CANCELLED: u8 = 130;

/// Everything a command handler can fail with.
///
/// Validation failures surface before any external process is spawned.
/// Delegated scripts do not appear here at all; their exit codes are
/// relayed as the toolbox's own.
#[derive(Debug, Error)]
pub enum ToolboxError {
    /// Settings file exists but could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The discovery subsystem failed to start a browse session.
    #[error("device discovery failed: {0}")]
    Device(#[from] DiscoverError),

    /// Invalid command-line or interactive input.
    #[error("{0}")]
    Usage(String),

    /// The operator backed out of an interactive prompt.
    #[error("cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else, with context attached along the way.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ToolboxError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ToolboxError::Cancelled => EXIT_CANCELLED,
            _ => 1,
        }
    }
}
