use std::path::PathBuf;
use thiserror::Error;

/// Everything a single command can fail with. All variants are recoverable:
/// the REPL reports them and keeps running.
#[derive(Debug, Error)]
pub enum Error {
    /// A verb was given a missing or empty argument. No state was mutated.
    #[error("{message}\nUsage: {usage}")]
    Validation {
        message: String,
        usage: &'static str,
    },

    #[error("Snippet '{0}' not found.")]
    SnippetNotFound(String),

    /// A read/write/mkdir against the filesystem failed. The operation was
    /// aborted before any settings mutation.
    #[error("Failed to {action} {}: {source}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn validation(message: impl Into<String>, usage: &'static str) -> Self {
        Error::Validation {
            message: message.into(),
            usage,
        }
    }

    pub fn filesystem(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
