use thiserror::Error;

use crate::model::Flag;

#[derive(Error, Debug)]
pub enum TakeError {
    #[error("Can not create take '{name}': {message}")]
    Creation { name: String, message: String },

    #[error("Take '{0}' not found, can not set it as current")]
    SetActive(String),

    #[error("Can not remove take '{name}': {message}")]
    Delete { name: String, message: String },

    #[error("Node {node} does not have {flag} flag")]
    InvalidFlagKind { node: String, flag: Flag },

    #[error("Invalid node: {0}")]
    InvalidNode(String),

    #[error("{0} not found in take list")]
    NotFound(String),

    #[error("Host error: {0}")]
    Directive(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Closed classification of [`TakeError`], for callers that branch on the
/// failure without matching payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Creation,
    SetActive,
    Delete,
    InvalidFlagKind,
    InvalidNode,
    NotFound,
    Directive,
    Config,
    Io,
    Serialization,
}

impl TakeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TakeError::Creation { .. } => ErrorKind::Creation,
            TakeError::SetActive(_) => ErrorKind::SetActive,
            TakeError::Delete { .. } => ErrorKind::Delete,
            TakeError::InvalidFlagKind { .. } => ErrorKind::InvalidFlagKind,
            TakeError::InvalidNode(_) => ErrorKind::InvalidNode,
            TakeError::NotFound(_) => ErrorKind::NotFound,
            TakeError::Directive(_) => ErrorKind::Directive,
            TakeError::Config(_) => ErrorKind::Config,
            TakeError::Io(_) => ErrorKind::Io,
            TakeError::Serialization(_) => ErrorKind::Serialization,
        }
    }
}
