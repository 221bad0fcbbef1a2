use thiserror::Error;

use crate::env::Action;

/// Errors raised by the search core, its agents and the game models it
/// drives.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("action {action} is not legal for agent {agent}")]
    InvalidAction { agent: usize, action: Action },

    #[error("maximizing agent has no legal move at layer {layer}")]
    NoLegalMove { layer: usize },

    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
