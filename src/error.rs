//! Error types for the prime-cards crate.

use thiserror::Error;

use crate::core::{Card, PlayerId};

/// Main error type for the prime-cards crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("{player} does not hold card {card}")]
    CardNotInHand { player: PlayerId, card: Card },

    #[error("{player} cannot play {card} on sum {sum}: {} is not prime", .sum + .card)]
    IllegalMove { player: PlayerId, card: Card, sum: Card },

    #[error("{player} has no legal card on sum {sum}")]
    NoLegalMove { player: PlayerId, sum: Card },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("input closed before a card was chosen")]
    InputClosed,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for prime-cards operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
