//! Error types for the LORE core library.

use thiserror::Error;

/// Top-level error type for all LORE operations.
#[derive(Error, Debug)]
pub enum LoreError {
    /// An attribute key did not match any of the six known attributes.
    #[error("Unknown attribute key: {0}")]
    UnknownAttribute(String),

    /// A skill referenced an item or actor that does not exist.
    #[error("Actor not found: {0:?}")]
    ActorNotFound(crate::ActorId),

    /// The dice evaluator rejected a composed formula.
    #[error("Formula rejected by evaluator: {formula} ({reason})")]
    FormulaRejected {
        /// The composed dice-notation string.
        formula: String,
        /// Evaluator-supplied reason.
        reason: String,
    },

    /// Serialization or deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, LoreError>;
