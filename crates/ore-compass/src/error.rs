//! Error types for loading and transferring recipes.

use mc_protocol::ProtocolError;
use thiserror::Error;

use crate::Identifier;

/// Errors that can occur while reading a recipe definition.
#[derive(Debug, Error)]
pub enum RecipeError {
    /// The JSON definition was malformed or missing a field.
    #[error("JSON error in recipe {id}: {source}")]
    Json {
        id: Identifier,
        #[source]
        source: serde_json::Error,
    },

    /// The binary form could not be encoded or decoded.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The definition names a different recipe serializer.
    #[error("recipe {id} has type {found}, expected {expected}")]
    WrongType {
        id: Identifier,
        found: Identifier,
        expected: Identifier,
    },

    /// `ore_count` is negative or does not fit in an int.
    #[error("recipe {id} has out-of-range ore_count {count}")]
    InvalidOreCount { id: Identifier, count: i64 },
}

/// Result type for recipe operations.
pub type RecipeResult<T> = Result<T, RecipeError>;
