//! Error types for the explorer
//!
//! Provides unified error handling using thiserror. The cache itself is
//! infallible; these cover fetching, decoding and command handling.

use reqwest::StatusCode;
use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the explorer.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport-level HTTP failure
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote API answered with a non-success status
    #[error("{url} returned {status}")]
    Status { url: String, status: StatusCode },

    /// Response body did not match the expected shape
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Inspect requested for a creature not in the pokedex
    #[error("you have not caught {0}")]
    NotCaught(String),

    #[error("no more location areas")]
    NoNextPage,

    #[error("you're on the first page")]
    NoPreviousPage,

    /// Command needs an argument that was not given
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

// == Result Type Alias ==
/// Convenience Result type for the explorer.
pub type Result<T> = std::result::Result<T, PokedexError>;
