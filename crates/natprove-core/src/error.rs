//! Error types for the proof core.
//!
//! Statements the machines cannot interpret are not errors; they get an
//! `UNKNOWN` verdict. Errors cover the dispatch boundary, configured
//! pointers, and wire-identifier decoding.

use thiserror::Error;

/// Result alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors produced by the proof core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No machine is registered under the requested pointer.
    #[error("unknown machine: {pointer}")]
    UnknownMachine { pointer: String },

    /// A wire identifier failed to decode.
    #[error("malformed {kind} id: '{text}'")]
    MalformedId { kind: &'static str, text: String },

    /// A configured resource pointer cannot be used.
    #[error("invalid resource pointer '{pointer}': {reason}")]
    InvalidPointer { pointer: String, reason: String },
}

impl CoreError {
    pub fn unknown_machine(pointer: impl Into<String>) -> Self {
        Self::UnknownMachine {
            pointer: pointer.into(),
        }
    }

    pub fn malformed_id(kind: &'static str, text: impl Into<String>) -> Self {
        Self::MalformedId {
            kind,
            text: text.into(),
        }
    }

    pub fn invalid_pointer(pointer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPointer {
            pointer: pointer.into(),
            reason: reason.into(),
        }
    }
}
