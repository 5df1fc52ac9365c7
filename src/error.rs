//! Error taxonomy for the one-shot read pipeline

use uuid::Uuid;

/// Everything that can go wrong between parsing an address and printing a
/// measurement. Nothing here is retried; each variant propagates straight to
/// the entry point.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The local Bluetooth stack or adapter is unavailable.
    #[error("Bluetooth adapter unavailable: {reason}")]
    Adapter { reason: String },

    /// The transport could not establish or cleanly release a session.
    #[error("connection to {address} failed: {reason}")]
    Connection { address: String, reason: String },

    /// The characteristic is missing or the read itself failed.
    #[error("read of characteristic {uuid} failed: {reason}")]
    Read { uuid: Uuid, reason: String },

    /// The read returned a payload of the wrong size.
    #[error("characteristic {uuid} returned {got} byte(s), expected {expected}")]
    UnexpectedLength {
        uuid: Uuid,
        expected: usize,
        got: usize,
    },

    /// The payload could not be reinterpreted as the fixed-width integer.
    /// Unreachable after the length check, but kept as an explicit case.
    #[error("cannot decode {got}-byte payload as a {expected}-byte integer")]
    Decode { expected: usize, got: usize },
}
