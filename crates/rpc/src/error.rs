//! Transport errors.

use thiserror::Error;

/// Errors surfaced to callers of the transport.
///
/// Inbound problems (malformed envelopes, unknown methods) are never errors;
/// they are classified by [`crate::Dispatch`] and dropped.
#[derive(Debug, Error)]
pub enum Error {
	/// The peer's inbox has been dropped.
	#[error("peer channel closed")]
	Closed,

	/// Call arguments could not be encoded as JSON.
	#[error("failed to encode call arguments: {0}")]
	Encode(#[from] serde_json::Error),
}

/// Result type for transport operations.
pub type Result<T> = std::result::Result<T, Error>;
