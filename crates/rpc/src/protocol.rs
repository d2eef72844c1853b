//! Inbound classification and sequence numbering.

use serde_json::Value;

use crate::Envelope;

/// Monotonic sequence number generator.
///
/// Used to tag dispatched searches so replies to superseded calls can be told
/// apart from the reply to the call currently in flight.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequenceGen(pub u64);

impl SequenceGen {
	/// Creates a generator whose first value is 1.
	#[must_use]
	pub const fn new() -> Self {
		Self(0)
	}

	/// Advances and returns the next sequence number.
	#[allow(clippy::should_implement_trait, reason = "convention")]
	pub fn next(&mut self) -> u64 {
		self.0 = self.0.wrapping_add(1);
		self.0
	}

	/// Returns the last issued sequence number, 0 if none.
	#[must_use]
	pub const fn current(&self) -> u64 {
		self.0
	}
}

/// Classification of one inbound payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
	/// A well-formed call envelope.
	Call(Envelope),
	/// Anything else, with a short reason for logs.
	Malformed(&'static str),
}

impl Inbound {
	/// Classifies a raw payload without ever failing.
	///
	/// * non-object payloads are malformed
	/// * `method` must be present and a string
	/// * `args` may be absent (empty list) but must otherwise be an array
	pub fn classify(payload: Value) -> Self {
		let Value::Object(mut fields) = payload else {
			return Self::Malformed("payload is not an object");
		};
		let method = match fields.remove("method") {
			Some(Value::String(method)) => method,
			Some(_) => return Self::Malformed("method is not a string"),
			None => return Self::Malformed("method is missing"),
		};
		let args = match fields.remove("args") {
			None | Some(Value::Null) => Vec::new(),
			Some(Value::Array(args)) => args,
			Some(_) => return Self::Malformed("args is not an array"),
		};
		Self::Call(Envelope { method, args })
	}
}
