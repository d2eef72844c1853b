//! The `{ method, args }` wire shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One call on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
	/// Name of the method the receiving endpoint should run.
	pub method: String,
	/// Positional arguments.
	#[serde(default)]
	pub args: Vec<Value>,
}

impl Envelope {
	/// Builds an envelope from a serializable argument tuple.
	///
	/// Tuples and sequences become the positional list, `()` becomes an empty
	/// list and any other value is sent as the single argument.
	pub fn new(method: impl Into<String>, args: impl Serialize) -> serde_json::Result<Self> {
		let args = match serde_json::to_value(args)? {
			Value::Null => Vec::new(),
			Value::Array(args) => args,
			single => vec![single],
		};
		Ok(Self {
			method: method.into(),
			args,
		})
	}

	/// Converts into the raw payload sent over a [`crate::Port`].
	pub fn into_value(self) -> Value {
		serde_json::json!({ "method": self.method, "args": self.args })
	}
}
