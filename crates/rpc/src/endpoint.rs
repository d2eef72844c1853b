//! Method-name dispatch table.

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Inbound;

type Handler<S> = Box<dyn FnMut(&mut S, Vec<Value>) -> serde_json::Result<()> + Send>;

/// Outcome of handling one inbound payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
	/// A registered handler ran.
	Handled(String),
	/// The envelope was well formed but names no registered method.
	UnknownMethod(String),
	/// The payload was not a call envelope.
	Malformed,
	/// The method exists but its arguments did not decode.
	InvalidArgs(String),
	/// The receiver no longer accepts messages; the payload was not inspected.
	Ignored,
}

impl Dispatch {
	/// Returns true when a handler ran.
	pub const fn is_handled(&self) -> bool {
		matches!(self, Self::Handled(_))
	}
}

/// Handler table for the methods one side of a link accepts.
///
/// Handlers receive the endpoint owner's state `S` mutably plus the decoded
/// argument tuple. Nothing that arrives on the wire can make [`Self::handle`]
/// fail: unknown methods, malformed envelopes and undecodable arguments are
/// reported through [`Dispatch`] and otherwise ignored.
pub struct Endpoint<S> {
	name: &'static str,
	handlers: HashMap<&'static str, Handler<S>>,
}

impl<S> fmt::Debug for Endpoint<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut methods: Vec<_> = self.handlers.keys().copied().collect();
		methods.sort_unstable();
		f.debug_struct("Endpoint").field("name", &self.name).field("methods", &methods).finish()
	}
}

impl<S> Endpoint<S> {
	/// Creates an empty endpoint. `name` only appears in logs.
	pub fn new(name: &'static str) -> Self {
		Self {
			name,
			handlers: HashMap::new(),
		}
	}

	/// Registers a handler whose positional arguments decode into `A`.
	///
	/// `A` is normally a tuple, e.g. `(String, u64)`; the argument list must
	/// have exactly as many entries as the tuple.
	pub fn on<A, F>(mut self, method: &'static str, mut handler: F) -> Self
	where
		A: DeserializeOwned,
		F: FnMut(&mut S, A) + Send + 'static,
	{
		self.handlers.insert(
			method,
			Box::new(move |state, args| {
				let args = serde_json::from_value::<A>(Value::Array(args))?;
				handler(state, args);
				Ok(())
			}),
		);
		self
	}

	/// Registers a handler for a method that carries no arguments.
	///
	/// Any arguments sent along are ignored.
	pub fn on_signal<F>(mut self, method: &'static str, mut handler: F) -> Self
	where
		F: FnMut(&mut S) + Send + 'static,
	{
		self.handlers.insert(
			method,
			Box::new(move |state, _args| {
				handler(state);
				Ok(())
			}),
		);
		self
	}

	/// Returns true if `method` has a handler.
	pub fn handles(&self, method: &str) -> bool {
		self.handlers.contains_key(method)
	}

	/// Dispatches one raw payload.
	pub fn handle(&mut self, state: &mut S, payload: Value) -> Dispatch {
		let envelope = match Inbound::classify(payload) {
			Inbound::Call(envelope) => envelope,
			Inbound::Malformed(reason) => {
				tracing::debug!(endpoint = self.name, reason, "rpc.drop.malformed");
				return Dispatch::Malformed;
			}
		};

		let Some(handler) = self.handlers.get_mut(envelope.method.as_str()) else {
			tracing::debug!(endpoint = self.name, method = %envelope.method, "rpc.drop.unknown_method");
			return Dispatch::UnknownMethod(envelope.method);
		};

		match handler(state, envelope.args) {
			Ok(()) => {
				tracing::trace!(endpoint = self.name, method = %envelope.method, "rpc.handled");
				Dispatch::Handled(envelope.method)
			}
			Err(error) => {
				tracing::debug!(endpoint = self.name, method = %envelope.method, %error, "rpc.drop.invalid_args");
				Dispatch::InvalidArgs(envelope.method)
			}
		}
	}
}

#[cfg(test)]
mod tests;
