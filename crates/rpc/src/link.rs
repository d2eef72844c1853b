//! FIFO channel pair joining two endpoints.

use serde::Serialize;
use serde_json::Value;
use tokio::sync::mpsc;

use crate::{Envelope, Error, Result};

/// Sends calls to the peer endpoint.
///
/// Dropping every `Caller` for a direction closes that direction; the peer's
/// [`Inbox`] then yields `None` once drained.
#[derive(Debug, Clone)]
pub struct Caller {
	peer: &'static str,
	tx: mpsc::UnboundedSender<Value>,
}

impl Caller {
	/// Calls `method` on the peer with a positional argument tuple.
	pub fn call(&self, method: &str, args: impl Serialize) -> Result<()> {
		let envelope = Envelope::new(method, args)?;
		tracing::trace!(peer = self.peer, method, "rpc.call");
		self.send_raw(envelope.into_value())
	}

	/// Calls an argument-less `method` on the peer.
	pub fn signal(&self, method: &str) -> Result<()> {
		self.call(method, ())
	}

	/// Sends a raw payload, bypassing envelope construction.
	pub fn send_raw(&self, payload: Value) -> Result<()> {
		self.tx.send(payload).map_err(|_| Error::Closed)
	}

	/// Returns true when the peer's inbox has been dropped.
	pub fn is_closed(&self) -> bool {
		self.tx.is_closed()
	}

	/// Name of the peer this caller talks to.
	pub const fn peer(&self) -> &'static str {
		self.peer
	}
}

/// Receives payloads sent by the peer, in send order.
#[derive(Debug)]
pub struct Inbox {
	rx: mpsc::UnboundedReceiver<Value>,
}

impl Inbox {
	/// Waits for the next payload. `None` once the peer hung up and the queue is empty.
	pub async fn recv(&mut self) -> Option<Value> {
		self.rx.recv().await
	}

	/// Returns a queued payload without waiting.
	pub fn try_recv(&mut self) -> Option<Value> {
		self.rx.try_recv().ok()
	}

	/// Blocks the current thread for the next payload.
	///
	/// Must not be called from inside an async runtime.
	pub fn blocking_recv(&mut self) -> Option<Value> {
		self.rx.blocking_recv()
	}

	/// Stops accepting new payloads; queued ones can still be received.
	pub fn close(&mut self) {
		self.rx.close();
	}
}

/// One side of a duplex link.
#[derive(Debug)]
pub struct Port {
	/// Calls into the peer.
	pub caller: Caller,
	/// Calls coming from the peer.
	pub inbox: Inbox,
}

impl Port {
	/// Splits into caller and inbox.
	pub fn split(self) -> (Caller, Inbox) {
		(self.caller, self.inbox)
	}
}

/// Creates a duplex link between endpoints named `a` and `b`.
///
/// The first port belongs to `a` (calls go to `b`), the second to `b`.
pub fn duplex(a: &'static str, b: &'static str) -> (Port, Port) {
	let (a_to_b, b_inbox) = mpsc::unbounded_channel();
	let (b_to_a, a_inbox) = mpsc::unbounded_channel();
	(
		Port {
			caller: Caller { peer: b, tx: a_to_b },
			inbox: Inbox { rx: a_inbox },
		},
		Port {
			caller: Caller { peer: a, tx: b_to_a },
			inbox: Inbox { rx: b_inbox },
		},
	)
}
