//! Loops that drive an [`Endpoint`] from an [`Inbox`].

use crate::{Endpoint, Inbox};

/// Serves calls on the current thread until the peer hangs up.
///
/// Intended for dedicated engine threads. Returns the number of payloads seen.
pub fn serve_blocking<S>(endpoint: &mut Endpoint<S>, state: &mut S, inbox: &mut Inbox) -> usize {
	let mut seen = 0;
	while let Some(payload) = inbox.blocking_recv() {
		seen += 1;
		endpoint.handle(state, payload);
	}
	seen
}

/// Async variant of [`serve_blocking`].
pub async fn serve<S>(endpoint: &mut Endpoint<S>, state: &mut S, inbox: &mut Inbox) -> usize {
	let mut seen = 0;
	while let Some(payload) = inbox.recv().await {
		seen += 1;
		endpoint.handle(state, payload);
	}
	seen
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::duplex;

	#[tokio::test]
	async fn serve_stops_when_peer_closes() {
		let (client, server) = duplex("client", "server");
		let (_server_caller, mut inbox) = server.split();
		let mut endpoint = Endpoint::new("server").on("add", |total: &mut i64, (n,): (i64,)| *total += n);

		client.caller.call("add", (2,)).unwrap();
		client.caller.call("add", (5,)).unwrap();
		client.caller.call("missing", ()).unwrap();
		drop(client);

		let mut total = 0;
		let seen = serve(&mut endpoint, &mut total, &mut inbox).await;
		assert_eq!(seen, 3);
		assert_eq!(total, 7);
	}

	#[test]
	fn serve_blocking_runs_on_a_plain_thread() {
		let (client, server) = duplex("client", "server");
		let handle = std::thread::spawn(move || {
			let (_caller, mut inbox) = server.split();
			let mut endpoint = Endpoint::new("server").on("push", |items: &mut Vec<String>, (item,): (String,)| items.push(item));
			let mut items = Vec::new();
			serve_blocking(&mut endpoint, &mut items, &mut inbox);
			items
		});

		client.caller.call("push", ("a",)).unwrap();
		client.caller.call("push", ("b",)).unwrap();
		drop(client);

		assert_eq!(handle.join().unwrap(), vec!["a", "b"]);
	}
}
