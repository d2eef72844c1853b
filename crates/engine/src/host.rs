//! Runs a [`MatchEngine`] on a dedicated thread behind an rpc endpoint.

use std::sync::Arc;
use std::time::Instant;

use sift_rpc::{Caller, Endpoint, Port, duplex, serve_blocking};

use crate::MatchEngine;
use crate::protocol::{engine as engine_method, session as session_method};

/// Builds a fresh engine for each session.
pub type EngineFactory = Arc<dyn Fn() -> Box<dyn MatchEngine> + Send + Sync>;

struct EngineState<E> {
	engine: E,
	session: Caller,
}

impl<E: MatchEngine> EngineState<E> {
	fn reply(&self, method: &str, args: impl serde::Serialize) {
		if let Err(error) = self.session.call(method, args) {
			tracing::debug!(method, %error, "engine.reply_dropped");
		}
	}
}

fn engine_endpoint<E: MatchEngine>() -> Endpoint<EngineState<E>> {
	Endpoint::<EngineState<E>>::new("engine")
		.on(engine_method::UPDATE_INDEX, |state: &mut EngineState<E>, (contents,): (Vec<String>,)| {
			state.engine.update_index(contents);
		})
		.on(engine_method::ADD_RECORD, |state: &mut EngineState<E>, (content,): (String,)| {
			state.engine.add_record(content);
		})
		.on(engine_method::REMOVE_RECORD, |state: &mut EngineState<E>, (position,): (usize,)| {
			state.engine.remove_record(position);
		})
		.on(
			engine_method::RENAME_RECORD,
			|state: &mut EngineState<E>, (position, content): (usize, String)| {
				state.engine.rename_record(position, content);
			},
		)
		.on(engine_method::SEARCH, |state: &mut EngineState<E>, (query, seq): (String, u64)| {
			let start = Instant::now();
			let results = state.engine.search(&query);
			tracing::debug!(
				seq,
				hits = results.len(),
				scanned = state.engine.contents().len(),
				elapsed_ms = start.elapsed().as_millis() as u64,
				"engine.search"
			);
			state.reply(session_method::SEARCH_FINISHED, (results, seq));
		})
		.on(
			engine_method::VERIFY_CONSISTENCY,
			|state: &mut EngineState<E>, (expected,): (Vec<String>,)| {
				let consistent = state.engine.verify_consistency(&expected);
				if !consistent {
					tracing::warn!(expected = expected.len(), actual = state.engine.contents().len(), "engine.index_diverged");
				}
				state.reply(session_method::CONSISTENCY_CHECKED, (consistent,));
			},
		)
}

/// Starts an engine thread and returns the session's side of the link.
///
/// The thread builds the engine with `factory`, announces `ready`, then
/// serves calls in arrival order until every session-side caller is dropped.
pub fn spawn_engine<E, F>(label: &str, factory: F) -> std::io::Result<Port>
where
	E: MatchEngine,
	F: FnOnce() -> E + Send + 'static,
{
	let (session_port, engine_port) = duplex("session", "engine");
	let thread_name = format!("sift-engine-{label}");

	std::thread::Builder::new().name(thread_name).spawn(move || {
		let (session, mut inbox) = engine_port.split();
		let mut state = EngineState { engine: factory(), session };
		if state.session.signal(session_method::READY).is_err() {
			tracing::debug!("engine.session_gone_before_ready");
			return;
		}

		let mut endpoint = engine_endpoint::<E>();
		let seen = serve_blocking(&mut endpoint, &mut state, &mut inbox);
		tracing::debug!(seen, "engine.stop");
	})?;

	Ok(session_port)
}
