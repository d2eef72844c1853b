use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use sift_engine::MatchResult;
use sift_engine::protocol::{engine as engine_method, session as session_method};
use sift_rpc::{Caller, Dispatch, Endpoint, Inbox, Port, SequenceGen};
use tokio::sync::mpsc;

use crate::sync::{CorpusEvent, IndexOp, plan_corpus_event};
use crate::{DataSource, PlaceholderOptions, PlaceholderSet, Record, SearchHit};

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
	/// Waiting for the engine's `ready`.
	Uninitialized,
	/// Ready with no query outstanding.
	Idle,
	/// One query outstanding.
	Running,
	/// Destroyed; nothing changes any more.
	Terminated,
}

/// Output pushed to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent<T> {
	/// Ranked hits for `query`, best first.
	Results { query: String, hits: Vec<SearchHit<T>> },
	/// Answer to [`Session::request_consistency_check`].
	ConsistencyChecked { consistent: bool },
}

/// Optional collaborators of a session.
pub struct SessionConfig<Id> {
	/// Which placeholder categories to compose.
	pub placeholders: PlaceholderOptions,
	/// Whether [`Session::select`] records the choice in the source's memo.
	pub record_selections: bool,
	/// Host corpus mutations, usually from [`crate::CorpusHub::subscribe`].
	pub corpus_events: Option<mpsc::UnboundedReceiver<CorpusEvent<Id>>>,
}

impl<Id> Default for SessionConfig<Id> {
	fn default() -> Self {
		Self {
			placeholders: PlaceholderOptions::default(),
			record_selections: true,
			corpus_events: None,
		}
	}
}

struct InFlight<T> {
	seq: u64,
	query: String,
	snapshot: Arc<Vec<Record<T>>>,
}

/// State touched by engine message handlers.
struct Coordinator<T> {
	state: SessionState,
	pending: Option<String>,
	in_flight: Option<InFlight<T>>,
	seq: SequenceGen,
	engine: Option<Caller>,
	corpus: Arc<Vec<Record<T>>>,
	events: mpsc::UnboundedSender<SessionEvent<T>>,
	dispatched: u64,
}

impl<T: Clone> Coordinator<T> {
	fn send(&self, method: &str, args: impl serde::Serialize) {
		let Some(engine) = &self.engine else {
			return;
		};
		if let Err(error) = engine.call(method, args) {
			tracing::debug!(method, %error, "session.engine_gone");
		}
	}

	fn emit(&self, event: SessionEvent<T>) {
		if self.events.send(event).is_err() {
			tracing::trace!("session.events_closed");
		}
	}

	fn contents(&self) -> Vec<String> {
		self.corpus.iter().map(|record| record.content.clone()).collect()
	}

	fn is_ready(&self) -> bool {
		matches!(self.state, SessionState::Idle | SessionState::Running)
	}

	fn dispatch_if_possible(&mut self) -> bool {
		if self.state != SessionState::Idle {
			return false;
		}
		let Some(query) = self.pending.take() else {
			return false;
		};

		let seq = self.seq.next();
		self.send(engine_method::SEARCH, (&query, seq));
		self.dispatched += 1;
		tracing::debug!(seq, query = %query, corpus = self.corpus.len(), "session.dispatch");

		self.in_flight = Some(InFlight {
			seq,
			query,
			snapshot: Arc::clone(&self.corpus),
		});
		self.state = SessionState::Running;
		true
	}

	fn on_ready(&mut self) {
		if self.state != SessionState::Uninitialized {
			tracing::debug!(state = ?self.state, "session.ready.ignored");
			return;
		}
		self.state = SessionState::Idle;
		self.send(engine_method::UPDATE_INDEX, (self.contents(),));
		tracing::debug!(corpus = self.corpus.len(), "session.ready");
		self.dispatch_if_possible();
	}

	fn on_search_finished(&mut self, results: Vec<MatchResult>, seq: u64) {
		let Some(in_flight) = self.in_flight.take_if(|in_flight| in_flight.seq == seq) else {
			tracing::debug!(seq, current = self.seq.current(), "session.reply.stale");
			return;
		};

		let total = results.len();
		let hits: Vec<_> = results
			.into_iter()
			.filter_map(|result| {
				let record = in_flight.snapshot.get(result.position)?;
				Some(SearchHit {
					record: record.clone(),
					highlights: result.highlight_spans,
				})
			})
			.collect();
		if hits.len() != total {
			tracing::debug!(seq, dropped = total - hits.len(), "session.reply.out_of_range");
		}
		tracing::debug!(seq, hits = hits.len(), "session.results");

		self.state = SessionState::Idle;
		self.emit(SessionEvent::Results {
			query: in_flight.query,
			hits,
		});
		self.dispatch_if_possible();
	}

	fn on_consistency_checked(&mut self, consistent: bool) {
		if !consistent {
			tracing::warn!(corpus = self.corpus.len(), "session.index_diverged");
		}
		self.emit(SessionEvent::ConsistencyChecked { consistent });
	}

	fn apply(&mut self, op: IndexOp<T>) {
		if self.is_ready() {
			match &op {
				IndexOp::Add(record) => self.send(engine_method::ADD_RECORD, (&record.content,)),
				IndexOp::Remove(position) => self.send(engine_method::REMOVE_RECORD, (position,)),
				IndexOp::Rename(position, record) => {
					self.send(engine_method::RENAME_RECORD, (position, &record.content));
				}
			}
		}
		if !op.apply(Arc::make_mut(&mut self.corpus)) {
			tracing::debug!("session.corpus.op_out_of_range");
		}
	}
}

fn session_endpoint<T: Clone + Send + 'static>() -> Endpoint<Coordinator<T>> {
	Endpoint::<Coordinator<T>>::new("session")
		.on_signal(session_method::READY, |core: &mut Coordinator<T>| core.on_ready())
		.on(
			session_method::SEARCH_FINISHED,
			|core: &mut Coordinator<T>, (results, seq): (Vec<MatchResult>, u64)| core.on_search_finished(results, seq),
		)
		.on(
			session_method::CONSISTENCY_CHECKED,
			|core: &mut Coordinator<T>, (consistent,): (bool,)| core.on_consistency_checked(consistent),
		)
}

type SubmitCallback<T> = Box<dyn FnMut(&Record<T>) + Send>;
type CancelCallback = Box<dyn FnMut() + Send>;

enum Incoming<Id> {
	Engine(Value),
	Corpus(CorpusEvent<Id>),
}

/// Coordinator for one open search UI.
///
/// See the [module docs](super) for the state machine and its invariants.
pub struct Session<S: DataSource> {
	source: S,
	core: Coordinator<S::Payload>,
	endpoint: Endpoint<Coordinator<S::Payload>>,
	inbox: Option<Inbox>,
	corpus_events: Option<mpsc::UnboundedReceiver<CorpusEvent<S::Id>>>,
	record_selections: bool,
	placeholders: PlaceholderSet<S::Payload>,
	on_submit: Vec<SubmitCallback<S::Payload>>,
	on_cancel: Vec<CancelCallback>,
}

impl<S: DataSource> fmt::Debug for Session<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Session")
			.field("state", &self.core.state)
			.field("pending", &self.core.pending)
			.field("in_flight", &self.core.in_flight.as_ref().map(|f| (f.seq, &f.query)))
			.field("corpus", &self.core.corpus.len())
			.finish_non_exhaustive()
	}
}

impl<S: DataSource> Session<S> {
	/// Opens a session over `engine`, which must not have sent anything yet.
	///
	/// Enumerates `source` once and composes placeholders from that corpus.
	/// Returns the session and the receiver its events are pushed to.
	pub fn open(
		source: S,
		engine: Port,
		config: SessionConfig<S::Id>,
	) -> (Self, mpsc::UnboundedReceiver<SessionEvent<S::Payload>>) {
		let corpus = source.enumerate();
		let placeholders = source.placeholders(&corpus, config.placeholders);
		let (events, events_rx) = mpsc::unbounded_channel();
		let (caller, inbox) = engine.split();
		tracing::debug!(
			corpus = corpus.len(),
			placeholders = placeholders.total_count(),
			"session.open"
		);

		let session = Self {
			source,
			core: Coordinator {
				state: SessionState::Uninitialized,
				pending: None,
				in_flight: None,
				seq: SequenceGen::new(),
				engine: Some(caller),
				corpus: Arc::new(corpus),
				events,
				dispatched: 0,
			},
			endpoint: session_endpoint(),
			inbox: Some(inbox),
			corpus_events: config.corpus_events,
			record_selections: config.record_selections,
			placeholders,
			on_submit: Vec::new(),
			on_cancel: Vec::new(),
		};
		(session, events_rx)
	}

	/// Replaces the pending query and dispatches it if the engine is idle.
	pub fn submit_query(&mut self, text: impl Into<String>) {
		if self.core.state == SessionState::Terminated {
			return;
		}
		let text = text.into();
		if let Some(dropped) = self.core.pending.replace(text) {
			tracing::trace!(query = %dropped, "session.coalesced");
		}
		self.core.dispatch_if_possible();
	}

	/// Handles one raw engine payload.
	///
	/// Returns [`Dispatch::Ignored`] once the session is terminated.
	pub fn handle_message(&mut self, payload: Value) -> Dispatch {
		if self.core.state == SessionState::Terminated {
			tracing::trace!("session.drop.terminated");
			return Dispatch::Ignored;
		}
		self.endpoint.handle(&mut self.core, payload)
	}

	/// Applies one host corpus event to the snapshot and mirrors it to the engine.
	pub fn apply_corpus_event(&mut self, event: CorpusEvent<S::Id>) {
		if self.core.state == SessionState::Terminated {
			return;
		}
		let ops = plan_corpus_event(&self.source, &self.core.corpus, &event);
		tracing::debug!(?event, ops = ops.len(), "session.corpus.event");
		for op in ops {
			self.core.apply(op);
		}
	}

	/// Processes every engine message and corpus event already queued.
	///
	/// Never waits. Returns how many items were processed.
	pub fn pump(&mut self) -> usize {
		let mut processed = 0;
		loop {
			let mut progressed = false;
			while let Some(payload) = self.inbox.as_mut().and_then(Inbox::try_recv) {
				self.handle_message(payload);
				processed += 1;
				progressed = true;
			}
			while let Some(event) = self.corpus_events.as_mut().and_then(|rx| rx.try_recv().ok()) {
				self.apply_corpus_event(event);
				processed += 1;
				progressed = true;
			}
			if !progressed {
				return processed;
			}
		}
	}

	/// Waits for and processes the next engine message or corpus event.
	///
	/// Returns `false` once the session is terminated or both inputs are closed.
	pub async fn next(&mut self) -> bool {
		if self.core.state == SessionState::Terminated {
			return false;
		}
		let incoming = {
			let inbox = self.inbox.as_mut();
			let corpus_events = self.corpus_events.as_mut();
			tokio::select! {
				Some(payload) = recv_engine(inbox) => Incoming::Engine(payload),
				Some(event) = recv_corpus(corpus_events) => Incoming::Corpus(event),
				else => return false,
			}
		};
		match incoming {
			Incoming::Engine(payload) => {
				self.handle_message(payload);
			}
			Incoming::Corpus(event) => self.apply_corpus_event(event),
		}
		true
	}

	/// Asks the engine to compare its corpus with this session's snapshot.
	///
	/// The answer arrives as [`SessionEvent::ConsistencyChecked`]. Returns
	/// `false` when the engine is not ready or the session is terminated.
	pub fn request_consistency_check(&mut self) -> bool {
		if !self.core.is_ready() {
			return false;
		}
		self.core.send(engine_method::VERIFY_CONSISTENCY, (self.core.contents(),));
		true
	}

	/// Registers a callback run on [`Session::select`].
	pub fn on_submit(&mut self, callback: impl FnMut(&Record<S::Payload>) + Send + 'static) {
		self.on_submit.push(Box::new(callback));
	}

	/// Registers a callback run on [`Session::cancel`].
	pub fn on_cancel(&mut self, callback: impl FnMut() + Send + 'static) {
		self.on_cancel.push(Box::new(callback));
	}

	/// Records the user's choice in the memo and runs the submit callbacks.
	pub fn select(&mut self, record: &Record<S::Payload>) {
		if self.core.state == SessionState::Terminated {
			return;
		}
		let id = self.source.id(record);
		tracing::debug!(?id, "session.select");
		if self.record_selections
			&& let Some(memo) = self.source.memo()
		{
			memo.add(id);
		}
		for callback in &mut self.on_submit {
			callback(record);
		}
	}

	/// Runs the cancel callbacks.
	pub fn cancel(&mut self) {
		if self.core.state == SessionState::Terminated {
			return;
		}
		tracing::debug!("session.cancel");
		for callback in &mut self.on_cancel {
			callback();
		}
	}

	/// Closes the engine link and discards pending and in-flight work.
	///
	/// Idempotent. The engine thread exits once it sees its inbox close.
	pub fn destroy(&mut self) {
		if self.core.state == SessionState::Terminated {
			return;
		}
		tracing::debug!(dispatched = self.core.dispatched, "session.destroy");
		self.core.state = SessionState::Terminated;
		self.core.engine = None;
		self.core.pending = None;
		self.core.in_flight = None;
		if let Some(mut inbox) = self.inbox.take() {
			inbox.close();
		}
		self.corpus_events = None;
	}

	pub fn state(&self) -> SessionState {
		self.core.state
	}

	pub fn pending_query(&self) -> Option<&str> {
		self.core.pending.as_deref()
	}

	pub fn in_flight_query(&self) -> Option<&str> {
		self.core.in_flight.as_ref().map(|in_flight| in_flight.query.as_str())
	}

	/// Number of `search` calls sent so far.
	pub fn dispatched(&self) -> u64 {
		self.core.dispatched
	}

	/// Current snapshot, including applied corpus events.
	pub fn corpus(&self) -> &[Record<S::Payload>] {
		&self.core.corpus
	}

	pub fn placeholders(&self) -> &PlaceholderSet<S::Payload> {
		&self.placeholders
	}

	pub fn source(&self) -> &S {
		&self.source
	}
}

impl<S: DataSource> Drop for Session<S> {
	fn drop(&mut self) {
		self.destroy();
	}
}

async fn recv_engine(inbox: Option<&mut Inbox>) -> Option<Value> {
	match inbox {
		Some(inbox) => inbox.recv().await,
		None => None,
	}
}

async fn recv_corpus<Id>(rx: Option<&mut mpsc::UnboundedReceiver<CorpusEvent<Id>>>) -> Option<CorpusEvent<Id>> {
	match rx {
		Some(rx) => rx.recv().await,
		None => None,
	}
}
