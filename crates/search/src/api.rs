//! Entry point that opens file and command searches.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use sift_engine::{EngineFactory, MatchEngine, NucleoEngine, spawn_engine};
use sift_rpc::Port;
use tokio::sync::mpsc;

use crate::{
	CommandSource, CorpusHub, DataSource, Error, FileSearchKind, FileSource, Host, PlaceholderOptions, Result,
	SearchSettings, SearchUiKind, Session, SessionConfig, SessionEvent, SharedMemo, UiAdapter,
};

const FILE_PROMPT: &str = "Select a file...";
const COMMAND_PROMPT: &str = "Select a command...";

/// Options for [`SearchApi::search_files`]. Unset fields come from settings.
#[derive(Debug, Clone, Default)]
pub struct FileSearchOptions {
	pub kind: Option<FileSearchKind>,
	pub ui: Option<SearchUiKind>,
	pub prompt: Option<String>,
	pub placeholders: Option<PlaceholderOptions>,
}

impl FileSearchOptions {
	/// Parses the search and UI kinds from their names.
	pub fn from_names(kind: &str, ui: &str) -> Result<Self> {
		Ok(Self {
			kind: Some(kind.parse()?),
			ui: Some(ui.parse()?),
			..Self::default()
		})
	}
}

/// Options for [`SearchApi::search_commands`].
#[derive(Debug, Clone, Default)]
pub struct CommandSearchOptions {
	pub prompt: Option<String>,
	pub placeholders: Option<PlaceholderOptions>,
}

/// A freshly opened search: the session, its event stream and its adapter.
pub struct OpenSearch<S: DataSource> {
	pub session: Session<S>,
	pub events: mpsc::UnboundedReceiver<SessionEvent<S::Payload>>,
	pub ui: UiAdapter,
}

/// Opens searches against one host.
///
/// Owns the process-wide recency memos and the file corpus hub; every session
/// opened here shares them.
pub struct SearchApi<H> {
	host: Arc<H>,
	settings: SearchSettings,
	file_memo: SharedMemo<String>,
	command_memo: SharedMemo<String>,
	file_events: CorpusHub<String>,
	engine_factory: EngineFactory,
	opened: AtomicU64,
}

impl<H: Host> SearchApi<H> {
	/// Uses [`NucleoEngine`] limited to `settings.result_limit` hits.
	pub fn new(host: Arc<H>, settings: SearchSettings) -> Self {
		let limit = settings.result_limit;
		Self {
			host,
			settings,
			file_memo: SharedMemo::new(),
			command_memo: SharedMemo::new(),
			file_events: CorpusHub::new(),
			engine_factory: Arc::new(move || Box::new(NucleoEngine::new(limit)) as Box<dyn MatchEngine>),
			opened: AtomicU64::new(0),
		}
	}

	#[must_use]
	pub fn with_engine_factory(mut self, factory: EngineFactory) -> Self {
		self.engine_factory = factory;
		self
	}

	/// Replaces the memos, e.g. with ones restored by the embedding application.
	#[must_use]
	pub fn with_memos(mut self, files: SharedMemo<String>, commands: SharedMemo<String>) -> Self {
		self.file_memo = files;
		self.command_memo = commands;
		self
	}

	pub fn host(&self) -> &Arc<H> {
		&self.host
	}

	pub fn settings(&self) -> &SearchSettings {
		&self.settings
	}

	pub fn file_memo(&self) -> &SharedMemo<String> {
		&self.file_memo
	}

	pub fn command_memo(&self) -> &SharedMemo<String> {
		&self.command_memo
	}

	/// Hub the host publishes file create/delete/rename events on.
	pub fn file_events(&self) -> &CorpusHub<String> {
		&self.file_events
	}

	fn spawn(&self, kind: &str) -> Result<Port> {
		let n = self.opened.fetch_add(1, Ordering::Relaxed) + 1;
		let factory = Arc::clone(&self.engine_factory);
		spawn_engine(&format!("{kind}-{n}"), move || factory()).map_err(Error::EngineSpawn)
	}

	/// Opens a file search.
	pub fn search_files(&self, options: FileSearchOptions) -> Result<OpenSearch<FileSource<H>>> {
		let kind = options.kind.unwrap_or(self.settings.file_search);
		let ui_kind = options.ui.unwrap_or(self.settings.ui);
		let placeholders = options.placeholders.unwrap_or_else(|| self.settings.placeholder_options());
		let ui = ui_kind.adapter(options.prompt.unwrap_or_else(|| FILE_PROMPT.to_string()), &self.settings);

		let source = FileSource::new(Arc::clone(&self.host), kind, self.file_memo.clone());
		let config = SessionConfig {
			placeholders,
			record_selections: placeholders.recent,
			corpus_events: Some(self.file_events.subscribe()),
		};
		let (session, events) = Session::open(source, self.spawn("files")?, config);
		tracing::debug!(?kind, ui = ?ui_kind, "search.open.files");
		Ok(OpenSearch { session, events, ui })
	}

	/// Opens a command search. Always uses the basic adapter.
	pub fn search_commands(&self, options: CommandSearchOptions) -> Result<OpenSearch<CommandSource<H>>> {
		let placeholders = options.placeholders.unwrap_or_else(|| self.settings.placeholder_options());
		let ui = SearchUiKind::Basic.adapter(options.prompt.unwrap_or_else(|| COMMAND_PROMPT.to_string()), &self.settings);

		let source = CommandSource::new(Arc::clone(&self.host), self.command_memo.clone());
		let config = SessionConfig {
			placeholders,
			record_selections: placeholders.recent,
			corpus_events: None,
		};
		let (session, events) = Session::open(source, self.spawn("commands")?, config);
		tracing::debug!("search.open.commands");
		Ok(OpenSearch { session, events, ui })
	}
}
