//! Sift: live fuzzy search over a directory from the terminal.
//!
//! Each input line replaces the current query; results stream back as the
//! engine answers. Lines starting with `:` open results or edit the tree, and
//! every edit is published to the open session as a corpus event.

mod host;
mod repl;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use sift_search::{
	CommandEntry, CommandSearchOptions, CorpusEvent, CorpusHub, DataSource, FileEntry, FileSearchKind,
	FileSearchOptions, OpenSearch, Preview, Record, SearchApi, SearchHit, SearchSettings, SearchUiKind, SessionEvent,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::host::{WalkHost, WalkOptions};
use crate::repl::Input;

/// Sift command line arguments.
#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(about = "Live fuzzy search over files and commands")]
struct Args {
	/// Directory to search
	#[arg(default_value = ".")]
	root: PathBuf,

	/// Match on file paths or on names and aliases
	#[arg(short, long, value_parser = parse_kind)]
	kind: Option<FileSearchKind>,

	/// Result presentation: basic or preview
	#[arg(short, long, value_parser = parse_ui)]
	ui: Option<SearchUiKind>,

	/// Search the built-in commands instead of files
	#[arg(long)]
	commands: bool,

	/// Settings file (defaults to sift/config.toml in the user config directory)
	#[arg(short, long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// File listing bookmarked paths, one per line
	#[arg(short, long, value_name = "PATH")]
	bookmarks: Option<PathBuf>,

	/// Maximum results per query
	#[arg(short, long)]
	limit: Option<usize>,

	/// Include hidden files
	#[arg(long)]
	hidden: bool,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

fn parse_kind(value: &str) -> Result<FileSearchKind, String> {
	value.parse().map_err(|error: sift_search::Error| error.to_string())
}

fn parse_ui(value: &str) -> Result<SearchUiKind, String> {
	value.parse().map_err(|error: sift_search::Error| error.to_string())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	setup_tracing(args.verbose);

	let mut settings = match &args.config {
		Some(path) => SearchSettings::load(path)?,
		None => match SearchSettings::default_path() {
			Some(path) => SearchSettings::load_or_default(&path)?,
			None => SearchSettings::default(),
		},
	};
	if let Some(limit) = args.limit {
		settings.result_limit = limit;
	}

	let root = args
		.root
		.canonicalize()
		.with_context(|| format!("cannot open {}", args.root.display()))?;
	let options = WalkOptions {
		include_hidden: args.hidden,
		..WalkOptions::default()
	};
	let mut host = WalkHost::new(root, options);
	if let Some(path) = &args.bookmarks {
		host = host
			.with_bookmarks_file(path)
			.with_context(|| format!("cannot read bookmarks {}", path.display()))?;
	}
	let host = Arc::new(host);
	info!(root = %host.root().display(), "starting sift");

	let api = SearchApi::new(Arc::clone(&host), settings);
	if args.commands {
		let open = api.search_commands(CommandSearchOptions::default())?;
		run(open, &host, None).await
	} else {
		let open = api.search_files(FileSearchOptions {
			kind: args.kind,
			ui: args.ui,
			..FileSearchOptions::default()
		})?;
		run(open, &host, Some(api.file_events())).await
	}
}

/// Payload details the terminal needs beyond the record itself.
trait Openable {
	fn path(&self) -> Option<&str>;
}

impl Openable for FileEntry {
	fn path(&self) -> Option<&str> {
		Some(&self.path)
	}
}

impl Openable for CommandEntry {
	fn path(&self) -> Option<&str> {
		None
	}
}

enum Step {
	Line(Option<String>),
	Session(bool),
}

/// Entries currently numbered on screen.
struct Screen<T> {
	query: String,
	rows: Vec<Record<T>>,
}

impl<T: Clone> Screen<T> {
	fn show_placeholders<S: DataSource<Payload = T>>(&mut self, open: &OpenSearch<S>) {
		let placeholders = open.session.placeholders();
		self.rows = placeholders.records().to_vec();
		if !placeholders.has_any_records() {
			println!("(nothing recent)");
			return;
		}
		for group in placeholders.groups() {
			println!("{}", group.title);
			for (offset, record) in placeholders.records_for_group(group).iter().enumerate() {
				println!("{}", repl::render_line(group.start + offset, record, None));
			}
		}
	}

	fn show_hits(&mut self, query: &str, hits: Vec<SearchHit<T>>) {
		if query != self.query {
			tracing::debug!(query, current = %self.query, "cli.results.superseded");
			return;
		}
		if hits.is_empty() {
			println!("(no matches for {query:?})");
		}
		for (index, hit) in hits.iter().enumerate() {
			println!("{}", repl::render_line(index, &hit.record, Some(&hit.highlights)));
		}
		self.rows = hits.into_iter().map(|hit| hit.record).collect();
	}
}

async fn run<S>(mut open: OpenSearch<S>, host: &WalkHost, file_events: Option<&CorpusHub<String>>) -> anyhow::Result<()>
where
	S: DataSource,
	S::Payload: Openable,
{
	let mut lines = BufReader::new(tokio::io::stdin()).lines();
	let mut screen = Screen {
		query: String::new(),
		rows: Vec::new(),
	};
	println!("{}", open.ui.prompt());
	screen.show_placeholders(&open);

	loop {
		let step = tokio::select! {
			line = lines.next_line() => Step::Line(line?),
			alive = open.session.next() => Step::Session(alive),
		};

		match step {
			Step::Line(None) | Step::Session(false) => break,
			Step::Session(true) => {}
			Step::Line(Some(line)) => match repl::parse(&line) {
				Ok(Input::Quit) => break,
				Ok(input) => handle_input(input, &mut open, &mut screen, host, file_events),
				Err(error) => eprintln!("{error:#}"),
			},
		}

		while let Ok(event) = open.events.try_recv() {
			match event {
				SessionEvent::Results { query, hits } => screen.show_hits(&query, hits),
				SessionEvent::ConsistencyChecked { consistent } => {
					println!("index {}", if consistent { "consistent" } else { "DIVERGED" });
				}
			}
		}
	}

	open.session.cancel();
	open.session.destroy();
	Ok(())
}

fn handle_input<S>(
	input: Input,
	open: &mut OpenSearch<S>,
	screen: &mut Screen<S::Payload>,
	host: &WalkHost,
	file_events: Option<&CorpusHub<String>>,
) where
	S: DataSource,
	S::Payload: Openable,
{
	match input {
		Input::Query(query) => {
			screen.query = query.clone();
			if query.is_empty() {
				screen.show_placeholders(open);
			} else {
				open.session.submit_query(query);
			}
		}
		Input::Open(index) => {
			let Some(record) = screen.rows.get(index).cloned() else {
				eprintln!("no result {index}");
				return;
			};
			open.session.select(&record);
			println!("opened {}", record.content);
			if let Some(path) = record.payload.path() {
				print_preview(open.ui.preview(host, Some(path)));
			}
		}
		Input::Add(path) => edit(file_events, host, CorpusEvent::Created(path.clone()), || {
			create_file(&host.resolve(&path))
		}),
		Input::Remove(path) => edit(file_events, host, CorpusEvent::Deleted(path.clone()), || {
			std::fs::remove_file(host.resolve(&path))
		}),
		Input::Move { from, to } => {
			let event = CorpusEvent::Renamed {
				old: from.clone(),
				new: to.clone(),
			};
			edit(file_events, host, event, || {
				let target = host.resolve(&to);
				if let Some(parent) = target.parent() {
					std::fs::create_dir_all(parent)?;
				}
				std::fs::rename(host.resolve(&from), target)
			});
		}
		Input::Check => {
			if !open.session.request_consistency_check() {
				eprintln!("engine not ready");
			}
		}
		Input::Help => print!("{}", repl::help()),
		Input::Quit => {}
	}
}

/// Applies a filesystem edit, then publishes it to open sessions.
fn edit(
	file_events: Option<&CorpusHub<String>>,
	host: &WalkHost,
	event: CorpusEvent<String>,
	apply: impl FnOnce() -> std::io::Result<()>,
) {
	let Some(hub) = file_events else {
		eprintln!("file edits are only available in file search");
		return;
	};
	if let Err(error) = apply() {
		eprintln!("{error} (under {})", host.root().display());
		return;
	}
	let delivered = hub.publish(event);
	tracing::debug!(delivered, "cli.edit.published");
}

fn create_file(path: &Path) -> std::io::Result<()> {
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::OpenOptions::new().write(true).create_new(true).open(path).map(drop)
}

fn print_preview(preview: Preview) {
	match preview {
		Preview::None => {}
		Preview::FileNotFound => println!("(file not found)"),
		Preview::EmptyText => println!("(empty)"),
		Preview::Markdown(text) | Preview::Text(text) => {
			println!("----");
			println!("{text}");
			println!("----");
		}
		Preview::Image(path) => println!("(image {path})"),
		Preview::Unsupported => println!("(no preview)"),
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("SIFT_LOG")
		.or_else(|_| EnvFilter::try_from_default_env())
		.unwrap_or_else(|_| {
			if verbose {
				EnvFilter::new("sift=debug,sift_search=debug,sift_engine=debug,sift_rpc=trace,info")
			} else {
				EnvFilter::new("warn")
			}
		});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(verbose)
		.init();
}
