//! Line input parsing and result rendering.

use anyhow::{Context, bail};
use sift_search::{HighlightSpan, Record};

/// REPL commands as `(id, name, usage)`, also offered as searchable host commands.
pub const COMMANDS: &[(&str, &str, &str)] = &[
	("sift:open", "Open result", ":open N"),
	("sift:add", "Create file", ":add PATH"),
	("sift:remove", "Delete file", ":rm PATH"),
	("sift:move", "Rename file", ":mv OLD NEW"),
	("sift:check", "Check index consistency", ":check"),
	("sift:help", "Show help", ":help"),
	("sift:quit", "Quit", ":quit"),
];

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
	/// New query text; empty shows the placeholders.
	Query(String),
	Open(usize),
	Add(String),
	Remove(String),
	Move { from: String, to: String },
	Check,
	Help,
	Quit,
}

/// Parses one line. Lines starting with `:` are commands; `::` escapes a literal colon.
pub fn parse(line: &str) -> anyhow::Result<Input> {
	let line = line.trim_end_matches(['\r', '\n']);
	if let Some(rest) = line.strip_prefix("::") {
		return Ok(Input::Query(format!(":{rest}")));
	}
	let Some(command) = line.strip_prefix(':') else {
		return Ok(Input::Query(line.to_string()));
	};

	let mut words = command.split_whitespace();
	let name = words.next().unwrap_or_default();
	let args: Vec<&str> = words.collect();
	let input = match (name, args.as_slice()) {
		("open" | "o", [n]) => Input::Open(n.parse().with_context(|| format!("not a result number: {n}"))?),
		("add", [path]) => Input::Add(path.to_string()),
		("rm", [path]) => Input::Remove(path.to_string()),
		("mv", [from, to]) => Input::Move {
			from: from.to_string(),
			to: to.to_string(),
		},
		("check", []) => Input::Check,
		("help" | "h", []) => Input::Help,
		("quit" | "q", []) => Input::Quit,
		_ => bail!("unknown command :{command} (try :help)"),
	};
	Ok(input)
}

/// Wraps matched runs in brackets.
pub fn render_spans(spans: &[HighlightSpan]) -> String {
	spans
		.iter()
		.map(|span| {
			if span.is_match {
				format!("[{}]", span.text)
			} else {
				span.text.clone()
			}
		})
		.collect()
}

/// One numbered result line.
pub fn render_line<T>(index: usize, record: &Record<T>, spans: Option<&[HighlightSpan]>) -> String {
	let mut line = format!("{index:>3}  ");
	match spans {
		Some(spans) => line.push_str(&render_spans(spans)),
		None => line.push_str(&record.content),
	}
	if let Some(sub_text) = &record.sub_text {
		line.push_str("  ");
		line.push_str(sub_text);
	}
	if !record.auxiliary.is_empty() {
		line.push_str("  (");
		line.push_str(&record.auxiliary.join(", "));
		line.push(')');
	}
	line
}

pub fn help() -> String {
	let mut text = String::from("type to search; an empty line shows recent and bookmarked entries\n");
	for (_, name, usage) in COMMANDS {
		text.push_str(&format!("  {usage:<14} {name}\n"));
	}
	text
}
