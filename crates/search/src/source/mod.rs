//! Data sources turn host entries into searchable records.
//!
//! A source decides record identity (`id`), enumerates the corpus at session
//! start, resolves ids back to records when the host reports a mutation, and
//! builds the placeholder categories for an empty query.

mod command;
mod file;

use std::fmt;

pub use command::CommandSource;
pub use file::{FileSearchKind, FileSource};

use crate::{PlaceholderSet, Record, SharedMemo};

/// Which placeholder categories a session asks its source for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderOptions {
	pub recent: bool,
	pub bookmarks: bool,
}

impl Default for PlaceholderOptions {
	fn default() -> Self {
		Self {
			recent: true,
			bookmarks: true,
		}
	}
}

impl PlaceholderOptions {
	pub const NONE: Self = Self {
		recent: false,
		bookmarks: false,
	};
}

/// Provider of one kind of searchable record.
pub trait DataSource: Send + 'static {
	/// Opaque data handed back with each record.
	type Payload: Clone + Send + Sync + 'static;
	/// Identity used by the recency memo and by corpus events.
	type Id: Clone + PartialEq + fmt::Debug + Send + 'static;

	fn id(&self, record: &Record<Self::Payload>) -> Self::Id;

	/// Full corpus, in the order positions will address it.
	fn enumerate(&self) -> Vec<Record<Self::Payload>>;

	/// Records the source yields for one id, possibly several or none.
	fn records_for(&self, id: &Self::Id) -> Vec<Record<Self::Payload>>;

	/// Categories shown for an empty query, drawn from `corpus`.
	fn placeholders(&self, corpus: &[Record<Self::Payload>], options: PlaceholderOptions) -> PlaceholderSet<Self::Payload>;

	/// Memo the recent placeholders are read from; selections are recorded here too.
	fn memo(&self) -> Option<&SharedMemo<Self::Id>> {
		None
	}
}

#[cfg(test)]
mod tests;
