//! Bounded most-recently-used identifier list.

use std::sync::Arc;

use parking_lot::Mutex;

/// Maximum number of identifiers a memo retains.
pub const MAX_MEMO_SIZE: usize = 10;

/// Most-recent-first list of unique identifiers, capped at [`MAX_MEMO_SIZE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecencyMemo<Id> {
	entries: Vec<Id>,
}

impl<Id> Default for RecencyMemo<Id> {
	fn default() -> Self {
		Self {
			entries: Vec::with_capacity(MAX_MEMO_SIZE + 1),
		}
	}
}

impl<Id: PartialEq> RecencyMemo<Id> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Moves `id` to the front, dropping the oldest entry past the cap.
	pub fn add(&mut self, id: Id) {
		self.entries.retain(|entry| *entry != id);
		self.entries.insert(0, id);
		self.entries.truncate(MAX_MEMO_SIZE);
	}

	/// Entries, most recent first.
	pub fn get(&self) -> &[Id] {
		&self.entries
	}

	/// Recency rank of `id`, 0 being the most recent.
	pub fn rank(&self, id: &Id) -> Option<usize> {
		self.entries.iter().position(|entry| entry == id)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn clear(&mut self) {
		self.entries.clear();
	}

	/// Candidates that were recently used, in recency order.
	///
	/// For each entry, most recent first, the first candidate accepted by
	/// `matches` is included. A candidate is emitted at most once: if an older
	/// entry's first match was already emitted for a newer entry, the older
	/// entry contributes nothing.
	pub fn get_matching<'a, C>(&self, candidates: &'a [C], mut matches: impl FnMut(&Id, &C) -> bool) -> Vec<&'a C> {
		let mut emitted: Vec<usize> = Vec::with_capacity(self.entries.len());
		let mut out = Vec::with_capacity(self.entries.len());

		for entry in &self.entries {
			let Some(position) = candidates.iter().position(|candidate| matches(entry, candidate)) else {
				continue;
			};
			if emitted.contains(&position) {
				continue;
			}
			emitted.push(position);
			out.push(&candidates[position]);
		}

		out
	}
}

/// Process-wide memo handle shared by sessions of one kind.
///
/// Cloning shares the underlying memo. Construct one per memo kind at startup
/// and pass it to whatever records selections.
#[derive(Debug)]
pub struct SharedMemo<Id> {
	inner: Arc<Mutex<RecencyMemo<Id>>>,
}

impl<Id> Clone for SharedMemo<Id> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<Id> Default for SharedMemo<Id> {
	fn default() -> Self {
		Self {
			inner: Arc::new(Mutex::new(RecencyMemo::default())),
		}
	}
}

impl<Id: PartialEq + Clone> SharedMemo<Id> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add(&self, id: Id) {
		self.inner.lock().add(id);
	}

	/// Copy of the current entries, most recent first.
	pub fn snapshot(&self) -> Vec<Id> {
		self.inner.lock().get().to_vec()
	}

	/// Runs `f` with the memo locked.
	pub fn with<R>(&self, f: impl FnOnce(&RecencyMemo<Id>) -> R) -> R {
		f(&self.inner.lock())
	}

	pub fn clear(&self) {
		self.inner.lock().clear();
	}
}

#[cfg(test)]
mod tests;
