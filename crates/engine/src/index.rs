//! Positional corpus view.

/// Ordered content list addressed by position.
///
/// The coordinator mirrors every operation here on its own record snapshot
/// in the same order, which is what keeps positions meaningful on both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusIndex {
	contents: Vec<String>,
}

impl CorpusIndex {
	pub fn new(contents: Vec<String>) -> Self {
		Self { contents }
	}

	/// Replaces the whole corpus.
	pub fn replace(&mut self, contents: Vec<String>) {
		self.contents = contents;
	}

	/// Appends one entry at the end.
	pub fn add(&mut self, content: String) {
		self.contents.push(content);
	}

	/// Removes the entry at `position`, shifting later entries down.
	///
	/// Returns the removed content, or `None` when out of range.
	pub fn remove(&mut self, position: usize) -> Option<String> {
		if position >= self.contents.len() {
			tracing::warn!(position, len = self.contents.len(), "engine.index.remove_out_of_range");
			return None;
		}
		Some(self.contents.remove(position))
	}

	/// Replaces the content at `position` in place.
	///
	/// Returns the previous content, or `None` when out of range.
	pub fn rename(&mut self, position: usize, content: String) -> Option<String> {
		let Some(slot) = self.contents.get_mut(position) else {
			tracing::warn!(position, len = self.contents.len(), "engine.index.rename_out_of_range");
			return None;
		};
		Some(std::mem::replace(slot, content))
	}

	pub fn contents(&self) -> &[String] {
		&self.contents
	}

	pub fn len(&self) -> usize {
		self.contents.len()
	}

	pub fn is_empty(&self) -> bool {
		self.contents.is_empty()
	}
}
