use crate::MatchResult;

/// Contract implemented by fuzzy matching engines.
///
/// Engines run on their own thread behind [`crate::spawn_engine`] and are only
/// ever driven one call at a time, in the order the coordinator sent them.
pub trait MatchEngine: Send + 'static {
	/// Replaces the corpus. Position `i` is `contents[i]`.
	fn update_index(&mut self, contents: Vec<String>);

	/// Appends one record.
	fn add_record(&mut self, content: String);

	/// Removes the record at `position`.
	fn remove_record(&mut self, position: usize);

	/// Replaces the content of the record at `position`.
	fn rename_record(&mut self, position: usize, content: String);

	/// Ranks the corpus against `query`, best match first.
	fn search(&mut self, query: &str) -> Vec<MatchResult>;

	/// Current corpus in position order.
	fn contents(&self) -> &[String];

	/// Compares the engine corpus with the coordinator's view.
	fn verify_consistency(&self, expected: &[String]) -> bool {
		self.contents() == expected
	}
}

impl MatchEngine for Box<dyn MatchEngine> {
	fn update_index(&mut self, contents: Vec<String>) {
		(**self).update_index(contents);
	}

	fn add_record(&mut self, content: String) {
		(**self).add_record(content);
	}

	fn remove_record(&mut self, position: usize) {
		(**self).remove_record(position);
	}

	fn rename_record(&mut self, position: usize, content: String) {
		(**self).rename_record(position, content);
	}

	fn search(&mut self, query: &str) -> Vec<MatchResult> {
		(**self).search(query)
	}

	fn contents(&self) -> &[String] {
		(**self).contents()
	}

	fn verify_consistency(&self, expected: &[String]) -> bool {
		(**self).verify_consistency(expected)
	}
}
