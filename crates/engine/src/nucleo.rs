//! Reference engine built on `nucleo-matcher`.

use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::{CorpusIndex, MatchEngine, MatchResult, spans_from_indices};

/// Maximum number of hits returned per search unless configured otherwise.
pub const DEFAULT_RESULT_LIMIT: usize = 100;

/// Case-insensitive fuzzy engine tuned for path-like content.
pub struct NucleoEngine {
	index: CorpusIndex,
	matcher: Matcher,
	limit: usize,
}

impl Default for NucleoEngine {
	fn default() -> Self {
		Self::new(DEFAULT_RESULT_LIMIT)
	}
}

impl NucleoEngine {
	pub fn new(limit: usize) -> Self {
		Self {
			index: CorpusIndex::default(),
			matcher: Matcher::new(Config::DEFAULT.match_paths()),
			limit: limit.max(1),
		}
	}

	pub fn with_contents(limit: usize, contents: Vec<String>) -> Self {
		let mut engine = Self::new(limit);
		engine.index.replace(contents);
		engine
	}
}

impl MatchEngine for NucleoEngine {
	fn update_index(&mut self, contents: Vec<String>) {
		tracing::debug!(len = contents.len(), "engine.update_index");
		self.index.replace(contents);
	}

	fn add_record(&mut self, content: String) {
		self.index.add(content);
	}

	fn remove_record(&mut self, position: usize) {
		self.index.remove(position);
	}

	fn rename_record(&mut self, position: usize, content: String) {
		self.index.rename(position, content);
	}

	fn search(&mut self, query: &str) -> Vec<MatchResult> {
		let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
		let mut buf = Vec::new();

		let mut ranked: Vec<(usize, u32)> = self
			.index
			.contents()
			.iter()
			.enumerate()
			.filter_map(|(position, content)| {
				let haystack = Utf32Str::new(content, &mut buf);
				pattern.score(haystack, &mut self.matcher).map(|score| (position, score))
			})
			.collect();
		ranked.sort_by(|(pos_a, score_a), (pos_b, score_b)| score_b.cmp(score_a).then_with(|| pos_a.cmp(pos_b)));
		ranked.truncate(self.limit);

		let mut indices = Vec::new();
		ranked
			.into_iter()
			.map(|(position, _)| {
				let content = &self.index.contents()[position];
				indices.clear();
				let haystack = Utf32Str::new(content, &mut buf);
				let _ = pattern.indices(haystack, &mut self.matcher, &mut indices);
				indices.sort_unstable();
				indices.dedup();
				MatchResult {
					position,
					highlight_spans: spans_from_indices(content, &indices),
				}
			})
			.collect()
	}

	fn contents(&self) -> &[String] {
		self.index.contents()
	}
}
