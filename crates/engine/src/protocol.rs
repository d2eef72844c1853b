//! Wire vocabulary shared by the coordinator and the engine host.

use serde::{Deserialize, Serialize};

/// Methods handled by the engine.
pub mod engine {
	/// `[contents: string[]]`: replace the whole corpus.
	pub const UPDATE_INDEX: &str = "updateIndex";
	/// `[content: string]`: append one record.
	pub const ADD_RECORD: &str = "addRecord";
	/// `[position: usize]`: remove the record at a position.
	pub const REMOVE_RECORD: &str = "removeRecord";
	/// `[position: usize, content: string]`: replace the content at a position.
	pub const RENAME_RECORD: &str = "renameRecord";
	/// `[query: string, seq: u64]`: run one search.
	pub const SEARCH: &str = "search";
	/// `[expected: string[]]`: compare the engine corpus with the coordinator's.
	pub const VERIFY_CONSISTENCY: &str = "verifyConsistency";
}

/// Methods handled by the coordinator.
pub mod session {
	/// `[]`: the engine finished initializing.
	pub const READY: &str = "ready";
	/// `[results: MatchResult[], seq: u64]`: reply to `search`.
	pub const SEARCH_FINISHED: &str = "onSearchFinished";
	/// `[consistent: bool]`: reply to `verifyConsistency`.
	pub const CONSISTENCY_CHECKED: &str = "onConsistencyChecked";
}

/// One run of matched or unmatched text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightSpan {
	pub text: String,
	pub is_match: bool,
}

impl HighlightSpan {
	pub fn new(text: impl Into<String>, is_match: bool) -> Self {
		Self {
			text: text.into(),
			is_match,
		}
	}
}

/// One ranked hit, addressed by position in the engine's corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
	pub position: usize,
	pub highlight_spans: Vec<HighlightSpan>,
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use serde_json::json;

	use super::*;

	#[test]
	fn match_result_uses_camel_case_on_the_wire() {
		let result = MatchResult {
			position: 0,
			highlight_spans: vec![HighlightSpan::new("al", true), HighlightSpan::new("pha.md", false)],
		};
		assert_eq!(
			serde_json::to_value(&result).unwrap(),
			json!({
				"position": 0,
				"highlightSpans": [
					{ "text": "al", "isMatch": true },
					{ "text": "pha.md", "isMatch": false },
				],
			})
		);
	}
}
