use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{MAX_MEMO_SIZE, RecencyMemo, SharedMemo};

#[test]
fn add_prepends_and_moves_existing_to_front() {
	let mut memo = RecencyMemo::new();
	memo.add("a");
	memo.add("b");
	memo.add("c");
	assert_eq!(memo.get(), ["c", "b", "a"]);

	memo.add("a");
	assert_eq!(memo.get(), ["a", "c", "b"]);
	assert_eq!(memo.len(), 3);
}

#[test]
fn oldest_entry_is_dropped_past_the_cap() {
	let mut memo = RecencyMemo::new();
	for i in 0..=MAX_MEMO_SIZE {
		memo.add(i);
	}
	assert_eq!(memo.len(), MAX_MEMO_SIZE);
	assert_eq!(memo.get().first(), Some(&MAX_MEMO_SIZE));
	assert_eq!(memo.rank(&0), None);
	assert_eq!(memo.rank(&1), Some(MAX_MEMO_SIZE - 1));
}

#[test]
fn get_matching_follows_recency_order() {
	let mut memo = RecencyMemo::new();
	memo.add("b.md".to_string());
	memo.add("a.md".to_string());
	memo.add("gone.md".to_string());

	let candidates = vec!["a.md", "b.md", "c.md"];
	let matching = memo.get_matching(&candidates, |id, candidate| id == candidate);
	assert_eq!(matching, vec![&"a.md", &"b.md"]);
}

#[test]
fn get_matching_emits_each_candidate_once() {
	let mut memo = RecencyMemo::new();
	memo.add("notes/a");
	memo.add("notes/b");

	let candidates = vec!["notes", "other"];
	let matching = memo.get_matching(&candidates, |id, candidate| id.starts_with(candidate));
	assert_eq!(matching, vec![&"notes"]);
}

#[test]
fn shared_memo_clones_see_the_same_entries() {
	let memo = SharedMemo::new();
	let other = memo.clone();
	memo.add(1);
	other.add(2);
	assert_eq!(memo.snapshot(), vec![2, 1]);
	assert_eq!(other.with(|m| m.rank(&1)), Some(1));

	other.clear();
	assert!(memo.snapshot().is_empty());
}

proptest! {
	#[test]
	fn memo_keeps_last_distinct_ids_most_recent_first(ids in proptest::collection::vec(0u8..32, 0..64)) {
		let mut memo = RecencyMemo::new();
		for id in &ids {
			memo.add(*id);
		}

		let mut expected: Vec<u8> = Vec::new();
		for id in ids.iter().rev() {
			if !expected.contains(id) {
				expected.push(*id);
			}
		}
		expected.truncate(MAX_MEMO_SIZE);

		prop_assert_eq!(memo.get(), expected.as_slice());
	}

	#[test]
	fn memo_never_holds_duplicates(ids in proptest::collection::vec(0u8..8, 0..40)) {
		let mut memo = RecencyMemo::new();
		for id in ids {
			memo.add(id);
			prop_assert!(memo.len() <= MAX_MEMO_SIZE);
			let mut seen = memo.get().to_vec();
			seen.sort_unstable();
			seen.dedup();
			prop_assert_eq!(seen.len(), memo.len());
		}
	}
}
