use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::*;
use crate::test_host::{FakeHost, file};
use crate::{FileEntry, FileSearchKind, FileSource, SharedMemo};

fn path_source(host: &Arc<FakeHost>) -> FileSource<FakeHost> {
	FileSource::new(Arc::clone(host), FileSearchKind::FilePath, SharedMemo::new())
}

fn alias_source(host: &Arc<FakeHost>) -> FileSource<FakeHost> {
	FileSource::new(Arc::clone(host), FileSearchKind::Alias, SharedMemo::new())
}

fn apply_all(corpus: &mut Vec<Record<FileEntry>>, ops: Vec<IndexOp<FileEntry>>) {
	for op in ops {
		assert!(op.apply(corpus));
	}
}

fn contents(corpus: &[Record<FileEntry>]) -> Vec<&str> {
	corpus.iter().map(|record| record.content.as_str()).collect()
}

#[test]
fn create_appends_and_is_idempotent() {
	let host = Arc::new(FakeHost::with_paths(&["a.md"]));
	let source = path_source(&host);
	let mut corpus = source.enumerate();

	host.insert(file("b.md", &[]));
	let ops = plan_corpus_event(&source, &corpus, &CorpusEvent::Created("b.md".to_string()));
	assert_eq!(ops.len(), 1);
	apply_all(&mut corpus, ops);
	assert_eq!(contents(&corpus), vec!["a.md", "b.md"]);

	let again = plan_corpus_event(&source, &corpus, &CorpusEvent::Created("b.md".to_string()));
	assert!(again.is_empty());
}

#[test]
fn delete_removes_every_alias_highest_first() {
	let host = Arc::new(FakeHost::with_files(vec![file("a.md", &["x", "y"]), file("b.md", &[])]));
	let source = alias_source(&host);
	let mut corpus = source.enumerate();

	let ops = plan_corpus_event(&source, &corpus, &CorpusEvent::Deleted("a.md".to_string()));
	assert_eq!(ops, vec![IndexOp::Remove(2), IndexOp::Remove(1), IndexOp::Remove(0)]);
	apply_all(&mut corpus, ops);
	assert_eq!(contents(&corpus), vec!["b"]);
}

#[test]
fn rename_with_matching_shape_rewrites_in_place() {
	let host = Arc::new(FakeHost::with_paths(&["a.md", "b.md"]));
	let source = path_source(&host);
	let mut corpus = source.enumerate();

	host.rename("a.md", "z.md");
	let ops = plan_corpus_event(
		&source,
		&corpus,
		&CorpusEvent::Renamed {
			old: "a.md".to_string(),
			new: "z.md".to_string(),
		},
	);
	assert!(matches!(ops.as_slice(), [IndexOp::Rename(0, record)] if record.content == "z.md"));
	apply_all(&mut corpus, ops);
	assert_eq!(contents(&corpus), vec!["z.md", "b.md"]);
}

#[test]
fn rename_with_different_shape_removes_then_appends() {
	let host = Arc::new(FakeHost::with_files(vec![file("a.md", &["x"]), file("b.md", &[])]));
	let source = alias_source(&host);
	let mut corpus = source.enumerate();

	host.remove("a.md");
	host.insert(file("c.md", &[]));
	let ops = plan_corpus_event(
		&source,
		&corpus,
		&CorpusEvent::Renamed {
			old: "a.md".to_string(),
			new: "c.md".to_string(),
		},
	);
	apply_all(&mut corpus, ops);
	assert_eq!(contents(&corpus), vec!["b", "c"]);
}

#[test]
fn out_of_range_ops_are_ignored() {
	let mut corpus: Vec<Record<FileEntry>> = Vec::new();
	assert!(!IndexOp::<FileEntry>::Remove(0).apply(&mut corpus));
	assert!(!IndexOp::Rename(3, Record::new("x", file("x.md", &[]))).apply(&mut corpus));
}

#[test]
fn hub_prunes_closed_subscribers() {
	let hub = CorpusHub::new();
	let mut first = hub.subscribe();
	let second = hub.subscribe();
	assert_eq!(hub.subscriber_count(), 2);

	drop(second);
	assert_eq!(hub.publish(CorpusEvent::Deleted("a.md".to_string())), 1);
	assert_eq!(first.try_recv().ok(), Some(CorpusEvent::Deleted("a.md".to_string())));
	assert_eq!(hub.subscriber_count(), 1);
}
