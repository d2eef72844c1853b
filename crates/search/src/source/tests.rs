use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::*;
use crate::test_host::{FakeHost, file};
use crate::{CommandEntry, Error, SharedMemo};

fn contents<T>(records: &[Record<T>]) -> Vec<&str> {
	records.iter().map(|record| record.content.as_str()).collect()
}

#[test]
fn file_path_records_match_on_path() {
	let host = Arc::new(FakeHost::with_paths(&["notes/alpha.md", "beta.md"]));
	let source = FileSource::new(host, FileSearchKind::FilePath, SharedMemo::new());

	let corpus = source.enumerate();
	assert_eq!(contents(&corpus), vec!["notes/alpha.md", "beta.md"]);
	assert_eq!(corpus[0].sub_text, None);
	assert_eq!(source.id(&corpus[0]), "notes/alpha.md");
}

#[test]
fn alias_records_cover_basename_and_aliases() {
	let host = Arc::new(FakeHost::with_files(vec![file("notes/alpha.md", &["first", "a"]), file("beta.md", &[])]));
	let source = FileSource::new(host, FileSearchKind::Alias, SharedMemo::new());

	let corpus = source.enumerate();
	assert_eq!(contents(&corpus), vec!["alpha", "first", "a", "beta"]);
	assert_eq!(corpus[1].sub_text.as_deref(), Some("notes/alpha.md"));
	assert_eq!(source.id(&corpus[2]), "notes/alpha.md");
	assert_eq!(contents(&source.records_for(&"notes/alpha.md".to_string())), vec!["alpha", "first", "a"]);
	assert!(source.records_for(&"missing.md".to_string()).is_empty());
}

#[test]
fn file_placeholders_list_recents_then_bookmarks() {
	let host = Arc::new(FakeHost::with_paths(&["a.md", "b.md", "c.md"]).with_bookmarks(&["c.md", "gone.md"]));
	let memo = SharedMemo::new();
	memo.add("a.md".to_string());
	memo.add("b.md".to_string());
	let source = FileSource::new(host, FileSearchKind::FilePath, memo);

	let corpus = source.enumerate();
	let set = source.placeholders(&corpus, PlaceholderOptions::default());
	let titles: Vec<_> = set.groups().iter().map(|g| g.title.as_str()).collect();
	assert_eq!(titles, vec!["Recently opened", "Bookmarks"]);
	assert_eq!(contents(set.records()), vec!["b.md", "a.md", "c.md"]);
}

#[test]
fn bookmarks_category_is_omitted_without_a_provider() {
	let host = Arc::new(FakeHost::with_paths(&["a.md"]));
	let source = FileSource::new(host, FileSearchKind::FilePath, SharedMemo::new());

	let set = source.placeholders(&source.enumerate(), PlaceholderOptions::default());
	let titles: Vec<_> = set.groups().iter().map(|g| g.title.as_str()).collect();
	assert_eq!(titles, vec!["Recently opened"]);
	assert!(!set.has_any_records());
}

#[test]
fn disabled_placeholders_compose_nothing() {
	let host = Arc::new(FakeHost::with_paths(&["a.md"]).with_bookmarks(&["a.md"]));
	let source = FileSource::new(host, FileSearchKind::FilePath, SharedMemo::new());

	let set = source.placeholders(&source.enumerate(), PlaceholderOptions::NONE);
	assert!(set.groups().is_empty());
}

#[test]
fn command_records_carry_id_and_hotkeys() {
	let host = Arc::new(FakeHost::default().with_commands(vec![
		CommandEntry::new("editor:save", "Save file").with_hotkeys(vec!["Ctrl+S".into()]),
		CommandEntry::new("app:quit", "Quit"),
	]));
	let memo = SharedMemo::new();
	memo.add("app:quit".to_string());
	let source = CommandSource::new(host, memo);

	let corpus = source.enumerate();
	assert_eq!(contents(&corpus), vec!["Save file", "Quit"]);
	assert_eq!(corpus[0].sub_text.as_deref(), Some("editor:save"));
	assert_eq!(corpus[0].auxiliary, vec!["Ctrl+S".to_string()]);

	let set = source.placeholders(&corpus, PlaceholderOptions::default());
	assert_eq!(set.groups()[0].title, "Recently used");
	assert_eq!(contents(set.records()), vec!["Quit"]);
}

#[test]
fn search_kind_parses_known_names_only() {
	assert_eq!("filePath".parse::<FileSearchKind>().unwrap(), FileSearchKind::FilePath);
	assert_eq!("alias".parse::<FileSearchKind>().unwrap(), FileSearchKind::Alias);
	assert!(matches!("fuzzy".parse::<FileSearchKind>(), Err(Error::InvalidSearchKind(name)) if name == "fuzzy"));
}
