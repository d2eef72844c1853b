use pretty_assertions::assert_eq;

use super::*;

fn category(title: &str, contents: &[&str]) -> Option<PlaceholderCategory<()>> {
	Some(PlaceholderCategory::new(
		title,
		contents.iter().map(|content| Record::new(*content, ())).collect(),
	))
}

fn contents(records: &[Record<()>]) -> Vec<&str> {
	records.iter().map(|record| record.content.as_str()).collect()
}

#[test]
fn groups_flatten_with_contiguous_ranges() {
	let set = PlaceholderSet::compose([category("G1", &["a", "b"]), category("G2", &[]), category("G3", &["c"])]);

	assert_eq!(contents(set.records()), vec!["a", "b", "c"]);
	let ranges: Vec<_> = set.groups().iter().map(|g| (g.title.as_str(), g.start, g.end)).collect();
	assert_eq!(ranges, vec![("G1", 0, 2), ("G2", 2, 2), ("G3", 2, 3)]);
	assert_eq!(set.get(2).map(|r| r.content.as_str()), Some("c"));
	assert_eq!(set.total_count(), 3);
	assert!(set.has_any_records());
}

#[test]
fn absent_categories_are_omitted_not_empty() {
	let set = PlaceholderSet::compose([category("Recently opened", &["a"]), None]);
	assert_eq!(set.groups().len(), 1);
	assert_eq!(set.groups()[0].title, "Recently opened");
}

#[test]
fn records_for_group_slices_by_offsets() {
	let set = PlaceholderSet::compose([category("G1", &["a", "b"]), category("G2", &["c", "d"])]);
	let second = set.groups()[1].clone();
	assert_eq!(contents(set.records_for_group(&second)), vec!["c", "d"]);
	assert_eq!(second.len(), 2);
}

#[test]
fn locate_maps_flat_index_to_group() {
	let set = PlaceholderSet::compose([category("G1", &["a", "b"]), category("G2", &[]), category("G3", &["c"])]);

	let (group, offset) = set.locate(1).unwrap();
	assert_eq!((group.title.as_str(), offset), ("G1", 1));
	let (group, offset) = set.locate(2).unwrap();
	assert_eq!((group.title.as_str(), offset), ("G3", 0));
	assert!(set.locate(3).is_none());
}

#[test]
fn empty_composition_has_no_records() {
	let set = PlaceholderSet::<()>::compose([None, category("Empty", &[])]);
	assert!(!set.has_any_records());
	assert_eq!(set.total_count(), 0);
	assert!(set.get(0).is_none());
	assert!(set.locate(0).is_none());
}
