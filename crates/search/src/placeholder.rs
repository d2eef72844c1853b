//! Flattening of named record groups shown for an empty query.

use std::ops::Range;

use crate::Record;

/// A named group of records computed by a data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderCategory<T> {
	pub title: String,
	pub records: Vec<Record<T>>,
}

impl<T> PlaceholderCategory<T> {
	pub fn new(title: impl Into<String>, records: Vec<Record<T>>) -> Self {
		Self {
			title: title.into(),
			records,
		}
	}
}

/// Location of one category within the flattened sequence. `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderGroup {
	pub title: String,
	pub start: usize,
	pub end: usize,
}

impl PlaceholderGroup {
	pub fn range(&self) -> Range<usize> {
		self.start..self.end
	}

	pub fn len(&self) -> usize {
		self.end - self.start
	}

	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}
}

/// Categories concatenated in declaration order into one addressable sequence.
///
/// Ranges are contiguous and gapless: each group starts where the previous one
/// ended. Empty categories keep a zero-width range. The set is immutable once
/// composed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSet<T> {
	records: Vec<Record<T>>,
	groups: Vec<PlaceholderGroup>,
}

impl<T> Default for PlaceholderSet<T> {
	fn default() -> Self {
		Self {
			records: Vec::new(),
			groups: Vec::new(),
		}
	}
}

impl<T> PlaceholderSet<T> {
	/// Builds the flat sequence. Absent categories (`None`) are skipped entirely.
	pub fn compose(categories: impl IntoIterator<Item = Option<PlaceholderCategory<T>>>) -> Self {
		let mut set = Self::default();
		for category in categories.into_iter().flatten() {
			let start = set.records.len();
			set.records.extend(category.records);
			set.groups.push(PlaceholderGroup {
				title: category.title,
				start,
				end: set.records.len(),
			});
		}
		set
	}

	pub fn get(&self, index: usize) -> Option<&Record<T>> {
		self.records.get(index)
	}

	pub fn records_for_group(&self, group: &PlaceholderGroup) -> &[Record<T>] {
		self.records.get(group.range()).unwrap_or_default()
	}

	pub fn has_any_records(&self) -> bool {
		!self.records.is_empty()
	}

	pub fn total_count(&self) -> usize {
		self.records.len()
	}

	pub fn groups(&self) -> &[PlaceholderGroup] {
		&self.groups
	}

	pub fn records(&self) -> &[Record<T>] {
		&self.records
	}

	/// Group owning the flat `index`, with the offset inside that group.
	pub fn locate(&self, index: usize) -> Option<(&PlaceholderGroup, usize)> {
		if index >= self.records.len() {
			return None;
		}
		let at = self.groups.partition_point(|group| group.end <= index);
		self.groups.get(at).map(|group| (group, index - group.start))
	}
}

#[cfg(test)]
mod tests;
