use std::str::FromStr;
use std::sync::Arc;

use super::{DataSource, PlaceholderOptions};
use crate::{Error, FileEntry, Host, PlaceholderCategory, PlaceholderSet, Record, SharedMemo};

pub(crate) const RECENTLY_OPENED: &str = "Recently opened";
pub(crate) const BOOKMARKS: &str = "Bookmarks";

/// What file records are matched on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FileSearchKind {
	/// One record per file, matched on its path.
	#[default]
	FilePath,
	/// One record per name: the basename plus every declared alias.
	Alias,
}

impl FromStr for FileSearchKind {
	type Err = Error;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value {
			"filePath" | "file-path" | "path" => Ok(Self::FilePath),
			"alias" => Ok(Self::Alias),
			other => Err(Error::InvalidSearchKind(other.to_string())),
		}
	}
}

/// Files from the host, identified by path.
pub struct FileSource<H> {
	host: Arc<H>,
	kind: FileSearchKind,
	memo: SharedMemo<String>,
}

impl<H: Host> FileSource<H> {
	pub fn new(host: Arc<H>, kind: FileSearchKind, memo: SharedMemo<String>) -> Self {
		Self { host, kind, memo }
	}

	pub fn kind(&self) -> FileSearchKind {
		self.kind
	}

	fn records_of(&self, entry: &FileEntry) -> Vec<Record<FileEntry>> {
		match self.kind {
			FileSearchKind::FilePath => vec![Record::new(entry.path.clone(), entry.clone())],
			FileSearchKind::Alias => std::iter::once(&entry.basename)
				.chain(&entry.aliases)
				.map(|name| Record::new(name.clone(), entry.clone()).with_sub_text(entry.path.clone()))
				.collect(),
		}
	}

	fn bookmarks(&self, corpus: &[Record<FileEntry>]) -> Option<PlaceholderCategory<FileEntry>> {
		let paths = self.host.bookmarked_paths()?;
		let records: Vec<_> = paths
			.iter()
			.filter_map(|path| corpus.iter().find(|record| record.payload.path == *path))
			.cloned()
			.collect();
		Some(PlaceholderCategory::new(BOOKMARKS, records))
	}
}

impl<H: Host> DataSource for FileSource<H> {
	type Payload = FileEntry;
	type Id = String;

	fn id(&self, record: &Record<FileEntry>) -> String {
		record.payload.path.clone()
	}

	fn enumerate(&self) -> Vec<Record<FileEntry>> {
		self.host.files().iter().flat_map(|entry| self.records_of(entry)).collect()
	}

	fn records_for(&self, id: &String) -> Vec<Record<FileEntry>> {
		self.host.file(id).map(|entry| self.records_of(&entry)).unwrap_or_default()
	}

	fn placeholders(&self, corpus: &[Record<FileEntry>], options: PlaceholderOptions) -> PlaceholderSet<FileEntry> {
		let recent = options.recent.then(|| {
			let records: Vec<_> = self
				.memo
				.with(|memo| memo.get_matching(corpus, |path, record| *path == record.payload.path).into_iter().cloned().collect());
			PlaceholderCategory::new(RECENTLY_OPENED, records)
		});
		let bookmarks = if options.bookmarks { self.bookmarks(corpus) } else { None };
		PlaceholderSet::compose([recent, bookmarks])
	}

	fn memo(&self) -> Option<&SharedMemo<String>> {
		Some(&self.memo)
	}
}
