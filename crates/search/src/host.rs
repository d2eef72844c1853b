//! What the embedding application provides to search sessions.

/// One file known to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
	/// Host-relative path; the file's identity.
	pub path: String,
	/// File name without extension.
	pub basename: String,
	/// Alternative names declared by the file.
	pub aliases: Vec<String>,
}

impl FileEntry {
	pub fn new(path: impl Into<String>, basename: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			basename: basename.into(),
			aliases: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
		self.aliases = aliases;
		self
	}
}

/// One executable command known to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
	pub id: String,
	pub name: String,
	/// Display strings for the bound hotkeys.
	pub hotkeys: Vec<String>,
}

impl CommandEntry {
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			hotkeys: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_hotkeys(mut self, hotkeys: Vec<String>) -> Self {
		self.hotkeys = hotkeys;
		self
	}
}

/// Corpus enumeration provided by the embedding application.
///
/// Called from whatever thread opens a session, so implementations must be
/// shareable. Mutation events are not pulled from here; the host publishes them
/// through [`crate::CorpusHub`].
pub trait Host: Send + Sync + 'static {
	/// Every searchable file, in a stable order.
	fn files(&self) -> Vec<FileEntry>;

	/// Looks up one file by path.
	fn file(&self, path: &str) -> Option<FileEntry>;

	/// Every executable command.
	fn commands(&self) -> Vec<CommandEntry>;

	/// Bookmarked file paths in display order.
	///
	/// `None` means the host has no bookmark provider at all, which omits the
	/// bookmarks category rather than showing it empty.
	fn bookmarked_paths(&self) -> Option<Vec<String>> {
		None
	}

	/// Text of a file for preview panes.
	fn read_to_string(&self, _path: &str) -> Option<String> {
		None
	}
}
