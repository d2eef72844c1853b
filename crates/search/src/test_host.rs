//! In-memory host for unit tests.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::{CommandEntry, FileEntry, Host};

#[derive(Default)]
pub(crate) struct FakeHost {
	files: Mutex<Vec<FileEntry>>,
	commands: Vec<CommandEntry>,
	bookmarks: Option<Vec<String>>,
	texts: HashMap<String, String>,
}

impl FakeHost {
	pub(crate) fn with_paths(paths: &[&str]) -> Self {
		let files = paths.iter().map(|path| file(path, &[])).collect();
		Self {
			files: Mutex::new(files),
			..Self::default()
		}
	}

	pub(crate) fn with_files(files: Vec<FileEntry>) -> Self {
		Self {
			files: Mutex::new(files),
			..Self::default()
		}
	}

	pub(crate) fn with_commands(mut self, commands: Vec<CommandEntry>) -> Self {
		self.commands = commands;
		self
	}

	pub(crate) fn with_bookmarks(mut self, paths: &[&str]) -> Self {
		self.bookmarks = Some(paths.iter().map(|p| p.to_string()).collect());
		self
	}

	pub(crate) fn with_text(mut self, path: &str, text: &str) -> Self {
		self.texts.insert(path.to_string(), text.to_string());
		self
	}

	pub(crate) fn insert(&self, entry: FileEntry) {
		self.files.lock().push(entry);
	}

	pub(crate) fn remove(&self, path: &str) {
		self.files.lock().retain(|entry| entry.path != path);
	}

	pub(crate) fn rename(&self, old: &str, new: &str) {
		for entry in self.files.lock().iter_mut().filter(|entry| entry.path == old) {
			entry.path = new.to_string();
			entry.basename = basename(new);
		}
	}
}

pub(crate) fn basename(path: &str) -> String {
	let name = path.rsplit('/').next().unwrap_or(path);
	name.rsplit_once('.').map_or(name, |(stem, _)| stem).to_string()
}

pub(crate) fn file(path: &str, aliases: &[&str]) -> FileEntry {
	FileEntry::new(path, basename(path)).with_aliases(aliases.iter().map(|a| a.to_string()).collect())
}

impl Host for FakeHost {
	fn files(&self) -> Vec<FileEntry> {
		self.files.lock().clone()
	}

	fn file(&self, path: &str) -> Option<FileEntry> {
		self.files.lock().iter().find(|entry| entry.path == path).cloned()
	}

	fn commands(&self) -> Vec<CommandEntry> {
		self.commands.clone()
	}

	fn bookmarked_paths(&self) -> Option<Vec<String>> {
		self.bookmarks.clone()
	}

	fn read_to_string(&self, path: &str) -> Option<String> {
		self.texts.get(path).cloned()
	}
}
