//! Directory-backed host.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use serde::Deserialize;
use sift_search::{CommandEntry, FileEntry, Host};

use crate::repl;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOptions {
	pub include_hidden: bool,
	pub git_ignore: bool,
	pub max_depth: Option<usize>,
}

impl Default for WalkOptions {
	fn default() -> Self {
		Self {
			include_hidden: false,
			git_ignore: true,
			max_depth: None,
		}
	}
}

/// Serves the files under `root` and the REPL's own commands.
#[derive(Debug)]
pub struct WalkHost {
	root: PathBuf,
	options: WalkOptions,
	bookmarks: Option<Vec<String>>,
}

impl WalkHost {
	pub fn new(root: PathBuf, options: WalkOptions) -> Self {
		Self {
			root,
			options,
			bookmarks: None,
		}
	}

	/// Reads bookmarked paths, one per line. Blank lines and `#` comments are skipped.
	pub fn with_bookmarks_file(mut self, path: &Path) -> std::io::Result<Self> {
		let text = std::fs::read_to_string(path)?;
		let paths = text
			.lines()
			.map(str::trim)
			.filter(|line| !line.is_empty() && !line.starts_with('#'))
			.map(str::to_string)
			.collect();
		self.bookmarks = Some(paths);
		Ok(self)
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Absolute location of a host-relative path.
	pub fn resolve(&self, path: &str) -> PathBuf {
		self.root.join(path)
	}

	fn entry(&self, relative: &Path) -> FileEntry {
		let path = relative.to_string_lossy().replace('\\', "/");
		let basename = relative
			.file_stem()
			.map(|stem| stem.to_string_lossy().into_owned())
			.unwrap_or_else(|| path.clone());
		let aliases = if path.ends_with(".md") {
			std::fs::read_to_string(self.root.join(relative))
				.map(|text| frontmatter_aliases(&text))
				.unwrap_or_default()
		} else {
			Vec::new()
		};
		FileEntry::new(path, basename).with_aliases(aliases)
	}
}

impl Host for WalkHost {
	fn files(&self) -> Vec<FileEntry> {
		let mut walker = WalkBuilder::new(&self.root);
		walker
			.hidden(!self.options.include_hidden)
			.git_ignore(self.options.git_ignore)
			.parents(true)
			.max_depth(self.options.max_depth)
			.sort_by_file_path(|a, b| a.cmp(b));

		let mut errors = 0usize;
		let files: Vec<_> = walker
			.build()
			.filter_map(|entry| match entry {
				Ok(entry) => Some(entry),
				Err(error) => {
					errors += 1;
					tracing::debug!(%error, "host.walk.error");
					None
				}
			})
			.filter(|entry| entry.file_type().is_some_and(|file_type| file_type.is_file()))
			.map(|entry| {
				let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
				self.entry(relative)
			})
			.collect();

		tracing::debug!(root = %self.root.display(), files = files.len(), errors, "host.walk");
		files
	}

	fn file(&self, path: &str) -> Option<FileEntry> {
		self.resolve(path).is_file().then(|| self.entry(Path::new(path)))
	}

	fn commands(&self) -> Vec<CommandEntry> {
		repl::COMMANDS
			.iter()
			.map(|(id, name, usage)| CommandEntry::new(*id, *name).with_hotkeys(vec![usage.to_string()]))
			.collect()
	}

	fn bookmarked_paths(&self) -> Option<Vec<String>> {
		self.bookmarks.clone()
	}

	fn read_to_string(&self, path: &str) -> Option<String> {
		std::fs::read_to_string(self.resolve(path)).ok()
	}
}

/// Front matter keys that name a note.
#[derive(Debug, Deserialize)]
struct FrontMatter {
	#[serde(default)]
	aliases: Option<OneOrMany>,
	#[serde(default)]
	alias: Option<OneOrMany>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
	One(String),
	Many(Vec<Option<String>>),
}

impl OneOrMany {
	fn into_vec(self) -> Vec<String> {
		match self {
			Self::One(value) => vec![value],
			Self::Many(values) => values.into_iter().flatten().collect(),
		}
	}
}

/// The YAML block between the opening and closing `---` fences.
fn frontmatter_block(text: &str) -> Option<&str> {
	let rest = text.strip_prefix("---")?;
	let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;
	let mut offset = 0;
	for line in rest.split_inclusive('\n') {
		if line.trim_end() == "---" {
			return Some(&rest[..offset]);
		}
		offset += line.len();
	}
	None
}

/// Aliases declared in a markdown front matter block, from either the
/// `aliases` or the `alias` key, as a single string or a list.
pub fn frontmatter_aliases(text: &str) -> Vec<String> {
	let Some(block) = frontmatter_block(text).filter(|block| !block.trim().is_empty()) else {
		return Vec::new();
	};
	let front: FrontMatter = match serde_yaml::from_str(block) {
		Ok(front) => front,
		Err(error) => {
			tracing::debug!(%error, "host.frontmatter.invalid");
			return Vec::new();
		}
	};

	let mut aliases: Vec<String> = front
		.aliases
		.into_iter()
		.chain(front.alias)
		.flat_map(OneOrMany::into_vec)
		.map(|alias| alias.trim().to_string())
		.collect();
	aliases.retain(|alias| !alias.is_empty());
	aliases
}
