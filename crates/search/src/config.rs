//! Search settings.
//!
//! Settings are written in TOML. Every field is optional:
//!
//! ```toml
//! ui = "preview"
//! file-search = "alias"
//! preview-chars = 5000
//! result-limit = 100
//! recent = true
//! bookmarks = true
//! ```
//!
//! The default location is `sift/config.toml` under the platform config
//! directory (`$XDG_CONFIG_HOME` or `~/.config` on Linux).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sift_engine::DEFAULT_RESULT_LIMIT;

use crate::ui::DEFAULT_PREVIEW_CHARS;
use crate::{Error, FileSearchKind, PlaceholderOptions, Result, SearchUiKind};

/// User-facing search settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct SearchSettings {
	/// Adapter used for file searches. Command searches are always basic.
	pub ui: SearchUiKind,
	pub file_search: FileSearchKind,
	pub preview_chars: usize,
	/// Maximum hits an engine returns per query.
	pub result_limit: usize,
	/// Show recently used records for an empty query.
	pub recent: bool,
	/// Show bookmarked files for an empty query.
	pub bookmarks: bool,
}

impl Default for SearchSettings {
	fn default() -> Self {
		Self {
			ui: SearchUiKind::Preview,
			file_search: FileSearchKind::FilePath,
			preview_chars: DEFAULT_PREVIEW_CHARS,
			result_limit: DEFAULT_RESULT_LIMIT,
			recent: true,
			bookmarks: true,
		}
	}
}

impl SearchSettings {
	pub fn from_toml_str(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Reads settings from `path`.
	pub fn load(path: &Path) -> Result<Self> {
		let input = std::fs::read_to_string(path).map_err(|error| Error::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let settings = Self::from_toml_str(&input)?;
		tracing::debug!(path = %path.display(), "search.settings.loaded");
		Ok(settings)
	}

	/// Reads `path` if it exists, falling back to defaults.
	pub fn load_or_default(path: &Path) -> Result<Self> {
		if path.exists() { Self::load(path) } else { Ok(Self::default()) }
	}

	/// Default settings file location, if a config directory is known.
	pub fn default_path() -> Option<PathBuf> {
		dirs::config_dir().map(|dir| dir.join("sift").join("config.toml"))
	}

	pub fn placeholder_options(&self) -> PlaceholderOptions {
		PlaceholderOptions {
			recent: self.recent,
			bookmarks: self.bookmarks,
		}
	}
}
