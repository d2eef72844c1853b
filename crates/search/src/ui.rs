//! Presentation adapters selectable by name.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Host, SearchSettings};

/// Characters of file text shown in a preview pane.
pub const DEFAULT_PREVIEW_CHARS: usize = 5000;

const TRUNCATION_MARKER: &str = "\n\n...";
const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".webp", ".svg"];

/// Presentation style of a search UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchUiKind {
	/// Plain result list.
	#[default]
	Basic,
	/// Result list with a preview of the selected file.
	Preview,
}

impl FromStr for SearchUiKind {
	type Err = Error;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value {
			"basic" => Ok(Self::Basic),
			"preview" => Ok(Self::Preview),
			other => Err(Error::InvalidUiKind(other.to_string())),
		}
	}
}

impl SearchUiKind {
	/// Builds the adapter for this kind.
	pub fn adapter(self, prompt: impl Into<String>, settings: &SearchSettings) -> UiAdapter {
		let prompt = prompt.into();
		match self {
			Self::Basic => UiAdapter::Basic(BasicUi { prompt }),
			Self::Preview => UiAdapter::Preview(PreviewUi {
				prompt,
				max_chars: settings.preview_chars,
			}),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicUi {
	pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewUi {
	pub prompt: String,
	pub max_chars: usize,
}

/// What a preview pane shows for one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
	/// Nothing selected.
	None,
	FileNotFound,
	/// The file exists but holds only whitespace.
	EmptyText,
	Markdown(String),
	Text(String),
	/// An image, addressed by its path.
	Image(String),
	Unsupported,
}

impl PreviewUi {
	/// Preview content for the selected `path`, if any.
	pub fn preview<H: Host + ?Sized>(&self, host: &H, path: Option<&str>) -> Preview {
		let Some(path) = path else {
			return Preview::None;
		};

		if path.ends_with(".md") || path.ends_with(".txt") {
			let Some(text) = host.read_to_string(path) else {
				return Preview::FileNotFound;
			};
			let text = truncate_preview(&text, self.max_chars);
			if text.is_empty() {
				Preview::EmptyText
			} else if path.ends_with(".md") {
				Preview::Markdown(text)
			} else {
				Preview::Text(text)
			}
		} else if IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
			match host.file(path) {
				Some(entry) => Preview::Image(entry.path),
				None => Preview::FileNotFound,
			}
		} else {
			Preview::Unsupported
		}
	}
}

/// Clips `text` to `max_chars` characters, marking the cut.
///
/// Whitespace-only text becomes empty.
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
	if text.trim().is_empty() {
		return String::new();
	}
	match text.char_indices().nth(max_chars) {
		Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &text[..cut]),
		None => text.to_string(),
	}
}

/// The closed set of search UI adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAdapter {
	Basic(BasicUi),
	Preview(PreviewUi),
}

impl UiAdapter {
	pub fn kind(&self) -> SearchUiKind {
		match self {
			Self::Basic(_) => SearchUiKind::Basic,
			Self::Preview(_) => SearchUiKind::Preview,
		}
	}

	pub fn prompt(&self) -> &str {
		match self {
			Self::Basic(ui) => &ui.prompt,
			Self::Preview(ui) => &ui.prompt,
		}
	}

	/// Preview for `path`; basic adapters never show one.
	pub fn preview<H: Host + ?Sized>(&self, host: &H, path: Option<&str>) -> Preview {
		match self {
			Self::Basic(_) => Preview::None,
			Self::Preview(ui) => ui.preview(host, path),
		}
	}
}
