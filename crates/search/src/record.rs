use sift_engine::HighlightSpan;

/// One searchable item.
///
/// `content` is what the engine matches against; `payload` is handed back to
/// the caller untouched. Identity is decided by the owning data source, not
/// by `content`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<T> {
	pub content: String,
	pub sub_text: Option<String>,
	/// Extra display strings, e.g. hotkeys bound to a command.
	pub auxiliary: Vec<String>,
	pub payload: T,
}

impl<T> Record<T> {
	pub fn new(content: impl Into<String>, payload: T) -> Self {
		Self {
			content: content.into(),
			sub_text: None,
			auxiliary: Vec::new(),
			payload,
		}
	}

	#[must_use]
	pub fn with_sub_text(mut self, sub_text: impl Into<String>) -> Self {
		self.sub_text = Some(sub_text.into());
		self
	}

	#[must_use]
	pub fn with_auxiliary(mut self, auxiliary: Vec<String>) -> Self {
		self.auxiliary = auxiliary;
		self
	}
}

/// A record matched by the engine, with spans covering its full content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit<T> {
	pub record: Record<T>,
	pub highlights: Vec<HighlightSpan>,
}
