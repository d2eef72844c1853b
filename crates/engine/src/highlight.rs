use crate::HighlightSpan;

/// Splits `content` into alternating matched/unmatched runs.
///
/// `indices` are char offsets of matched characters, sorted ascending; offsets
/// past the end are ignored. The spans concatenate back to `content`.
pub fn spans_from_indices(content: &str, indices: &[u32]) -> Vec<HighlightSpan> {
	let mut spans: Vec<HighlightSpan> = Vec::new();
	let mut next = indices.iter().copied().peekable();

	for (offset, ch) in content.chars().enumerate() {
		let offset = offset as u32;
		while next.next_if(|&idx| idx < offset).is_some() {}
		let is_match = next.next_if_eq(&offset).is_some();

		match spans.last_mut() {
			Some(span) if span.is_match == is_match => span.text.push(ch),
			_ => spans.push(HighlightSpan::new(ch, is_match)),
		}
	}

	spans
}
