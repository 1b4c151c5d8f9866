use std::borrow::Cow;

use chrono::DateTime;

/// Result text longer than this renders as a preview plus a marker; the
/// full text lives in the expandable detail row.
pub const RESULT_PREVIEW_CHARS: usize = 50;

/// Preview of a result cell. Returns the text to show and whether it was
/// truncated. Character-indexed, not byte-indexed.
pub fn result_preview(result: &str) -> (Cow<'_, str>, bool) {
	if result.chars().count() <= RESULT_PREVIEW_CHARS {
		(Cow::Borrowed(result), false)
	} else {
		(
			Cow::Owned(result.chars().take(RESULT_PREVIEW_CHARS).collect()),
			true,
		)
	}
}

/// Epoch milliseconds -> `YYYY-MM-DD hh:mm:ss` (12-hour clock, UTC).
/// Out-of-range values render empty.
pub fn human_timestamp(epoch_ms: i64) -> String {
	DateTime::from_timestamp_millis(epoch_ms)
		.map(|dt| dt.format("%Y-%m-%d %I:%M:%S").to_string())
		.unwrap_or_default()
}
