use std::cmp::Ordering;

use super::format::human_timestamp;
use super::types::LogRecord;

/// Rows per table page.
pub const PAGE_SIZE: usize = 100;

/// Sortable columns. The raw timestamp and the human-rendered time are
/// separate columns; both compare on the raw epoch value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
	Timestamp,
	Time,
	Kind,
	Beacon,
	User,
	Command,
	Result,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDir {
	Asc,
	Desc,
}

impl SortDir {
	pub fn flip(self) -> Self {
		match self {
			SortDir::Asc => SortDir::Desc,
			SortDir::Desc => SortDir::Asc,
		}
	}
}

/// Indices of the records that survive the search filter, in display
/// order. The default view is newest first (descending raw timestamp).
pub fn view_order(records: &[LogRecord], query: &str, key: SortKey, dir: SortDir) -> Vec<usize> {
	let query = query.trim().to_lowercase();
	let mut order: Vec<usize> = records
		.iter()
		.enumerate()
		.filter(|(_, record)| query.is_empty() || matches_query(record, &query))
		.map(|(i, _)| i)
		.collect();

	order.sort_by(|&a, &b| {
		let ordering = compare(&records[a], &records[b], key);
		match dir {
			SortDir::Asc => ordering,
			SortDir::Desc => ordering.reverse(),
		}
	});
	order
}

fn matches_query(record: &LogRecord, query: &str) -> bool {
	let haystacks = [
		&record.kind,
		&record.beacon_id,
		&record.user,
		&record.command,
		&record.result,
	];
	haystacks
		.iter()
		.any(|field| field.to_lowercase().contains(query))
		|| human_timestamp(record.timestamp).contains(query)
}

fn compare(a: &LogRecord, b: &LogRecord, key: SortKey) -> Ordering {
	match key {
		SortKey::Timestamp | SortKey::Time => a.timestamp.cmp(&b.timestamp),
		SortKey::Kind => a.kind.cmp(&b.kind),
		SortKey::Beacon => a.beacon_id.cmp(&b.beacon_id),
		SortKey::User => a.user.cmp(&b.user),
		SortKey::Command => a.command.cmp(&b.command),
		SortKey::Result => a.result.cmp(&b.result),
	}
}

pub fn page_count(filtered: usize) -> usize {
	filtered.div_ceil(PAGE_SIZE).max(1)
}

/// Slice of the view order for one page. Out-of-range pages clamp to the
/// last page rather than indexing out of bounds.
pub fn page_slice(order: &[usize], page: usize) -> &[usize] {
	let page = page.min(page_count(order.len()) - 1);
	let start = (page * PAGE_SIZE).min(order.len());
	let end = (start + PAGE_SIZE).min(order.len());
	&order[start..end]
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(timestamp: i64, user: &str, result: &str) -> LogRecord {
		LogRecord {
			timestamp,
			kind: "beacon_output".into(),
			beacon_id: "1234".into(),
			user: user.into(),
			command: String::new(),
			result: result.into(),
		}
	}

	#[test]
	fn default_order_is_newest_first() {
		let records = vec![
			record(100, "", ""),
			record(300, "", ""),
			record(200, "", ""),
		];
		let order = view_order(&records, "", SortKey::Timestamp, SortDir::Desc);
		let times: Vec<i64> = order.iter().map(|&i| records[i].timestamp).collect();
		assert_eq!(times, vec![300, 200, 100]);
	}

	#[test]
	fn raw_and_human_time_columns_sort_identically() {
		// Numeric comparison for both, never lexicographic (9 < 10).
		let records = vec![record(9, "", ""), record(10, "", "")];
		let raw = view_order(&records, "", SortKey::Timestamp, SortDir::Desc);
		let human = view_order(&records, "", SortKey::Time, SortDir::Desc);
		assert_eq!(raw, vec![1, 0]);
		assert_eq!(raw, human);
	}

	#[test]
	fn sort_direction_flips() {
		let records = vec![record(2, "", ""), record(1, "", "")];
		let asc = view_order(&records, "", SortKey::Time, SortDir::Asc);
		assert_eq!(asc, vec![1, 0]);
		assert_eq!(SortDir::Asc.flip(), SortDir::Desc);
	}

	#[test]
	fn search_is_case_insensitive_across_fields() {
		let records = vec![
			record(1, "Operator", "all good"),
			record(2, "someone", "FAILED to run"),
		];
		assert_eq!(
			view_order(&records, "operator", SortKey::Time, SortDir::Desc),
			vec![0]
		);
		assert_eq!(
			view_order(&records, "failed", SortKey::Time, SortDir::Desc),
			vec![1]
		);
		assert!(view_order(&records, "absent", SortKey::Time, SortDir::Desc).is_empty());
	}

	#[test]
	fn lexicographic_sort_on_string_columns() {
		let records = vec![record(1, "bob", ""), record(2, "alice", "")];
		let order = view_order(&records, "", SortKey::User, SortDir::Asc);
		assert_eq!(order, vec![1, 0]);
	}

	#[test]
	fn page_slicing_never_indexes_out_of_range() {
		let order: Vec<usize> = (0..250).collect();
		assert_eq!(page_slice(&order, 0).len(), PAGE_SIZE);
		assert_eq!(page_slice(&order, 2).len(), 50);
		// Past the end clamps to the last page
		assert_eq!(page_slice(&order, 99).len(), 50);
		assert_eq!(page_count(250), 3);

		let empty: Vec<usize> = Vec::new();
		assert!(page_slice(&empty, 5).is_empty());
		assert_eq!(page_count(0), 1);
	}
}
