use serde::{Deserialize, Deserializer};

/// One beacon activity record. Immutable once loaded; whether its detail
/// row is open is table state, not record state.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LogRecord {
	/// Epoch milliseconds. The upstream generator emits this as a string,
	/// but bare numbers are accepted too.
	#[serde(default, deserialize_with = "epoch_millis")]
	pub timestamp: i64,
	#[serde(default, rename = "type")]
	pub kind: String,
	#[serde(default)]
	pub beacon_id: String,
	#[serde(default)]
	pub user: String,
	#[serde(default)]
	pub command: String,
	#[serde(default)]
	pub result: String,
}

/// The pre-generated log data file: `{ "data": [...] }`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LogDocument {
	#[serde(default)]
	pub data: Vec<LogRecord>,
}

fn epoch_millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Raw {
		Number(i64),
		Text(String),
	}

	match Raw::deserialize(deserializer)? {
		Raw::Number(n) => Ok(n),
		Raw::Text(s) if s.trim().is_empty() => Ok(0),
		Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn timestamp_accepts_string_and_number() {
		let doc: LogDocument = serde_json::from_str(
			r#"{"data": [
				{"timestamp": "1614871316845", "type": "beacon_input", "beacon_id": "1234",
				 "user": "operator", "command": "sleep 0", "result": ""},
				{"timestamp": 1614871320000, "type": "beacon_output", "beacon_id": "1234",
				 "user": "", "command": "", "result": "ok"}
			]}"#,
		)
		.unwrap();

		assert_eq!(doc.data[0].timestamp, 1614871316845);
		assert_eq!(doc.data[1].timestamp, 1614871320000);
		assert_eq!(doc.data[0].kind, "beacon_input");
	}

	#[test]
	fn blank_timestamp_falls_back_to_zero() {
		let record: LogRecord = serde_json::from_str(r#"{"timestamp": ""}"#).unwrap();
		assert_eq!(record.timestamp, 0);
		assert_eq!(record.result, "");
	}
}
