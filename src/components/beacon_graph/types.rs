use serde::Deserialize;

/// One beacon entry from the graph document. Every display field is
/// optional in practice; absent fields deserialize to empty strings and
/// render as empty text.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BeaconNode {
	#[serde(default)]
	pub id: String,
	#[serde(default)]
	pub user: String,
	#[serde(default)]
	pub host: String,
	#[serde(default)]
	pub pid: String,
	#[serde(default)]
	pub computer: String,
	#[serde(default)]
	pub internal: String,
	#[serde(default)]
	pub external: String,
	#[serde(default)]
	pub os: String,
	#[serde(default)]
	pub ver: String,
	#[serde(default)]
	pub barch: String,
	#[serde(default)]
	pub colour: String,
	#[serde(default, rename = "nodeIcon")]
	pub node_icon: String,
	#[serde(default)]
	pub note: String,
}

impl BeaconNode {
	/// Node caption drawn beside the circle.
	pub fn label(&self) -> String {
		format!("{}@{} ({})", self.user, self.host, self.pid)
	}

	/// OS summary line used in the hover tooltip.
	pub fn os_summary(&self) -> String {
		format!("{} {} ({})", self.os, self.ver, self.barch)
	}
}

/// A relationship between two beacons, e.g. an SMB or TCP parent link.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BeaconLink {
	#[serde(default)]
	pub source: String,
	#[serde(default)]
	pub target: String,
	#[serde(default, rename = "type")]
	pub kind: String,
}

/// The pre-generated graph data file: `{ "nodes": [...], "links": [...] }`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphDocument {
	#[serde(default)]
	pub nodes: Vec<BeaconNode>,
	#[serde(default)]
	pub links: Vec<BeaconLink>,
}
