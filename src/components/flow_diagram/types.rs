//! Data structures for the swim-lane flow diagram.

use serde::Deserialize;

/// Health reading for one monitored aspect of a system.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
	/// Operating normally.
	#[default]
	Active,
	/// Degraded but processing.
	Warning,
	/// Not processing.
	Error,
}

impl Status {
	/// Short uppercase label used on badges and in the edit form.
	pub fn label(self) -> &'static str {
		match self {
			Status::Active => "active",
			Status::Warning => "warning",
			Status::Error => "error",
		}
	}

	/// Parse the lowercase form used by `label`. Unknown strings map to `None`.
	pub fn parse(s: &str) -> Option<Self> {
		match s {
			"active" => Some(Status::Active),
			"warning" => Some(Status::Warning),
			"error" => Some(Status::Error),
			_ => None,
		}
	}
}

/// The three independent status readings shown on every node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StatusSet {
	pub flow: Status,
	pub trend: Status,
	pub balanced: Status,
}

/// A monitored system, rendered as one box on the diagram.
///
/// Systems are created once at startup and never destroyed; the edit form may
/// rewrite `name`, `ait_number`, `description`, and `status`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SystemNode {
	/// Unique identifier. Referenced by connections, lanes, and search paths.
	pub id: String,
	/// Display name shown on the node.
	pub name: String,
	/// Application inventory tag, e.g. `"AIT 11554"`.
	pub ait_number: String,
	/// Id of the lane this system belongs to.
	pub lane: String,
	/// Optional free-text description, edit-form only.
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub status: StatusSet,
}

/// A directed connection between two systems.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Connection {
	/// Unique identifier; interactively created edges use
	/// `"{source}-{target}-{timestamp_ms}"`.
	pub id: String,
	/// Source system id.
	pub source: String,
	/// Target system id.
	pub target: String,
	/// Whether traffic currently moves along this connection.
	#[serde(default = "default_true")]
	pub active: bool,
	/// Marks a connection on a critical path.
	#[serde(default)]
	pub critical: bool,
	/// Relative flow volume, 1-5. Only paces the draw-in animation.
	#[serde(default = "default_flow_rate")]
	pub flow_rate: u8,
}

fn default_true() -> bool {
	true
}

fn default_flow_rate() -> u8 {
	3
}

impl Connection {
	/// A freshly drawn connection with default flags.
	pub fn interactive(source: &str, target: &str, now_ms: f64) -> Self {
		Self {
			id: format!("{}-{}-{}", source, target, now_ms as u64),
			source: source.to_string(),
			target: target.to_string(),
			active: true,
			critical: false,
			flow_rate: default_flow_rate(),
		}
	}
}

/// A fixed, ordered category that visually partitions the systems.
#[derive(Clone, Debug, Deserialize)]
pub struct Lane {
	pub id: String,
	pub title: String,
	/// Index into the theme's lane color table.
	pub color: usize,
	/// Ids of member systems, in layout order.
	pub systems: Vec<String>,
}

/// Result of a payment search: the ordered chain of systems it traversed.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
	pub payment_id: String,
	/// System ids along the payment's path, in hop order.
	pub path: Vec<String>,
}

impl SearchResult {
	pub fn contains(&self, system_id: &str) -> bool {
		self.path.iter().any(|id| id == system_id)
	}
}

/// Complete diagram input: systems, lanes, and the initial connections.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FlowData {
	pub systems: Vec<SystemNode>,
	pub connections: Vec<Connection>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_round_trips_through_label() {
		for s in [Status::Active, Status::Warning, Status::Error] {
			assert_eq!(Status::parse(s.label()), Some(s));
		}
		assert_eq!(Status::parse("degraded"), None);
	}

	#[test]
	fn interactive_connection_id_embeds_endpoints_and_timestamp() {
		let conn = Connection::interactive("gpo", "rpi", 1736000000123.0);
		assert_eq!(conn.id, "gpo-rpi-1736000000123");
		assert_eq!(conn.source, "gpo");
		assert_eq!(conn.target, "rpi");
		assert!(conn.active);
		assert!(!conn.critical);
	}

	#[test]
	fn flow_data_parses_with_defaults() {
		let json = r#"{
			"systems": [{
				"id": "gpo", "name": "GPO", "ait_number": "AIT 70199",
				"lane": "validation",
				"status": { "flow": "active", "trend": "warning", "balanced": "error" }
			}],
			"connections": [{ "id": "a-b", "source": "a", "target": "b" }]
		}"#;
		let data: FlowData = serde_json::from_str(json).unwrap();
		assert_eq!(data.systems[0].status.trend, Status::Warning);
		assert_eq!(data.systems[0].description, None);
		assert!(data.connections[0].active);
		assert_eq!(data.connections[0].flow_rate, 3);
	}
}
