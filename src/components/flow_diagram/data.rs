//! Built-in sample data: the US wire payment estate.
//!
//! Used whenever no `<script id="flow-data">` override is present in the DOM.

use super::types::{Connection, FlowData, Lane, Status, StatusSet, SystemNode};

fn node(
	id: &str,
	name: &str,
	ait: &str,
	lane: &str,
	flow: Status,
	trend: Status,
	balanced: Status,
) -> SystemNode {
	SystemNode {
		id: id.to_string(),
		name: name.to_string(),
		ait_number: ait.to_string(),
		lane: lane.to_string(),
		description: None,
		status: StatusSet {
			flow,
			trend,
			balanced,
		},
	}
}

fn conn(source: &str, target: &str) -> Connection {
	Connection {
		id: format!("{}-{}", source, target),
		source: source.to_string(),
		target: target.to_string(),
		active: true,
		critical: false,
		flow_rate: 3,
	}
}

/// The four fixed swim lanes, in left-to-right order.
pub fn lanes() -> Vec<Lane> {
	let lane = |id: &str, title: &str, color: usize, systems: &[&str]| Lane {
		id: id.to_string(),
		title: title.to_string(),
		color,
		systems: systems.iter().map(|s| s.to_string()).collect(),
	};

	vec![
		lane(
			"origination",
			"Origination",
			0,
			&[
				"swift-gateway",
				"loan-iq",
				"cashpro-mobile",
				"cpo-gateway",
				"b2bi",
			],
		),
		lane(
			"validation",
			"Payment Validation and Routing",
			1,
			&[
				"swift-alliance",
				"gpo",
				"cashpro-payments",
				"frp-us",
				"psh",
				"ecb",
			],
		),
		lane("middleware", "Middleware", 2, &["rpi", "mrp"]),
		lane(
			"processing",
			"Payment Processing, Sanctions & Investigation",
			3,
			&["gbs-aries", "gtms", "ets", "gfd", "wtx", "rtfp"],
		),
	]
}

/// Sample systems with their monitored status readings.
pub fn sample_data() -> FlowData {
	use Status::{Active, Warning};

	let systems = vec![
		// Origination
		node("swift-gateway", "Swift Gateway", "AIT 11554", "origination", Warning, Warning, Warning),
		node("loan-iq", "LoanIQ", "AIT 48581", "origination", Active, Active, Warning),
		node("cashpro-mobile", "CashPro Mobile", "AIT 41107", "origination", Active, Active, Warning),
		node("cpo-gateway", "CPO API Gateway", "AIT 11697", "origination", Active, Active, Warning),
		node("b2bi", "B2BI", "AIT 54071", "origination", Active, Active, Warning),
		// Payment validation and routing
		node("swift-alliance", "Swift Alliance", "AIT 512", "validation", Active, Active, Active),
		node("gpo", "GPO", "AIT 70199", "validation", Active, Active, Active),
		node("cashpro-payments", "CashPro Payments", "AIT 28960", "validation", Active, Active, Active),
		node("frp-us", "FRP US", "AIT 15227", "validation", Active, Active, Warning),
		node("psh", "PSH", "AIT 31427", "validation", Active, Active, Active),
		node("ecb", "ECB", "AIT 834", "validation", Warning, Warning, Warning),
		// Middleware
		node("rpi", "RPI", "AIT 80745", "middleware", Warning, Warning, Warning),
		node("mrp", "MRP", "AIT 4679", "middleware", Warning, Warning, Warning),
		// Processing, sanctions & investigation
		node("gbs-aries", "GBS Aries", "AIT 515", "processing", Active, Active, Active),
		node("gtms", "GTMS (Limits)", "AIT 62686", "processing", Active, Active, Active),
		node("ets", "ETS (Sanctions)", "AIT 46951", "processing", Active, Active, Active),
		node("gfd", "GFD (Fraud)", "AIT 73929", "processing", Active, Active, Active),
		node("wtx", "WTX", "AIT 1901", "processing", Active, Active, Active),
		node("rtfp", "RTFP", "AIT 74014", "processing", Active, Active, Warning),
	];

	let connections = vec![
		conn("swift-gateway", "swift-alliance"),
		conn("loan-iq", "swift-alliance"),
		conn("loan-iq", "cashpro-payments"),
		conn("cashpro-mobile", "cashpro-payments"),
		conn("cpo-gateway", "frp-us"),
		conn("cpo-gateway", "b2bi"),
		conn("b2bi", "ecb"),
		conn("swift-alliance", "gpo"),
		conn("swift-alliance", "cashpro-payments"),
		conn("gpo", "rpi"),
		conn("gpo", "cashpro-payments"),
		conn("cashpro-payments", "psh"),
		conn("cashpro-payments", "mrp"),
		conn("frp-us", "psh"),
		conn("psh", "mrp"),
		conn("rpi", "gbs-aries"),
		conn("mrp", "wtx"),
		conn("gbs-aries", "gtms"),
		conn("gbs-aries", "ets"),
		conn("gtms", "ets"),
		conn("ets", "gfd"),
		conn("gfd", "wtx"),
		conn("wtx", "rtfp"),
	];

	FlowData {
		systems,
		connections,
	}
}

/// Canned search path returned for any payment id (no backend exists).
pub fn mock_search_path() -> Vec<String> {
	["cpo-gateway", "psh", "mrp", "wtx", "swift-gateway"]
		.iter()
		.map(|s| s.to_string())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn lanes_partition_the_sample_systems() {
		let data = sample_data();
		let mut seen = HashSet::new();
		for lane in lanes() {
			for id in &lane.systems {
				assert!(seen.insert(id.clone()), "{} in two lanes", id);
				assert!(data.systems.iter().any(|s| &s.id == id));
			}
		}
		assert_eq!(seen.len(), data.systems.len());
	}

	#[test]
	fn lane_membership_matches_node_lane_field() {
		let data = sample_data();
		for lane in lanes() {
			for id in &lane.systems {
				let sys = data.systems.iter().find(|s| &s.id == id).unwrap();
				assert_eq!(sys.lane, lane.id);
			}
		}
	}

	#[test]
	fn initial_connections_reference_known_systems() {
		let data = sample_data();
		let ids: HashSet<_> = data.systems.iter().map(|s| s.id.as_str()).collect();
		for c in &data.connections {
			assert!(ids.contains(c.source.as_str()), "dangling source {}", c.source);
			assert!(ids.contains(c.target.as_str()), "dangling target {}", c.target);
			assert_ne!(c.source, c.target);
		}
	}
}
