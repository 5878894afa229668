//! Node edit form: draft state, dirty tracking, and submit-time validation.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{Status, SystemNode};

/// AIT tags are the literal `AIT`, whitespace, then digits.
static AIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^AIT\s+\d+$").unwrap());

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 50;
const DESCRIPTION_MAX: usize = 200;

/// Form field a validation error is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
	Name,
	AitNumber,
	Description,
}

/// A single per-field validation failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
	pub field: Field,
	pub message: String,
}

/// In-progress edit of a node's editable fields.
///
/// The draft holds its own copies; nothing touches the stored node until
/// [`NodeDraft::apply_to`] runs after a successful validation.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeDraft {
	pub name: String,
	pub ait_number: String,
	pub description: String,
	pub flow: Status,
	pub trend: Status,
	pub balanced: Status,
}

impl NodeDraft {
	pub fn from_node(node: &SystemNode) -> Self {
		Self {
			name: node.name.clone(),
			ait_number: node.ait_number.clone(),
			description: node.description.clone().unwrap_or_default(),
			flow: node.status.flow,
			trend: node.status.trend,
			balanced: node.status.balanced,
		}
	}

	/// True when at least one field differs from the stored node. Save stays
	/// disabled while this is false.
	pub fn is_dirty(&self, node: &SystemNode) -> bool {
		*self != Self::from_node(node)
	}

	/// Submit-time checks. An empty vec means the draft may be saved.
	pub fn validate(&self) -> Vec<ValidationError> {
		let mut errors = Vec::new();

		let name = self.name.trim();
		if name.is_empty() || name.chars().count() < NAME_MIN {
			errors.push(ValidationError {
				field: Field::Name,
				message: format!("Name must be at least {} characters", NAME_MIN),
			});
		} else if name.chars().count() > NAME_MAX {
			errors.push(ValidationError {
				field: Field::Name,
				message: format!("Name must be at most {} characters", NAME_MAX),
			});
		}

		if !AIT_RE.is_match(self.ait_number.trim()) {
			errors.push(ValidationError {
				field: Field::AitNumber,
				message: "AIT number must look like \"AIT 12345\"".to_string(),
			});
		}

		if self.description.chars().count() > DESCRIPTION_MAX {
			errors.push(ValidationError {
				field: Field::Description,
				message: format!("Description must be at most {} characters", DESCRIPTION_MAX),
			});
		}

		errors
	}

	/// Overwrite the node's editable fields with this draft's values.
	pub fn apply_to(&self, node: &mut SystemNode) {
		node.name = self.name.trim().to_string();
		node.ait_number = self.ait_number.trim().to_string();
		let description = self.description.trim();
		node.description = if description.is_empty() {
			None
		} else {
			Some(description.to_string())
		};
		node.status.flow = self.flow;
		node.status.trend = self.trend;
		node.status.balanced = self.balanced;
	}
}

/// Message for a field, if it failed validation.
pub fn error_for(errors: &[ValidationError], field: Field) -> Option<&str> {
	errors
		.iter()
		.find(|e| e.field == field)
		.map(|e| e.message.as_str())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::flow_diagram::data;

	fn draft() -> (SystemNode, NodeDraft) {
		let node = data::sample_data().systems.remove(0);
		let draft = NodeDraft::from_node(&node);
		(node, draft)
	}

	#[test]
	fn pristine_draft_is_clean_and_valid() {
		let (node, draft) = draft();
		assert!(!draft.is_dirty(&node));
		assert!(draft.validate().is_empty());
	}

	#[test]
	fn any_field_change_marks_dirty() {
		let (node, mut d) = draft();
		d.trend = Status::Error;
		assert!(d.is_dirty(&node));
	}

	#[test]
	fn name_length_boundaries() {
		let (_, mut d) = draft();
		d.name = "A".to_string();
		assert!(error_for(&d.validate(), Field::Name).is_some());
		d.name = "AB".to_string();
		assert!(error_for(&d.validate(), Field::Name).is_none());
		d.name = "x".repeat(50);
		assert!(error_for(&d.validate(), Field::Name).is_none());
		d.name = "x".repeat(51);
		assert!(error_for(&d.validate(), Field::Name).is_some());
	}

	#[test]
	fn ait_number_pattern() {
		let (_, mut d) = draft();
		d.ait_number = "AIT 12345".to_string();
		assert!(error_for(&d.validate(), Field::AitNumber).is_none());
		d.ait_number = "AIT12345".to_string();
		assert!(error_for(&d.validate(), Field::AitNumber).is_some());
		d.ait_number = "AIT ABCDE".to_string();
		assert!(error_for(&d.validate(), Field::AitNumber).is_some());
	}

	#[test]
	fn description_caps_at_200() {
		let (_, mut d) = draft();
		d.description = "d".repeat(200);
		assert!(d.validate().is_empty());
		d.description = "d".repeat(201);
		assert!(error_for(&d.validate(), Field::Description).is_some());
	}

	#[test]
	fn apply_trims_text_fields() {
		let (mut node, mut d) = draft();
		d.name = "  Wire Gateway  ".to_string();
		d.ait_number = " AIT 777 ".to_string();
		d.description = "  routes outbound wires  ".to_string();
		d.apply_to(&mut node);
		assert_eq!(node.name, "Wire Gateway");
		assert_eq!(node.ait_number, "AIT 777");
		assert_eq!(node.description.as_deref(), Some("routes outbound wires"));

		d.description = "   ".to_string();
		d.apply_to(&mut node);
		assert_eq!(node.description, None);
	}

	#[test]
	fn apply_overwrites_only_editable_fields() {
		let (mut node, mut d) = draft();
		let id = node.id.clone();
		let lane = node.lane.clone();
		d.name = "Renamed Gateway".to_string();
		d.description = "handles outbound wires".to_string();
		d.flow = Status::Error;
		d.apply_to(&mut node);
		assert_eq!(node.id, id);
		assert_eq!(node.lane, lane);
		assert_eq!(node.name, "Renamed Gateway");
		assert_eq!(node.description.as_deref(), Some("handles outbound wires"));
		assert_eq!(node.status.flow, Status::Error);
	}
}
