//! Diagram state and interaction tracking.
//!
//! [`DiagramState`] exclusively owns everything mutable on the canvas: the
//! systems with their positions, the connection list, the view transform,
//! and the transient drag/connect/selection state. The component mutates it
//! only through the methods here, from inside its event handlers, so the
//! interaction rules stay testable on the host target.

use std::collections::HashSet;

use log::info;

use super::animation::{EntranceTimeline, OverlayEvent, OverlayFsm};
use super::editor::NodeDraft;
use super::geometry::{HandleRole, HandleSide, NodeButton, Point, Rect, ViewTransform, button_rect};
use super::layout::{self, LaneLayout, NODE_HEIGHT, NODE_WIDTH};
use super::scale::ScaledValues;
use super::types::{Connection, FlowData, Lane, SearchResult, SystemNode};

/// Open/close time for the context menu and confirmation modal, seconds.
const OVERLAY_DURATION: f64 = 0.18;

/// Tracks an in-progress node drag.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_id: Option<String>,
	/// Pointer offset from the node center at grab time, world units.
	pub grab_offset: Point,
}

/// Tracks an in-progress drag-to-connect gesture.
#[derive(Clone, Debug, Default)]
pub struct ConnectState {
	pub active: bool,
	pub source_id: Option<String>,
	/// Anchor of the source handle, world units.
	pub source_pos: Point,
	/// Rubber-band endpoint under the pointer, world units.
	pub current_pos: Point,
}

/// Tracks an in-progress background pan.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_screen: Point,
	pub pan_start: Point,
}

/// An open right-click menu on a connection.
#[derive(Clone, Debug, PartialEq)]
pub struct ContextMenuState {
	pub connection_id: String,
	/// Menu anchor in screen pixels.
	pub position: Point,
}

/// What a pointer position lands on, in hit-priority order.
#[derive(Clone, Debug, PartialEq)]
pub enum Hit {
	Handle { node_id: String, side: HandleSide },
	Button { node_id: String, button: NodeButton },
	Node(String),
	Edge(String),
	Empty,
}

/// All mutable state behind the swim-lane diagram.
pub struct DiagramState {
	pub systems: Vec<SystemNode>,
	pub lanes: Vec<Lane>,
	pub connections: Vec<Connection>,
	pub layout: LaneLayout,
	pub collapsed: HashSet<String>,
	pub selected: Option<String>,
	pub context_menu: Option<ContextMenuState>,
	/// Connection awaiting delete confirmation.
	pub pending_delete: Option<String>,
	pub drag: DragState,
	pub connect: ConnectState,
	pub pan: PanState,
	pub transform: ViewTransform,
	pub hovered: Option<String>,
	pub search: Option<SearchResult>,
	pub entrance: EntranceTimeline,
	pub menu_fsm: OverlayFsm,
	pub modal_fsm: OverlayFsm,
	pub width: f64,
	pub height: f64,
	/// Responsive node scale from the viewport width.
	pub node_scale: f64,
}

impl DiagramState {
	pub fn new(data: FlowData, lanes: Vec<Lane>, width: f64, height: f64) -> Self {
		let layout = layout::compute(&lanes, width, height);
		let entrance = EntranceTimeline::new(&lanes);
		Self {
			systems: data.systems,
			connections: data.connections,
			layout,
			collapsed: HashSet::new(),
			selected: None,
			context_menu: None,
			pending_delete: None,
			drag: DragState::default(),
			connect: ConnectState::default(),
			pan: PanState::default(),
			transform: ViewTransform::default(),
			hovered: None,
			search: None,
			entrance,
			menu_fsm: OverlayFsm::new(OVERLAY_DURATION),
			modal_fsm: OverlayFsm::new(OVERLAY_DURATION),
			width,
			height,
			node_scale: layout::responsive_scale(width),
			lanes,
		}
	}

	pub fn center(&self) -> Point {
		Point::new(self.width / 2.0, self.height / 2.0)
	}

	/// Scaled node box extent.
	pub fn node_size(&self) -> (f64, f64) {
		(NODE_WIDTH * self.node_scale, NODE_HEIGHT * self.node_scale)
	}

	pub fn system(&self, id: &str) -> Option<&SystemNode> {
		self.systems.iter().find(|s| s.id == id)
	}

	pub fn lane_of(&self, system_id: &str) -> Option<&Lane> {
		self.lanes
			.iter()
			.find(|lane| lane.systems.iter().any(|s| s == system_id))
	}

	pub fn node_rect(&self, system_id: &str) -> Option<Rect> {
		let pos = *self.layout.positions.get(system_id)?;
		let (w, h) = self.node_size();
		Some(Rect::from_center(pos, w, h))
	}

	/// Hidden nodes are filtered out of rendering and hit testing: members of
	/// collapsed lanes, and systems off the active search path.
	pub fn is_hidden(&self, system_id: &str) -> bool {
		if let Some(lane) = self.lane_of(system_id) {
			if self.collapsed.contains(&lane.id) {
				return true;
			}
		}
		match &self.search {
			Some(result) => !result.contains(system_id),
			None => false,
		}
	}

	/// Systems currently drawn and interactive, in layout order.
	pub fn visible_systems(&self) -> impl Iterator<Item = &SystemNode> {
		self.systems.iter().filter(|s| !self.is_hidden(&s.id))
	}

	/// Whether a node sits on the active search path (drives highlight and
	/// the Summary/Details buttons).
	pub fn on_search_path(&self, system_id: &str) -> bool {
		self.search
			.as_ref()
			.is_some_and(|r| r.contains(system_id))
	}

	pub fn edge_highlighted(&self, conn: &Connection) -> bool {
		self.search
			.as_ref()
			.is_some_and(|r| r.contains(&conn.source) && r.contains(&conn.target))
	}

	/// Endpoint centers of a connection. Dangling connections resolve to
	/// `None` and are silently skipped by the renderer.
	pub fn edge_endpoints(&self, conn: &Connection) -> Option<(Point, Point)> {
		Some((
			*self.layout.positions.get(&conn.source)?,
			*self.layout.positions.get(&conn.target)?,
		))
	}

	// ---- layout & viewport ------------------------------------------------

	/// Recompute lane rectangles and snap every node to its grid cell,
	/// discarding dragged positions.
	pub fn relayout(&mut self) {
		self.layout = layout::compute(&self.lanes, self.width, self.height);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.node_scale = layout::responsive_scale(width);
		self.relayout();
	}

	// ---- hit testing ------------------------------------------------------

	/// Resolve a world-space pointer position against handles, node buttons,
	/// node bodies, then edge paths. Later-drawn nodes win ties.
	pub fn hit_test(&self, world: Point, scale: &ScaledValues) -> Hit {
		// Handles and buttons extend past / sit inside the node box, so test
		// them before node bodies, topmost node first.
		for system in self.systems.iter().rev() {
			if self.is_hidden(&system.id) {
				continue;
			}
			let Some(rect) = self.node_rect(&system.id) else {
				continue;
			};
			for side in HandleSide::ALL {
				if side.anchor(rect).distance_to(world) <= scale.handle_hit_radius {
					return Hit::Handle {
						node_id: system.id.clone(),
						side,
					};
				}
			}
			for button in self.shown_buttons(&system.id) {
				if button_rect(rect, button).contains(world) {
					return Hit::Button {
						node_id: system.id.clone(),
						button,
					};
				}
			}
			if rect.contains(world) {
				return Hit::Node(system.id.clone());
			}
		}

		for conn in self.connections.iter().rev() {
			if let Some((source, target)) = self.edge_endpoints(conn) {
				let path = super::geometry::EdgePath::between(source, target);
				if path.distance_to(world) <= scale.edge_hit_width {
					return Hit::Edge(conn.id.clone());
				}
			}
		}

		Hit::Empty
	}

	/// World-space rectangle of a lane's header strip, which toggles collapse
	/// on click.
	pub fn lane_header_rect(&self, lane_id: &str) -> Option<Rect> {
		let bounds = self.layout.bounds.get(lane_id)?;
		Some(Rect::new(bounds.left, 0.0, bounds.right, layout::HEADER_HEIGHT))
	}

	/// The lane whose header strip contains `world`, if any.
	pub fn lane_header_at(&self, world: Point) -> Option<String> {
		self.lanes
			.iter()
			.find(|lane| {
				self.lane_header_rect(&lane.id)
					.is_some_and(|r| r.contains(world))
			})
			.map(|lane| lane.id.clone())
	}

	/// Buttons currently visible on a node: Edit while hovered, plus
	/// Summary/Details for nodes on the search path.
	pub fn shown_buttons(&self, system_id: &str) -> Vec<NodeButton> {
		let mut buttons = Vec::new();
		if self.on_search_path(system_id) {
			buttons.push(NodeButton::Summary);
			buttons.push(NodeButton::Details);
		}
		if self.hovered.as_deref() == Some(system_id) {
			buttons.push(NodeButton::Edit);
		}
		buttons
	}

	// ---- drag-to-move -----------------------------------------------------

	pub fn begin_drag(&mut self, node_id: &str, pointer_world: Point) {
		let Some(pos) = self.layout.positions.get(node_id) else {
			return;
		};
		self.drag = DragState {
			active: true,
			node_id: Some(node_id.to_string()),
			grab_offset: Point::new(pointer_world.x - pos.x, pointer_world.y - pos.y),
		};
	}

	/// Move the dragged node, clamped so its visible extent never crosses the
	/// owning lane's boundary.
	pub fn drag_to(&mut self, pointer_world: Point) {
		if !self.drag.active {
			return;
		}
		let Some(node_id) = self.drag.node_id.clone() else {
			return;
		};
		let target = Point::new(
			pointer_world.x - self.drag.grab_offset.x,
			pointer_world.y - self.drag.grab_offset.y,
		);
		let clamped = self.clamp_to_lane(&node_id, target);
		self.layout.positions.insert(node_id, clamped);
	}

	pub fn end_drag(&mut self) {
		self.drag = DragState::default();
	}

	fn clamp_to_lane(&self, node_id: &str, target: Point) -> Point {
		let Some(lane) = self.lane_of(node_id) else {
			return target;
		};
		let Some(bounds) = self.layout.bounds.get(&lane.id) else {
			return target;
		};
		let (w, h) = self.node_size();
		bounds.inset(w / 2.0, h / 2.0).clamp(target)
	}

	// ---- drag-to-connect --------------------------------------------------

	/// Start a connect gesture from a source-typed handle. Target-typed
	/// handles cannot originate a connection.
	pub fn begin_connect(&mut self, node_id: &str, side: HandleSide) {
		if side.role() != HandleRole::Source {
			return;
		}
		let Some(rect) = self.node_rect(node_id) else {
			return;
		};
		let anchor = side.anchor(rect);
		self.connect = ConnectState {
			active: true,
			source_id: Some(node_id.to_string()),
			source_pos: anchor,
			current_pos: anchor,
		};
	}

	pub fn connect_move(&mut self, pointer_world: Point) {
		if self.connect.active {
			self.connect.current_pos = pointer_world;
		}
	}

	/// Complete or abandon the connect gesture. A new connection is appended
	/// only when released on a target-typed handle of a different, existing
	/// node; every other release just clears the gesture.
	pub fn finish_connect(&mut self, drop: Option<(&str, HandleSide)>, now_ms: f64) -> bool {
		let source_id = self.connect.source_id.take();
		let was_active = self.connect.active;
		self.connect = ConnectState::default();

		let (Some(source_id), true) = (source_id, was_active) else {
			return false;
		};
		let Some((target_id, side)) = drop else {
			return false;
		};
		if side.role() != HandleRole::Target
			|| target_id == source_id
			|| self.system(target_id).is_none()
		{
			return false;
		}

		let conn = Connection::interactive(&source_id, target_id, now_ms);
		info!("connection added: {} -> {}", conn.source, conn.target);
		self.connections.push(conn);
		true
	}

	// ---- selection, context menu, deletion --------------------------------

	pub fn select_connection(&mut self, connection_id: &str) {
		self.selected = Some(connection_id.to_string());
		self.menu_fsm.close();
	}

	pub fn clear_selection(&mut self) {
		self.selected = None;
		self.menu_fsm.close();
	}

	pub fn open_context_menu(&mut self, connection_id: &str, screen_pos: Point) {
		self.context_menu = Some(ContextMenuState {
			connection_id: connection_id.to_string(),
			position: screen_pos,
		});
		self.selected = Some(connection_id.to_string());
		self.menu_fsm.open();
	}

	pub fn close_context_menu(&mut self) {
		self.menu_fsm.close();
	}

	/// Ask for confirmation before deleting, from the menu or the delete key.
	pub fn request_delete(&mut self, connection_id: &str) {
		self.pending_delete = Some(connection_id.to_string());
		self.menu_fsm.close();
		self.modal_fsm.open();
	}

	pub fn confirm_delete(&mut self) {
		if let Some(id) = self.pending_delete.take() {
			self.connections.retain(|c| c.id != id);
			self.selected = None;
			info!("connection deleted: {}", id);
		}
		self.modal_fsm.close();
	}

	pub fn cancel_delete(&mut self) {
		self.pending_delete = None;
		self.modal_fsm.close();
	}

	pub fn on_delete_key(&mut self) {
		if let Some(id) = self.selected.clone() {
			self.request_delete(&id);
		}
	}

	/// Escape clears the selection and dismisses any open overlay.
	pub fn on_escape(&mut self) {
		self.selected = None;
		self.menu_fsm.close();
		if self.pending_delete.is_some() {
			self.cancel_delete();
		}
	}

	// ---- lanes, view, editing ---------------------------------------------

	pub fn toggle_lane(&mut self, lane_id: &str) {
		if !self.collapsed.remove(lane_id) {
			self.collapsed.insert(lane_id.to_string());
		}
	}

	pub fn is_collapsed(&self, lane_id: &str) -> bool {
		self.collapsed.contains(lane_id)
	}

	pub fn zoom_in(&mut self) {
		self.transform.zoom_in();
	}

	pub fn zoom_out(&mut self) {
		self.transform.zoom_out();
	}

	/// Reset restores zoom and pan and snaps nodes back to the grid.
	pub fn reset_view(&mut self) {
		self.transform.reset();
		self.relayout();
	}

	/// Replay the entrance animation from the top.
	pub fn replay_entrance(&mut self) {
		self.entrance.restart();
	}

	pub fn begin_pan(&mut self, screen: Point) {
		self.pan = PanState {
			active: true,
			start_screen: screen,
			pan_start: self.transform.pan,
		};
	}

	pub fn pan_to(&mut self, screen: Point) {
		if self.pan.active {
			self.transform.pan = Point::new(
				self.pan.pan_start.x + (screen.x - self.pan.start_screen.x) / self.transform.k,
				self.pan.pan_start.y + (screen.y - self.pan.start_screen.y) / self.transform.k,
			);
		}
	}

	pub fn end_pan(&mut self) {
		self.pan = PanState::default();
	}

	/// Overwrite a node's editable fields from a validated draft.
	pub fn apply_edit(&mut self, node_id: &str, draft: &NodeDraft) -> bool {
		match self.systems.iter_mut().find(|s| s.id == node_id) {
			Some(node) => {
				draft.apply_to(node);
				info!("system updated: {}", node_id);
				true
			}
			None => false,
		}
	}

	/// Per-frame update: advances the entrance timeline and the overlay
	/// state machines, tearing down overlay state exactly once on close.
	pub fn tick(&mut self, dt: f64) {
		self.entrance.tick(dt);
		if self.menu_fsm.tick(dt) == Some(OverlayEvent::Closed) {
			self.context_menu = None;
		}
		if self.modal_fsm.tick(dt) == Some(OverlayEvent::Closed) {
			self.pending_delete = None;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::flow_diagram::data;
	use crate::components::flow_diagram::scale::{ScaleConfig, ScaledValues};

	fn state() -> DiagramState {
		DiagramState::new(data::sample_data(), data::lanes(), 1400.0, 900.0)
	}

	fn scaled(state: &DiagramState) -> ScaledValues {
		ScaledValues::new(&ScaleConfig::default(), state.transform.k)
	}

	#[test]
	fn drag_commits_inside_the_lane_with_half_node_margin() {
		let mut s = state();
		let start = s.layout.positions["swift-gateway"];
		s.begin_drag("swift-gateway", start);
		// Yank far outside every lane.
		s.drag_to(Point::new(-5000.0, 9000.0));
		s.end_drag();

		let pos = s.layout.positions["swift-gateway"];
		let bounds = s.layout.bounds["origination"];
		let (w, h) = s.node_size();
		assert!(pos.x >= bounds.left + w / 2.0 - 1e-9);
		assert!(pos.x <= bounds.right - w / 2.0 + 1e-9);
		assert!(pos.y >= bounds.top + h / 2.0 - 1e-9);
		assert!(pos.y <= bounds.bottom - h / 2.0 + 1e-9);
	}

	#[test]
	fn drag_preserves_grab_offset() {
		let mut s = state();
		let start = s.layout.positions["gpo"];
		let grab = Point::new(start.x + 10.0, start.y + 5.0);
		s.begin_drag("gpo", grab);
		s.drag_to(Point::new(grab.x + 20.0, grab.y + 20.0));
		let pos = s.layout.positions["gpo"];
		assert!((pos.x - (start.x + 20.0)).abs() < 1e-9);
		assert!((pos.y - (start.y + 20.0)).abs() < 1e-9);
	}

	#[test]
	fn relayout_discards_dragged_positions() {
		let mut s = state();
		let home = s.layout.positions["gpo"];
		s.begin_drag("gpo", home);
		s.drag_to(Point::new(home.x + 30.0, home.y + 30.0));
		s.end_drag();
		assert_ne!(s.layout.positions["gpo"], home);
		s.reset_view();
		assert_eq!(s.layout.positions["gpo"], home);
	}

	#[test]
	fn connect_appends_exactly_one_edge_with_matching_endpoints() {
		let mut s = state();
		let before = s.connections.len();
		s.begin_connect("gpo", HandleSide::Right);
		assert!(s.connect.active);
		s.connect_move(Point::new(900.0, 300.0));
		let added = s.finish_connect(Some(("rpi", HandleSide::Left)), 1234.0);
		assert!(added);
		assert_eq!(s.connections.len(), before + 1);
		let conn = s.connections.last().unwrap();
		assert_eq!(conn.source, "gpo");
		assert_eq!(conn.target, "rpi");
		assert!(!s.connect.active);
	}

	#[test]
	fn self_loops_are_rejected() {
		let mut s = state();
		let before = s.connections.len();
		s.begin_connect("gpo", HandleSide::Bottom);
		assert!(!s.finish_connect(Some(("gpo", HandleSide::Top)), 1.0));
		assert_eq!(s.connections.len(), before);
	}

	#[test]
	fn releasing_on_empty_canvas_clears_the_gesture() {
		let mut s = state();
		let before = s.connections.len();
		s.begin_connect("gpo", HandleSide::Right);
		assert!(!s.finish_connect(None, 1.0));
		assert!(!s.connect.active);
		assert_eq!(s.connections.len(), before);
	}

	#[test]
	fn target_typed_handles_cannot_originate() {
		let mut s = state();
		s.begin_connect("gpo", HandleSide::Top);
		assert!(!s.connect.active);
	}

	#[test]
	fn dropping_on_a_source_handle_does_not_connect() {
		let mut s = state();
		let before = s.connections.len();
		s.begin_connect("gpo", HandleSide::Right);
		assert!(!s.finish_connect(Some(("rpi", HandleSide::Bottom)), 1.0));
		assert_eq!(s.connections.len(), before);
	}

	#[test]
	fn confirmed_delete_removes_exactly_that_edge() {
		let mut s = state();
		let before = s.connections.len();
		s.select_connection("gpo-rpi");
		s.on_delete_key();
		assert_eq!(s.pending_delete.as_deref(), Some("gpo-rpi"));
		s.confirm_delete();
		assert_eq!(s.connections.len(), before - 1);
		assert!(!s.connections.iter().any(|c| c.id == "gpo-rpi"));
		assert_eq!(s.selected, None);
	}

	#[test]
	fn cancelled_delete_leaves_connections_unchanged() {
		let mut s = state();
		let before = s.connections.clone();
		s.select_connection("gpo-rpi");
		s.on_delete_key();
		s.cancel_delete();
		assert_eq!(s.connections, before);
		assert_eq!(s.pending_delete, None);
	}

	#[test]
	fn dismissing_the_menu_keeps_the_connection() {
		let mut s = state();
		let before = s.connections.clone();
		s.open_context_menu("gpo-rpi", Point::new(100.0, 100.0));
		s.close_context_menu();
		s.tick(1.0);
		assert!(s.context_menu.is_none());
		assert_eq!(s.pending_delete, None);
		assert_eq!(s.connections, before);
	}

	#[test]
	fn escape_clears_selection_and_overlays() {
		let mut s = state();
		s.open_context_menu("gpo-rpi", Point::new(100.0, 100.0));
		assert!(s.context_menu.is_some());
		s.on_escape();
		assert_eq!(s.selected, None);
		// Menu state is torn down once its exit animation completes.
		s.tick(1.0);
		assert!(s.context_menu.is_none());
	}

	#[test]
	fn collapse_hides_members_but_keeps_positions() {
		let mut s = state();
		let before = s.layout.positions["rpi"];
		s.toggle_lane("middleware");
		assert!(s.is_hidden("rpi"));
		assert!(s.visible_systems().all(|n| n.lane != "middleware"));
		assert_eq!(s.layout.positions["rpi"], before);
		s.toggle_lane("middleware");
		assert!(!s.is_hidden("rpi"));
		assert_eq!(s.layout.positions["rpi"], before);
	}

	#[test]
	fn collapsed_nodes_are_excluded_from_hit_testing() {
		let mut s = state();
		let pos = s.layout.positions["rpi"];
		let scale = scaled(&s);
		assert_eq!(s.hit_test(pos, &scale), Hit::Node("rpi".to_string()));
		s.toggle_lane("middleware");
		assert_ne!(s.hit_test(pos, &scale), Hit::Node("rpi".to_string()));
	}

	#[test]
	fn hit_priority_prefers_handles_over_the_node_body() {
		let s = state();
		let rect = s.node_rect("gpo").unwrap();
		let scale = scaled(&s);
		let hit = s.hit_test(HandleSide::Right.anchor(rect), &scale);
		assert_eq!(
			hit,
			Hit::Handle {
				node_id: "gpo".to_string(),
				side: HandleSide::Right
			}
		);
	}

	#[test]
	fn edges_are_hit_along_their_curve() {
		use crate::components::flow_diagram::types::{
			Connection, FlowData, Lane, StatusSet, SystemNode,
		};

		// One node per lane, so the curve midpoint is over open canvas.
		let node = |id: &str, lane: &str| SystemNode {
			id: id.to_string(),
			name: id.to_string(),
			ait_number: "AIT 1".to_string(),
			lane: lane.to_string(),
			description: None,
			status: StatusSet::default(),
		};
		let lane = |id: &str, member: &str| Lane {
			id: id.to_string(),
			title: id.to_string(),
			color: 0,
			systems: vec![member.to_string()],
		};
		let data = FlowData {
			systems: vec![node("a", "first"), node("b", "second")],
			connections: vec![Connection::interactive("a", "b", 0.0)],
		};
		let s = DiagramState::new(data, vec![lane("first", "a"), lane("second", "b")], 1400.0, 900.0);

		let conn = &s.connections[0];
		let (from, to) = s.edge_endpoints(conn).unwrap();
		let mid = super::super::geometry::EdgePath::between(from, to).point_at(0.5);
		let scale = scaled(&s);
		assert_eq!(s.hit_test(mid, &scale), Hit::Edge(conn.id.clone()));
	}

	#[test]
	fn search_filters_and_highlights() {
		let mut s = state();
		s.search = Some(SearchResult {
			payment_id: "262540610024186".to_string(),
			path: data::mock_search_path(),
		});
		assert!(s.is_hidden("loan-iq"));
		assert!(!s.is_hidden("psh"));
		assert!(s.on_search_path("wtx"));
		let psh_mrp = s.connections.iter().find(|c| c.id == "psh-mrp").unwrap();
		assert!(s.edge_highlighted(psh_mrp));
		let buttons = s.shown_buttons("psh");
		assert!(buttons.contains(&NodeButton::Summary));
		assert!(buttons.contains(&NodeButton::Details));
	}

	#[test]
	fn lane_headers_resolve_by_horizontal_position() {
		let s = state();
		let bounds = s.layout.bounds["validation"];
		let hit = s.lane_header_at(Point::new(bounds.center().x, 25.0));
		assert_eq!(hit.as_deref(), Some("validation"));
		assert_eq!(s.lane_header_at(Point::new(bounds.center().x, 200.0)), None);
	}

	#[test]
	fn edit_buttons_follow_hover() {
		let mut s = state();
		assert!(s.shown_buttons("gpo").is_empty());
		s.hovered = Some("gpo".to_string());
		assert_eq!(s.shown_buttons("gpo"), vec![NodeButton::Edit]);
	}

	#[test]
	fn apply_edit_rewrites_the_stored_node() {
		let mut s = state();
		let mut draft = NodeDraft::from_node(s.system("gpo").unwrap());
		draft.name = "Global Payments Orchestrator".to_string();
		assert!(s.apply_edit("gpo", &draft));
		assert_eq!(s.system("gpo").unwrap().name, "Global Payments Orchestrator");
		assert!(!s.apply_edit("nope", &draft));
	}

	#[test]
	fn pan_moves_the_transform_in_world_units() {
		let mut s = state();
		s.begin_pan(Point::new(100.0, 100.0));
		s.pan_to(Point::new(160.0, 130.0));
		s.end_pan();
		assert!((s.transform.pan.x - 60.0).abs() < 1e-9);
		assert!((s.transform.pan.y - 30.0).abs() < 1e-9);
	}
}