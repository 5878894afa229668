//! Entrance and overlay animation state machines.
//!
//! Every animated entity runs an explicit finite state machine advanced by
//! the frame tick, so an interrupted timeline can never fire a completion
//! twice or leave a dangling callback: terminal events are emitted exactly
//! once, on the tick that enters the terminal state.

use std::collections::HashMap;

use super::types::{Connection, Lane};

/// Smooth ease (3t^2 - 2t^3) shared by all timelines.
pub fn smooth_step(t: f64) -> f64 {
	let t = t.clamp(0.0, 1.0);
	t * t * (3.0 - 2.0 * t)
}

/// Stagger between consecutive lanes, seconds.
const LANE_STAGGER: f64 = 0.15;
/// Stagger between slots within a lane, seconds.
const SLOT_STAGGER: f64 = 0.05;
/// Time a node spends entering.
const NODE_DURATION: f64 = 0.45;
/// Edge draw-in time at flow rate 1; higher rates draw in faster.
const EDGE_BASE_DURATION: f64 = 1.25;

/// Where a node is in its entrance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EntrancePhase {
	/// Delay not yet elapsed; the node is not drawn.
	Pending,
	/// Animating in; eased progress in 0..1.
	Entering(f64),
	/// At rest.
	Settled,
}

impl EntrancePhase {
	/// Visual progress: 0 while pending, eased t while entering, 1 settled.
	pub fn progress(self) -> f64 {
		match self {
			EntrancePhase::Pending => 0.0,
			EntrancePhase::Entering(t) => t,
			EntrancePhase::Settled => 1.0,
		}
	}
}

/// One-shot entrance timeline for all nodes and edges, staggered by lane
/// index then by slot within the lane.
#[derive(Clone, Debug, Default)]
pub struct EntranceTimeline {
	time: f64,
	delays: HashMap<String, f64>,
}

impl EntranceTimeline {
	pub fn new(lanes: &[Lane]) -> Self {
		let mut delays = HashMap::new();
		for (lane_index, lane) in lanes.iter().enumerate() {
			for (slot, id) in lane.systems.iter().enumerate() {
				delays.insert(
					id.clone(),
					lane_index as f64 * LANE_STAGGER + slot as f64 * SLOT_STAGGER,
				);
			}
		}
		Self { time: 0.0, delays }
	}

	/// Advance the shared clock.
	pub fn tick(&mut self, dt: f64) {
		self.time += dt;
	}

	/// Rewind to the beginning for an explicit replay.
	pub fn restart(&mut self) {
		self.time = 0.0;
	}

	pub fn node_phase(&self, id: &str) -> EntrancePhase {
		// Nodes created outside the staggered set (none today) enter at once.
		let delay = self.delays.get(id).copied().unwrap_or(0.0);
		let local = self.time - delay;
		if local <= 0.0 {
			EntrancePhase::Pending
		} else if local < NODE_DURATION {
			EntrancePhase::Entering(smooth_step(local / NODE_DURATION))
		} else {
			EntrancePhase::Settled
		}
	}

	/// Edge draw-in progress in 0..1. The stroke starts once the later of the
	/// two endpoints has settled and is paced by the connection's flow rate.
	pub fn edge_progress(&self, conn: &Connection) -> f64 {
		let start = self
			.delays
			.get(&conn.source)
			.copied()
			.unwrap_or(0.0)
			.max(self.delays.get(&conn.target).copied().unwrap_or(0.0))
			+ NODE_DURATION;
		let duration = EDGE_BASE_DURATION / conn.flow_rate.clamp(1, 5) as f64;
		smooth_step((self.time - start) / duration)
	}

	/// True once every node has settled (edges may still be drawing in).
	pub fn nodes_settled(&self) -> bool {
		self.delays
			.values()
			.all(|delay| self.time - delay >= NODE_DURATION)
	}
}

/// Lifecycle of a pop-in overlay (context menu, confirmation modal).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayPhase {
	Closed,
	Opening,
	Open,
	Closing,
}

/// Emitted by [`OverlayFsm::tick`] when a terminal state is entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayEvent {
	/// The exit animation finished; the overlay may be torn down now.
	Closed,
}

/// Open/close state machine for one overlay.
///
/// `Closed` is only reached through `Closing`, and the `Closed` event fires
/// on exactly the tick that reaches it, so a close callback wired to the
/// event runs once even if open/close are interleaved mid-animation.
#[derive(Clone, Copy, Debug)]
pub struct OverlayFsm {
	phase: OverlayPhase,
	t: f64,
	duration: f64,
}

impl OverlayFsm {
	pub fn new(duration: f64) -> Self {
		Self {
			phase: OverlayPhase::Closed,
			t: 0.0,
			duration,
		}
	}

	pub fn phase(&self) -> OverlayPhase {
		self.phase
	}

	/// Anything to draw at all?
	pub fn is_visible(&self) -> bool {
		self.phase != OverlayPhase::Closed
	}

	/// Eased visibility in 0..1 for opacity/scale styling.
	pub fn progress(&self) -> f64 {
		match self.phase {
			OverlayPhase::Closed => 0.0,
			OverlayPhase::Open => 1.0,
			OverlayPhase::Opening | OverlayPhase::Closing => smooth_step(self.t / self.duration),
		}
	}

	pub fn open(&mut self) {
		match self.phase {
			OverlayPhase::Closed => {
				self.phase = OverlayPhase::Opening;
				self.t = 0.0;
			}
			// Reverse mid-flight without a visual jump.
			OverlayPhase::Closing => {
				self.phase = OverlayPhase::Opening;
			}
			OverlayPhase::Opening | OverlayPhase::Open => {}
		}
	}

	pub fn close(&mut self) {
		match self.phase {
			OverlayPhase::Open => {
				self.phase = OverlayPhase::Closing;
				self.t = self.duration;
			}
			OverlayPhase::Opening => {
				self.phase = OverlayPhase::Closing;
			}
			OverlayPhase::Closed | OverlayPhase::Closing => {}
		}
	}

	pub fn tick(&mut self, dt: f64) -> Option<OverlayEvent> {
		match self.phase {
			OverlayPhase::Opening => {
				self.t += dt;
				if self.t >= self.duration {
					self.phase = OverlayPhase::Open;
					self.t = self.duration;
				}
				None
			}
			OverlayPhase::Closing => {
				self.t -= dt;
				if self.t <= 0.0 {
					self.phase = OverlayPhase::Closed;
					self.t = 0.0;
					return Some(OverlayEvent::Closed);
				}
				None
			}
			OverlayPhase::Closed | OverlayPhase::Open => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::flow_diagram::data;
	use crate::components::flow_diagram::types::Connection;

	fn timeline() -> EntranceTimeline {
		EntranceTimeline::new(&data::lanes())
	}

	#[test]
	fn later_lanes_enter_later() {
		let mut tl = timeline();
		tl.tick(0.05);
		// First slot of the first lane is already entering, the processing
		// lane (index 3) is still pending.
		assert!(matches!(tl.node_phase("swift-gateway"), EntrancePhase::Entering(_)));
		assert_eq!(tl.node_phase("gbs-aries"), EntrancePhase::Pending);
	}

	#[test]
	fn nodes_settle_after_delay_plus_duration() {
		let mut tl = timeline();
		tl.tick(10.0);
		assert!(tl.nodes_settled());
		assert_eq!(tl.node_phase("rtfp"), EntrancePhase::Settled);
		tl.restart();
		assert_eq!(tl.node_phase("swift-gateway"), EntrancePhase::Pending);
	}

	#[test]
	fn edge_waits_for_its_later_endpoint() {
		let mut tl = timeline();
		// gpo (lane 1, slot 1) settles well before rpi (lane 2, slot 0).
		let conn = Connection::interactive("gpo", "rpi", 0.0);
		tl.tick(0.40);
		assert_eq!(tl.edge_progress(&conn), 0.0);
		tl.tick(10.0);
		assert_eq!(tl.edge_progress(&conn), 1.0);
	}

	#[test]
	fn higher_flow_rate_draws_in_faster() {
		let mut tl = timeline();
		let mut slow = Connection::interactive("gpo", "rpi", 0.0);
		let mut fast = slow.clone();
		slow.flow_rate = 1;
		fast.flow_rate = 5;
		tl.tick(1.0);
		assert!(tl.edge_progress(&fast) >= tl.edge_progress(&slow));
	}

	#[test]
	fn overlay_fires_closed_exactly_once() {
		let mut fsm = OverlayFsm::new(0.2);
		fsm.open();
		assert_eq!(fsm.tick(1.0), None);
		assert_eq!(fsm.phase(), OverlayPhase::Open);
		fsm.close();
		let mut events = 0;
		for _ in 0..10 {
			if fsm.tick(0.05) == Some(OverlayEvent::Closed) {
				events += 1;
			}
		}
		assert_eq!(events, 1);
		assert_eq!(fsm.phase(), OverlayPhase::Closed);
	}

	#[test]
	fn reopening_mid_close_does_not_fire_closed() {
		let mut fsm = OverlayFsm::new(0.2);
		fsm.open();
		fsm.tick(1.0);
		fsm.close();
		fsm.tick(0.05);
		fsm.open();
		for _ in 0..20 {
			assert_eq!(fsm.tick(0.05), None);
		}
		assert_eq!(fsm.phase(), OverlayPhase::Open);
	}
}
