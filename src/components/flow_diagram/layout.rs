//! Swim-lane layout: lane rectangles and the per-lane node grid.
//!
//! Layout runs on mount, on viewport resize, and on view reset. It always
//! recomputes from scratch, so a relayout snaps nodes back to their grid
//! cells and discards user-dragged positions.

use std::collections::HashMap;

use super::geometry::{Point, Rect};
use super::types::Lane;

/// Unscaled node box extent in world units.
pub const NODE_WIDTH: f64 = 140.0;
/// Unscaled node box height in world units.
pub const NODE_HEIGHT: f64 = 100.0;

/// Vertical space reserved for the lane header strip.
pub const HEADER_HEIGHT: f64 = 50.0;

/// Responsive node scale: full size on wide viewports, down to 60% on
/// narrow ones.
pub fn responsive_scale(viewport_width: f64) -> f64 {
	(viewport_width / 1400.0).clamp(0.6, 1.0)
}

/// The computed layout: one rectangle per lane plus a grid position for
/// every member system.
#[derive(Clone, Debug, Default)]
pub struct LaneLayout {
	pub bounds: HashMap<String, Rect>,
	pub positions: HashMap<String, Point>,
}

/// Divide the available width evenly among lanes (minus a small padding
/// margin) and place each lane's systems in a near-square grid, one system
/// per cell center.
pub fn compute(lanes: &[Lane], width: f64, height: f64) -> LaneLayout {
	let mut layout = LaneLayout::default();
	if lanes.is_empty() {
		return layout;
	}

	let lane_width = width / lanes.len() as f64;
	let padding = (width * 0.01).max(10.0);

	for (lane_index, lane) in lanes.iter().enumerate() {
		let rect = Rect::new(
			lane_index as f64 * lane_width + padding,
			HEADER_HEIGHT + padding,
			(lane_index + 1) as f64 * lane_width - padding,
			height - padding,
		);
		layout.bounds.insert(lane.id.clone(), rect);

		let count = lane.systems.len();
		if count == 0 {
			continue;
		}
		let cols = ((count as f64).sqrt().floor() as usize).max(1);
		let rows = count.div_ceil(cols);
		let cell_w = rect.width() / cols as f64;
		let cell_h = rect.height() / rows as f64;

		for (slot, id) in lane.systems.iter().enumerate() {
			let (row, col) = (slot / cols, slot % cols);
			layout.positions.insert(
				id.clone(),
				Point::new(
					rect.left + (col as f64 + 0.5) * cell_w,
					rect.top + (row as f64 + 0.5) * cell_h,
				),
			);
		}
	}

	layout
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::flow_diagram::data;

	#[test]
	fn every_system_gets_a_position_inside_its_lane() {
		let lanes = data::lanes();
		let layout = compute(&lanes, 1400.0, 900.0);
		for lane in &lanes {
			let rect = layout.bounds[&lane.id];
			for id in &lane.systems {
				let pos = layout.positions[id];
				assert!(rect.contains(pos), "{} at {:?} outside {:?}", id, pos, rect);
			}
		}
	}

	#[test]
	fn lanes_split_the_width_evenly() {
		let lanes = data::lanes();
		let layout = compute(&lanes, 1600.0, 900.0);
		let widths: Vec<f64> = lanes
			.iter()
			.map(|l| layout.bounds[&l.id].width())
			.collect();
		for w in &widths {
			assert!((w - widths[0]).abs() < 1e-9);
		}
	}

	#[test]
	fn grid_shape_is_near_square() {
		// 6 systems -> 2 columns x 3 rows: two distinct x values, three y values.
		let lanes = data::lanes();
		let layout = compute(&lanes, 1400.0, 900.0);
		let validation = &lanes[1];
		assert_eq!(validation.systems.len(), 6);
		let mut xs: Vec<i64> = validation
			.systems
			.iter()
			.map(|id| layout.positions[id].x.round() as i64)
			.collect();
		xs.sort_unstable();
		xs.dedup();
		assert_eq!(xs.len(), 2);
	}

	#[test]
	fn relayout_is_deterministic() {
		let lanes = data::lanes();
		let a = compute(&lanes, 1280.0, 720.0);
		let b = compute(&lanes, 1280.0, 720.0);
		assert_eq!(a.positions["gpo"], b.positions["gpo"]);
	}

	#[test]
	fn responsive_scale_clamps() {
		assert_eq!(responsive_scale(2800.0), 1.0);
		assert_eq!(responsive_scale(140.0), 0.6);
		assert!((responsive_scale(1120.0) - 0.8).abs() < 1e-9);
	}
}
