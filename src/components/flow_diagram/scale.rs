//! Zoom-dependent sizing for diagram visuals.
//!
//! World-space sizes scale with the view transform; screen-space sizes
//! (strokes, fonts, hit corridors) must be divided by the zoom factor `k`
//! before drawing under the transform so they stay a constant pixel size.

/// How a visual size responds to zoom.
#[derive(Clone, Copy, Debug)]
pub enum ScaleBehavior {
	/// Constant world-space size; appears larger when zoomed in.
	World,
	/// Constant screen-space size (pixels), unaffected by zoom.
	Screen,
}

impl ScaleBehavior {
	/// World-space value to draw with, for a base size and zoom `k`.
	pub fn apply(self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::World => base,
			ScaleBehavior::Screen => base / k,
		}
	}
}

/// Base sizes for everything the renderer draws, before zoom is applied.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	/// Visible edge stroke width in screen pixels.
	pub edge_width: f64,
	/// Selected/highlighted edge stroke width in screen pixels.
	pub edge_width_emphasis: f64,
	/// Width of the invisible click corridor around an edge, screen pixels.
	pub edge_hit_width: f64,
	/// Connection handle radius in screen pixels.
	pub handle_radius: f64,
	/// Extra slop added to handle hit testing, screen pixels.
	pub handle_hit_slop: f64,
	/// Arrowhead length in screen pixels.
	pub arrow_size: f64,
	/// Node border stroke in screen pixels.
	pub node_border: f64,
	/// Name label font size in screen pixels.
	pub name_font: f64,
	/// AIT tag and badge font size in screen pixels.
	pub small_font: f64,
	/// Lane title font size in screen pixels.
	pub lane_font: f64,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			edge_width: 2.0,
			edge_width_emphasis: 3.5,
			edge_hit_width: 12.0,
			handle_radius: 6.0,
			handle_hit_slop: 4.0,
			arrow_size: 9.0,
			node_border: 2.0,
			name_font: 13.0,
			small_font: 10.0,
			lane_font: 13.0,
		}
	}
}

/// Pre-computed world-space values for one frame at zoom `k`.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	pub k: f64,
	pub edge_width: f64,
	pub edge_width_emphasis: f64,
	pub edge_hit_width: f64,
	pub handle_radius: f64,
	pub handle_hit_radius: f64,
	pub arrow_size: f64,
	pub node_border: f64,
	pub name_font: String,
	pub small_font: String,
	pub lane_font: String,
}

impl ScaledValues {
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		let px = |base: f64| ScaleBehavior::Screen.apply(base, k);
		Self {
			k,
			edge_width: px(config.edge_width),
			edge_width_emphasis: px(config.edge_width_emphasis),
			edge_hit_width: px(config.edge_hit_width),
			handle_radius: px(config.handle_radius),
			handle_hit_radius: px(config.handle_radius + config.handle_hit_slop),
			arrow_size: px(config.arrow_size),
			node_border: px(config.node_border),
			name_font: format!("600 {:.1}px sans-serif", px(config.name_font)),
			small_font: format!("{:.1}px sans-serif", px(config.small_font)),
			lane_font: format!("700 {:.1}px sans-serif", px(config.lane_font)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn screen_sizes_counteract_zoom() {
		let config = ScaleConfig::default();
		let zoomed = ScaledValues::new(&config, 2.0);
		assert!((zoomed.edge_hit_width - config.edge_hit_width / 2.0).abs() < 1e-9);
		assert!((zoomed.handle_radius - 3.0).abs() < 1e-9);
	}

	#[test]
	fn hit_radius_exceeds_visual_radius() {
		let v = ScaledValues::new(&ScaleConfig::default(), 1.0);
		assert!(v.handle_hit_radius > v.handle_radius);
		assert!(v.edge_hit_width > v.edge_width);
	}
}
