//! Visual theming for the swim-lane diagram.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Fill, dashed border, and header tint for one lane.
#[derive(Clone, Copy, Debug)]
pub struct LaneStyle {
	pub fill: Color,
	pub border: Color,
	pub header: Color,
}

/// Four fixed lane color tokens, indexed by `Lane::color`.
pub fn lane_styles() -> [LaneStyle; 4] {
	let style = |base: Color| LaneStyle {
		fill: base.with_alpha(0.16),
		border: base.with_alpha(0.55),
		header: base.with_alpha(0.35),
	};
	[
		style(Color::rgb(59, 130, 246)),  // blue
		style(Color::rgb(34, 197, 94)),   // green
		style(Color::rgb(234, 179, 8)),   // amber
		style(Color::rgb(168, 85, 247)),  // purple
	]
}

/// Node box styling.
#[derive(Clone, Copy, Debug)]
pub struct NodeStyle {
	pub fill: Color,
	pub border: Color,
	pub border_highlight: Color,
	pub name_color: Color,
	pub ait_color: Color,
	pub corner_radius: f64,
	pub shadow: Color,
}

/// Connection stroke colors for each visual state.
#[derive(Clone, Copy, Debug)]
pub struct EdgeStyle {
	pub color: Color,
	pub highlighted: Color,
	pub selected: Color,
	pub temporary: Color,
	pub critical: Color,
}

/// Colors for the three-valued status badges.
#[derive(Clone, Copy, Debug)]
pub struct BadgeStyle {
	pub active: Color,
	pub warning: Color,
	pub error: Color,
	pub text: Color,
}

/// Connection handle dots.
#[derive(Clone, Copy, Debug)]
pub struct HandleStyle {
	pub fill: Color,
	pub ring: Color,
}

/// Complete diagram theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub background: Color,
	pub background_secondary: Color,
	pub node: NodeStyle,
	pub edge: EdgeStyle,
	pub badge: BadgeStyle,
	pub handle: HandleStyle,
	pub lane_title: Color,
	pub button_fill: Color,
	pub button_text: Color,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			// Warm backdrop, matching the dashboard's orange wash.
			background: Color::rgb(255, 237, 213),
			background_secondary: Color::rgb(254, 215, 170),
			node: NodeStyle {
				fill: Color::rgb(255, 255, 255),
				border: Color::rgb(209, 213, 219),
				border_highlight: Color::rgb(59, 130, 246),
				name_color: Color::rgb(31, 41, 55),
				ait_color: Color::rgb(75, 85, 99),
				corner_radius: 8.0,
				shadow: Color::rgba(0, 0, 0, 0.12),
			},
			edge: EdgeStyle {
				color: Color::rgb(55, 65, 81),
				highlighted: Color::rgb(59, 130, 246),
				selected: Color::rgb(239, 68, 68),
				temporary: Color::rgb(16, 185, 129),
				critical: Color::rgb(220, 38, 38),
			},
			badge: BadgeStyle {
				active: Color::rgb(34, 197, 94),
				warning: Color::rgb(245, 158, 11),
				error: Color::rgb(239, 68, 68),
				text: Color::rgb(255, 255, 255),
			},
			handle: HandleStyle {
				fill: Color::rgb(59, 130, 246),
				ring: Color::rgb(255, 255, 255),
			},
			lane_title: Color::rgb(31, 41, 55),
			button_fill: Color::rgb(37, 99, 235),
			button_text: Color::rgb(255, 255, 255),
		}
	}
}

impl Theme {
	/// Badge color for a status value.
	pub fn status_color(&self, status: crate::components::flow_diagram::types::Status) -> Color {
		use crate::components::flow_diagram::types::Status;
		match status {
			Status::Active => self.badge.active,
			Status::Warning => self.badge.warning,
			Status::Error => self.badge.error,
		}
	}
}
