//! Coordinate types and hit-test geometry for the diagram.
//!
//! # Coordinate Spaces
//!
//! - **World-space**: the layout coordinate system nodes and lanes live in.
//! - **Screen-space**: canvas pixels. [`ViewTransform`] maps between the two;
//!   zoom is applied about the canvas center, matching a CSS
//!   `scale(k) translate(pan)` with a centered transform origin.

/// A 2-D point, in whichever space the context dictates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance_to(self, other: Point) -> f64 {
		let (dx, dy) = (other.x - self.x, other.y - self.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	pub left: f64,
	pub top: f64,
	pub right: f64,
	pub bottom: f64,
}

impl Rect {
	pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
		Self {
			left,
			top,
			right,
			bottom,
		}
	}

	pub fn from_center(center: Point, width: f64, height: f64) -> Self {
		Self {
			left: center.x - width / 2.0,
			top: center.y - height / 2.0,
			right: center.x + width / 2.0,
			bottom: center.y + height / 2.0,
		}
	}

	pub fn width(&self) -> f64 {
		self.right - self.left
	}

	pub fn height(&self) -> f64 {
		self.bottom - self.top
	}

	pub fn center(&self) -> Point {
		Point::new(
			(self.left + self.right) / 2.0,
			(self.top + self.bottom) / 2.0,
		)
	}

	pub fn contains(&self, p: Point) -> bool {
		p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
	}

	/// Shrink each edge inward by the given margins. Collapses to the center
	/// line if the margins exceed the extent.
	pub fn inset(&self, dx: f64, dy: f64) -> Self {
		let cx = (self.left + self.right) / 2.0;
		let cy = (self.top + self.bottom) / 2.0;
		Self {
			left: (self.left + dx).min(cx),
			right: (self.right - dx).max(cx),
			top: (self.top + dy).min(cy),
			bottom: (self.bottom - dy).max(cy),
		}
	}

	/// Clamp a point into this rectangle (inclusive of the boundary).
	pub fn clamp(&self, p: Point) -> Point {
		Point::new(p.x.clamp(self.left, self.right), p.y.clamp(self.top, self.bottom))
	}
}

/// Pan and zoom applied as a single transform about the canvas center.
#[derive(Clone, Copy, Debug)]
pub struct ViewTransform {
	/// Zoom factor, clamped to [`MIN_ZOOM`]..=[`MAX_ZOOM`].
	pub k: f64,
	pub pan: Point,
}

/// Zoom bounds; repeated zoom actions saturate here.
pub const MIN_ZOOM: f64 = 0.3;
pub const MAX_ZOOM: f64 = 3.0;
/// Multiplier applied per zoom-in/out action.
pub const ZOOM_STEP: f64 = 1.2;

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			k: 1.0,
			pan: Point::default(),
		}
	}
}

impl ViewTransform {
	pub fn to_screen(&self, world: Point, center: Point) -> Point {
		Point::new(
			center.x + (world.x + self.pan.x - center.x) * self.k,
			center.y + (world.y + self.pan.y - center.y) * self.k,
		)
	}

	pub fn to_world(&self, screen: Point, center: Point) -> Point {
		Point::new(
			(screen.x - center.x) / self.k + center.x - self.pan.x,
			(screen.y - center.y) / self.k + center.y - self.pan.y,
		)
	}

	pub fn zoom_in(&mut self) {
		self.k = (self.k * ZOOM_STEP).clamp(MIN_ZOOM, MAX_ZOOM);
	}

	pub fn zoom_out(&mut self) {
		self.k = (self.k / ZOOM_STEP).clamp(MIN_ZOOM, MAX_ZOOM);
	}

	/// Wheel zoom that keeps the world point under `screen` fixed.
	pub fn zoom_at(&mut self, screen: Point, center: Point, zoom_in: bool) {
		let anchor = self.to_world(screen, center);
		if zoom_in {
			self.zoom_in();
		} else {
			self.zoom_out();
		}
		let after = self.to_world(screen, center);
		self.pan.x += after.x - anchor.x;
		self.pan.y += after.y - anchor.y;
	}

	pub fn reset(&mut self) {
		*self = Self::default();
	}
}

/// Which border of a node a connection handle sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleSide {
	Top,
	Bottom,
	Left,
	Right,
}

/// Whether a handle can originate or terminate a connect gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleRole {
	Source,
	Target,
}

impl HandleSide {
	pub const ALL: [HandleSide; 4] = [
		HandleSide::Top,
		HandleSide::Bottom,
		HandleSide::Left,
		HandleSide::Right,
	];

	/// Top/left handles only accept, bottom/right only originate. The
	/// asymmetry is intentional: sample flows run left-to-right and
	/// top-to-bottom.
	pub fn role(self) -> HandleRole {
		match self {
			HandleSide::Top | HandleSide::Left => HandleRole::Target,
			HandleSide::Bottom | HandleSide::Right => HandleRole::Source,
		}
	}

	/// Handle anchor point: the midpoint of this side of the node box.
	pub fn anchor(self, node: Rect) -> Point {
		let c = node.center();
		match self {
			HandleSide::Top => Point::new(c.x, node.top),
			HandleSide::Bottom => Point::new(c.x, node.bottom),
			HandleSide::Left => Point::new(node.left, c.y),
			HandleSide::Right => Point::new(node.right, c.y),
		}
	}
}

/// Clickable affordances inside a node box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeButton {
	/// Opens the transaction summary table.
	Summary,
	/// Opens the per-system log detail.
	Details,
	/// Opens the node edit form.
	Edit,
}

/// World-space rectangle of a node button within its node box.
pub fn button_rect(node: Rect, button: NodeButton) -> Rect {
	match button {
		NodeButton::Edit => Rect::new(node.right - 20.0, node.top + 4.0, node.right - 4.0, node.top + 20.0),
		NodeButton::Summary => {
			let half = node.center().x;
			Rect::new(node.left + 8.0, node.bottom - 26.0, half - 4.0, node.bottom - 8.0)
		}
		NodeButton::Details => {
			let half = node.center().x;
			Rect::new(half + 4.0, node.bottom - 26.0, node.right - 8.0, node.bottom - 8.0)
		}
	}
}

/// Cubic Bezier path of a connection, per the dashboard's S-curve rule:
/// control points sit at 30% and 70% of the horizontal span, pinned to the
/// source's and target's vertical coordinate respectively.
#[derive(Clone, Copy, Debug)]
pub struct EdgePath {
	pub p0: Point,
	pub c1: Point,
	pub c2: Point,
	pub p1: Point,
}

/// Samples used for length and distance approximations.
const CURVE_SAMPLES: usize = 32;

impl EdgePath {
	pub fn between(source: Point, target: Point) -> Self {
		let span = target.x - source.x;
		Self {
			p0: source,
			c1: Point::new(source.x + span * 0.3, source.y),
			c2: Point::new(source.x + span * 0.7, target.y),
			p1: target,
		}
	}

	pub fn point_at(&self, t: f64) -> Point {
		let u = 1.0 - t;
		let (b0, b1, b2, b3) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
		Point::new(
			b0 * self.p0.x + b1 * self.c1.x + b2 * self.c2.x + b3 * self.p1.x,
			b0 * self.p0.y + b1 * self.c1.y + b2 * self.c2.y + b3 * self.p1.y,
		)
	}

	/// Approximate arc length from sampled chords.
	pub fn length(&self) -> f64 {
		let mut len = 0.0;
		let mut prev = self.p0;
		for i in 1..=CURVE_SAMPLES {
			let p = self.point_at(i as f64 / CURVE_SAMPLES as f64);
			len += prev.distance_to(p);
			prev = p;
		}
		len
	}

	/// Minimum distance from `p` to the sampled curve. Stands in for the
	/// invisible widened stroke the hit area would otherwise need.
	pub fn distance_to(&self, p: Point) -> f64 {
		let mut best = f64::INFINITY;
		let mut prev = self.p0;
		for i in 1..=CURVE_SAMPLES {
			let next = self.point_at(i as f64 / CURVE_SAMPLES as f64);
			best = best.min(segment_distance(p, prev, next));
			prev = next;
		}
		best
	}
}

fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
	let (abx, aby) = (b.x - a.x, b.y - a.y);
	let len_sq = abx * abx + aby * aby;
	if len_sq < 1e-12 {
		return p.distance_to(a);
	}
	let t = (((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq).clamp(0.0, 1.0);
	p.distance_to(Point::new(a.x + abx * t, a.y + aby * t))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clamp_keeps_interior_points_and_snaps_exterior_ones() {
		let r = Rect::new(10.0, 20.0, 110.0, 120.0);
		assert_eq!(r.clamp(Point::new(50.0, 60.0)), Point::new(50.0, 60.0));
		assert_eq!(r.clamp(Point::new(-5.0, 300.0)), Point::new(10.0, 120.0));
	}

	#[test]
	fn inset_never_inverts_the_rect() {
		let r = Rect::new(0.0, 0.0, 40.0, 40.0);
		let tight = r.inset(100.0, 100.0);
		assert!(tight.left <= tight.right);
		assert!(tight.top <= tight.bottom);
		assert_eq!(tight.center(), r.center());
	}

	#[test]
	fn transform_round_trips_under_zoom_and_pan() {
		let mut t = ViewTransform::default();
		let center = Point::new(600.0, 400.0);
		t.zoom_in();
		t.zoom_in();
		t.pan = Point::new(37.0, -12.0);
		let world = Point::new(123.0, 456.0);
		let back = t.to_world(t.to_screen(world, center), center);
		assert!(world.distance_to(back) < 1e-9);
	}

	#[test]
	fn zoom_saturates_at_bounds() {
		let mut t = ViewTransform::default();
		for _ in 0..50 {
			t.zoom_in();
		}
		assert!((t.k - MAX_ZOOM).abs() < 1e-9);
		for _ in 0..100 {
			t.zoom_out();
		}
		assert!((t.k - MIN_ZOOM).abs() < 1e-9);
	}

	#[test]
	fn zoom_at_keeps_the_anchor_point_fixed() {
		let mut t = ViewTransform::default();
		let center = Point::new(500.0, 300.0);
		let screen = Point::new(200.0, 100.0);
		let before = t.to_world(screen, center);
		t.zoom_at(screen, center, true);
		let after = t.to_world(screen, center);
		assert!(before.distance_to(after) < 1e-9);
	}

	#[test]
	fn handle_roles_are_asymmetric_by_side() {
		assert_eq!(HandleSide::Top.role(), HandleRole::Target);
		assert_eq!(HandleSide::Left.role(), HandleRole::Target);
		assert_eq!(HandleSide::Bottom.role(), HandleRole::Source);
		assert_eq!(HandleSide::Right.role(), HandleRole::Source);
	}

	#[test]
	fn edge_path_follows_the_30_70_control_rule() {
		let path = EdgePath::between(Point::new(0.0, 0.0), Point::new(100.0, 50.0));
		assert_eq!(path.c1, Point::new(30.0, 0.0));
		assert_eq!(path.c2, Point::new(70.0, 50.0));
		assert_eq!(path.point_at(0.0), path.p0);
		assert_eq!(path.point_at(1.0), path.p1);
	}

	#[test]
	fn points_on_the_curve_hit_within_tolerance() {
		let path = EdgePath::between(Point::new(0.0, 0.0), Point::new(200.0, 120.0));
		let mid = path.point_at(0.5);
		assert!(path.distance_to(mid) < 1.0);
		assert!(path.distance_to(Point::new(0.0, 120.0)) > 20.0);
	}
}
