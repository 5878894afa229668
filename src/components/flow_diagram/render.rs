//! Canvas rendering for the swim-lane diagram.
//!
//! Drawing is split into passes for correct z-ordering:
//! 1. Background gradient (screen space)
//! 2. Lane bodies and header strips
//! 3. Connections, then the in-progress connect rubber band
//! 4. Nodes, with entrance animation applied per node
//!
//! Everything after the background draws under the pan/zoom transform;
//! stroke widths and fonts come pre-divided by `k` from [`ScaledValues`] so
//! they keep a constant pixel size.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::animation::EntrancePhase;
use super::geometry::{EdgePath, HandleRole, HandleSide, NodeButton, Point, Rect, button_rect};
use super::layout::HEADER_HEIGHT;
use super::scale::{ScaleConfig, ScaledValues};
use super::state::DiagramState;
use super::theme::{Color, Theme, lane_styles};
use super::types::Connection;

/// Vertical slide distance of an entering node, world units.
const ENTER_RISE: f64 = 24.0;

/// Renders one complete frame.
pub fn render(
	state: &DiagramState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let scale = ScaledValues::new(config, state.transform.k);

	draw_background(state, ctx, theme);

	ctx.save();
	// Zoom about the canvas center, then pan in world units.
	let center = state.center();
	let _ = ctx.translate(center.x, center.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	let _ = ctx.translate(
		state.transform.pan.x - center.x,
		state.transform.pan.y - center.y,
	);

	draw_lanes(state, ctx, &scale, theme);
	draw_edges(state, ctx, &scale, theme);
	draw_connect_preview(state, ctx, &scale, theme);
	draw_nodes(state, ctx, &scale, theme);

	ctx.restore();
}

fn draw_background(state: &DiagramState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let gradient = ctx
		.create_radial_gradient(
			state.width / 2.0,
			state.height / 2.0,
			0.0,
			state.width / 2.0,
			state.height / 2.0,
			state.width.max(state.height) * 0.8,
		)
		.unwrap();

	gradient
		.add_color_stop(0.0, &theme.background.to_css())
		.unwrap();
	gradient
		.add_color_stop(1.0, &theme.background_secondary.to_css())
		.unwrap();

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_lanes(
	state: &DiagramState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let styles = lane_styles();

	for lane in &state.lanes {
		let Some(bounds) = state.layout.bounds.get(&lane.id) else {
			continue;
		};
		let style = styles[lane.color % styles.len()];
		let collapsed = state.is_collapsed(&lane.id);

		if !collapsed {
			ctx.set_fill_style_str(&style.fill.to_css());
			ctx.fill_rect(bounds.left, bounds.top, bounds.width(), bounds.height());

			ctx.set_stroke_style_str(&style.border.to_css());
			ctx.set_line_width(scale.edge_width);
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(6.0),
				&JsValue::from_f64(4.0),
			));
			ctx.stroke_rect(bounds.left, bounds.top, bounds.width(), bounds.height());
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}

		// Header strip sits above the lane body and stays clickable while
		// collapsed.
		ctx.set_fill_style_str(&style.header.to_css());
		rounded_rect_path(ctx, Rect::new(bounds.left, 6.0, bounds.right, HEADER_HEIGHT - 6.0), 6.0);
		ctx.fill();

		ctx.set_fill_style_str(&theme.lane_title.to_css());
		ctx.set_font(&scale.lane_font);
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let count = lane.systems.len();
		let label = if collapsed {
			format!("{} \u{25B8} ({})", lane.title, count)
		} else {
			format!("{} \u{25BE} ({})", lane.title, count)
		};
		let _ = ctx.fill_text(&label, bounds.center().x, HEADER_HEIGHT / 2.0);
	}
}

fn edge_color(state: &DiagramState, conn: &Connection, theme: &Theme) -> Color {
	if state.selected.as_deref() == Some(&conn.id) {
		theme.edge.selected
	} else if state.edge_highlighted(conn) {
		theme.edge.highlighted
	} else if conn.critical {
		theme.edge.critical
	} else {
		theme.edge.color
	}
}

fn draw_edges(
	state: &DiagramState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	for conn in &state.connections {
		let Some((source, target)) = state.edge_endpoints(conn) else {
			continue;
		};
		let progress = state.entrance.edge_progress(conn);
		if progress <= 0.0 {
			continue;
		}

		let path = EdgePath::between(source, target);
		let color = edge_color(state, conn, theme);
		let emphasized = state.selected.as_deref() == Some(&conn.id)
			|| state.edge_highlighted(conn)
			|| conn.critical;
		let width = if emphasized {
			scale.edge_width_emphasis
		} else {
			scale.edge_width
		};

		ctx.set_stroke_style_str(&color.to_css());
		ctx.set_line_width(width);

		if progress < 1.0 {
			// Draw-in: reveal the stroke from the source end via the dash
			// pattern.
			let len = path.length();
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(len * progress),
				&JsValue::from_f64(len),
			));
		} else if !conn.active {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(6.0),
				&JsValue::from_f64(6.0),
			));
		}

		stroke_edge(ctx, &path);
		let _ = ctx.set_line_dash(&js_sys::Array::new());

		if progress >= 1.0 {
			draw_arrowhead(ctx, &path, scale, color);
		}

		if state.selected.as_deref() == Some(&conn.id) {
			// Midpoint marker on the selected edge.
			let mid = path.point_at(0.5);
			ctx.begin_path();
			let _ = ctx.arc(mid.x, mid.y, scale.handle_radius, 0.0, PI * 2.0);
			ctx.set_fill_style_str(&theme.edge.selected.to_css());
			ctx.fill();
			ctx.set_stroke_style_str(&theme.handle.ring.to_css());
			ctx.set_line_width(scale.node_border);
			ctx.stroke();
		}
	}
}

fn stroke_edge(ctx: &CanvasRenderingContext2d, path: &EdgePath) {
	ctx.begin_path();
	ctx.move_to(path.p0.x, path.p0.y);
	ctx.bezier_curve_to(
		path.c1.x, path.c1.y, path.c2.x, path.c2.y, path.p1.x, path.p1.y,
	);
	ctx.stroke();
}

/// Arrowhead at the target end, oriented along the curve's exit tangent.
fn draw_arrowhead(
	ctx: &CanvasRenderingContext2d,
	path: &EdgePath,
	scale: &ScaledValues,
	color: Color,
) {
	let (dx, dy) = (path.p1.x - path.c2.x, path.p1.y - path.c2.y);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist < 0.001 {
		return;
	}
	let (ux, uy) = (dx / dist, dy / dist);
	let tip = path.p1;
	let back = Point::new(tip.x - ux * scale.arrow_size, tip.y - uy * scale.arrow_size);
	let (px, py) = (-uy * scale.arrow_size * 0.5, ux * scale.arrow_size * 0.5);

	ctx.set_fill_style_str(&color.to_css());
	ctx.begin_path();
	ctx.move_to(tip.x, tip.y);
	ctx.line_to(back.x + px, back.y + py);
	ctx.line_to(back.x - px, back.y - py);
	ctx.close_path();
	ctx.fill();
}

/// Dashed rubber band from the source handle to the pointer.
fn draw_connect_preview(
	state: &DiagramState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	if !state.connect.active {
		return;
	}
	let path = EdgePath::between(state.connect.source_pos, state.connect.current_pos);
	ctx.set_stroke_style_str(&theme.edge.temporary.to_css());
	ctx.set_line_width(scale.edge_width_emphasis);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(8.0),
		&JsValue::from_f64(5.0),
	));
	stroke_edge(ctx, &path);
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(
	state: &DiagramState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	for system in state.visible_systems() {
		let phase = state.entrance.node_phase(&system.id);
		if phase == EntrancePhase::Pending {
			continue;
		}
		let Some(rect) = state.node_rect(&system.id) else {
			continue;
		};

		let progress = phase.progress();
		let rise = (1.0 - progress) * ENTER_RISE;
		let rect = Rect::new(rect.left, rect.top + rise, rect.right, rect.bottom + rise);

		ctx.set_global_alpha(progress);
		draw_node_box(state, ctx, scale, theme, system, rect);
		ctx.set_global_alpha(1.0);
	}
}

fn draw_node_box(
	state: &DiagramState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
	system: &super::types::SystemNode,
	rect: Rect,
) {
	let hovered = state.hovered.as_deref() == Some(&system.id);
	let on_path = state.on_search_path(&system.id);

	// Soft drop shadow, offset down-right.
	ctx.set_fill_style_str(&theme.node.shadow.to_css());
	rounded_rect_path(
		ctx,
		Rect::new(rect.left + 3.0, rect.top + 3.0, rect.right + 3.0, rect.bottom + 3.0),
		theme.node.corner_radius,
	);
	ctx.fill();

	ctx.set_fill_style_str(&theme.node.fill.to_css());
	rounded_rect_path(ctx, rect, theme.node.corner_radius);
	ctx.fill();

	let border = if hovered || on_path {
		theme.node.border_highlight
	} else {
		theme.node.border
	};
	ctx.set_stroke_style_str(&border.to_css());
	ctx.set_line_width(if on_path {
		scale.node_border * 1.5
	} else {
		scale.node_border
	});
	rounded_rect_path(ctx, rect, theme.node.corner_radius);
	ctx.stroke();

	let cx = rect.center().x;
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_fill_style_str(&theme.node.name_color.to_css());
	ctx.set_font(&scale.name_font);
	let _ = ctx.fill_text(&system.name, cx, rect.top + rect.height() * 0.3);

	ctx.set_fill_style_str(&theme.node.ait_color.to_css());
	ctx.set_font(&scale.small_font);
	let _ = ctx.fill_text(&system.ait_number, cx, rect.top + rect.height() * 0.52);

	draw_status_badges(ctx, scale, theme, system, rect);

	for button in state.shown_buttons(&system.id) {
		draw_button(ctx, scale, theme, rect, button);
	}

	if hovered || state.connect.active {
		draw_handles(state, ctx, scale, theme, rect);
	}
}

/// Flow, trend, and balance indicators along the bottom of the node.
fn draw_status_badges(
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
	system: &super::types::SystemNode,
	rect: Rect,
) {
	let badges = [
		("F", system.status.flow),
		("T", system.status.trend),
		("B", system.status.balanced),
	];
	let y = rect.bottom - rect.height() * 0.22;
	let spacing = rect.width() * 0.2;
	let start = rect.center().x - spacing;

	for (i, (tag, status)) in badges.iter().enumerate() {
		let x = start + i as f64 * spacing;
		ctx.begin_path();
		let _ = ctx.arc(x, y, 7.0, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&theme.status_color(*status).to_css());
		ctx.fill();

		ctx.set_fill_style_str(&theme.badge.text.to_css());
		ctx.set_font(&scale.small_font);
		let _ = ctx.fill_text(tag, x, y);
	}
}

fn draw_button(
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
	node: Rect,
	button: NodeButton,
) {
	let rect = button_rect(node, button);
	ctx.set_fill_style_str(&theme.button_fill.to_css());
	rounded_rect_path(ctx, rect, 4.0);
	ctx.fill();

	ctx.set_fill_style_str(&theme.button_text.to_css());
	ctx.set_font(&scale.small_font);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let label = match button {
		NodeButton::Summary => "Summary",
		NodeButton::Details => "Details",
		NodeButton::Edit => "\u{270E}",
	};
	let _ = ctx.fill_text(label, rect.center().x, rect.center().y);
}

/// Connection handles on the node borders. During a connect gesture only the
/// handles that could complete it are shown.
fn draw_handles(
	state: &DiagramState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
	rect: Rect,
) {
	for side in HandleSide::ALL {
		if state.connect.active && side.role() != HandleRole::Target {
			continue;
		}
		let anchor = side.anchor(rect);
		ctx.begin_path();
		let _ = ctx.arc(anchor.x, anchor.y, scale.handle_radius, 0.0, PI * 2.0);
		let fill = match side.role() {
			HandleRole::Source => theme.handle.fill,
			HandleRole::Target => theme.edge.temporary,
		};
		ctx.set_fill_style_str(&fill.to_css());
		ctx.fill();
		ctx.set_stroke_style_str(&theme.handle.ring.to_css());
		ctx.set_line_width(scale.node_border);
		ctx.stroke();
	}
}

fn rounded_rect_path(ctx: &CanvasRenderingContext2d, rect: Rect, radius: f64) {
	let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
	ctx.begin_path();
	ctx.move_to(rect.left + r, rect.top);
	let _ = ctx.arc_to(rect.right, rect.top, rect.right, rect.bottom, r);
	let _ = ctx.arc_to(rect.right, rect.bottom, rect.left, rect.bottom, r);
	let _ = ctx.arc_to(rect.left, rect.bottom, rect.left, rect.top, r);
	let _ = ctx.arc_to(rect.left, rect.top, rect.right, rect.top, r);
	ctx.close_path();
}
