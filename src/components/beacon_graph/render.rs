use web_sys::{CanvasRenderingContext2d, Path2d};

use super::geometry::{self, Point};
use super::state::{BeaconGraphState, DIMMED_OPACITY, NODE_RADIUS};

const BACKGROUND: &str = "#1a1a2e";
const EDGE_COLOR: &str = "#ddd";
const LABEL_COLOR: &str = "orange";
const NODE_STROKE: &str = "green";
const ICON_COLOR: &str = "red";
/// Fallback when a beacon arrives without a colour field.
const DEFAULT_COLOUR: &str = "#1f77b4";

pub fn render(state: &BeaconGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	let positions = state.frame_positions();
	draw_edges(state, ctx, &positions);
	draw_nodes(state, ctx, &positions);
}

fn colour_or_default(colour: &str) -> &str {
	if colour.is_empty() { DEFAULT_COLOUR } else { colour }
}

fn draw_edges(state: &BeaconGraphState, ctx: &CanvasRenderingContext2d, positions: &[Point]) {
	for edge in &state.edges {
		let (source, target) = (positions[edge.source], positions[edge.target]);
		let arc = geometry::edge_arc(source, target);

		// Highlighted edges take the source beacon's colour; with no hover
		// active everything renders neutral at full opacity.
		let (alpha, stroke) = match state.edge_highlight(edge) {
			Some(true) => (
				1.0,
				colour_or_default(&state.beacons[edge.source].colour).to_string(),
			),
			Some(false) => (DIMMED_OPACITY, EDGE_COLOR.to_string()),
			None => (1.0, EDGE_COLOR.to_string()),
		};

		ctx.set_global_alpha(alpha);
		ctx.set_stroke_style_str(&stroke);
		ctx.set_line_width(1.5);
		if let Ok(path) = Path2d::new_with_path_string(&arc.to_path()) {
			ctx.stroke_with_path(&path);
		}

		if source == target {
			// Self loop: no meaningful chord for an arrowhead, just set the
			// label beside the loop.
			draw_edge_label(ctx, &edge.label, Point::new(source.x + 14.0, source.y - 50.0), 0.0);
			continue;
		}

		draw_arrowhead(ctx, &stroke, source, target);
		let midpoint = Point::new((source.x + target.x) / 2.0, (source.y + target.y) / 2.0);
		draw_edge_label(ctx, &edge.label, midpoint, geometry::label_angle(source, target));
	}
	ctx.set_global_alpha(1.0);
}

fn draw_arrowhead(ctx: &CanvasRenderingContext2d, stroke: &str, source: Point, target: Point) {
	let (dx, dy) = (target.x - source.x, target.y - source.y);
	let dist = dx.hypot(dy);
	if dist < 0.001 {
		return;
	}
	let arrow_size = 8.0;
	let (ux, uy) = (dx / dist, dy / dist);

	// Tip sits on the node rim along the chord direction.
	let (tip_x, tip_y) = (target.x - ux * NODE_RADIUS, target.y - uy * NODE_RADIUS);
	let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
	let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);

	ctx.set_fill_style_str(stroke);
	ctx.begin_path();
	ctx.move_to(tip_x, tip_y);
	ctx.line_to(back_x + px, back_y + py);
	ctx.line_to(back_x - px, back_y - py);
	ctx.close_path();
	ctx.fill();
}

fn draw_edge_label(ctx: &CanvasRenderingContext2d, label: &str, at: Point, angle: f64) {
	if label.is_empty() {
		return;
	}
	ctx.save();
	let _ = ctx.translate(at.x, at.y);
	let _ = ctx.rotate(angle);
	ctx.set_fill_style_str(LABEL_COLOR);
	ctx.set_font("10px sans-serif");
	ctx.set_text_align("center");
	let _ = ctx.fill_text(label, 0.0, -4.0);
	ctx.restore();
}

fn draw_nodes(state: &BeaconGraphState, ctx: &CanvasRenderingContext2d, positions: &[Point]) {
	for (idx, beacon) in state.beacons.iter().enumerate() {
		let p = positions[idx];
		ctx.set_global_alpha(state.node_opacity(idx));

		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, NODE_RADIUS, 0.0, 2.0 * std::f64::consts::PI);
		ctx.set_fill_style_str("white");
		ctx.fill();
		ctx.set_stroke_style_str(NODE_STROKE);
		ctx.set_line_width(2.0);
		ctx.stroke();

		if !beacon.node_icon.is_empty() {
			ctx.set_fill_style_str(ICON_COLOR);
			ctx.set_font("900 20px 'Font Awesome 5 Free', FontAwesome, sans-serif");
			ctx.set_text_align("center");
			ctx.set_text_baseline("middle");
			let _ = ctx.fill_text(&beacon.node_icon, p.x, p.y);
		}

		ctx.set_fill_style_str(colour_or_default(&beacon.colour));
		ctx.set_font("12px sans-serif");
		ctx.set_text_align("left");
		ctx.set_text_baseline("alphabetic");
		let _ = ctx.fill_text(&beacon.label(), p.x + NODE_RADIUS * 2.0, p.y + 4.0);
	}
	ctx.set_global_alpha(1.0);
}
