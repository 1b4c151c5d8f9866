//! Per-frame edge geometry: curved arc descriptors, render clamping, and
//! edge-label orientation. Everything here is pure and recomputed on every
//! layout tick.

use std::f64::consts::{FRAC_PI_2, PI};

/// A 2D position in canvas space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Geometric parameters of a curved edge, matching the SVG elliptical-arc
/// path command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcDescriptor {
	pub start: Point,
	pub rx: f64,
	pub ry: f64,
	/// X-axis rotation in degrees.
	pub x_rotation: f64,
	pub large_arc: bool,
	pub sweep: bool,
	pub end: Point,
}

impl ArcDescriptor {
	/// Render as an SVG path string (`M x,y A rx,ry rot large,sweep x,y`),
	/// consumable by `Path2d`.
	pub fn to_path(&self) -> String {
		format!(
			"M{},{}A{},{} {} {},{} {},{}",
			self.start.x,
			self.start.y,
			self.rx,
			self.ry,
			self.x_rotation,
			self.large_arc as u8,
			self.sweep as u8,
			self.end.x,
			self.end.y,
		)
	}
}

/// Self-loop ellipse radii. Asymmetric so the loop reads as a loop instead
/// of a circle hugging the node.
const SELF_LOOP_RX: f64 = 10.0;
const SELF_LOOP_RY: f64 = 75.0;

/// Compute the arc for an edge between two node positions.
///
/// Normal edges use radii equal to the point distance with a fixed 30
/// degree rotation; the sweep flag flips by quadrant so curvature stays
/// visually consistent as the layout moves nodes around. Axis-aligned
/// pairs keep the default sweep of 0.
///
/// A self edge (coordinate equality, not identity) becomes a small
/// ellipse. The end point is nudged by (+1, +1) because an arc whose
/// endpoints coincide collapses to nothing.
pub fn edge_arc(source: Point, target: Point) -> ArcDescriptor {
	if source == target {
		return ArcDescriptor {
			start: source,
			rx: SELF_LOOP_RX,
			ry: SELF_LOOP_RY,
			x_rotation: -45.0,
			large_arc: true,
			sweep: false,
			end: Point::new(target.x + 1.0, target.y + 1.0),
		};
	}

	let (dx, dy) = (target.x - source.x, target.y - source.y);
	let dr = dx.hypot(dy);
	let sweep = (target.y < source.y && target.x < source.x)
		|| (target.y > source.y && target.x > source.x);

	ArcDescriptor {
		start: source,
		rx: dr,
		ry: dr,
		x_rotation: 30.0,
		large_arc: false,
		sweep,
		end: target,
	}
}

/// Clamp a position to the visible rectangle `[0, width] x [0, height]`.
/// Applied to rendered transforms only; the layout engine keeps its own
/// unclamped positions.
pub fn clamp_to_bounds(p: Point, width: f64, height: f64) -> Point {
	Point::new(p.x.clamp(0.0, width), p.y.clamp(0.0, height))
}

/// Rotation (radians) for an edge label sitting on the chord midpoint.
/// Edges pointing leftward get flipped half a turn so the text stays
/// upright.
pub fn label_angle(source: Point, target: Point) -> f64 {
	let mut angle = (target.y - source.y).atan2(target.x - source.x);
	if angle > FRAC_PI_2 {
		angle -= PI;
	} else if angle < -FRAC_PI_2 {
		angle += PI;
	}
	angle
}

#[cfg(test)]
mod tests {
	use super::*;

	fn arc(x1: f64, y1: f64, x2: f64, y2: f64) -> ArcDescriptor {
		edge_arc(Point::new(x1, y1), Point::new(x2, y2))
	}

	#[test]
	fn sweep_follows_quadrant_table() {
		// Up-left and down-right curve one way
		assert!(arc(5.0, 5.0, 2.0, 2.0).sweep);
		assert!(arc(5.0, 5.0, 8.0, 8.0).sweep);
		// Down-left and up-right curve the other
		assert!(!arc(5.0, 5.0, 2.0, 8.0).sweep);
		assert!(!arc(5.0, 5.0, 8.0, 2.0).sweep);
	}

	#[test]
	fn axis_aligned_pairs_default_to_zero_sweep() {
		assert!(!arc(5.0, 5.0, 9.0, 5.0).sweep);
		assert!(!arc(5.0, 5.0, 1.0, 5.0).sweep);
		assert!(!arc(5.0, 5.0, 5.0, 9.0).sweep);
		assert!(!arc(5.0, 5.0, 5.0, 1.0).sweep);
	}

	#[test]
	fn swapping_endpoints_keeps_sweep_across_the_diagonal() {
		// Both orderings of a strictly-diagonal pair sit in "both less"
		// or "both greater" quadrants, so the sweep flag agrees.
		let forward = arc(0.0, 0.0, 10.0, 10.0);
		let backward = arc(10.0, 10.0, 0.0, 0.0);
		assert!(forward.sweep && backward.sweep);

		let forward = arc(0.0, 10.0, 10.0, 0.0);
		let backward = arc(10.0, 0.0, 0.0, 10.0);
		assert!(!forward.sweep && !backward.sweep);
	}

	#[test]
	fn normal_edge_matches_reference_values() {
		let d = arc(0.0, 0.0, 10.0, 10.0);
		assert_eq!(d.rx, 200.0_f64.sqrt());
		assert_eq!(d.ry, 200.0_f64.sqrt());
		assert_eq!(d.x_rotation, 30.0);
		assert!(!d.large_arc);
		assert!(d.sweep);
		assert_eq!(d.end, Point::new(10.0, 10.0));
	}

	#[test]
	fn self_edge_renders_a_visible_loop() {
		let d = arc(42.0, 17.0, 42.0, 17.0);
		assert!(d.large_arc);
		assert_eq!((d.rx, d.ry), (10.0, 75.0));
		assert_eq!(d.x_rotation, -45.0);
		assert_eq!(d.end, Point::new(43.0, 18.0));
	}

	#[test]
	fn arc_path_is_a_single_move_and_arc_command() {
		let d = arc(0.0, 0.0, 3.0, -4.0);
		assert_eq!(d.to_path(), "M0,0A5,5 30 0,0 3,-4");

		let d = arc(0.0, 0.0, 3.0, 4.0);
		assert_eq!(d.to_path(), "M0,0A5,5 30 0,1 3,4");
	}

	#[test]
	fn clamp_is_identity_inside_and_clamps_outside() {
		let inside = Point::new(10.0, 20.0);
		assert_eq!(clamp_to_bounds(inside, 800.0, 700.0), inside);
		assert_eq!(
			clamp_to_bounds(Point::new(-5.0, 900.0), 800.0, 700.0),
			Point::new(0.0, 700.0)
		);
	}

	#[test]
	fn leftward_labels_flip_upright() {
		let angle = label_angle(Point::new(10.0, 5.0), Point::new(0.0, 5.0));
		assert!(angle.abs() < 1e-9);

		let angle = label_angle(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
		assert!((angle - FRAC_PI_2 / 2.0).abs() < 1e-9);
	}
}
