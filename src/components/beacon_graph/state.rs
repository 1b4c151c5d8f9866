use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::warn;

use super::adjacency::AdjacencyIndex;
use super::geometry::{self, Point};
use super::types::{BeaconNode, GraphDocument};

pub const NODE_RADIUS: f64 = 20.0;
/// Opacity applied to nodes and edges unrelated to the hovered beacon.
pub const DIMMED_OPACITY: f64 = 0.2;

/// An edge resolved to arena indices, plus its display label (HTTP/SMB/...).
#[derive(Clone, Debug)]
pub struct GraphEdge {
	pub source: usize,
	pub target: usize,
	pub label: String,
}

/// While a drag gesture is active it owns the node's position exclusively;
/// the layout engine gets it back on release.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node: Option<usize>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

/// Scene state for the beacon graph view: the display arena, the layout
/// engine, the adjacency index, and the transient hover/drag state. All
/// mutation goes through these methods; nothing is ambient.
pub struct BeaconGraphState {
	graph: ForceGraph<usize, ()>,
	/// Arena index -> simulation handle, in load order.
	handles: Vec<DefaultNodeIdx>,
	pub beacons: Vec<BeaconNode>,
	pub edges: Vec<GraphEdge>,
	pub adjacency: AdjacencyIndex<usize>,
	pub hover: Option<usize>,
	pub drag: DragState,
	pub width: f64,
	pub height: f64,
}

impl BeaconGraphState {
	pub fn new(doc: &GraphDocument, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut handles = Vec::with_capacity(doc.nodes.len());
		let mut id_to_arena = HashMap::new();

		for (i, beacon) in doc.nodes.iter().enumerate() {
			// Seed positions on a circle around the canvas centre so the
			// simulation starts from something spread out.
			let angle = (i as f64) * 2.0 * PI / doc.nodes.len() as f64;
			let (x, y) = (
				(width / 2.0 + 100.0 * angle.cos()) as f32,
				(height / 2.0 + 100.0 * angle.sin()) as f32,
			);
			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: i,
			});
			handles.push(idx);
			id_to_arena.insert(beacon.id.clone(), i);
		}

		let mut edges = Vec::new();
		for link in &doc.links {
			match (id_to_arena.get(&link.source), id_to_arena.get(&link.target)) {
				(Some(&src), Some(&tgt)) => {
					graph.add_edge(handles[src], handles[tgt], EdgeData::default());
					edges.push(GraphEdge {
						source: src,
						target: tgt,
						label: link.kind.clone(),
					});
				}
				_ => warn!(
					"link {} -> {} does not resolve to loaded beacons, skipping",
					link.source, link.target
				),
			}
		}

		let adjacency = AdjacencyIndex::from_edges(edges.iter().map(|e| (e.source, e.target)));

		Self {
			graph,
			handles,
			beacons: doc.nodes.clone(),
			edges,
			adjacency,
			hover: None,
			drag: DragState::default(),
			width,
			height,
		}
	}

	/// Advance the layout engine one frame.
	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}

	/// Per-frame render positions, clamped to the canvas rectangle. The
	/// simulation keeps its own unclamped positions.
	pub fn frame_positions(&self) -> Vec<Point> {
		let mut positions = vec![Point::default(); self.handles.len()];
		self.graph.visit_nodes(|node| {
			let p = Point::new(node.x() as f64, node.y() as f64);
			positions[node.data.user_data] = geometry::clamp_to_bounds(p, self.width, self.height);
		});
		positions
	}

	/// Hit test against the rendered (clamped) node positions.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<usize> {
		self.frame_positions().iter().position(|p| {
			let (dx, dy) = (p.x - x, p.y - y);
			dx.hypot(dy) <= NODE_RADIUS
		})
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		self.hover = node;
	}

	/// Opacity for a node under the current hover state: full when no
	/// hover is active or the node is connected to the hovered one.
	pub fn node_opacity(&self, idx: usize) -> f64 {
		match self.hover {
			Some(h) if !self.adjacency.connected(h, idx) => DIMMED_OPACITY,
			_ => 1.0,
		}
	}

	/// Whether an edge is incident to the hovered node. `None` when no
	/// hover is active.
	pub fn edge_highlight(&self, edge: &GraphEdge) -> Option<bool> {
		self.hover.map(|h| edge.source == h || edge.target == h)
	}

	pub fn begin_drag(&mut self, idx: usize, x: f64, y: f64) {
		let handle = self.handles[idx];
		let (mut node_x, mut node_y) = (0.0, 0.0);
		self.graph.visit_nodes(|node| {
			if node.index() == handle {
				node_x = node.x();
				node_y = node.y();
			}
		});
		self.drag = DragState {
			active: true,
			node: Some(idx),
			start_x: x,
			start_y: y,
			node_start_x: node_x,
			node_start_y: node_y,
		};
	}

	pub fn drag_to(&mut self, x: f64, y: f64) {
		if !self.drag.active {
			return;
		}
		let Some(idx) = self.drag.node else {
			return;
		};
		let handle = self.handles[idx];
		let (nx, ny) = (
			self.drag.node_start_x + (x - self.drag.start_x) as f32,
			self.drag.node_start_y + (y - self.drag.start_y) as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if node.index() == handle {
				node.data.x = nx;
				node.data.y = ny;
				node.data.is_anchor = true;
			}
		});
	}

	/// End the gesture and hand the node back to the layout engine.
	pub fn end_drag(&mut self) {
		if let Some(idx) = self.drag.node {
			let handle = self.handles[idx];
			self.graph.visit_nodes_mut(|node| {
				if node.index() == handle {
					node.data.is_anchor = false;
				}
			});
		}
		self.drag = DragState::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::beacon_graph::types::BeaconLink;

	fn doc() -> GraphDocument {
		GraphDocument {
			nodes: vec![
				BeaconNode {
					id: "a".into(),
					user: "alice".into(),
					..Default::default()
				},
				BeaconNode {
					id: "b".into(),
					user: "bob".into(),
					..Default::default()
				},
				BeaconNode {
					id: "c".into(),
					..Default::default()
				},
			],
			links: vec![
				BeaconLink {
					source: "a".into(),
					target: "b".into(),
					kind: "SMB".into(),
				},
				BeaconLink {
					source: "b".into(),
					target: "missing".into(),
					kind: "TCP".into(),
				},
			],
		}
	}

	#[test]
	fn unresolvable_links_are_skipped() {
		let state = BeaconGraphState::new(&doc(), 800.0, 700.0);
		assert_eq!(state.beacons.len(), 3);
		assert_eq!(state.edges.len(), 1);
		assert!(state.adjacency.connected(0, 1));
		assert!(!state.adjacency.connected(0, 2));
	}

	#[test]
	fn frame_positions_stay_inside_the_canvas() {
		let mut state = BeaconGraphState::new(&doc(), 300.0, 200.0);
		for _ in 0..120 {
			state.tick(0.016);
		}
		for p in state.frame_positions() {
			assert!((0.0..=300.0).contains(&p.x));
			assert!((0.0..=200.0).contains(&p.y));
		}
	}

	#[test]
	fn hover_dims_unrelated_nodes_only() {
		let mut state = BeaconGraphState::new(&doc(), 800.0, 700.0);
		state.set_hover(Some(0));
		assert_eq!(state.node_opacity(0), 1.0);
		assert_eq!(state.node_opacity(1), 1.0);
		assert_eq!(state.node_opacity(2), DIMMED_OPACITY);
		assert_eq!(state.edge_highlight(&state.edges[0]), Some(true));

		state.set_hover(None);
		assert_eq!(state.node_opacity(2), 1.0);
		assert_eq!(state.edge_highlight(&state.edges[0]), None);
	}

	#[test]
	fn hit_test_uses_the_node_radius() {
		let state = BeaconGraphState::new(&doc(), 800.0, 700.0);
		let positions = state.frame_positions();
		let p = positions[1];
		assert_eq!(state.node_at_position(p.x, p.y), Some(1));
		assert_eq!(state.node_at_position(p.x + 500.0, p.y + 500.0), None);
	}

	#[test]
	fn drag_pins_only_for_the_gesture() {
		let mut state = BeaconGraphState::new(&doc(), 800.0, 700.0);
		let start = state.frame_positions()[0];
		state.begin_drag(0, start.x, start.y);
		state.drag_to(start.x + 40.0, start.y + 25.0);
		let moved = state.frame_positions()[0];
		assert!((moved.x - (start.x + 40.0)).abs() < 1.0);
		assert!((moved.y - (start.y + 25.0)).abs() < 1.0);

		state.end_drag();
		assert!(!state.drag.active);
		assert_eq!(state.drag.node, None);
	}
}
