use std::collections::HashSet;
use std::hash::Hash;

/// Symmetric connectivity lookup over node indices.
///
/// Built once from the edge list after load; O(1) queries afterwards.
/// Both orderings of every pair are inserted so `connected` never has to
/// care about edge direction.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyIndex<I> {
	pairs: HashSet<(I, I)>,
}

impl<I: Copy + Eq + Hash> AdjacencyIndex<I> {
	pub fn from_edges(edges: impl IntoIterator<Item = (I, I)>) -> Self {
		let mut pairs = HashSet::new();
		for (a, b) in edges {
			pairs.insert((a, b));
			pairs.insert((b, a));
		}
		Self { pairs }
	}

	/// True when the nodes share an edge in either direction, or are the
	/// same node.
	pub fn connected(&self, a: I, b: I) -> bool {
		a == b || self.pairs.contains(&(a, b))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn connectivity_is_symmetric() {
		let index = AdjacencyIndex::from_edges([(0usize, 1), (1, 2)]);
		assert!(index.connected(0, 1));
		assert!(index.connected(1, 0));
		assert!(index.connected(2, 1));
		assert!(!index.connected(0, 2));
	}

	#[test]
	fn every_node_is_connected_to_itself() {
		let index = AdjacencyIndex::from_edges([(0usize, 1)]);
		assert!(index.connected(0, 0));
		// Even nodes with no edges at all
		assert!(index.connected(7, 7));
	}

	#[test]
	fn self_edges_are_harmless() {
		let index = AdjacencyIndex::from_edges([(3usize, 3)]);
		assert!(index.connected(3, 3));
		assert!(!index.connected(3, 4));
	}
}
