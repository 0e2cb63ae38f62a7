//! Digraph construction from a list of directed edges.

use crate::grid::VertexId;

use super::types::{Digraph, DirectedEdge};

/// Group directed edges by source vertex.
///
/// Edges are visited in `(from, to)` order, so every successor list comes out
/// sorted regardless of the input order. Duplicates are not collapsed.
pub fn build_digraph(num_vertices: usize, edges: &[DirectedEdge]) -> Digraph {
    let mut sorted = edges.to_vec();
    sorted.sort_unstable();
    let mut succ: Vec<Vec<VertexId>> = vec![Vec::new(); num_vertices];
    for e in sorted {
        debug_assert!(e.from.0 < num_vertices && e.to.0 < num_vertices);
        succ[e.from.0].push(e.to);
    }
    Digraph { succ }
}
