//! Curated surface for the CLI and benches.
//!
//! Prefer these re-exports over reaching into submodules so callers stay
//! insulated from module reshuffles.

// Grid construction
pub use crate::grid::{corners, edge_count, grid_edges, Edge, VertexId};
// Directed graphs and reachability
pub use crate::digraph::{build_digraph, can_reach, DirectedEdge, Digraph};
// Enumeration and aggregation
pub use crate::orientation::{orientation_count, Orientation, Orientations, MAX_EDGES};
pub use crate::prob::{
    count_reachable, count_reachable_par, reach_prob, ReachCount, SizeReport,
    MAX_BLOCKS, MIN_BLOCKS,
};
