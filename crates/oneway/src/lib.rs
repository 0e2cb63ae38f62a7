//! Exact corner-to-corner reachability on randomly oriented square grids.
//!
//! Every street of an n×n crossroad grid becomes one-way in a uniformly random
//! direction. The crate enumerates all 2^E orientations, runs a level-order
//! reachability test from the top-left to the bottom-right corner for each,
//! and reports the share of successes as an exact fraction.
//!
//! Layout
//! - `grid`: vertex indexing and the canonical undirected edge list.
//! - `digraph`: adjacency-by-successor graphs and the BFS reachability check.
//! - `orientation`: bit-counter enumeration of edge directions.
//! - `prob`: the enumerator/aggregator (sequential and rayon-partitioned).

pub mod api;
pub mod digraph;
pub mod grid;
pub mod orientation;
pub mod prob;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use digraph::{build_digraph, can_reach, DirectedEdge, Digraph};
pub use grid::{corners, edge_count, grid_edges, vertex_at, Edge, VertexId};
pub use num::rational::Ratio;
pub use orientation::{orientation_count, Orientation, Orientations};
pub use prob::{count_reachable, count_reachable_par, reach_prob, ReachCount, SizeReport};
