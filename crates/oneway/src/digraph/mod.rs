//! Directed graphs over grid vertices and corner-to-corner reachability.
//!
//! Purpose
//! - Turn one orientation's directed edges into an adjacency-by-successor
//!   structure (`build.rs`).
//! - Answer "is v1 reachable from v0" by level-order expansion with early
//!   exit (`bfs.rs`).
//!
//! Graphs are arenas indexed by `VertexId`; each orientation owns a fresh
//! `Digraph`, nothing is shared between enumeration steps.

mod bfs;
mod build;
mod types;

pub use bfs::can_reach;
pub use build::build_digraph;
pub use types::{Digraph, DirectedEdge};
