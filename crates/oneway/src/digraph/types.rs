//! Data types for oriented grids.

use crate::grid::{Edge, VertexId};

/// One-way street `from → to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirectedEdge {
    pub from: VertexId,
    pub to: VertexId,
}

impl DirectedEdge {
    pub fn new(from: VertexId, to: VertexId) -> Self {
        Self { from, to }
    }
}

impl Edge {
    /// Direction bit 0 keeps `a → b`, bit 1 flips to `b → a`.
    #[inline]
    pub fn orient(self, flipped: bool) -> DirectedEdge {
        if flipped {
            DirectedEdge::new(self.b, self.a)
        } else {
            DirectedEdge::new(self.a, self.b)
        }
    }
}

/// Successor lists indexed by source vertex. Parallel edges are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Digraph {
    pub succ: Vec<Vec<VertexId>>,
}

impl Digraph {
    pub fn num_vertices(&self) -> usize {
        self.succ.len()
    }

    pub fn num_edges(&self) -> usize {
        self.succ.iter().map(Vec::len).sum()
    }

    #[inline]
    pub fn successors(&self, v: VertexId) -> &[VertexId] {
        &self.succ[v.0]
    }
}
