//! Square grid graphs: vertex layout and the canonical undirected edge list.
//!
//! Vertices of an n×n grid are numbered row-major, `(x, y) ↦ y·n + x`.
//! The edge order produced by [`grid_edges`] is load-bearing: it fixes which
//! bit of an [`Orientation`](crate::Orientation) controls which street.

/// Index of a crossroad in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// Undirected street between two adjacent crossroads, stored with `a < b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: VertexId,
    pub b: VertexId,
}

impl Edge {
    pub fn new(a: VertexId, b: VertexId) -> Self {
        debug_assert!(a != b, "grid edges never form self-loops");
        if a < b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }
}

#[inline]
pub fn vertex_at(n: usize, x: usize, y: usize) -> VertexId {
    debug_assert!(x < n && y < n);
    VertexId(y * n + x)
}

/// Number of streets in an n×n crossroad grid: `2·n·(n−1)`.
#[inline]
pub fn edge_count(n: usize) -> usize {
    2 * n * n.saturating_sub(1)
}

/// Top-left and bottom-right corners.
#[inline]
pub fn corners(n: usize) -> (VertexId, VertexId) {
    (VertexId(0), VertexId(n * n - 1))
}

/// All streets of an n×n grid: horizontal ones row by row, then vertical ones
/// column by column.
///
/// Panics if `n < 2`; a single crossroad has no streets to orient.
pub fn grid_edges(n: usize) -> Vec<Edge> {
    assert!(n >= 2, "grid side must be at least 2 vertices, got {n}");
    let mut edges = Vec::with_capacity(edge_count(n));
    for y in 0..n {
        for x in 0..n - 1 {
            edges.push(Edge::new(vertex_at(n, x, y), vertex_at(n, x + 1, y)));
        }
    }
    for x in 0..n {
        for y in 0..n - 1 {
            edges.push(Edge::new(vertex_at(n, x, y), vertex_at(n, x, y + 1)));
        }
    }
    edges
}
