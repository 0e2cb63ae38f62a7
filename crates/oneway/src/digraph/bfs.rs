//! Level-order reachability with early exit.

use crate::grid::VertexId;

use super::types::Digraph;

/// True iff `v1` can be reached from `v0` along one or more directed edges.
///
/// The reachable set starts from `v0`'s direct successors rather than `v0`
/// itself, so `can_reach(g, v, v)` holds only when `v` lies on a cycle.
pub fn can_reach(graph: &Digraph, v0: VertexId, v1: VertexId) -> bool {
    Expansion::new(graph, v0).run(Some(v1))
}

impl Digraph {
    /// Vertices reachable from `v0` along one or more edges, as a mask.
    pub fn reachable_from(&self, v0: VertexId) -> Vec<bool> {
        let mut exp = Expansion::new(self, v0);
        exp.run(None);
        exp.seen
    }
}

/// BFS state: everything discovered so far plus the newest level.
struct Expansion<'a> {
    g: &'a Digraph,
    seen: Vec<bool>,
    frontier: Vec<VertexId>,
}

impl<'a> Expansion<'a> {
    fn new(g: &'a Digraph, v0: VertexId) -> Self {
        let mut seen = vec![false; g.num_vertices()];
        let mut frontier = Vec::new();
        for &w in g.successors(v0) {
            if !seen[w.0] {
                seen[w.0] = true;
                frontier.push(w);
            }
        }
        Self { g, seen, frontier }
    }

    /// Expand level by level until `target` is seen or a level adds nothing.
    fn run(&mut self, target: Option<VertexId>) -> bool {
        loop {
            if let Some(t) = target {
                if self.seen[t.0] {
                    return true;
                }
            }
            let mut next = Vec::new();
            for &v in &self.frontier {
                for &w in self.g.successors(v) {
                    if !self.seen[w.0] {
                        self.seen[w.0] = true;
                        next.push(w);
                    }
                }
            }
            if next.is_empty() {
                return false;
            }
            self.frontier = next;
        }
    }
}
