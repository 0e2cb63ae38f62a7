//! Enumerator/aggregator: exact corner-to-corner reachability probability.
//!
//! For a grid of side n every orientation of its `2·n·(n−1)` streets is
//! visited once, oriented into a fresh `Digraph`, and tested with
//! `can_reach` from the top-left to the bottom-right corner. The tally is
//! reduced to an exact `Ratio<u64>`; no floating point is involved.
//!
//! `count_reachable_par` splits the counter range into contiguous blocks and
//! sums per-block tallies with rayon. Orientations are independent, so the
//! result is identical to the sequential walk.

use std::ops::{Add, Range};

use num::rational::Ratio;
use rayon::prelude::*;
use serde::Serialize;

use crate::digraph::{build_digraph, can_reach};
use crate::grid::{corners, grid_edges, Edge};
use crate::orientation::{orientation_count, Orientations};

/// Smallest block count the CLI will run (a single square).
pub const MIN_BLOCKS: usize = 1;
/// Largest block count the CLI will run; 3×3 blocks already mean 2^24 orientations.
pub const MAX_BLOCKS: usize = 3;

/// Running `(successes, total)` tally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReachCount {
    pub successes: u64,
    pub total: u64,
}

impl ReachCount {
    #[inline]
    pub fn record(&mut self, reached: bool) {
        self.total += 1;
        if reached {
            self.successes += 1;
        }
    }

    /// `successes / total` in lowest terms.
    ///
    /// Panics on an empty tally.
    pub fn probability(&self) -> Ratio<u64> {
        assert!(self.total > 0, "probability of an empty tally");
        Ratio::new(self.successes, self.total)
    }
}

impl Add for ReachCount {
    type Output = ReachCount;

    fn add(self, rhs: ReachCount) -> ReachCount {
        ReachCount {
            successes: self.successes + rhs.successes,
            total: self.total + rhs.total,
        }
    }
}

fn count_block(n: usize, edges: &[Edge], block: Range<u64>) -> ReachCount {
    let num_vertices = n * n;
    let (v0, v1) = corners(n);
    let mut tally = ReachCount::default();
    for o in Orientations::range(edges.len(), block) {
        let graph = build_digraph(num_vertices, &o.directed_edges(edges));
        tally.record(can_reach(&graph, v0, v1));
    }
    tally
}

/// Tally every orientation of an n×n grid (n = side in vertices) sequentially.
pub fn count_reachable(n: usize) -> ReachCount {
    let edges = grid_edges(n);
    let total = orientation_count(edges.len());
    count_block(n, &edges, 0..total)
}

/// Same tally as [`count_reachable`], split into `chunks` contiguous blocks
/// counted on the rayon pool. `chunks` is clamped to `1..=2^E`.
pub fn count_reachable_par(n: usize, chunks: usize) -> ReachCount {
    let edges = grid_edges(n);
    let total = orientation_count(edges.len());
    let chunks = (chunks.max(1) as u64).min(total);
    let step = total.div_ceil(chunks);
    (0..chunks)
        .into_par_iter()
        .map(|c| {
            let lo = (c * step).min(total);
            let hi = (lo + step).min(total);
            count_block(n, &edges, lo..hi)
        })
        .reduce(ReachCount::default, Add::add)
}

/// Exact probability that the far corner is reachable from the near one.
pub fn reach_prob(n: usize) -> Ratio<u64> {
    count_reachable(n).probability()
}

/// Result for one block count, shaped for text and JSON output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SizeReport {
    pub blocks: usize,
    pub side: usize,
    pub edges: usize,
    pub successes: u64,
    pub total: u64,
    pub numer: u64,
    pub denom: u64,
    /// `numer/denom`, or the bare integer when `denom == 1`.
    pub probability: String,
}

impl SizeReport {
    /// Enumerate a grid of `blocks × blocks` squares.
    pub fn compute(blocks: usize, parallel: bool) -> Self {
        let side = blocks + 1;
        let count = if parallel {
            count_reachable_par(side, rayon::current_num_threads() * 4)
        } else {
            count_reachable(side)
        };
        Self::from_count(blocks, count)
    }

    pub fn from_count(blocks: usize, count: ReachCount) -> Self {
        let side = blocks + 1;
        let p = count.probability();
        Self {
            blocks,
            side,
            edges: crate::grid::edge_count(side),
            successes: count.successes,
            total: count.total,
            numer: *p.numer(),
            denom: *p.denom(),
            probability: p.to_string(),
        }
    }

    pub fn sentence(&self) -> String {
        format!(
            "With a square grid of {b} x {b} blocks, there exists at least one path with probability {p}.",
            b = self.blocks,
            p = self.probability
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_square_is_seven_sixteenths() {
        let c = count_reachable(2);
        assert_eq!(c, ReachCount { successes: 7, total: 16 });
        assert_eq!(reach_prob(2), Ratio::new(7, 16));
    }

    #[test]
    fn two_by_two_blocks() {
        assert_eq!(reach_prob(3), Ratio::new(1135, 4096));
        assert_eq!(count_reachable(3).total, 1 << 12);
    }

    #[test]
    #[ignore = "enumerates 2^24 orientations"]
    fn three_by_three_blocks() {
        assert_eq!(reach_prob(4), Ratio::new(3_329_245, 16_777_216));
    }

    #[test]
    fn totals_match_edge_count() {
        for n in 2..=3 {
            let c = count_reachable(n);
            assert_eq!(c.total, 1u64 << (2 * n * (n - 1)));
            assert!(c.successes <= c.total);
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        assert_eq!(reach_prob(3), reach_prob(3));
    }

    #[test]
    fn parallel_matches_sequential() {
        let seq = count_reachable(3);
        for chunks in [0, 1, 3, 7, 64, 10_000] {
            assert_eq!(count_reachable_par(3, chunks), seq, "chunks = {chunks}");
        }
    }

    #[test]
    fn ratio_reduces_and_prints_integers_bare() {
        let all = ReachCount { successes: 8, total: 8 };
        assert_eq!(all.probability().to_string(), "1");
        let none = ReachCount { successes: 0, total: 8 };
        assert_eq!(none.probability().to_string(), "0");
        let half = ReachCount { successes: 4, total: 8 };
        assert_eq!(half.probability().to_string(), "1/2");
    }

    #[test]
    fn report_for_single_block() {
        let r = SizeReport::compute(1, false);
        assert_eq!(r.side, 2);
        assert_eq!(r.edges, 4);
        assert_eq!((r.numer, r.denom), (7, 16));
        assert_eq!(
            r.sentence(),
            "With a square grid of 1 x 1 blocks, there exists at least one path with probability 7/16."
        );
        assert_eq!(SizeReport::compute(1, true), r);
    }
}
