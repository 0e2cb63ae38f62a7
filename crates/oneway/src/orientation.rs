//! Bit-counter enumeration of edge directions.
//!
//! An orientation of E streets is an E-bit word; counting the word from 0 to
//! 2^E − 1 walks the whole space. Edge 0 sits in the most significant bit, so
//! the walk visits orientations in lexicographic order of their per-edge
//! choices (edge 0 varies slowest).

use std::ops::Range;

use crate::digraph::DirectedEdge;
use crate::grid::Edge;

/// Largest edge count whose orientation space fits the `u64` counter.
pub const MAX_EDGES: usize = 63;

/// One direction choice per edge, packed into a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Orientation {
    pub bits: u64,
    pub len: usize,
}

impl Orientation {
    /// Whether edge `i` is flipped from its canonical `a → b` direction.
    #[inline]
    pub fn flipped(&self, i: usize) -> bool {
        debug_assert!(i < self.len);
        (self.bits >> (self.len - 1 - i)) & 1 == 1
    }

    /// Apply the choices to `edges` (in canonical order).
    pub fn directed_edges(&self, edges: &[Edge]) -> Vec<DirectedEdge> {
        debug_assert_eq!(edges.len(), self.len);
        edges
            .iter()
            .enumerate()
            .map(|(i, e)| e.orient(self.flipped(i)))
            .collect()
    }
}

/// Size of the orientation space for `len` edges.
#[inline]
pub fn orientation_count(len: usize) -> u64 {
    assert!(
        len <= MAX_EDGES,
        "{len} edges exceed the enumerable maximum of {MAX_EDGES}"
    );
    1u64 << len
}

/// Iterator over a contiguous block of the orientation space.
#[derive(Clone, Debug)]
pub struct Orientations {
    next: u64,
    end: u64,
    len: usize,
}

impl Orientations {
    /// Every orientation of `len` edges.
    pub fn new(len: usize) -> Self {
        Self::range(len, 0..orientation_count(len))
    }

    /// Orientations whose counter falls in `block`.
    pub fn range(len: usize, block: Range<u64>) -> Self {
        let total = orientation_count(len);
        assert!(
            block.start <= block.end && block.end <= total,
            "block {block:?} outside 0..{total}"
        );
        Self {
            next: block.start,
            end: block.end,
            len,
        }
    }
}

impl Iterator for Orientations {
    type Item = Orientation;

    fn next(&mut self) -> Option<Orientation> {
        if self.next >= self.end {
            return None;
        }
        let bits = self.next;
        self.next += 1;
        Some(Orientation {
            bits,
            len: self.len,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.end - self.next) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Orientations {}
