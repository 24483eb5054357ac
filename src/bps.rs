//! Balanced-parentheses navigation over a [`BitVector`].
//!
//! Ground truth: `bps_support_naive.hpp`. The reference file name says
//! "naive" because the production BP support structures elsewhere in that
//! codebase add rank/select acceleration on top of this one; this port only
//! implements the naive layer, which is what the rest of the crate needs —
//! the succinct tree this crate emits is read once per traversal, not
//! queried at the rate that would justify sub-linear excess search.
//!
//! Convention: `excess[k]` is the running sum of `+1` per `(` and `-1` per
//! `)` over bits `0..k` (i.e. the excess *before* position `k`). Every
//! operation below is expressed in terms of that one array.

use crate::bitvector::BitVector;

pub struct BpSupport<'b> {
    bp: &'b BitVector,
    excess: Vec<i64>,
}

impl<'b> BpSupport<'b> {
    pub fn new(bp: &'b BitVector) -> Self {
        let mut excess = Vec::with_capacity(bp.len() + 1);
        excess.push(0i64);
        for i in 0..bp.len() {
            let prev = excess[i];
            excess.push(prev + if bp.get(i) { 1 } else { -1 });
        }
        BpSupport { bp, excess }
    }

    /// Index of the closing parenthesis matching the opening one at `pos`.
    pub fn find_close(&self, pos: usize) -> usize {
        debug_assert!(self.bp.get(pos), "find_close requires an opening paren");
        let target = self.excess[pos];
        let mut j = pos + 1;
        while self.excess[j + 1] != target {
            j += 1;
        }
        j
    }

    /// Opening parenthesis of the node enclosing the one opened at `pos`,
    /// or `None` if `pos` is the root.
    pub fn enclose(&self, pos: usize) -> Option<usize> {
        debug_assert!(self.bp.get(pos), "enclose requires an opening paren");
        if pos == 0 {
            return None;
        }
        let target = self.excess[pos] - 1;
        let mut j = pos;
        while j > 0 {
            j -= 1;
            if self.bp.get(j) && self.excess[j] == target {
                return Some(j);
            }
        }
        None
    }

    /// Position of the `k`-th opening parenthesis (0-indexed).
    pub fn select_open(&self, k: usize) -> usize {
        let mut count = 0usize;
        for i in 0..self.bp.len() {
            if self.bp.get(i) {
                if count == k {
                    return i;
                }
                count += 1;
            }
        }
        panic!("select_open: index {k} out of range");
    }

    /// Distance from `pos` back to its parent's opening position.
    pub fn parent_distance(&self, pos: usize) -> Option<usize> {
        self.enclose(pos).map(|p| pos - p)
    }

    /// Number of nodes in the subtree rooted at the node opened at `pos`.
    pub fn subtree_size(&self, pos: usize) -> usize {
        let close = self.find_close(pos);
        (close - pos + 1) / 2
    }

    /// Nearest position `j < i` with excess-before(j) equal to `target`.
    pub fn previous_value(&self, i: usize, target: i64) -> Option<usize> {
        let mut j = i;
        while j > 0 {
            j -= 1;
            if self.excess[j] == target {
                return Some(j);
            }
        }
        None
    }

    /// Nearest position `j > i` with excess-before(j) equal to `target`.
    pub fn next_value(&self, i: usize, target: i64) -> Option<usize> {
        ((i + 1)..=self.bp.len()).find(|&j| self.excess[j] == target)
    }
}

#[cfg(test)]
mod tests;
