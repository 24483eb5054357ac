//! Compressed stack of (index, LCP-to-parent) pairs for the open-node stack.
//!
//! Ground truth: `lcp_stack_delta_0.hpp` (exact) and `lcp_stack_delta_x.hpp`
//! (lossy, quantized). The live register tracking the current top's LCP is
//! updated by a signed delta relative to the previous register value. At
//! `delta == 0` the delta is stored exactly (unary-coded sign + magnitude,
//! via [`UnaryStack`]) and decoding is pure arithmetic. At `delta > 0` only
//! the top `64 - delta` bits of the magnitude are kept; decoding first
//! recovers an approximation that is guaranteed to never exceed the true
//! value by more than `2^delta - 1`, then resolves the remainder by
//! comparing the text directly from that safe lower bound forward.

use super::telescope::TelescopeStack;
use super::unary::UnaryStack;

pub struct DeltaLcpStack<'t> {
    text: &'t [u8],
    delta: u32,
    indices: TelescopeStack,
    lcps: UnaryStack,
    signs: Vec<bool>,
    top_lcp: u64,
}

impl<'t> DeltaLcpStack<'t> {
    /// `delta` is the number of low bits of each step's magnitude that are
    /// discarded before storage; `0` keeps the stack exact.
    pub fn new(text: &'t [u8], delta: u32) -> Self {
        DeltaLcpStack {
            text,
            delta,
            indices: TelescopeStack::new(),
            lcps: UnaryStack::new(),
            signs: Vec::new(),
            top_lcp: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn top_index(&self) -> u64 {
        self.indices.top()
    }

    /// LCP between the current top node and its parent. Exact regardless
    /// of `delta`: the live register is always fully resolved on pop.
    pub fn top_lcp(&self) -> u64 {
        self.top_lcp
    }

    pub fn push(&mut self, index: u64, lcp: u64) {
        let (sign_increase, magnitude) = if lcp >= self.top_lcp {
            (true, lcp - self.top_lcp)
        } else {
            (false, self.top_lcp - lcp + 1)
        };
        let stored = magnitude >> self.delta;
        self.signs.push(sign_increase);
        self.lcps.push(stored);
        self.indices.push(index);
        self.top_lcp = lcp;
    }

    /// Remove the current top, returning `(its index, its exact LCP to its
    /// parent)`. After this call `top_index`/`top_lcp` describe the node
    /// that used to be the parent.
    pub fn pop(&mut self) -> (u64, u64) {
        debug_assert!(!self.is_empty(), "DeltaLcpStack underflow");
        let popped_index = self.indices.top();
        let popped_lcp = self.top_lcp;
        let sign_increase = self.signs.pop().expect("delta lcp stack sign underflow");
        let stored = self.lcps.pop();
        self.indices.pop();

        self.top_lcp = if self.indices.is_empty() {
            // The root has no parent; its LCP-to-parent is 0 by convention.
            0
        } else {
            let recovered_magnitude = stored << self.delta;
            let approx = if sign_increase {
                self.top_lcp - recovered_magnitude
            } else {
                recovered_magnitude + self.top_lcp - 1
            };
            if self.delta == 0 {
                approx
            } else {
                let new_top_index = self.indices.top();
                let parent_index = self.indices.second_from_top();
                let max_error = (1u64 << self.delta) - 1;
                self.probe_exact_lcp(new_top_index, parent_index, approx, max_error)
            }
        };

        (popped_index, popped_lcp)
    }

    /// `approx` is guaranteed `>=` the true LCP and within `max_error` of
    /// it; scan forward from the guaranteed-safe lower bound to find the
    /// exact common-prefix length of `text[a..]` and `text[b..]`.
    fn probe_exact_lcp(&self, a: u64, b: u64, approx: u64, max_error: u64) -> u64 {
        let a = a as usize;
        let b = b as usize;
        let mut r = approx.saturating_sub(max_error) as usize;
        while a + r < self.text.len() && b + r < self.text.len() && self.text[a + r] == self.text[b + r] {
            r += 1;
        }
        r as u64
    }
}
