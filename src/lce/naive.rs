//! Direct byte-comparison LCE: no index, O(lce) time per query.
//!
//! Ground truth: `lce_naive.hpp`. Used as the baseline provider for small
//! inputs and as the head-compare phase other providers fall back to before
//! committing to their accelerated search.

use super::Lce;

pub struct NaiveLce<'t> {
    text: &'t [u8],
}

impl<'t> NaiveLce<'t> {
    pub fn new(text: &'t [u8]) -> Self {
        NaiveLce { text }
    }
}

impl<'t> Lce for NaiveLce<'t> {
    fn len(&self) -> usize {
        self.text.len()
    }

    fn char_at(&self, i: usize) -> u8 {
        self.text[i]
    }

    fn lce(&self, i: usize, j: usize) -> usize {
        if i == j {
            return self.text.len() - i;
        }
        let max_len = self.text.len() - i.max(j);
        let mut r = 0;
        while r < max_len && self.text[i + r] == self.text[j + r] {
            r += 1;
        }
        r
    }
}
