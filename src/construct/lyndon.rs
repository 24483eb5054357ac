//! Duval's Lyndon factorization, and the periodic-run detection built on it.
//!
//! Ground truth: the reference implementation names `duval.hpp` as the
//! building block for its run-extension acceleration, but that file's
//! content could not be recovered from the retrieval pack; this is a
//! from-scratch implementation of the standard algorithm (Duval 1983),
//! written the way the rest of this crate writes small index-juggling
//! routines: flat slices, `u32`/`usize` indices, no allocation beyond the
//! output.

/// Starting indices of the Lyndon factorization of `s`: the unique
/// decomposition of `s` into a non-increasing sequence of Lyndon words.
pub fn lyndon_factorization(s: &[u8]) -> Vec<usize> {
    let n = s.len();
    let mut factors = Vec::new();
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        let mut k = i;
        while j < n && s[k] <= s[j] {
            if s[k] < s[j] {
                k = i;
            } else {
                k += 1;
            }
            j += 1;
        }
        let period = j - k;
        while i <= k {
            factors.push(i);
            i += period;
        }
    }
    factors
}

/// Run Duval's factorization step for the single factor starting at
/// `start`, without continuing on to the rest of the string. Returns
/// `(period, matched_len)`: `s[start .. start + matched_len]` consists of
/// whole repetitions of `s[start .. start + period]` plus, possibly, a
/// proper prefix of one more repetition.
pub fn periodic_prefix(s: &[u8], start: usize) -> (usize, usize) {
    let n = s.len();
    if start >= n {
        return (1, 0);
    }
    let mut j = start + 1;
    let mut k = start;
    while j < n && s[k] <= s[j] {
        if s[k] < s[j] {
            k = start;
        } else {
            k += 1;
        }
        j += 1;
    }
    (j - k, j - start)
}

/// Length of the maximal run of a single repeated byte starting at `start`
/// (`1` if `start` is past the end or the byte doesn't repeat).
pub fn constant_run_len(s: &[u8], start: usize) -> usize {
    let n = s.len();
    if start >= n {
        return 0;
    }
    let byte = s[start];
    let mut end = start + 1;
    while end < n && s[end] == byte {
        end += 1;
    }
    end - start
}
