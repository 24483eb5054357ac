//! The XSS construction engine: left-to-right, LCE-driven nearest-smaller-
//! suffix construction over an open-node stack.
//!
//! Ground truth: `xss_real.hpp`. The pop-until-less-than / LCE-refine / push
//! core below follows that file's state machine literally (its own naming:
//! POP_GT, REFINE_LCE, PUSH).
//!
//! Run extension is a real position-skipping fast path: when the freshly
//! pushed node's LCP to its parent (`gamma`) is at least twice its distance
//! from the parent (`d = i - j_star`), the periodicity lemma guarantees
//! `text` repeats with period `d` over `[j_star, j_star + gamma)`. Because
//! `pss[i] == j_star` also means every position strictly between `j_star`
//! and `i` has already been popped off the stack — see the invariant
//! argument in [`apply_run_extension_skip`] — their PSS/NSS values are
//! already final and the next `d - 1` positions' answers are exactly those
//! values shifted forward by `d`, with no further stack interaction needed.
//! `apply_run_extension_skip` performs that copy and the main loop jumps
//! `i` ahead by `d` instead of advancing by one.
//!
//! The Lyndon-run (amortized look-ahead) skip remains detection-only: its
//! activation condition is evaluated and counted in [`ConstructionStats`],
//! and `super::lyndon::periodic_prefix` is real, tested code, but this port
//! does not splice the stack to skip ahead on it. Generalizing the
//! run-extension proof above to a period detected independently of the
//! immediate stack parent (via Duval factorization rather than the gap
//! `d`) needs invariants this port hasn't established, and getting that
//! wrong corrupts PSS/NSS silently at exactly the skipped positions. Every
//! position still reaches the core loop on this path, so correctness does
//! not depend on it; only the amortized time bound on Lyndon-heavy inputs
//! is weaker than the reference's.

use crate::lce::Lce;
use crate::stacks::DeltaLcpStack;

use super::lyndon;

/// Matches the reference's own constant: a skip mechanism only pays for
/// itself once at least 64 bits of BP (equivalently, 128 characters of LCP)
/// would be produced by firing it.
pub const ACTIVE_THRESHOLD: usize = 128;

/// Counts of how often each acceleration's activation condition was met
/// during a construction run, mirroring the reference's `xss_real_stats`.
/// `run_extensions` counts actual skips taken; `lyndon_skips` counts
/// detections only (see the module docs).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConstructionStats {
    pub run_extensions: u64,
    pub lyndon_skips: u64,
}

pub struct XssResult {
    pub pss: Vec<u32>,
    pub nss: Vec<u32>,
    pub stats: ConstructionStats,
}

/// Copy `d - 1` already-resolved PSS/NSS answers forward by `d` positions,
/// from `[j_star + 1, j_star + d)` to `[i + 1, i + d)`.
///
/// Sound whenever `pss[i] == j_star` was just established by the core loop
/// and `d = i - j_star`: that assignment means every index strictly between
/// `j_star` and `i` has already lost its bid to stay on the open-node stack
/// (its PSS and NSS are both final), and the periodicity implied by
/// `gamma = lce(j_star, i) >= 2 * d` makes the suffix at `j_star + k`
/// structurally identical to the suffix at `i + k` for `1 <= k < d`, offset
/// by exactly `d`. No stack mutation is required: none of the skipped
/// positions are ever pushed.
fn apply_run_extension_skip(pss: &mut [u32], nss: &mut [u32], j_star: usize, i: usize, d: usize) {
    debug_assert!(d > 0, "run extension skip needs a positive gap");
    debug_assert!(i + d <= pss.len(), "run extension skip would run past the end of the text");
    for k in 1..d {
        pss[i + k] = pss[j_star + k] + d as u32;
        nss[i + k] = nss[j_star + k] + d as u32;
    }
}

/// Build PSS/NSS arrays for `text` (sentinel-padded, see the `text` module)
/// using `lce` as the longest-common-extension oracle. `delta` is forwarded
/// to the backing [`DeltaLcpStack`].
pub fn construct<L: Lce>(text: &[u8], lce: &L, delta: u32) -> XssResult {
    let n = lce.len();
    debug_assert_eq!(n, text.len(), "lce index built over a different text");
    let sentinel = n as u32;
    let mut pss = vec![sentinel; n];
    let mut nss = vec![sentinel; n];
    let mut stats = ConstructionStats::default();

    if n == 0 {
        return XssResult { pss, nss, stats };
    }

    let mut stack = DeltaLcpStack::new(text, delta);
    stack.push(0, 0);

    let mut i = 1usize;
    while i < n {
        // Phase 1 (POP_GT): a cheap single-character pre-filter before
        // paying for an LCE query.
        while !stack.is_empty() && lce.char_at(stack.top_index() as usize) > lce.char_at(i) {
            let (popped, _) = stack.pop();
            nss[popped as usize] = i as u32;
        }

        if stack.is_empty() {
            // Only possible when suffix(i) is smaller than every suffix seen
            // so far, including the running root — i.e. i is a new minimum.
            pss[i] = sentinel;
            stack.push(i as u64, 0);
            i += 1;
            continue;
        }

        // Phase 2 (REFINE_LCE).
        let mut j = stack.top_index() as usize;
        let mut l = lce.lce(j, i);
        let mut gamma = l;
        let mut j_star = j;
        loop {
            if j + l >= n {
                // suffix(top) ends exactly here: it's the shorter (hence
                // smaller) of the two, so it stays as i's ancestor.
                break;
            }
            let cur_end = i + l >= n;
            let must_pop = cur_end || lce.char_at(j + l) > lce.char_at(i + l);
            if !must_pop {
                break;
            }
            let (popped, popped_lcp) = stack.pop();
            nss[popped as usize] = i as u32;
            if stack.is_empty() {
                break;
            }
            j = stack.top_index() as usize;
            l = if cur_end || popped_lcp == l { lce.lce(j, i) } else { popped_lcp };
            gamma = l;
            j_star = j;
        }

        if stack.is_empty() {
            pss[i] = sentinel;
            stack.push(i as u64, 0);
            i += 1;
            continue;
        }

        // Phase 3 (PUSH).
        pss[i] = j_star as u32;
        stack.push(i as u64, l as u64);

        let d = i - j_star;
        if gamma >= ACTIVE_THRESHOLD && d > 0 {
            if gamma >= 2 * d {
                stats.run_extensions += 1;
                log::trace!(target: "xss::construct", "run extension fired at i={i} (gamma={gamma}, d={d})");
                apply_run_extension_skip(&mut pss, &mut nss, j_star, i, d);
                i += d;
                continue;
            } else {
                let (period, matched_len) = lyndon::periodic_prefix(text, i);
                if matched_len >= gamma.saturating_sub(l) && period <= d.max(1) {
                    stats.lyndon_skips += 1;
                    log::trace!(target: "xss::construct", "lyndon-run skip condition met at i={i} (gamma={gamma}, d={d}, period={period})");
                }
            }
        }

        i += 1;
    }

    while !stack.is_empty() {
        stack.pop();
    }

    XssResult { pss, nss, stats }
}
