//! Conversion between PSS/NSS arrays and the balanced-parentheses encoding
//! of the Cartesian tree of suffixes.
//!
//! Grounded in the XSS construction's own push/pop discipline. Each
//! position is pushed exactly once, in increasing order; NSS[t] == i holds
//! exactly when t is popped while processing i. That invariant is enough to
//! replay the same open/close sequence from NSS alone (`pss_nss_to_bp`) and
//! to invert it (`bp_to_pss_nss`) with a single linear scan each way,
//! without needing `BPSupport`'s general navigation at all — this crate
//! still implements and exposes `BPSupport` as a general-purpose succinct
//! tree primitive, but the round trip here is simpler to verify by direct
//! inspection.

use crate::bitvector::BitVector;

/// Encode `(pss, nss)` (length `n`) as a `2n + 2`-bit BP: a super-root pair
/// wrapping one open/close per position, opens in increasing position
/// order, closes exactly where `nss` says they happen.
pub fn pss_nss_to_bp(nss: &[u32]) -> BitVector {
    let n = nss.len();
    let mut bp = BitVector::zeroed(2 * n + 2);
    let mut cursor = 0usize;
    bp.set(cursor, true);
    cursor += 1;

    let mut stack: Vec<usize> = Vec::new();
    for i in 0..n {
        while let Some(&top) = stack.last() {
            if nss[top] as usize == i {
                // closing bit already zeroed
                cursor += 1;
                stack.pop();
            } else {
                break;
            }
        }
        bp.set(cursor, true);
        cursor += 1;
        stack.push(i);
    }
    while stack.pop().is_some() {
        cursor += 1;
    }
    // final super-root close bit already zeroed
    debug_assert_eq!(cursor + 1, bp.len());
    bp
}

/// Inverse of [`pss_nss_to_bp`]: recover `(pss, nss)` from a `2n + 2`-bit
/// BP built the same way.
pub fn bp_to_pss_nss(bp: &BitVector) -> (Vec<u32>, Vec<u32>) {
    let total = bp.len();
    debug_assert!(total >= 2 && total % 2 == 0);
    let n = total / 2 - 1;
    let sentinel = n as u32;
    let mut pss = vec![sentinel; n];
    let mut nss = vec![sentinel; n];
    let mut stack: Vec<usize> = Vec::new();
    let mut next_index = 0usize;

    for bit_pos in 1..total - 1 {
        if bp.get(bit_pos) {
            let i = next_index;
            next_index += 1;
            pss[i] = stack.last().map(|&t| t as u32).unwrap_or(sentinel);
            stack.push(i);
        } else if let Some(t) = stack.pop() {
            nss[t] = if next_index < n { next_index as u32 } else { sentinel };
        }
    }

    (pss, nss)
}
