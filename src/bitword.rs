//! Fixed-width word operations shared by the stacks and bitvector modules.
//!
//! Mirrors the `ctz`/`common.hpp` helpers of the reference implementation:
//! a handful of `inline` bit tricks on `u64` words, kept free-standing so
//! every stack and bitvector can share one tuned implementation.

/// All bits one.
pub const WORD_ALL_ONE: u64 = !0u64;
/// All bits zero.
pub const WORD_ALL_ZERO: u64 = 0u64;
/// Only the most significant bit set.
pub const WORD_LEFT_ONE: u64 = 1u64 << 63;

/// Count of trailing zero bits, built-in strategy.
///
/// Panics (via `trailing_zeros`'s own behavior) is impossible: `u64::trailing_zeros`
/// returns 64 for a zero word, which is never passed on the hot paths that call
/// this (those paths loop until a previous word is found nonzero).
#[inline]
pub fn trailing_zeros(word: u64) -> u32 {
    word.trailing_zeros()
}

/// Count of trailing zero bits, asserting the word is nonzero.
#[inline]
pub fn trailing_zeros_nonzero(word: u64) -> u32 {
    debug_assert_ne!(word, 0, "trailing_zeros_nonzero called on a zero word");
    word.trailing_zeros()
}

/// Reverse the bit order of a 64-bit word.
#[inline]
pub fn reverse_bits(word: u64) -> u64 {
    word.reverse_bits()
}

/// Length of the maximal run of zero bits starting at the most significant bit.
#[inline]
pub fn left_zeros(word: u64) -> u32 {
    word.leading_zeros()
}

/// Length of the maximal run of zero bits starting at the least significant bit.
#[inline]
pub fn right_zeros(word: u64) -> u32 {
    if word == 0 {
        64
    } else {
        word.trailing_zeros()
    }
}
