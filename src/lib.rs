//! Linear-time nearest-smaller-suffix (PSS/NSS) construction over byte
//! strings, with an in-place Rabin-Karp LCE index and a succinct
//! balanced-parenthesis encoding of the resulting Cartesian tree of
//! suffixes.
//!
//! The construction algorithm is a left-to-right pass driven by
//! longest-common-extension queries over an open-node stack, as described
//! in [`construct::xss`]. [`oracle`] provides an independent,
//! suffix-array-based reference implementation of the same PSV/NSV
//! relationship, used to check the fast path against in tests.

pub mod cli;
pub mod construct;
pub mod error;
pub mod lce;
pub mod oracle;
#[cfg(feature = "pack")]
pub mod packed;
pub mod text;
pub mod tree;

mod bitvector;
mod bitword;
mod bps;
mod sais;
mod stacks;

pub use bitvector::BitVector;
pub use bps::BpSupport;
pub use construct::{ConstructionStats, XssResult};
pub use text::Text;

use lce::{Lce, RabinKarpLce};

/// Build PSS/NSS arrays for a loaded [`Text`] using the in-place
/// Rabin-Karp LCE index, the default provider for a general byte alphabet.
pub fn build(text: &Text, delta: u8) -> XssResult {
    let lce = RabinKarpLce::new(&text.bytes);
    construct::construct(&text.bytes, &lce, delta as u32)
}

/// Build PSS/NSS arrays directly from raw sentinel-padded bytes, choosing
/// the LCE provider explicitly. Exposed for callers (and tests) that
/// already have a provider built.
pub fn build_with<L: Lce>(text: &[u8], lce: &L, delta: u8) -> XssResult {
    construct::construct(text, lce, delta as u32)
}
