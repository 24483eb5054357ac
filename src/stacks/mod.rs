//! Stack data structures for the XSS construction loop.
//!
//! Ground truth: `data_structures/stacks/*` in the reference implementation
//! (telescope stack, unary stack, delta-compressed LCP stack, buffered
//! front-end). The reference stores unary-coded gaps across a two-level
//! word/spill structure with hand-tuned bit arithmetic; this port keeps the
//! same idea (append-only packed-bit buffer plus a spill stack for large
//! values) behind a single shared primitive, [`gap_stack::GapStack`], so the
//! telescoping-sum argument for amortized O(1) push/pop is obviously true
//! from one piece of code instead of being re-derived per stack.

mod gap_stack;

mod telescope;
mod unary;
mod delta_lcp;
mod buffered;

pub use telescope::TelescopeStack;
pub use unary::UnaryStack;
pub use delta_lcp::DeltaLcpStack;
pub use buffered::BufferedStack;
