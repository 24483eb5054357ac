//! The direct (non-oracle) construction path: [`xss`] builds PSS/NSS arrays
//! in one left-to-right pass; [`lyndon`] provides the period/run detection
//! it leans on for its acceleration instrumentation.

pub mod lyndon;
pub mod xss;

pub use xss::{construct, ConstructionStats, XssResult};
