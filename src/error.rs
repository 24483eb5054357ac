//! Structured error types at the orchestrator boundary.
//!
//! Two classes: input-invalid and resource-exhaustion, expressed with
//! `thiserror` the way other small CLI-fronted crates do it.
//! Internal-invariant violations (stack underflow, LCE past the end of
//! text, BP over/under-run) are never represented here — they stay
//! `debug_assert!`/`assert!` fast-fail, matching `sais`'s own style.

use std::path::PathBuf;

/// Input-invalid errors raised while loading a text.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input file {path:?} is empty")]
    Empty { path: PathBuf },

    #[error("--length was given as 0, which produces an empty text")]
    ZeroLengthCap,
}

/// Resource-exhaustion errors raised before a construction that would
/// exceed a known-safe bound.
#[derive(Debug, thiserror::Error)]
pub enum ConstructError {
    #[error("refusing to construct over n={n} bytes (requested {requested_bytes} bytes of auxiliary storage, exceeding the configured limit)")]
    AllocationFailed { n: usize, requested_bytes: usize },
}
