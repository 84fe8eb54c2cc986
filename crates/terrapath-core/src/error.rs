//! Error types shared across the terrapath crates.

/// Errors surfaced by the analysis pipeline.
///
/// All variants are raised immediately and never retried internally: the
/// computation is deterministic, so retrying without changed inputs cannot
/// succeed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed or mismatched inputs: grid misalignment, negative weights,
    /// empty or all-impassable source sets.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The destination was never reached within the accumulation cutoff, or
    /// the backlink trace failed to terminate.
    #[error("destination {0} is unreachable")]
    UnreachableDestination(crate::geom::Point),

    /// Accumulated cost left the representable range.
    #[error("accumulated cost overflowed at {0}")]
    ArithmeticOverflow(crate::geom::Point),
}

pub type Result<T> = std::result::Result<T, Error>;
