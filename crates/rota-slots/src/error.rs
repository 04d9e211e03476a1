//! Error types for rota-slots operations.

use thiserror::Error;

/// Errors raised while validating intervals, building slots, or configuring
/// a time system.
///
/// Only construction can fail. Once a [`Slots`](crate::Slots) value exists,
/// every operation on it is total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotaError {
    /// An interval whose end does not lie after its start.
    #[error("Bad interval [{from},{until}): until must be greater than from")]
    BadInterval { from: usize, until: usize },

    /// The interval list given to an encoder covers no atoms at all.
    #[error("No temporal data given")]
    NoTime,

    /// An interval starts before the previous one ended.
    #[error("Temporal discontinuity: interval starting at {from} overlaps previous interval ending at {previous_until}")]
    Discontinuity { from: usize, previous_until: usize },

    /// The atom duration of a time system is unusable.
    #[error("Bad atom duration: {0}")]
    BadAtomDuration(String),
}

/// Convenience alias used throughout rota-slots.
pub type Result<T> = std::result::Result<T, RotaError>;
