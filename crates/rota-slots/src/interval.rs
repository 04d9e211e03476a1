//! Half-open atom ranges, optionally labelled with an availability flag.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RotaError};

/// A half-open range `[from, until)` of atom coordinates.
///
/// Construction is unchecked; call [`Interval::validate`] before trusting
/// `length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Interval {
    /// First atom included in the interval.
    pub from: usize,
    /// First atom after the interval.
    pub until: usize,
}

impl Interval {
    pub fn new(from: usize, until: usize) -> Self {
        Self { from, until }
    }

    /// Fails with [`RotaError::BadInterval`] unless `until > from`.
    pub fn validate(&self) -> Result<()> {
        if self.until <= self.from {
            return Err(RotaError::BadInterval {
                from: self.from,
                until: self.until,
            });
        }
        Ok(())
    }

    /// Number of atoms covered. Saturates at zero for reversed intervals.
    pub fn length(&self) -> usize {
        self.until.saturating_sub(self.from)
    }

    /// Whether `other` lies entirely within this interval.
    pub fn contains(&self, other: &Interval) -> bool {
        self.from <= other.from && other.until <= self.until
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{})", self.from, self.until)
    }
}

/// An [`Interval`] labelled available (`true`) or unavailable (`false`).
///
/// This is the unit of encoder input and decoder output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoolInterval {
    pub time: Interval,
    pub value: bool,
}

impl BoolInterval {
    pub fn new(from: usize, until: usize, value: bool) -> Self {
        Self {
            time: Interval::new(from, until),
            value,
        }
    }

    pub fn length(&self) -> usize {
        self.time.length()
    }
}

impl fmt::Display for BoolInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.time, self.value)
    }
}
