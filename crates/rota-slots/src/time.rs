//! Periodic time coordinates.
//!
//! A [`TimeSystem`] folds absolute instants onto one recurring period: every
//! instant becomes an [`Atom`] holding the index of its period relative to a
//! caller-chosen fixpoint and its offset inside that period. A single
//! period's [`Slots`](crate::Slots) can then describe "a typical week"
//! regardless of which calendar week is being looked at.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// A position in periodic time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Atom {
    /// Period index relative to the fixpoint's period.
    pub epoch: i64,
    /// Offset inside the period, in atoms. Normally below the epoch length,
    /// but may overrun it until [`Atom::modulo`] or [`Atom::clamp`] is applied.
    pub time: usize,
}

impl Atom {
    pub fn new(epoch: i64, time: usize) -> Self {
        Self { epoch, time }
    }

    /// Carry whole periods out of `time` into `epoch`, leaving
    /// `time < ts.epoch_length()`.
    pub fn modulo<T: TimeSystem>(self, ts: &T) -> Atom {
        let epoch_length = ts.epoch_length();
        if epoch_length == 0 {
            return self;
        }
        let carried = (self.time / epoch_length) as i64;
        Atom {
            epoch: self.epoch + carried,
            time: self.time % epoch_length,
        }
    }

    /// Cap `time` at the last atom of the period.
    pub fn clamp<T: TimeSystem>(self, ts: &T) -> Atom {
        let last = ts.epoch_length().saturating_sub(1);
        Atom {
            epoch: self.epoch,
            time: self.time.min(last),
        }
    }
}

/// Maps absolute instants to and from periodic [`Atom`] coordinates.
///
/// Implementations are stateless and may be shared across threads. Time
/// zone handling is delegated to chrono: every method is generic over the
/// zone of the instants it receives, and decoded instants come back in the
/// fixpoint's zone.
pub trait TimeSystem {
    /// Number of atoms in one period.
    fn epoch_length(&self) -> usize;

    /// Whole periods from the period containing `y` to the period
    /// containing `x` (`epoch(x) - epoch(y)`), rounded to the nearest period.
    fn epoch_delta<Tz: TimeZone>(&self, x: &DateTime<Tz>, y: &DateTime<Tz>) -> i64;

    /// Encode `x` relative to `fixpoint`. The result is clamped so rounding
    /// at the end of a period never yields an out-of-range offset.
    fn encode_time<Tz: TimeZone>(&self, fixpoint: &DateTime<Tz>, x: &DateTime<Tz>) -> Atom;

    /// Inverse of [`TimeSystem::encode_time`]. The atom is normalised with
    /// [`Atom::modulo`] first, so overrunning offsets roll into later periods.
    fn decode_time<Tz: TimeZone>(&self, fixpoint: &DateTime<Tz>, atom: Atom) -> DateTime<Tz>;
}
