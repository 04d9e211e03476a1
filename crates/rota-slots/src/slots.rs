//! Run-length encoded availability for one period, and the algorithms over it.
//!
//! A [`Slots`] value is an immutable sequence of one-byte run records (see
//! [`crate::run`]). Every operation here returns a fresh value and never
//! fails: validation happens when a value is built by the
//! [`encoder`](crate::encoder), and any byte sequence decodes to *some*
//! schedule.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::interval::{BoolInterval, Interval};
use crate::run::{push_run, Run};

/// Availability over a span of atoms, stored as run records.
///
/// Serialises transparently as its raw record bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slots {
    bytes: Vec<u8>,
}

/// A positioned overwrite: atoms `[start, start + patch.span())` of a base
/// [`Slots`] are replaced by `patch`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotsPatch {
    pub start: usize,
    pub patch: Slots,
}

impl SlotsPatch {
    pub fn new(start: usize, bytes: Vec<u8>) -> Self {
        Self {
            start,
            patch: Slots::new(bytes),
        }
    }

    /// The atoms this patch overwrites.
    pub fn window(&self) -> Interval {
        Interval::new(self.start, self.start.saturating_add(self.patch.span()))
    }
}

impl Slots {
    /// Wrap raw run records. Any byte sequence is accepted.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of run records.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn runs(&self) -> impl Iterator<Item = Run> + '_ {
        self.bytes.iter().copied().map(Run::decode)
    }

    /// Total atoms covered by all records.
    pub fn span(&self) -> usize {
        self.runs().map(|run| run.length).sum()
    }

    /// Decode into a minimal list of intervals, the first starting at
    /// `start_time`. Neighbouring intervals always differ in value.
    /// Coordinates saturate at `usize::MAX`.
    pub fn to_intervals(&self, start_time: usize) -> Vec<BoolInterval> {
        let mut intervals = Vec::new();
        let mut runs = self.runs();
        let Some(first) = runs.next() else {
            return intervals;
        };

        let mut open_from = start_time;
        let mut value = first.available;
        let mut t = start_time.saturating_add(first.length);
        for run in runs {
            if run.available != value {
                intervals.push(BoolInterval::new(open_from, t, value));
                open_from = t;
                value = run.available;
            }
            t = t.saturating_add(run.length);
        }
        intervals.push(BoolInterval::new(open_from, t, value));

        intervals
    }

    /// Replace the patch window with the patch's records.
    ///
    /// Records straddling either edge of the window are trimmed, not merged
    /// with their neighbours. A patch starting at or beyond the covered span
    /// has no effect; a patch running past the end extends the span. An
    /// empty patch returns an unchanged copy.
    pub fn apply_patch(&self, patch: &SlotsPatch) -> Slots {
        if patch.patch.is_empty() {
            return self.clone();
        }

        let window = patch.window();
        let mut out = Vec::with_capacity(self.len() + patch.patch.len() + 2);
        let mut i = 0;
        let mut t = 0;

        while i < self.bytes.len() {
            let run = Run::decode(self.bytes[i]);
            if t + run.length > window.from {
                break;
            }
            out.push(self.bytes[i]);
            t += run.length;
            i += 1;
        }

        if i == self.bytes.len() {
            trace!("patch at {} starts beyond covered span {}", window.from, t);
            return Slots::new(out);
        }

        push_run(&mut out, Run::decode(self.bytes[i]).available, window.from - t);
        out.extend_from_slice(patch.patch.as_bytes());

        while i < self.bytes.len() {
            let run = Run::decode(self.bytes[i]);
            if t + run.length > window.until {
                break;
            }
            t += run.length;
            i += 1;
        }

        if let Some(&byte) = self.bytes.get(i) {
            let run = Run::decode(byte);
            push_run(&mut out, run.available, t + run.length - window.until);
            out.extend_from_slice(&self.bytes[i + 1..]);
        }

        trace!(
            "applied patch {} ({} records) to {} records, result has {} records",
            window,
            patch.patch.len(),
            self.len(),
            out.len()
        );
        Slots::new(out)
    }

    /// Apply each patch in order, each one on top of the result of the
    /// previous one.
    pub fn apply_patches(&self, patches: &[SlotsPatch]) -> Slots {
        patches
            .iter()
            .fold(self.clone(), |slots, patch| slots.apply_patch(patch))
    }

    /// Atom-wise AND of two slot values. The result covers the shorter of
    /// the two spans and is empty if either side is.
    pub fn intersection(&self, other: &Slots) -> Slots {
        let mut left = self.runs();
        let mut right = other.runs();
        let (Some(mut a), Some(mut b)) = (left.next(), right.next()) else {
            return Slots::default();
        };

        let mut out = Vec::with_capacity(self.len().max(other.len()));
        let mut current = a.available && b.available;
        let mut pending = 0;
        loop {
            let value = a.available && b.available;
            if value != current {
                push_run(&mut out, current, pending);
                current = value;
                pending = 0;
            }

            let step = a.length.min(b.length);
            pending += step;
            a.length -= step;
            b.length -= step;

            if a.length == 0 {
                match left.next() {
                    Some(run) => a = run,
                    None => break,
                }
            }
            if b.length == 0 {
                match right.next() {
                    Some(run) => b = run,
                    None => break,
                }
            }
        }
        push_run(&mut out, current, pending);

        trace!(
            "intersected {} and {} records into {}",
            self.len(),
            other.len(),
            out.len()
        );
        Slots::new(out)
    }

    /// Whether every atom of a non-empty `interval` is covered and available.
    pub fn is_available(&self, interval: &Interval) -> bool {
        if interval.until <= interval.from {
            return false;
        }

        let mut t = 0;
        for run in self.runs() {
            if t >= interval.until {
                break;
            }
            let run_end = t + run.length;
            if run_end > interval.from && !run.available {
                return false;
            }
            t = run_end;
        }

        t >= interval.until
    }

    /// Every interval of exactly `length` atoms inside `between` that is
    /// fully available, in ascending order.
    ///
    /// Candidates slide one atom at a time, so they overlap: an available
    /// block of `n` atoms yields `n - length + 1` of them.
    pub fn available_intervals(&self, length: usize, between: Interval) -> Vec<Interval> {
        let mut found = Vec::new();
        if length == 0 || between.until <= between.from {
            return found;
        }

        let mut emit = |block_start: usize, block_end: usize| {
            let block_end = block_end.min(between.until);
            if block_end.saturating_sub(block_start) >= length {
                found.extend(
                    (block_start..=block_end - length).map(|j| Interval::new(j, j + length)),
                );
            }
        };

        let mut t = 0;
        let mut block_start = None;
        for run in self.runs() {
            let run_end = t + run.length;
            if run_end <= between.from {
                t = run_end;
                continue;
            }
            if t >= between.until {
                break;
            }
            if run.available {
                if block_start.is_none() {
                    block_start = Some(t.max(between.from));
                }
            } else if let Some(start) = block_start.take() {
                emit(start, t);
            }
            t = run_end;
        }
        if let Some(start) = block_start {
            emit(start, t);
        }

        found
    }
}

impl From<Vec<u8>> for Slots {
    fn from(bytes: Vec<u8>) -> Self {
        Slots::new(bytes)
    }
}

impl AsRef<[u8]> for Slots {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
