//! Interval lists → run-length encoded slots.
//!
//! Input is a list of [`BoolInterval`]s sorted by start, each starting at or
//! after the end of the previous one. Gaps between intervals are encoded as
//! unavailable. A full encoding additionally pads unavailable time from atom
//! 0 to the first interval and from the last interval to the end of the
//! period; a patch encoding does neither.

use log::debug;

use crate::error::{Result, RotaError};
use crate::interval::BoolInterval;
use crate::run::{push_run, records_for};
use crate::slots::{Slots, SlotsPatch};
use crate::time::TimeSystem;

/// Encode a list of intervals into one full period of slots.
///
/// # Errors
/// - [`RotaError::NoTime`] if the list is empty or covers no atoms.
/// - [`RotaError::Discontinuity`] if the list is unsorted or overlapping.
/// - [`RotaError::BadInterval`] if an interval ends before it starts.
pub fn intervals_to_slots<T: TimeSystem>(intervals: &[BoolInterval], ts: &T) -> Result<Slots> {
    intervals_to_bytes(intervals, true, true, ts).map(Slots::new)
}

/// Encode a list of intervals as a patch positioned at the first interval's
/// start. Errors are the same as for [`intervals_to_slots`].
pub fn intervals_to_slots_patch<T: TimeSystem>(
    intervals: &[BoolInterval],
    ts: &T,
) -> Result<SlotsPatch> {
    let bytes = intervals_to_bytes(intervals, false, false, ts)?;
    // Non-empty: intervals_to_bytes rejects an empty list.
    let start = intervals.first().map_or(0, |first| first.time.from);
    Ok(SlotsPatch::new(start, bytes))
}

/// Encode a list of intervals into raw run records.
///
/// `pad_head` fills `[0, first.from)` with unavailable time and `pad_tail`
/// fills `[last.until, ts.epoch_length())`. A tail that would be negative
/// is dropped.
pub fn intervals_to_bytes<T: TimeSystem>(
    intervals: &[BoolInterval],
    pad_head: bool,
    pad_tail: bool,
    ts: &T,
) -> Result<Vec<u8>> {
    let (Some(first), Some(last)) = (intervals.first(), intervals.last()) else {
        debug!("refusing to encode an empty interval list");
        return Err(RotaError::NoTime);
    };
    let start = first.time.from;
    let end = last.time.until;

    let mut records = 0;
    let mut atoms = 0;
    let mut previous_until = start;
    for interval in intervals {
        let time = interval.time;
        if time.until < time.from {
            debug!("refusing to encode reversed interval {}", time);
            return Err(RotaError::BadInterval {
                from: time.from,
                until: time.until,
            });
        }
        if time.from < previous_until {
            debug!(
                "refusing to encode {}: starts before previous interval ends at {}",
                time, previous_until
            );
            return Err(RotaError::Discontinuity {
                from: time.from,
                previous_until,
            });
        }
        let gap = time.from - previous_until;
        records += records_for(gap) + records_for(time.length());
        atoms += gap + time.length();
        previous_until = time.until;
    }

    if atoms == 0 {
        debug!("refusing to encode {} intervals covering no atoms", intervals.len());
        return Err(RotaError::NoTime);
    }

    let head = if pad_head { start } else { 0 };
    let tail = if pad_tail {
        ts.epoch_length().saturating_sub(end)
    } else {
        0
    };

    let mut bytes = Vec::with_capacity(records + records_for(head) + records_for(tail));
    push_run(&mut bytes, false, head);
    let mut previous_until = start;
    for interval in intervals {
        push_run(&mut bytes, false, interval.time.from - previous_until);
        push_run(&mut bytes, interval.value, interval.length());
        previous_until = interval.time.until;
    }
    push_run(&mut bytes, false, tail);

    Ok(bytes)
}
