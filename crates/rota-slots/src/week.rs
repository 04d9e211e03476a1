//! The 168-hour recurring week.
//!
//! A week starts at midnight of its first day in the instant's own time
//! zone. Offsets inside it are elapsed time since that midnight, so every
//! instant of the week has its own atom even when clocks go back. A week
//! containing a DST transition is 167 or 169 hours long; in the long one the
//! final hour clamps onto the last atom.

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDateTime, NaiveTime, Offset, TimeZone, Weekday,
};

use crate::error::{Result, RotaError};
use crate::time::{Atom, TimeSystem};

const WEEK_HOURS: i64 = 168;
const NANOS_PER_SECOND: i64 = 1_000_000_000;
const WEEK_NANOS: i64 = WEEK_HOURS * 3600 * NANOS_PER_SECOND;

/// A [`TimeSystem`] whose period is one calendar week, divided into atoms of
/// a fixed duration.
///
/// # Example
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use rota_slots::{TimeSystem, WeekSystem};
///
/// let ws = WeekSystem::new(Duration::minutes(30)).unwrap();
/// assert_eq!(ws.epoch_length(), 336);
///
/// // Monday 2026-03-02 is the fixpoint week; Wednesday 09:00 a week later.
/// let fixpoint = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();
/// let x = Utc.with_ymd_and_hms(2026, 3, 11, 9, 0, 0).unwrap();
/// let atom = ws.encode_time(&fixpoint, &x);
/// assert_eq!((atom.epoch, atom.time), (1, 2 * 48 + 18));
/// assert_eq!(ws.decode_time(&fixpoint, atom), x);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekSystem {
    atom: Duration,
    atom_nanos: i64,
    week_start: Weekday,
}

impl WeekSystem {
    /// Create a week system with atoms of the given duration, starting weeks
    /// on Monday.
    ///
    /// # Errors
    /// Returns [`RotaError::BadAtomDuration`] if `atom` is not positive or
    /// is longer than a week.
    pub fn new(atom: Duration) -> Result<Self> {
        let atom_nanos = atom
            .num_nanoseconds()
            .filter(|&nanos| nanos > 0 && nanos <= WEEK_NANOS)
            .ok_or_else(|| {
                RotaError::BadAtomDuration(format!(
                    "{} must be positive and at most one week",
                    atom
                ))
            })?;
        Ok(Self {
            atom,
            atom_nanos,
            week_start: Weekday::Mon,
        })
    }

    /// Start weeks on a different weekday.
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn atom_duration(&self) -> Duration {
        self.atom
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    fn days_into_week<Tz: TimeZone>(&self, x: &DateTime<Tz>) -> i64 {
        let today = x.weekday().num_days_from_monday();
        let first = self.week_start.num_days_from_monday();
        ((today + 7 - first) % 7) as i64
    }

    fn start_of_week<Tz: TimeZone>(&self, x: &DateTime<Tz>) -> DateTime<Tz> {
        let date = x.date_naive() - Duration::days(self.days_into_week(x));
        resolve_local(&x.timezone(), date.and_time(NaiveTime::MIN))
    }
}

impl TimeSystem for WeekSystem {
    fn epoch_length(&self) -> usize {
        (WEEK_NANOS / self.atom_nanos) as usize
    }

    fn epoch_delta<Tz: TimeZone>(&self, x: &DateTime<Tz>, y: &DateTime<Tz>) -> i64 {
        let between = self.start_of_week(x) - self.start_of_week(y);
        let hours = between.num_seconds() as f64 / 3600.0;
        (hours / WEEK_HOURS as f64).round() as i64
    }

    fn encode_time<Tz: TimeZone>(&self, fixpoint: &DateTime<Tz>, x: &DateTime<Tz>) -> Atom {
        let elapsed = x.clone() - self.start_of_week(x);
        let seconds = elapsed.num_seconds().max(0);
        let time = seconds * NANOS_PER_SECOND / self.atom_nanos;
        Atom::new(self.epoch_delta(x, fixpoint), time as usize).clamp(self)
    }

    fn decode_time<Tz: TimeZone>(&self, fixpoint: &DateTime<Tz>, atom: Atom) -> DateTime<Tz> {
        let atom = atom.modulo(self);
        let first_day = fixpoint.date_naive() - Duration::days(self.days_into_week(fixpoint));
        let day = first_day + Duration::weeks(atom.epoch);
        let week_start = resolve_local(&fixpoint.timezone(), day.and_time(NaiveTime::MIN));
        week_start + Duration::nanoseconds(self.atom_nanos * atom.time as i64)
    }
}

/// Pin a local midnight to an instant in `tz`.
///
/// Ambiguous times take the earlier instant. Times inside a DST gap are read
/// with the offset in effect the day before.
fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(t) => t,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let before = tz.offset_from_utc_datetime(&(local - Duration::days(1))).fix();
            let utc = local - Duration::seconds(before.local_minus_utc() as i64);
            tz.from_utc_datetime(&utc)
        }
    }
}
