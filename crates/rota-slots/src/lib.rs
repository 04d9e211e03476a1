//! # rota-slots
//!
//! Compact run-length encoded availability for recurring periods, such as a
//! weekly duty rota.
//!
//! A period (one week, say) is divided into atoms of fixed duration. A
//! [`Slots`] value records, for every atom of the period, whether it is
//! available, one byte per run of equal atoms. Slots are built from sorted
//! interval lists, evolved with positioned patches, intersected across
//! participants, and searched for free intervals of a required length. A
//! [`TimeSystem`] such as [`WeekSystem`] maps calendar instants to atoms and
//! back.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::Duration;
//! use rota_slots::{intervals_to_slots, BoolInterval, Interval, TimeSystem, WeekSystem};
//!
//! // One-hour atoms: a week is 168 atoms, Monday 00:00 is atom 0.
//! let ws = WeekSystem::new(Duration::hours(1)).unwrap();
//! assert_eq!(ws.epoch_length(), 168);
//!
//! // Alice works Monday 09:00-17:00, Bob Monday 12:00-18:00.
//! let alice = intervals_to_slots(&[BoolInterval::new(9, 17, true)], &ws).unwrap();
//! let bob = intervals_to_slots(&[BoolInterval::new(12, 18, true)], &ws).unwrap();
//!
//! let both = alice.intersection(&bob);
//! assert!(both.is_available(&Interval::new(12, 17)));
//!
//! // Every two-hour meeting both can attend on Monday.
//! let meetings = both.available_intervals(2, Interval::new(0, 24));
//! assert_eq!(meetings.first(), Some(&Interval::new(12, 14)));
//! assert_eq!(meetings.len(), 4);
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — `Interval` and `BoolInterval`, half-open atom ranges
//! - [`time`] — `Atom` and the `TimeSystem` trait
//! - [`week`] — `WeekSystem`, the 168-hour period
//! - [`run`] — the one-byte run record (stable interchange layout)
//! - [`encoder`] — interval lists → `Slots` / `SlotsPatch`
//! - [`slots`] — decoding, patching, intersection and availability search
//! - [`error`] — Error types

pub mod encoder;
pub mod error;
pub mod interval;
pub mod run;
pub mod slots;
pub mod time;
pub mod week;

pub use encoder::{intervals_to_bytes, intervals_to_slots, intervals_to_slots_patch};
pub use error::{Result, RotaError};
pub use interval::{BoolInterval, Interval};
pub use run::{Run, MAX_RUN_LENGTH};
pub use slots::{Slots, SlotsPatch};
pub use time::{Atom, TimeSystem};
pub use week::WeekSystem;
