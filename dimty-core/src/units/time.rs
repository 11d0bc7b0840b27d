//! Time units.
//!
//! The coherent unit of this dimension is [`Second`]. Civil units use the conventional mapping
//! `1 d = 86_400 s` and a 365-day year (`31_536_000 s`); leap seconds and leap days are ignored.
//!
//! ```rust
//! use dimty_core::time::{Hour, Hours, Second};
//!
//! let half_hour = Hours::new(0.5);
//! let seconds = half_hour.to::<Second>();
//! assert!((seconds.value() - 1800.0).abs() < 1e-12);
//!
//! let back = seconds.to::<Hour>();
//! assert!((back.value() - 0.5).abs() < 1e-12);
//! ```

use crate::{Dimension, Quantity, Rational};
use dimty_derive::UnitMarker;

/// Conventional civil mapping used by this module: seconds per mean solar day.
pub const SECONDS_PER_DAY: i64 = 86_400;

// ─────────────────────────────────────────────────────────────────────────────
// Civil units
// ─────────────────────────────────────────────────────────────────────────────

/// Year of 365 days.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::TIME, ratio = Rational::integer(365 * SECONDS_PER_DAY))]
pub struct Year;
/// A quantity measured in years.
pub type Years = Quantity<Year>;

/// Day (`86 400 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::TIME, ratio = Rational::integer(SECONDS_PER_DAY))]
pub struct Day;
/// A quantity measured in days.
pub type Days = Quantity<Day>;

/// Hour (`3600 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::TIME, ratio = Rational::integer(3_600))]
pub struct Hour;
/// A quantity measured in hours.
pub type Hours = Quantity<Hour>;

/// Minute (`60 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::TIME, ratio = Rational::integer(60))]
pub struct Minute;
/// A quantity measured in minutes.
pub type Minutes = Quantity<Minute>;

// ─────────────────────────────────────────────────────────────────────────────
// SI ladder
// ─────────────────────────────────────────────────────────────────────────────

/// Second (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::TIME)]
pub struct Second;
/// A quantity measured in seconds.
pub type Seconds = Quantity<Second>;

/// Millisecond (`1e-3 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::TIME, ratio = Rational::MILLI)]
pub struct Millisecond;
/// A quantity measured in milliseconds.
pub type Milliseconds = Quantity<Millisecond>;

/// Microsecond (`1e-6 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::TIME, ratio = Rational::MICRO)]
pub struct Microsecond;
/// A quantity measured in microseconds.
pub type Microseconds = Quantity<Microsecond>;

/// Nanosecond (`1e-9 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::TIME, ratio = Rational::NANO)]
pub struct Nanosecond;
/// A quantity measured in nanoseconds.
pub type Nanoseconds = Quantity<Nanosecond>;

/// Picosecond (`1e-12 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::TIME, ratio = Rational::PICO)]
pub struct Picosecond;
/// A quantity measured in picoseconds.
pub type Picoseconds = Quantity<Picosecond>;

/// Femtosecond (`1e-15 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, UnitMarker)]
#[unit(dimension = Dimension::TIME, ratio = Rational::FEMTO)]
pub struct Femtosecond;
/// A quantity measured in femtoseconds.
pub type Femtoseconds = Quantity<Femtosecond>;

crate::impl_unit_conversions!(
    Year, Day, Hour, Minute, Second, Millisecond, Microsecond, Nanosecond, Picosecond, Femtosecond
);
