//! The unit table: spellings and multipliers for the ten unit classes.
//!
//! Every multiplier is expressed relative to the millisecond base unit.
//! Month and year are fixed-ratio approximations (30.44 and 365.25 days);
//! no calendar arithmetic happens anywhere in this crate.
//!
//! The table is a compile-time `static`, immutable and safe to read from
//! any number of threads. Lookup is over already-lowercased text and never
//! panics; an unknown spelling yields `None`.
//!
//! # Example
//!
//! ```
//! use delta_time::units::{multiplier_for, MINUTE};
//!
//! assert_eq!(multiplier_for("mins"), Some(MINUTE));
//! assert_eq!(multiplier_for("dogs"), None);
//! ```

/// Milliseconds per nanosecond.
pub const NANOSECOND: f64 = 1e-6;

/// Milliseconds per microsecond.
pub const MICROSECOND: f64 = 1e-3;

/// Milliseconds per millisecond (the base unit).
pub const MILLISECOND: f64 = 1.0;

/// Milliseconds per second.
pub const SECOND: f64 = 1000.0;

/// Milliseconds per minute.
pub const MINUTE: f64 = SECOND * 60.0;

/// Milliseconds per hour.
pub const HOUR: f64 = MINUTE * 60.0;

/// Milliseconds per day.
pub const DAY: f64 = HOUR * 24.0;

/// Milliseconds per week.
pub const WEEK: f64 = DAY * 7.0;

/// Milliseconds per month (30.44-day approximation).
pub const MONTH: f64 = DAY * 30.44;

/// Milliseconds per year (365.25-day approximation).
pub const YEAR: f64 = DAY * 365.25;

/// One unit class: a set of interchangeable spellings sharing a multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitClass {
    /// Accepted spellings, all lowercase.
    pub spellings: &'static [&'static str],
    /// Multiplier to the millisecond base unit.
    pub multiplier: f64,
}

/// The ten unit classes, smallest to largest.
///
/// Invariant: no two classes share a spelling, so every spelling maps to
/// exactly one multiplier.
pub static UNIT_CLASSES: [UnitClass; 10] = [
    UnitClass {
        spellings: &["ns", "nano", "nanos", "nanosecond", "nanoseconds"],
        multiplier: NANOSECOND,
    },
    UnitClass {
        spellings: &["μs", "micro", "micros", "microsecond", "microseconds"],
        multiplier: MICROSECOND,
    },
    UnitClass {
        spellings: &["ms", "milli", "millis", "millisecond", "milliseconds"],
        multiplier: MILLISECOND,
    },
    UnitClass {
        spellings: &["s", "sec", "secs", "second", "seconds"],
        multiplier: SECOND,
    },
    UnitClass {
        spellings: &["m", "min", "mins", "minute", "minutes"],
        multiplier: MINUTE,
    },
    UnitClass {
        spellings: &["h", "hr", "hrs", "hour", "hours"],
        multiplier: HOUR,
    },
    UnitClass {
        spellings: &["d", "day", "days"],
        multiplier: DAY,
    },
    UnitClass {
        spellings: &["w", "wk", "wks", "week", "weeks"],
        multiplier: WEEK,
    },
    UnitClass {
        spellings: &["mo", "mos", "month", "months"],
        multiplier: MONTH,
    },
    UnitClass {
        spellings: &["y", "yr", "yrs", "year", "years"],
        multiplier: YEAR,
    },
];

/// Look up the base-unit multiplier for a lowercase unit spelling.
///
/// Returns `None` for spellings with no table entry. Callers decide whether
/// that means "contributes zero" (lenient) or an error (strict).
#[must_use]
pub fn multiplier_for(spelling: &str) -> Option<f64> {
    UNIT_CLASSES
        .iter()
        .find(|class| class.spellings.contains(&spelling))
        .map(|class| class.multiplier)
}
