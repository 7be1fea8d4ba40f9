//! delta-time
//!
//! Resolve human-readable duration expressions (numbers, composite strings
//! such as `"1h3m2s"`, or structured unit maps) into a single `f64` number
//! of milliseconds, optionally converted into any supported unit, plus an
//! async [`delay`] built on the same resolution.
//!
//! # Features
//!
//! - Ten unit classes (nanoseconds through years) with multiple accepted
//!   spellings each, case-insensitive
//! - Lenient parsing by default: unknown units and garbage text contribute
//!   zero, so [`calc`] is total over all inputs
//! - Optional strict mode that rejects malformed strings and unknown units
//! - Output-unit conversion (`calc_as("1h", "m")` → `60.0`)
//! - `tokio`-based [`delay`] / [`delay_with`] wait primitives
//!
//! # Quick Start
//!
//! ```
//! use delta_time::{calc, calc_as};
//!
//! assert_eq!(calc("1h3m2s"), 3_782_000.0);
//! assert_eq!(calc("10 mins 10 sec"), 610_000.0);
//! assert_eq!(calc_as("1h", "m").unwrap(), 60.0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! input ──▶ numeric / map short-circuit
//!    │
//!    └──▶ lowercase ──▶ scan (tokens) ──▶ resolve units ──▶ sum ──▶ ÷ divisor
//!                           units table ───────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod delay;
pub mod error;
pub mod parse;
pub mod scan;
pub mod units;

pub use delay::{delay, delay_with, DelayOutcome};
pub use error::DeltaTimeError;
pub use parse::{
    calc, calc_as, calc_strict, calc_with, ParseMode, ParseOptions, TimeSpec, TimeValue,
};
