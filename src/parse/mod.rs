//! The public entry points and the unit-resolving reducer.
//!
//! [`calc`] and friends accept anything convertible into a [`TimeValue`]:
//! numbers (already milliseconds), duration strings, unit maps, typed
//! [`TimeSpec`] values, or nothing at all. Resolution order:
//!
//! 1. numbers (and strings that fully parse as plain decimal numbers) pass
//!    straight through,
//! 2. maps sum `magnitude × multiplier` over recognized unit keys,
//! 3. strings are lowercased, scanned, and reduced token by token,
//! 4. anything else resolves to zero.
//!
//! The base-unit total is finally divided by the output-unit multiplier when
//! one is requested.
//!
//! # Example
//!
//! ```
//! use delta_time::{calc, calc_as, calc_strict};
//!
//! assert_eq!(calc("10 mins"), 600_000.0);
//! assert_eq!(calc("200 dogs"), 0.0); // lenient: unknown units add nothing
//! assert_eq!(calc_as(90_000, "m").unwrap(), 1.5);
//! assert!(calc_strict("200 dogs").is_err());
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::DeltaTimeError;
use crate::scan::{self, Tokens};
use crate::units;

// ============================================================================
// Input model
// ============================================================================

/// A duration expression in any of the accepted shapes.
///
/// Rather than overloading on input type, everything funnels through this
/// enum; the [`From`] conversions keep call sites as terse as the original
/// dynamically-typed interface.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeValue {
    /// An already-resolved quantity in base units (milliseconds).
    Millis(f64),
    /// A duration expression string, e.g. `"1h3m2s"`.
    Text(String),
    /// A mapping of unit spellings to magnitudes, e.g. `{"hours": 5}`.
    Map(HashMap<String, f64>),
    /// Nothing; resolves to zero.
    None,
}

impl From<f64> for TimeValue {
    fn from(value: f64) -> Self {
        Self::Millis(value)
    }
}

macro_rules! impl_from_lossless {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for TimeValue {
                fn from(value: $ty) -> Self {
                    Self::Millis(f64::from(value))
                }
            }
        )*
    };
}

macro_rules! impl_from_lossy {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for TimeValue {
                #[allow(clippy::cast_precision_loss)]
                fn from(value: $ty) -> Self {
                    Self::Millis(value as f64)
                }
            }
        )*
    };
}

impl_from_lossless!(f32, i8, i16, i32, u8, u16, u32);
impl_from_lossy!(i64, u64, isize, usize);

impl From<&str> for TimeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TimeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<HashMap<String, f64>> for TimeValue {
    fn from(value: HashMap<String, f64>) -> Self {
        Self::Map(value)
    }
}

impl From<()> for TimeValue {
    fn from((): ()) -> Self {
        Self::None
    }
}

impl<T: Into<Self>> From<Option<T>> for TimeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

/// A typed duration declaration, one optional field per unit class.
///
/// Converts into [`TimeValue::Map`]; unset fields contribute nothing.
///
/// # Example
///
/// ```
/// use delta_time::{calc, TimeSpec};
///
/// let spec = TimeSpec {
///     hours: Some(5.0),
///     minutes: Some(3.0),
///     ..TimeSpec::default()
/// };
/// assert_eq!(calc(spec), 18_180_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeSpec {
    /// Nanoseconds.
    pub nanoseconds: Option<f64>,
    /// Microseconds.
    pub microseconds: Option<f64>,
    /// Milliseconds.
    pub milliseconds: Option<f64>,
    /// Seconds.
    pub seconds: Option<f64>,
    /// Minutes.
    pub minutes: Option<f64>,
    /// Hours.
    pub hours: Option<f64>,
    /// Days.
    pub days: Option<f64>,
    /// Weeks (7 days).
    pub weeks: Option<f64>,
    /// Months (30.44-day approximation).
    pub months: Option<f64>,
    /// Years (365.25-day approximation).
    pub years: Option<f64>,
}

impl From<TimeSpec> for TimeValue {
    fn from(spec: TimeSpec) -> Self {
        let fields = [
            ("nanoseconds", spec.nanoseconds),
            ("microseconds", spec.microseconds),
            ("milliseconds", spec.milliseconds),
            ("seconds", spec.seconds),
            ("minutes", spec.minutes),
            ("hours", spec.hours),
            ("days", spec.days),
            ("weeks", spec.weeks),
            ("months", spec.months),
            ("years", spec.years),
        ];
        Self::Map(
            fields
                .into_iter()
                .filter_map(|(unit, amount)| amount.map(|a| (unit.to_string(), a)))
                .collect(),
        )
    }
}

// ============================================================================
// Parse configuration
// ============================================================================

/// How unrecognized or malformed input is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Unknown units and unmatched text silently contribute zero.
    #[default]
    Lenient,
    /// Malformed strings and unknown units abort the parse with an error.
    Strict,
}

/// Options for [`calc_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions<'a> {
    /// Lenient (default) or strict handling of unrecognized input.
    pub mode: ParseMode,
    /// Unit to express the result in; `None` means milliseconds.
    pub output_unit: Option<&'a str>,
}

// ============================================================================
// Entry points
// ============================================================================

/// Resolve a duration expression to milliseconds, leniently.
///
/// Total over all inputs: garbage text and unknown units contribute zero.
///
/// # Example
///
/// ```
/// use delta_time::calc;
///
/// assert_eq!(calc("1h3m2s"), 3_782_000.0);
/// assert_eq!(calc(1234), 1234.0);
/// assert_eq!(calc("hello world"), 0.0);
/// ```
pub fn calc(time: impl Into<TimeValue>) -> f64 {
    // Lenient resolution with no output unit cannot fail.
    resolve_base(&time.into(), ParseMode::Lenient).unwrap_or_default()
}

/// Resolve a duration expression and express it in `unit`.
///
/// # Errors
///
/// Returns [`DeltaTimeError::InvalidOutputUnit`] when `unit` is not a
/// recognized spelling (case-insensitive).
///
/// # Example
///
/// ```
/// use delta_time::calc_as;
///
/// assert_eq!(calc_as("1h", "m").unwrap(), 60.0);
/// assert!(calc_as("1sec", "dogs").is_err());
/// ```
pub fn calc_as(time: impl Into<TimeValue>, unit: &str) -> Result<f64, DeltaTimeError> {
    calc_with(
        time,
        ParseOptions {
            mode: ParseMode::Lenient,
            output_unit: Some(unit),
        },
    )
}

/// Resolve a duration expression to milliseconds, strictly.
///
/// # Errors
///
/// Returns [`DeltaTimeError::MalformedInput`] for structurally invalid
/// strings and [`DeltaTimeError::UnsupportedUnit`] for tokens whose unit
/// has no table entry.
pub fn calc_strict(time: impl Into<TimeValue>) -> Result<f64, DeltaTimeError> {
    calc_with(
        time,
        ParseOptions {
            mode: ParseMode::Strict,
            output_unit: None,
        },
    )
}

/// Resolve a duration expression with explicit [`ParseOptions`].
///
/// The other entry points delegate here.
///
/// # Errors
///
/// Returns [`DeltaTimeError::InvalidOutputUnit`] for an unrecognized output
/// unit (checked before the input is touched), plus the strict-mode errors
/// described on [`calc_strict`].
pub fn calc_with(
    time: impl Into<TimeValue>,
    options: ParseOptions<'_>,
) -> Result<f64, DeltaTimeError> {
    let divisor = match options.output_unit {
        Some(unit) => units::multiplier_for(unit.to_lowercase().as_str()).ok_or_else(|| {
            DeltaTimeError::InvalidOutputUnit {
                unit: unit.to_string(),
            }
        })?,
        None => 1.0,
    };

    let total = resolve_base(&time.into(), options.mode)?;
    Ok(total / divisor)
}

// ============================================================================
// Reducer
// ============================================================================

/// Resolve a value to its base-unit (millisecond) total.
fn resolve_base(value: &TimeValue, mode: ParseMode) -> Result<f64, DeltaTimeError> {
    match value {
        TimeValue::Millis(n) => Ok(*n),
        TimeValue::Map(map) => resolve_map(map, mode),
        TimeValue::Text(s) => resolve_text(s, mode),
        TimeValue::None => Ok(0.0),
    }
}

fn resolve_map(map: &HashMap<String, f64>, mode: ParseMode) -> Result<f64, DeltaTimeError> {
    let mut total = 0.0;
    for (key, amount) in map {
        match units::multiplier_for(key.to_lowercase().as_str()) {
            Some(multiplier) => total += amount * multiplier,
            None if mode == ParseMode::Strict => {
                return Err(DeltaTimeError::UnsupportedUnit { unit: key.clone() });
            }
            None => {}
        }
    }
    Ok(total)
}

fn resolve_text(s: &str, mode: ParseMode) -> Result<f64, DeltaTimeError> {
    // Plain decimal numbers are already base-unit quantities.
    if let Some(n) = as_plain_number(s) {
        return Ok(n);
    }

    let lowered = s.to_lowercase();
    if mode == ParseMode::Strict {
        scan::validate_strict(&lowered)?;
    }

    // Addition-only, left to right. `"3s - 5s"` is the sum of the signed
    // quantities 3s and -5s, not a subtraction expression.
    let mut total = 0.0;
    for token in Tokens::new(&lowered) {
        match units::multiplier_for(token.unit) {
            Some(multiplier) => total += token.value() * multiplier,
            None if mode == ParseMode::Strict => {
                return Err(DeltaTimeError::UnsupportedUnit {
                    unit: token.unit.to_string(),
                });
            }
            None => {}
        }
    }
    Ok(total)
}

/// Parse a string that is, in its entirety, a plain finite decimal number.
fn as_plain_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
