//! End-to-end tests for the lenient `calc` entry points.
//!
//! These mirror the behavioral contract of the resolver across every input
//! shape: plain numbers, numeric strings, unit maps, and composite duration
//! strings, plus output-unit conversion.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashMap;

use delta_time::units::{DAY, HOUR, MICROSECOND, MINUTE, MONTH, SECOND, UNIT_CLASSES, WEEK, YEAR};
use delta_time::{calc, calc_as, DeltaTimeError, TimeSpec};
use pretty_assertions::assert_eq;

fn map(entries: &[(&str, f64)]) -> HashMap<String, f64> {
    entries
        .iter()
        .map(|(unit, amount)| ((*unit).to_string(), *amount))
        .collect()
}

// ============================================================================
// Simple parse
// ============================================================================

#[test]
fn test_returns_zero_when_nothing_is_passed() {
    assert_eq!(calc(()), 0.0);
    assert_eq!(calc(None::<&str>), 0.0);
    assert_eq!(calc(0), 0.0);
    assert_eq!(calc("0"), 0.0);
    assert_eq!(calc(HashMap::<String, f64>::new()), 0.0);
}

#[test]
fn test_returns_the_same_number_as_given() {
    assert_eq!(calc("1"), 1.0);
    assert_eq!(calc(1), 1.0);
    assert_eq!(calc(100), 100.0);
    assert_eq!(calc("1234"), 1234.0);
    assert_eq!(calc("-9876"), -9876.0);
}

// ============================================================================
// Variety parse: every unit class
// ============================================================================

#[test]
fn test_millis() {
    assert_eq!(calc("100ms"), 100.0);
    assert_eq!(calc("500 millis"), 500.0);
    assert_eq!(calc("   -10000     milliseconds "), -10000.0);
    assert_eq!(calc(map(&[("milliseconds", 1.0)])), 1.0);
}

#[test]
fn test_secs() {
    assert_eq!(calc("100s"), 100.0 * SECOND);
    assert_eq!(calc("500 secs"), 500.0 * SECOND);
    assert_eq!(calc("   -10000     seconds  "), -10000.0 * SECOND);
    assert_eq!(calc(map(&[("seconds", 1.0)])), SECOND);
}

#[test]
fn test_mins() {
    assert_eq!(calc("100m"), 100.0 * MINUTE);
    assert_eq!(calc("500 mins"), 500.0 * MINUTE);
    assert_eq!(calc("   -10000     minutes  "), -10000.0 * MINUTE);
    assert_eq!(calc(map(&[("minutes", 1.0)])), MINUTE);
}

#[test]
fn test_hours() {
    assert_eq!(calc("100h"), 100.0 * HOUR);
    assert_eq!(calc("500 hrs"), 500.0 * HOUR);
    assert_eq!(calc("   -10000     hours  "), -10000.0 * HOUR);
    assert_eq!(calc(map(&[("hours", 1.0)])), HOUR);
}

#[test]
fn test_days() {
    assert_eq!(calc("100d"), 100.0 * DAY);
    assert_eq!(calc("500 day"), 500.0 * DAY);
    assert_eq!(calc("   -10000     days  "), -10000.0 * DAY);
    assert_eq!(calc(map(&[("days", 1.0)])), DAY);
}

#[test]
fn test_weeks() {
    assert_eq!(calc("100w"), 100.0 * WEEK);
    assert_eq!(calc("500 wks"), 500.0 * WEEK);
    assert_eq!(calc("   -10000     week  "), -10000.0 * WEEK);
    assert_eq!(calc(map(&[("weeks", 1.0)])), WEEK);
}

#[test]
fn test_months() {
    assert_eq!(calc("100mos"), 100.0 * MONTH);
    assert_eq!(calc("500 month"), 500.0 * MONTH);
    assert_eq!(calc("   -10000     months  "), -10000.0 * MONTH);
    assert_eq!(calc(map(&[("months", 1.0)])), MONTH);
}

#[test]
fn test_years() {
    assert_eq!(calc("100y"), 100.0 * YEAR);
    assert_eq!(calc("500 yr"), 500.0 * YEAR);
    assert_eq!(calc("   -10000     years  "), -10000.0 * YEAR);
    assert_eq!(calc(map(&[("years", 1.0)])), YEAR);
}

#[test]
fn test_micros() {
    assert_eq!(calc("100μs"), 100.0 * MICROSECOND);
    assert_eq!(calc("500 micros"), 500.0 * MICROSECOND);
    assert_eq!(calc("   -10000     microseconds "), -10000.0 * MICROSECOND);
    assert_eq!(calc(map(&[("microseconds", 1.0)])), MICROSECOND);
}

// ============================================================================
// Syntax
// ============================================================================

#[test]
fn test_capital_letters() {
    assert_eq!(calc("10 Seconds"), 10.0 * SECOND);
    assert_eq!(calc("10 mS"), 10.0);
    assert_eq!(calc("10 sEcOnDs"), 10.0 * SECOND);
}

#[test]
fn test_simple_decimal_points() {
    assert_eq!(calc("10.5s"), 10.5 * SECOND);
    assert_eq!(calc("0.5s"), 0.5 * SECOND);
    assert_eq!(calc("-0.5s"), -0.5 * SECOND);
}

#[test]
fn test_dot_decimal_points() {
    assert_eq!(calc(".5s"), 0.5 * SECOND);
    assert_eq!(calc("-.5s"), -0.5 * SECOND);
    assert_eq!(calc("-.01m"), -0.01 * MINUTE);
}

#[test]
fn test_space_before_operators() {
    assert_eq!(calc("- 5s"), -5.0 * SECOND);
    assert_eq!(calc("3s + 5s"), (3.0 + 5.0) * SECOND);
    assert_eq!(calc("3s - 5s"), (3.0 - 5.0) * SECOND);
}

// ============================================================================
// Scales
// ============================================================================

#[test]
fn test_conversion_scales() {
    assert_eq!(calc("1s"), calc("1000"));
    assert_eq!(calc("1s"), calc("1000ms"));
    assert_eq!(calc("1m"), calc("60s"));
    assert_eq!(calc("1h"), calc("60m"));
    assert_eq!(calc("1d"), calc("24h"));
    assert_eq!(calc("1w"), calc("7d"));
    assert_eq!(calc("1ms"), calc("1000μs"));
    assert_eq!(calc("1μs"), calc("1000ns"));
}

// ============================================================================
// Complex parse
// ============================================================================

#[test]
fn test_multiple_units() {
    assert_eq!(calc("10 mins 10 sec"), 10.0 * MINUTE + 10.0 * SECOND);
    assert_eq!(calc("1h3m2s"), HOUR + 3.0 * MINUTE + 2.0 * SECOND);
    assert_eq!(calc("5 hours 3 minutes"), 5.0 * HOUR + 3.0 * MINUTE);
    assert_eq!(
        calc(map(&[("hours", 5.0), ("minutes", 3.0)])),
        5.0 * HOUR + 3.0 * MINUTE
    );
    assert_eq!(
        calc(TimeSpec {
            hours: Some(5.0),
            minutes: Some(3.0),
            ..TimeSpec::default()
        }),
        5.0 * HOUR + 3.0 * MINUTE
    );
}

#[test]
fn test_same_unit_multiple_times() {
    assert_eq!(
        calc("10 mins 10 sec 10 mins"),
        10.0 * MINUTE + 10.0 * SECOND + 10.0 * MINUTE
    );
    assert_eq!(calc("10 mins 10 minutes"), 20.0 * MINUTE);
    assert_eq!(calc("10m10min"), 20.0 * MINUTE);
    assert_eq!(calc("10m10min10mins10minute10minutes"), 50.0 * MINUTE);
}

#[test]
fn test_random_words() {
    assert_eq!(calc("foo"), 0.0);
    assert_eq!(calc("hello world"), 0.0);
    assert_eq!(calc("10 mins 1000"), 10.0 * MINUTE);
    assert_eq!(calc("200 dogs"), 0.0);
}

#[test]
fn test_math_like_inputs() {
    assert_eq!(calc("2 mins - 60 secs - 60000 ms"), 0.0);
}

// ============================================================================
// Unit conversion
// ============================================================================

#[test]
fn test_unit_conversion_for_numbers() {
    assert_eq!(calc_as(1000, "ms").unwrap(), 1000.0);
    assert_eq!(calc_as(1000, "s").unwrap(), 1.0);
    assert_eq!(calc_as(60_000, "m").unwrap(), 1.0);
    assert_eq!(calc_as(60_000, "h").unwrap(), 1.0 / 60.0);
    assert_eq!(calc_as(3_600_000, "h").unwrap(), 1.0);
}

#[test]
fn test_unit_conversion_for_strings() {
    assert_eq!(calc_as("1sec", "ms").unwrap(), 1000.0);
    assert_eq!(calc_as("1sec", "s").unwrap(), 1.0);
    assert_eq!(calc_as("1min", "s").unwrap(), 60.0);
    assert_eq!(calc_as("1h", "m").unwrap(), 60.0);
    assert_eq!(calc_as("1d", "h").unwrap(), 24.0);
    assert_eq!(calc_as("1h", "d").unwrap(), 1.0 / 24.0);
}

#[test]
fn test_round_trip_for_every_spelling() {
    for class in &UNIT_CLASSES {
        for spelling in class.spellings {
            // one <unit> in milliseconds is the class multiplier...
            assert_eq!(calc(format!("1{spelling}")), class.multiplier);
            // ...and that many milliseconds expressed in <unit> is one.
            assert_eq!(calc_as(class.multiplier, *spelling).unwrap(), 1.0);
        }
    }
}

#[test]
fn test_invalid_output_unit_errors() {
    assert_eq!(
        calc_as("1sec", "dogs").unwrap_err(),
        DeltaTimeError::InvalidOutputUnit {
            unit: "dogs".to_string()
        }
    );
}
