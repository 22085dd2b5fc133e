#![cfg(feature = "dev")]
//! Tests for timing and speedup reporting.
//!
//! ## Test Organization
//!
//! 1. **Timed Calls** - `time_call` and `Timed::map`
//! 2. **Samples** - Speedup of one sample
//! 3. **Reports** - Averages and formatting

use approx::assert_relative_eq;
use std::time::Duration;

use divconq::internals::evaluation::timing::{SpeedupReport, SpeedupSample, time_call};

// ============================================================================
// Timed Call Tests
// ============================================================================

/// Test that the returned value is kept and time is measured.
#[test]
fn test_time_call() {
    let timed = time_call(|| {
        std::thread::sleep(Duration::from_millis(5));
        42
    });

    assert_eq!(timed.value, 42);
    assert!(timed.elapsed >= Duration::from_millis(5));
    assert!(timed.seconds() >= 0.005);

    let mapped = timed.map(|v| v * 2);
    assert_eq!(mapped.value, 84);
}

// ============================================================================
// Sample Tests
// ============================================================================

/// Test speedup of a single sample.
#[test]
fn test_sample_speedup() {
    let sample = SpeedupSample::new(1_000, Duration::from_millis(400), Duration::from_millis(100));
    assert_relative_eq!(sample.speedup().unwrap(), 4.0, epsilon = 1e-9);

    let zero = SpeedupSample::new(1, Duration::from_millis(1), Duration::ZERO);
    assert!(zero.speedup().is_none());
}

// ============================================================================
// Report Tests
// ============================================================================

/// Test the average over samples, skipping unmeasurable ones.
#[test]
fn test_report_average() {
    let mut report = SpeedupReport::new();
    assert!(report.is_empty());
    assert!(report.average_speedup().is_none());

    report.push(SpeedupSample::new(10, Duration::from_secs(2), Duration::from_secs(1)));
    report.extend([
        SpeedupSample::new(20, Duration::from_secs(4), Duration::from_secs(1)),
        SpeedupSample::new(30, Duration::from_secs(1), Duration::ZERO),
    ]);

    assert_eq!(report.len(), 3);
    assert_relative_eq!(report.average_speedup().unwrap(), 3.0, epsilon = 1e-9);
}

/// Test the report table.
#[test]
fn test_report_display() {
    let mut report = SpeedupReport::new();
    report.push(SpeedupSample::new(
        100_000,
        Duration::from_millis(30),
        Duration::from_millis(10),
    ));

    let text = report.to_string();
    assert!(text.contains("Speedup"));
    assert!(text.contains("100000"));
    assert!(text.contains("3.000"));
    assert!(text.contains("Average speedup: 3.000"));
}
