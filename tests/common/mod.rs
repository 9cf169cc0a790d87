//! Shared test infrastructure for tilt-hue integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use tilt_hue::{
    AxisSample, AxisSensor, Diagnostic, DiagnosticSink, RgbColor, RgbLed, TimeDuration,
    TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(TestInstant)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock LED
// ============================================================================

/// Mock LED that records all color changes for testing
pub struct MockLed {
    current_color: RgbColor,
    color_history: heapless::Vec<RgbColor, 64>,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            current_color: RgbColor::new(0, 0, 0),
            color_history: heapless::Vec::new(),
        }
    }

    pub fn get_last_color(&self) -> RgbColor {
        self.current_color
    }

    pub fn color_history(&self) -> &[RgbColor] {
        &self.color_history
    }
}

impl RgbLed for MockLed {
    fn set_color(&mut self, color: RgbColor) {
        self.current_color = color;
        let _ = self.color_history.push(color);
    }
}

// ============================================================================
// Mock Sensor
// ============================================================================

/// Mock sensor that always reports the same sample until told otherwise
pub struct MockSensor {
    sample: AxisSample,
    reads: u32,
}

impl MockSensor {
    pub fn new(sample: AxisSample) -> Self {
        Self { sample, reads: 0 }
    }

    pub fn set_sample(&mut self, sample: AxisSample) {
        self.sample = sample;
    }

    pub fn reads(&self) -> u32 {
        self.reads
    }
}

impl AxisSensor for MockSensor {
    fn read(&mut self) -> AxisSample {
        self.reads += 1;
        self.sample
    }
}

// ============================================================================
// Mock Diagnostics
// ============================================================================

/// Diagnostic sink that records every record it receives
pub struct MockDiagnostics {
    records: heapless::Vec<Diagnostic, 16>,
}

impl MockDiagnostics {
    pub fn new() -> Self {
        Self {
            records: heapless::Vec::new(),
        }
    }

    pub fn records(&self) -> &[Diagnostic] {
        &self.records
    }
}

impl DiagnosticSink for MockDiagnostics {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let _ = self.records.push(*diagnostic);
    }
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use tilt_hue::{BLACK, BLUE, GREEN, RED};

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two angles with floating-point tolerance
pub fn angles_equal(a: f32, b: f32) -> bool {
    const EPSILON: f32 = 0.0001;
    (a - b).abs() < EPSILON
}
