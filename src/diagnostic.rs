//! Optional human-readable trace of the raw readings and the angle estimate.

use core::fmt::Write;

use crate::types::AxisSample;

/// Capacity of a rendered diagnostic line.
pub const DIAGNOSTIC_LINE_LEN: usize = 64;

/// One diagnostic record: the raw axes that closed a window and the averaged angle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Diagnostic {
    /// Raw reading of the tick that closed the window.
    pub sample: AxisSample,
    /// Averaged angle in radians.
    pub angle: f32,
}

impl Diagnostic {
    /// Creates a record.
    pub fn new(sample: AxisSample, angle: f32) -> Self {
        Self { sample, angle }
    }

    /// Renders the record into a fixed-capacity line, e.g. for a UART or RTT channel.
    pub fn to_line(&self) -> heapless::String<DIAGNOSTIC_LINE_LEN> {
        let mut line = heapless::String::new();
        // Longest possible record is well under the capacity.
        let _ = write!(line, "{}", self);
        line
    }
}

impl core::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "x={} y={} z={} angle={:.3}",
            self.sample.x, self.sample.y, self.sample.z, self.angle
        )
    }
}

/// Consumer of diagnostic records.
///
/// Purely informational; nothing a sink does feeds back into the color loop.
pub trait DiagnosticSink {
    /// Consumes one record.
    fn emit(&mut self, diagnostic: &Diagnostic);
}

/// Sink that discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagnostics;

impl DiagnosticSink for NoDiagnostics {
    #[inline]
    fn emit(&mut self, _diagnostic: &Diagnostic) {}
}
