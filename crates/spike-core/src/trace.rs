//! Time-indexed series for chart renderers.

use serde::Serialize;

use crate::channel::CorruptedSignal;
use crate::signal::BinarySignal;

pub const CHART_TITLE: &str = "Signal Corruption by Neural Noise";
pub const X_AXIS_LABEL: &str = "Time Step";
pub const Y_AXIS_LABEL: &str = "Spike (1) or Silence (0)";

/// One `(step, value)` sample of a step plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TracePoint {
    pub step: usize,
    pub value: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    pub name: &'static str,
    pub points: Vec<TracePoint>,
}

impl Series {
    fn from_bits(name: &'static str, bits: &[u8]) -> Self {
        Self {
            name,
            points: bits
                .iter()
                .enumerate()
                .map(|(step, &value)| TracePoint { step, value })
                .collect(),
        }
    }
}

/// Original and corrupted signals as two equal-length series.
///
/// The corrupted series comes first so that renderers drawing in order put the
/// original on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignalTrace {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub corrupted: Series,
    pub original: Series,
}

impl SignalTrace {
    pub fn new(signal: &BinarySignal, corrupted: &CorruptedSignal) -> Self {
        Self {
            title: CHART_TITLE,
            x_label: X_AXIS_LABEL,
            y_label: Y_AXIS_LABEL,
            corrupted: Series::from_bits("Corrupted Signal", corrupted.bits()),
            original: Series::from_bits("Original Signal", signal.bits()),
        }
    }

    /// Render both series as a two-row terminal step plot.
    ///
    /// ```text
    /// original  ▔▁▔▁
    /// corrupted ▔▔▔▁
    ///             ^
    /// ```
    ///
    /// The third row marks the steps where the channel flipped a symbol.
    pub fn render_ascii(&self) -> String {
        let row = |s: &Series| -> String {
            s.points
                .iter()
                .map(|p| if p.value == 1 { '▔' } else { '▁' })
                .collect()
        };
        let marks: String = self
            .original
            .points
            .iter()
            .zip(&self.corrupted.points)
            .map(|(a, b)| if a.value != b.value { '^' } else { ' ' })
            .collect();
        format!(
            "original  {}\ncorrupted {}\n          {}",
            row(&self.original),
            row(&self.corrupted),
            marks.trim_end()
        )
    }
}
