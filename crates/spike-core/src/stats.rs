//! Summary statistics over an (original, corrupted) pair.
//!
//! # Surviving spikes
//!
//! `surviving` counts every `1` in the *corrupted* signal and is reported next
//! to the number of `1`s in the original. A spike created by the channel in a
//! silent slot counts as a survivor, so `"1010"` fully inverted reports `2/2`.
//! This is the metric the demo has always shown. The strict overlap (original
//! and corrupted both `1`) is reported separately as `retained`.

use serde::Serialize;
use statrs::distribution::{Binomial, DiscreteCDF};

use crate::channel::CorruptedSignal;
use crate::error::{SpikeError, SpikeResult};
use crate::signal::{BinarySignal, NoiseLevel};

/// Derived, read-only view over one channel pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of symbols.
    pub len: usize,
    /// Hamming distance between original and corrupted.
    pub flips: usize,
    /// `flips / len`, or 0.0 for an empty signal.
    pub error_rate: f64,
    /// Count of `1`s in the corrupted signal.
    pub surviving: usize,
    /// Count of `1`s in the original signal.
    pub total_original_ones: usize,
    /// Count of positions that are `1` in both signals.
    pub retained: usize,
}

impl Statistics {
    /// Error rate as a whole percentage, e.g. `"33%"`.
    pub fn error_rate_display(&self) -> String {
        format!("{:.0}%", self.error_rate * 100.0)
    }

    /// Surviving spikes as `"x/y"`. Never divided, so an empty signal shows
    /// `"0/0"`.
    pub fn surviving_display(&self) -> String {
        format!("{}/{}", self.surviving, self.total_original_ones)
    }
}

/// Compute statistics for a corrupted signal against its original.
pub fn statistics(
    signal: &BinarySignal,
    corrupted: &CorruptedSignal,
) -> SpikeResult<Statistics> {
    if signal.len() != corrupted.len() {
        return Err(SpikeError::LengthMismatch {
            original: signal.len(),
            corrupted: corrupted.len(),
        });
    }

    let len = signal.len();
    let mut flips = 0;
    let mut surviving = 0;
    let mut retained = 0;
    for (&a, &b) in signal.bits().iter().zip(corrupted.bits()) {
        if a != b {
            flips += 1;
        }
        if b == 1 {
            surviving += 1;
            if a == 1 {
                retained += 1;
            }
        }
    }

    let error_rate = if len == 0 {
        0.0
    } else {
        flips as f64 / len as f64
    };

    Ok(Statistics {
        len,
        flips,
        error_rate,
        surviving,
        total_original_ones: signal.ones(),
        retained,
    })
}

/// Two-sided binomial p-value of the observed flip count under
/// `Binomial(len, p)`.
///
/// Small values mean the flip count is unlikely for an honest channel at this
/// noise level. Returns `None` for an empty signal.
pub fn flip_consistency(stats: &Statistics, noise: NoiseLevel) -> Option<f64> {
    if stats.len == 0 {
        return None;
    }
    let n = stats.len as u64;
    let k = stats.flips as u64;
    let p = noise.value();

    // Degenerate channels are deterministic: only one flip count is possible.
    if p == 0.0 {
        return Some(if k == 0 { 1.0 } else { 0.0 });
    }
    if p == 1.0 {
        return Some(if k == n { 1.0 } else { 0.0 });
    }

    let dist = Binomial::new(p, n).ok()?;
    let lower = dist.cdf(k);
    let upper = if k == 0 { 1.0 } else { 1.0 - dist.cdf(k - 1) };
    Some((2.0 * lower.min(upper)).clamp(0.0, 1.0))
}
