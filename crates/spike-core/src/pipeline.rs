//! One full request: parse → corrupt → statistics.

use rand::Rng;
use serde::Serialize;

use crate::channel::{CorruptedSignal, corrupt};
use crate::error::SpikeResult;
use crate::signal::{BinarySignal, NoiseLevel};
use crate::stats::{Statistics, flip_consistency, statistics};
use crate::trace::SignalTrace;

/// Result of a single channel pass. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Simulation {
    pub signal: BinarySignal,
    pub noise: NoiseLevel,
    pub corrupted: CorruptedSignal,
    pub stats: Statistics,
}

/// Validate `input` and run it through the channel.
///
/// Validation happens before any draw is taken from `rng`, so a rejected
/// input leaves the generator untouched.
pub fn simulate<R: Rng>(input: &str, noise: NoiseLevel, rng: &mut R) -> SpikeResult<Simulation> {
    let signal = BinarySignal::parse(input)?;
    Simulation::run(signal, noise, rng)
}

impl Simulation {
    pub fn run<R: Rng>(signal: BinarySignal, noise: NoiseLevel, rng: &mut R) -> SpikeResult<Self> {
        let corrupted = corrupt(&signal, noise, rng);
        let stats = statistics(&signal, &corrupted)?;
        Ok(Self {
            signal,
            noise,
            corrupted,
            stats,
        })
    }

    pub fn trace(&self) -> SignalTrace {
        SignalTrace::new(&self.signal, &self.corrupted)
    }

    /// Binomial p-value of the flip count; `None` for an empty signal.
    pub fn channel_check(&self) -> Option<f64> {
        flip_consistency(&self.stats, self.noise)
    }

    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            original: self.signal.to_string(),
            corrupted: self.corrupted.to_string(),
            noise_level: self.noise.value(),
            error_rate: self.stats.error_rate_display(),
            surviving_spikes: self.stats.surviving_display(),
            channel_p_value: self.channel_check(),
            stats: self.stats,
            trace: self.trace(),
        }
    }
}

/// Serializable summary of a pass for the JSON surfaces.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub original: String,
    pub corrupted: String,
    pub noise_level: f64,
    /// Formatted as a whole percentage.
    pub error_rate: String,
    /// Formatted as `surviving/total_original_ones`.
    pub surviving_spikes: String,
    pub channel_p_value: Option<f64>,
    pub stats: Statistics,
    pub trace: SignalTrace,
}
