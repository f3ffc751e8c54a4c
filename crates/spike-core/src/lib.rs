//! # spike-core
//!
//! **What happens to a spike train on a noisy wire?**
//!
//! `spike-core` simulates a Bernoulli bit-flip channel over binary spike
//! trains: every symbol is inverted independently with a fixed probability.
//! It reports how much damage was done and hands the result to collaborators
//! that chart it or turn it into audible beeps.
//!
//! ## Quick Start
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use spike_core::{NoiseLevel, simulate};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let sim = simulate("101010", NoiseLevel::new(0.3).unwrap(), &mut rng).unwrap();
//!
//! assert_eq!(sim.corrupted.len(), 6);
//! println!("error rate {}", sim.stats.error_rate_display());
//! println!("surviving  {}", sim.stats.surviving_display());
//! ```
//!
//! ## Architecture
//!
//! Text → [`BinarySignal`] → channel → [`CorruptedSignal`] → [`Statistics`]
//!
//! Randomness is always injected. Pass a seeded [`rand::rngs::StdRng`] for
//! repeatable runs, or replay exact draws with [`corrupt_with_draws`].
//!
//! Output collaborators:
//! - [`trace`]: two equal-length step-plot series for chart renderers.
//! - [`tone`]: beep synthesis (a tone for 1, silence for 0) and WAV encoding.
//! - [`theory`]: background reading on neural noise.

pub mod channel;
pub mod error;
pub mod pipeline;
pub mod signal;
pub mod stats;
pub mod theory;
pub mod tone;
pub mod trace;

pub use channel::{CorruptedSignal, corrupt, corrupt_with_draws};
pub use error::{SpikeError, SpikeResult};
pub use pipeline::{Simulation, SimulationReport, simulate};
pub use signal::{BinarySignal, NoiseLevel};
pub use stats::{Statistics, flip_consistency, statistics};
pub use theory::THEORY;
pub use tone::ToneConfig;
pub use trace::SignalTrace;

/// Signal shown when the user has not typed one yet.
pub const DEFAULT_SIGNAL: &str = "101010";

/// Noise level the controls start at.
pub const DEFAULT_NOISE: f64 = 0.3;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
