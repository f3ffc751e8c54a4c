//! Bernoulli bit-flip channel.
//!
//! Each symbol is inverted independently with probability `p`. One uniform
//! draw in `[0, 1)` is consumed per position, in order: draw `i` decides the
//! fate of symbol `i`, and a symbol flips iff its draw is `< p`.
//!
//! With `p = 0` no draw is ever below `p`; with `p = 1` every draw is, since
//! draws never reach 1. The two extremes are therefore exact for any
//! generator.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::error::{SpikeError, SpikeResult};
use crate::signal::{BinarySignal, NoiseLevel};

/// Output of the channel: same length as the input signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CorruptedSignal(BinarySignal);

impl CorruptedSignal {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> &[u8] {
        self.0.bits()
    }

    pub fn as_signal(&self) -> &BinarySignal {
        &self.0
    }
}

impl fmt::Display for CorruptedSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Pass `signal` through the channel, drawing one uniform per symbol from `rng`.
pub fn corrupt<R: Rng>(
    signal: &BinarySignal,
    noise: NoiseLevel,
    rng: &mut R,
) -> CorruptedSignal {
    let draws = std::iter::repeat_with(|| rng.random::<f64>());
    let out = flip_where(signal, noise, draws);
    log::debug!(
        "corrupted {} symbols at p={noise}: {} -> {}",
        signal.len(),
        signal,
        out
    );
    out
}

/// Replay variant of [`corrupt`] with an explicit draw per symbol.
///
/// `draws.len()` must equal `signal.len()`.
pub fn corrupt_with_draws(
    signal: &BinarySignal,
    noise: NoiseLevel,
    draws: &[f64],
) -> SpikeResult<CorruptedSignal> {
    if draws.len() != signal.len() {
        return Err(SpikeError::DrawCountMismatch {
            expected: signal.len(),
            actual: draws.len(),
        });
    }
    Ok(flip_where(signal, noise, draws.iter().copied()))
}

fn flip_where(
    signal: &BinarySignal,
    noise: NoiseLevel,
    draws: impl Iterator<Item = f64>,
) -> CorruptedSignal {
    let p = noise.value();
    let bits = signal
        .iter()
        .zip(draws)
        .map(|(bit, u)| if u < p { 1 - bit } else { bit })
        .collect();
    CorruptedSignal(BinarySignal::from_trusted(bits))
}
