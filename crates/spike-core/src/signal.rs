//! Binary spike trains and the noise level applied to them.
//!
//! A [`BinarySignal`] is built once from user text and never mutated. Every
//! element is exactly `0` or `1`; the constructors are the only way in, so the
//! invariant holds for every value of the type.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{SpikeError, SpikeResult};

/// An ordered, finite sequence of spikes (`1`) and silences (`0`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct BinarySignal {
    bits: Vec<u8>,
}

impl BinarySignal {
    /// Parse a string of `0`/`1` characters.
    ///
    /// Fails on the first character that is not `0` or `1`; no partial signal
    /// is produced. The empty string is a valid, empty signal.
    pub fn parse(input: &str) -> SpikeResult<Self> {
        let bits = input
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                found => Err(SpikeError::InvalidSymbol { position, found }),
            })
            .collect::<SpikeResult<Vec<u8>>>()?;
        Ok(Self { bits })
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Symbols as a slice of 0/1 bytes.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits.iter().copied()
    }

    /// Number of spikes (symbols equal to 1).
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }

    /// Bitwise complement of the signal.
    pub fn complement(&self) -> Self {
        Self {
            bits: self.bits.iter().map(|&b| 1 - b).collect(),
        }
    }

    /// Crate-internal constructor for bits already known to be 0/1.
    pub(crate) fn from_trusted(bits: Vec<u8>) -> Self {
        debug_assert!(bits.iter().all(|&b| b <= 1));
        Self { bits }
    }
}

impl FromStr for BinarySignal {
    type Err = SpikeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BinarySignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Per-symbol independent flip probability, always within `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct NoiseLevel(f64);

impl NoiseLevel {
    /// A noiseless channel.
    pub const ZERO: Self = Self(0.0);
    /// A channel that inverts every symbol.
    pub const ONE: Self = Self(1.0);

    /// Validate a flip probability. Values outside `[0, 1]` and NaN are
    /// rejected rather than clamped.
    pub fn new(p: f64) -> SpikeResult<Self> {
        if p.is_nan() {
            return Err(SpikeError::invalid_parameter(
                "noise level",
                p,
                "must be a number",
            ));
        }
        if !(0.0..=1.0).contains(&p) {
            return Err(SpikeError::invalid_parameter(
                "noise level",
                p,
                "must be within [0, 1]",
            ));
        }
        Ok(Self(p))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for NoiseLevel {
    type Error = SpikeError;

    fn try_from(p: f64) -> Result<Self, Self::Error> {
        Self::new(p)
    }
}

impl fmt::Display for NoiseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
