//! Beep synthesis for spike trains.
//!
//! Every symbol becomes a fixed-duration block of samples: a sine tone for a
//! spike, silence of the same length for a `0`. Blocks are concatenated in
//! signal order. Output is mono `f32` in `[-1, 1]`, which [`encode_wav`] turns
//! into 16-bit PCM.

use std::f64::consts::PI;
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use serde::Serialize;

use crate::error::{SpikeError, SpikeResult};
use crate::signal::BinarySignal;

pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
pub const DEFAULT_BIT_DURATION: f64 = 0.2;
pub const DEFAULT_FREQUENCY: f64 = 880.0;

/// Longest beep accepted, in samples (about six minutes at 44.1 kHz).
pub const MAX_SAMPLES_PER_BIT: usize = 1 << 24;

/// A 16-bit mono WAV data chunk is capped at `u32::MAX` bytes.
pub const MAX_WAV_SAMPLES: usize = (u32::MAX / 2) as usize;

/// Tone synthesis parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToneConfig {
    /// Samples per second.
    pub sample_rate: u32,
    /// Seconds per symbol.
    pub bit_duration: f64,
    /// Beep frequency in Hz.
    pub frequency: f64,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            bit_duration: DEFAULT_BIT_DURATION,
            frequency: DEFAULT_FREQUENCY,
        }
    }
}

impl ToneConfig {
    pub fn validate(&self) -> SpikeResult<()> {
        if self.sample_rate == 0 {
            return Err(SpikeError::invalid_parameter(
                "sample rate",
                0.0,
                "must be positive",
            ));
        }
        if !(self.bit_duration.is_finite() && self.bit_duration > 0.0) {
            return Err(SpikeError::invalid_parameter(
                "bit duration",
                self.bit_duration,
                "must be a positive number of seconds",
            ));
        }
        if f64::from(self.sample_rate) * self.bit_duration > MAX_SAMPLES_PER_BIT as f64 {
            return Err(SpikeError::invalid_parameter(
                "bit duration",
                self.bit_duration,
                "needs more samples per symbol than a beep may hold",
            ));
        }
        if !(self.frequency.is_finite() && self.frequency > 0.0) {
            return Err(SpikeError::invalid_parameter(
                "frequency",
                self.frequency,
                "must be a positive number of Hz",
            ));
        }
        Ok(())
    }

    /// Samples per symbol, truncated toward zero. Only meaningful for a
    /// config that passes [`validate`](Self::validate).
    pub fn samples_per_bit(&self) -> usize {
        (f64::from(self.sample_rate) * self.bit_duration) as usize
    }

    /// Total samples needed for `n_bits` symbols.
    pub fn total_samples(&self, n_bits: usize) -> SpikeResult<usize> {
        self.validate()?;
        n_bits
            .checked_mul(self.samples_per_bit())
            .filter(|&n| n <= MAX_WAV_SAMPLES)
            .ok_or_else(|| {
                SpikeError::invalid_parameter(
                    "signal length",
                    n_bits as f64,
                    "too many symbols to render at this bit duration",
                )
            })
    }

    /// Playback length in seconds for `n_bits` symbols.
    pub fn duration_secs(&self, n_bits: usize) -> SpikeResult<f64> {
        Ok(self.total_samples(n_bits)? as f64 / f64::from(self.sample_rate))
    }
}

/// One symbol's worth of samples. `bit` is 0 or 1.
pub fn beep(bit: u8, config: &ToneConfig) -> SpikeResult<Vec<f32>> {
    config.validate()?;
    let n = config.samples_per_bit();
    if bit == 0 {
        return Ok(vec![0.0; n]);
    }
    let rate = f64::from(config.sample_rate);
    Ok((0..n)
        .map(|k| {
            let t = k as f64 / rate;
            (2.0 * PI * config.frequency * t).sin() as f32
        })
        .collect())
}

/// Render a whole signal as concatenated beeps.
pub fn render(signal: &BinarySignal, config: &ToneConfig) -> SpikeResult<Vec<f32>> {
    let total = config.total_samples(signal.len())?;
    let tone = beep(1, config)?;
    let silence = vec![0.0f32; tone.len()];
    let mut out = Vec::with_capacity(total);
    for bit in signal.iter() {
        out.extend_from_slice(if bit == 1 { &tone } else { &silence });
    }
    log::debug!(
        "rendered {} symbols into {} samples at {} Hz",
        signal.len(),
        out.len(),
        config.sample_rate
    );
    Ok(out)
}

fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

fn to_pcm16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16
}

/// Encode mono samples as a 16-bit PCM WAV stream.
pub fn encode_wav<W: Write + Seek>(
    samples: &[f32],
    sample_rate: u32,
    writer: W,
) -> SpikeResult<()> {
    let mut wav = WavWriter::new(writer, wav_spec(sample_rate))?;
    for &s in samples {
        wav.write_sample(to_pcm16(s))?;
    }
    wav.finalize()?;
    Ok(())
}

/// Write mono samples to a WAV file at `path`.
pub fn write_wav(path: impl AsRef<Path>, samples: &[f32], sample_rate: u32) -> SpikeResult<()> {
    let file = File::create(path).map_err(hound::Error::IoError)?;
    encode_wav(samples, sample_rate, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_default_samples_per_bit() {
        let cfg = ToneConfig::default();
        assert_eq!(cfg.samples_per_bit(), 8820);
        assert_eq!(beep(1, &cfg).unwrap().len(), 8820);
        assert_eq!(beep(0, &cfg).unwrap().len(), 8820);
    }

    #[test]
    fn test_zero_bit_is_silent() {
        let cfg = ToneConfig::default();
        assert!(beep(0, &cfg).unwrap().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_beep_is_a_sine() {
        let cfg = ToneConfig {
            sample_rate: 8000,
            bit_duration: 0.01,
            frequency: 1000.0,
        };
        let b = beep(1, &cfg).unwrap();
        assert_eq!(b.len(), 80);
        assert_eq!(b[0], 0.0);
        // Quarter period of 1 kHz at 8 kHz is two samples.
        assert!((b[2] - 1.0).abs() < 1e-6);
        assert!((b[6] + 1.0).abs() < 1e-6);
        assert!(b.iter().all(|s| s.abs() <= 1.0));
    }

    #[test]
    fn test_render_concatenates_in_order() {
        let cfg = ToneConfig {
            sample_rate: 1000,
            bit_duration: 0.01,
            frequency: 125.0,
        };
        let sig = BinarySignal::parse("010").unwrap();
        let out = render(&sig, &cfg).unwrap();
        assert_eq!(out.len(), 30);
        assert!(out[..10].iter().all(|&s| s == 0.0));
        assert!(out[10..20].iter().any(|&s| s != 0.0));
        assert!(out[20..].iter().all(|&s| s == 0.0));
        assert!((cfg.duration_secs(3).unwrap() - 0.03).abs() < 1e-12);
    }

    #[test]
    fn test_render_empty() {
        let sig = BinarySignal::parse("").unwrap();
        assert!(render(&sig, &ToneConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let sig = BinarySignal::parse("1").unwrap();
        for cfg in [
            ToneConfig {
                sample_rate: 0,
                ..ToneConfig::default()
            },
            ToneConfig {
                bit_duration: -1.0,
                ..ToneConfig::default()
            },
            ToneConfig {
                frequency: f64::NAN,
                ..ToneConfig::default()
            },
        ] {
            assert!(matches!(
                render(&sig, &cfg),
                Err(SpikeError::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn test_pcm_clamps() {
        assert_eq!(to_pcm16(2.0), i16::MAX);
        assert_eq!(to_pcm16(-2.0), -i16::MAX);
        assert_eq!(to_pcm16(0.0), 0);
    }

    #[test]
    fn test_oversized_beep_rejected() {
        let sig = BinarySignal::parse("1").unwrap();
        for bit_duration in [1e15, f64::MAX] {
            let cfg = ToneConfig {
                bit_duration,
                ..ToneConfig::default()
            };
            assert!(cfg.validate().is_err());
            assert!(matches!(
                render(&sig, &cfg),
                Err(SpikeError::InvalidParameter { .. })
            ));
            assert!(beep(1, &cfg).is_err());
        }
    }

    #[test]
    fn test_longest_beep_accepted() {
        let cfg = ToneConfig {
            sample_rate: 1024,
            bit_duration: (MAX_SAMPLES_PER_BIT / 1024) as f64,
            frequency: 100.0,
        };
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.samples_per_bit(), MAX_SAMPLES_PER_BIT);
    }

    #[test]
    fn test_total_samples_overflow_rejected() {
        let cfg = ToneConfig::default();
        assert_eq!(cfg.total_samples(3).unwrap(), 3 * 8820);
        for n_bits in [usize::MAX, MAX_WAV_SAMPLES / 8820 + 1] {
            assert!(matches!(
                cfg.total_samples(n_bits),
                Err(SpikeError::InvalidParameter {
                    name: "signal length",
                    ..
                })
            ));
            assert!(cfg.duration_secs(n_bits).is_err());
        }
    }

    #[test]
    fn test_encoded_wav_header() {
        let mut buf = Cursor::new(Vec::new());
        encode_wav(&[0.0, 0.5, -0.5], 8000, &mut buf).unwrap();
        let bytes = buf.into_inner();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        let mut reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        assert_eq!(reader.spec().sample_rate, 8000);
        assert_eq!(reader.spec().channels, 1);
        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[1], to_pcm16(0.5));
    }
}
