//! Integration tests for spike-core.
//!
//! These exercise the full path a request takes:
//! text → signal → channel → statistics → trace / audio.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spike_core::{
    BinarySignal, NoiseLevel, SpikeError, ToneConfig, corrupt, corrupt_with_draws, simulate,
    statistics, tone,
};

fn p(v: f64) -> NoiseLevel {
    NoiseLevel::new(v).unwrap()
}

#[test]
fn scenario_noiseless_channel() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let sim = simulate("1010", p(0.0), &mut rng).unwrap();
        assert_eq!(sim.corrupted.to_string(), "1010");
        assert_eq!(sim.stats.error_rate_display(), "0%");
        assert_eq!(sim.stats.surviving_display(), "2/2");
    }
}

#[test]
fn scenario_inverting_channel() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let sim = simulate("1010", p(1.0), &mut rng).unwrap();
        assert_eq!(sim.corrupted.to_string(), "0101");
        assert_eq!(sim.stats.error_rate_display(), "100%");
        assert_eq!(sim.stats.surviving_display(), "2/2");
    }
}

#[test]
fn scenario_replayed_draws() {
    let s = BinarySignal::parse("0000").unwrap();
    let c = corrupt_with_draws(&s, p(0.5), &[0.1, 0.9, 0.1, 0.9]).unwrap();
    assert_eq!(c.to_string(), "1010");
}

#[test]
fn parse_rejects_non_binary() {
    assert!(matches!(
        BinarySignal::parse("1012"),
        Err(SpikeError::InvalidSymbol { .. })
    ));
    assert!(BinarySignal::parse("").unwrap().is_empty());
}

#[test]
fn error_rate_matches_hamming_distance() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..50 {
        let len = rng.random_range(1..200);
        let input: String = (0..len)
            .map(|_| if rng.random::<bool>() { '1' } else { '0' })
            .collect();
        let noise = p(rng.random::<f64>());
        let s = BinarySignal::parse(&input).unwrap();
        let c = corrupt(&s, noise, &mut rng);
        let st = statistics(&s, &c).unwrap();

        let hamming = s
            .bits()
            .iter()
            .zip(c.bits())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(c.len(), s.len());
        assert_eq!(st.flips, hamming);
        assert!((0.0..=1.0).contains(&st.error_rate));
        assert!((st.error_rate - hamming as f64 / len as f64).abs() < 1e-12);
        assert!(st.retained <= st.surviving.min(st.total_original_ones));
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let a = simulate("1100110011", p(0.45), &mut StdRng::seed_from_u64(77)).unwrap();
    let b = simulate("1100110011", p(0.45), &mut StdRng::seed_from_u64(77)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn long_run_flip_rate_is_consistent_with_noise_level() {
    let input = "10".repeat(10_000);
    let sim = simulate(&input, p(0.3), &mut StdRng::seed_from_u64(123)).unwrap();
    assert!((sim.stats.error_rate - 0.3).abs() < 0.02);
    let pv = sim.channel_check().unwrap();
    assert!(pv > 1e-4, "p-value {pv}");
}

#[test]
fn corrupted_signal_renders_to_wav_file() {
    let sim = simulate("101", p(0.0), &mut StdRng::seed_from_u64(1)).unwrap();
    let cfg = ToneConfig::default();
    let samples = tone::render(sim.corrupted.as_signal(), &cfg).unwrap();
    assert_eq!(samples.len(), 3 * 8820);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupted.wav");
    tone::write_wav(&path, &samples, cfg.sample_rate).unwrap();

    let reader = hound::WavReader::open(&path).unwrap();
    assert_eq!(reader.spec().sample_rate, cfg.sample_rate);
    assert_eq!(reader.spec().bits_per_sample, 16);
    assert_eq!(reader.len() as usize, samples.len());
}
