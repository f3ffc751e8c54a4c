use spike_core::{BinarySignal, ToneConfig, tone};

pub fn run(pattern: &str, output: &str, config: ToneConfig) -> super::CommandResult {
    let signal = BinarySignal::parse(pattern)?;
    let samples = tone::render(&signal, &config)?;
    tone::write_wav(output, &samples, config.sample_rate)?;
    println!(
        "Wrote {} symbols ({} samples, {:.2}s at {} Hz, {} Hz beeps) to {output}",
        signal.len(),
        samples.len(),
        config.duration_secs(signal.len())?,
        config.sample_rate,
        config.frequency
    );
    Ok(())
}
