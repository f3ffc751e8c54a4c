use serde::Serialize;
use spike_core::pipeline::SimulationReport;
use spike_core::{NoiseLevel, Simulation, ToneConfig, simulate, tone};

pub struct DistortCommandConfig<'a> {
    pub signal: &'a str,
    pub noise: f64,
    pub seed: Option<u64>,
    pub json: bool,
    /// Write the corrupted waveform here. The only way to ask for audio.
    pub play_out: Option<&'a str>,
    pub tone: ToneConfig,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    seed: u64,
    #[serde(flatten)]
    report: &'a SimulationReport,
}

pub fn run(config: &DistortCommandConfig) -> super::CommandResult {
    let (seed, sim) = execute(config)?;
    if let Some(path) = config.play_out {
        let samples = tone::render(sim.corrupted.as_signal(), &config.tone)?;
        tone::write_wav(path, &samples, config.tone.sample_rate)?;
        log::info!("wrote {} samples to {path}", samples.len());
    }

    if config.json {
        println!("{}", render_json(&sim, seed)?);
    } else {
        print!("{}", render_text(&sim, seed, config.play_out));
    }
    Ok(())
}

/// Validate the arguments and perform the pass.
fn execute(config: &DistortCommandConfig) -> Result<(u64, Simulation), spike_core::SpikeError> {
    let noise: NoiseLevel = config.noise.try_into()?;
    let seed = super::resolve_seed(config.seed);
    let mut rng = super::make_rng(seed);
    let sim = simulate(config.signal, noise, &mut rng)?;
    Ok((seed, sim))
}

fn render_json(sim: &Simulation, seed: u64) -> serde_json::Result<String> {
    let report = sim.report();
    serde_json::to_string_pretty(&JsonOutput {
        seed,
        report: &report,
    })
}

fn render_text(sim: &Simulation, seed: u64, play_out: Option<&str>) -> String {
    let st = &sim.stats;
    let mut out = String::new();
    out.push_str(&format!(
        "Spike Distorter  noise={}  seed={seed}\n\n",
        sim.noise
    ));
    out.push_str(&sim.trace().render_ascii());
    out.push_str("\n\n");
    out.push_str(&format!("  {:<18} {}\n", "Corrupted:", sim.corrupted));
    out.push_str(&format!("  {:<18} {}\n", "Error Rate:", st.error_rate_display()));
    out.push_str(&format!(
        "  {:<18} {}  (retained in place: {})\n",
        "Surviving Spikes:",
        st.surviving_display(),
        st.retained
    ));
    if let Some(pv) = sim.channel_check() {
        out.push_str(&format!(
            "  {:<18} {} flips, expected {:.1}, binomial p={pv:.3}\n",
            "Channel check:",
            st.flips,
            st.len as f64 * sim.noise.value()
        ));
    }
    if let Some(path) = play_out {
        out.push_str(&format!("\n🔊 Playing: {} -> {path}\n", sim.corrupted));
    }
    out
}
