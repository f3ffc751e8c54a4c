//! CLI for the spike distorter: inject bit-flip noise into spike trains.

mod commands;

use clap::{Parser, Subcommand};
use spike_core::tone::{DEFAULT_BIT_DURATION, DEFAULT_FREQUENCY, DEFAULT_SAMPLE_RATE};

#[derive(Parser)]
#[command(name = "spike-distorter")]
#[command(about = "spike-distorter — what happens to a spike train on a noisy wire")]
#[command(version = spike_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pass a binary signal through the bit-flip channel and report the damage
    Distort {
        /// Signal of 0s and 1s (e.g. 1010 = beep-silence-beep-silence)
        #[arg(default_value = spike_core::DEFAULT_SIGNAL)]
        signal: String,

        /// Per-symbol flip probability in [0, 1]
        #[arg(long, default_value_t = spike_core::DEFAULT_NOISE)]
        noise: f64,

        /// RNG seed for a reproducible pass (random if omitted; always printed)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the full report as JSON instead of the terminal view
        #[arg(long)]
        json: bool,

        /// Write the corrupted signal to this WAV file as beeps
        #[arg(long)]
        play_out: Option<String>,

        /// Beep frequency in Hz
        #[arg(long, default_value_t = DEFAULT_FREQUENCY)]
        frequency: f64,

        /// Seconds per symbol
        #[arg(long, default_value_t = DEFAULT_BIT_DURATION)]
        bit_duration: f64,
    },

    /// Render a binary pattern as WAV beeps without any noise
    Tone {
        /// Pattern of 0s and 1s
        pattern: String,

        /// Output WAV path
        #[arg(long)]
        output: String,

        /// Beep frequency in Hz
        #[arg(long, default_value_t = DEFAULT_FREQUENCY)]
        frequency: f64,

        /// Seconds per symbol
        #[arg(long, default_value_t = DEFAULT_BIT_DURATION)]
        bit_duration: f64,

        /// Samples per second
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,
    },

    /// Background reading: neural spikes and noise
    Theory,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Distort {
            signal,
            noise,
            seed,
            json,
            play_out,
            frequency,
            bit_duration,
        } => commands::distort::run(&commands::distort::DistortCommandConfig {
            signal: &signal,
            noise,
            seed,
            json,
            play_out: play_out.as_deref(),
            tone: spike_core::ToneConfig {
                frequency,
                bit_duration,
                ..Default::default()
            },
        }),
        Commands::Tone {
            pattern,
            output,
            frequency,
            bit_duration,
            sample_rate,
        } => commands::tone::run(
            &pattern,
            &output,
            spike_core::ToneConfig {
                sample_rate,
                bit_duration,
                frequency,
            },
        ),
        Commands::Theory => commands::theory::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
