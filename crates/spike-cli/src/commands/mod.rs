pub mod distort;
pub mod theory;
pub mod tone;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Error type shared by every subcommand; `main` prints it and exits 1.
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Resolve the seed for a pass, drawing a fresh one when none was given.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::rng().random())
}

/// Build the generator for a pass from its seed.
pub fn make_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
