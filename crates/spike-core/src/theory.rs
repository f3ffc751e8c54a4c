//! Background reading: how neural systems handle noisy spike trains.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
}

/// A biological noise source and what models it in the simulator.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NoiseSource {
    pub source: &'static str,
    pub effect: &'static str,
    pub simulation_equivalent: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Reference {
    pub authors: &'static str,
    pub year: u16,
    pub title: &'static str,
    pub venue: &'static str,
    pub url: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Theory {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub concepts: Section,
    pub noise_sources: &'static [NoiseSource],
    pub why_noise_helps: &'static [&'static str],
    pub references: &'static [Reference],
}

pub static THEORY: Theory = Theory {
    title: "Neuroscience Behind Spike Distortion",
    subtitle: "Understanding how neural systems handle noisy signals",
    concepts: Section {
        title: "Neural Spikes (Action Potentials)",
        paragraphs: &[
            "Neurons communicate via brief electrical impulses called action potentials, or spikes.",
            "Binary nature: spikes are all-or-none events (1 = spike, 0 = silence).",
            "Timing matters: information is encoded in spike timing patterns.",
            "The simulator approximates a spike train with a binary sequence such as 10110.",
        ],
    },
    noise_sources: &[
        NoiseSource {
            source: "Ion channel variability",
            effect: "Random spike timing",
            simulation_equivalent: "per-symbol uniform draw compared against the noise level",
        },
        NoiseSource {
            source: "Synaptic unreliability",
            effect: "Dropped spikes",
            simulation_equivalent: "1 flipped to 0",
        },
        NoiseSource {
            source: "Network crosstalk",
            effect: "Added false spikes",
            simulation_equivalent: "0 flipped to 1",
        },
    ],
    why_noise_helps: &[
        "Improves generalization, much like dropout in neural networks.",
        "Enables stochastic resonance.",
    ],
    references: &[
        Reference {
            authors: "Carandini & Heeger",
            year: 2012,
            title: "Normalization as a canonical neural computation",
            venue: "Nature Reviews Neuroscience",
            url: "https://www.nature.com/articles/nrn3353",
            note: "Key paper on noise in cortical circuits",
        },
        Reference {
            authors: "Faisal et al.",
            year: 2008,
            title: "Noise in the nervous system",
            venue: "Nature Reviews Neuroscience",
            url: "https://www.nature.com/articles/nrn2258",
            note: "Comprehensive review of neural noise sources",
        },
        Reference {
            authors: "Stein et al.",
            year: 2005,
            title: "Neuronal variability: noise or part of the computation?",
            venue: "Nature Neuroscience",
            url: "https://www.nature.com/articles/nn0705_811",
            note: "How brains exploit noise",
        },
    ],
};

impl Theory {
    /// Plain-text rendering for terminals.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n{}\n\n", self.title, self.subtitle));

        out.push_str(&format!("1. {}\n", self.concepts.title));
        for p in self.concepts.paragraphs {
            out.push_str(&format!("   - {p}\n"));
        }

        out.push_str("\n2. Sources of Neural Noise\n");
        for n in self.noise_sources {
            out.push_str(&format!(
                "   {:<26} {:<20} {}\n",
                n.source, n.effect, n.simulation_equivalent
            ));
        }
        out.push_str("\n   Why noise isn't always bad:\n");
        for w in self.why_noise_helps {
            out.push_str(&format!("   - {w}\n"));
        }

        out.push_str("\nReferences\n");
        for (i, r) in self.references.iter().enumerate() {
            out.push_str(&format!(
                "{}. {} ({}). {}. {}\n   {}\n   {}\n",
                i + 1,
                r.authors,
                r.year,
                r.title,
                r.venue,
                r.url,
                r.note
            ));
        }
        out
    }
}
