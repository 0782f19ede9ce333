//! Command-line argument parsing for the island generator.

use std::path::PathBuf;

use clap::Parser;
use isle_terrain::Biome;

use crate::Config;

/// Island generator command-line arguments.
///
/// CLI values override settings loaded from `isle.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "isle", about = "Procedural island terrain generator")]
pub struct CliArgs {
    /// Noise seed; 0 picks random octave offsets.
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i32>,

    /// Biome preset (forest, desert).
    #[arg(long)]
    pub biome: Option<Biome>,

    /// Prop density index; higher is sparser.
    #[arg(long)]
    pub density: Option<usize>,

    /// Foliage density index.
    #[arg(long)]
    pub foliage_density: Option<usize>,

    /// Map side length in cells.
    #[arg(long)]
    pub size: Option<usize>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write noise, falloff and colour map PNGs into this directory.
    #[arg(long)]
    pub dump_maps: Option<PathBuf>,

    /// Write JSON logs to `isle.log` in this directory.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Seed the placement RNG for reproducible runs.
    #[arg(long)]
    pub rng_seed: Option<u64>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.map.seed = seed;
        }
        if let Some(biome) = args.biome {
            self.map.biome = biome;
        }
        if let Some(density) = args.density {
            self.placement.density_index = density;
        }
        if let Some(density) = args.foliage_density {
            self.placement.foliage_density_index = density;
        }
        if let Some(size) = args.size {
            self.map.width = size;
            self.map.height = size;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(ref dir) = args.dump_maps {
            self.debug.dump_maps = Some(dir.clone());
        }
        if let Some(ref dir) = args.log_dir {
            self.debug.log_dir = Some(dir.clone());
        }
    }
}
