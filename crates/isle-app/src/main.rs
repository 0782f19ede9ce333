//! Island generator entry point.
//!
//! Loads `isle.ron`, applies CLI overrides, generates one island and logs a
//! summary. With `--dump-maps <dir>` the noise, falloff and colour maps are
//! written there as PNGs.
//!
//! Run with: `cargo run -p isle-app -- --seed 42 --biome desert`

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use isle_config::{CliArgs, Config, ConfigError, config_file, default_config_dir};
use isle_scene::{GenerationError, TerrainWorld};
use isle_terrain::debug_viz::{render_colour_map, render_falloff_map, render_noise_map};
use isle_terrain::{TerrainError, entropy_rng, seeded_rng};
use tracing::{error, info, warn};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Terrain(#[from] TerrainError),

    #[error("failed to create map directory {path}: {source}")]
    MapDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A config ready for generation, plus what happened while loading it.
///
/// The log filter lives in the config itself, so loading has to finish
/// before logging is installed. These notes are logged once it is.
struct LoadedConfig {
    config: Config,
    path: PathBuf,
    created: bool,
    clamps: Vec<String>,
}

fn load_config(args: &CliArgs) -> Result<LoadedConfig, ConfigError> {
    let dir = match &args.config {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };
    let path = config_file(&dir);
    let created = !path.exists();

    let mut config = Config::load_or_create(&dir)?;
    config.apply_cli_overrides(args);
    let clamps = config.sanitize();

    Ok(LoadedConfig {
        config,
        path,
        created,
        clamps,
    })
}

fn report_loaded(loaded: &LoadedConfig) {
    if loaded.created {
        info!("Created default config at {}", loaded.path.display());
    } else {
        info!("Loaded config from {}", loaded.path.display());
    }
    for clamp in &loaded.clamps {
        warn!("{clamp}");
    }
}

fn dump_maps(world: &TerrainWorld, config: &Config, dir: &Path) -> Result<(), AppError> {
    let (Some(heights), Some(falloff)) = (world.heights(), world.falloff()) else {
        return Ok(());
    };
    std::fs::create_dir_all(dir).map_err(|source| AppError::MapDir {
        path: dir.to_path_buf(),
        source,
    })?;

    render_noise_map(heights).save_png(&dir.join("noise.png"))?;
    render_falloff_map(falloff).save_png(&dir.join("falloff.png"))?;
    render_colour_map(heights, falloff, &config.active_biome().bands)
        .save_png(&dir.join("colour.png"))?;

    info!("Wrote debug maps to {}", dir.display());
    Ok(())
}

fn run(config: &Config, rng_seed: Option<u64>) -> Result<(), AppError> {
    let mut rng = match rng_seed {
        Some(seed) => seeded_rng(seed),
        None => entropy_rng(),
    };

    let mut world = TerrainWorld::new();
    let report = world.generate(config, &mut rng)?;

    info!(
        "Mesh: {} vertices, {} triangles, {} byte vertex buffer",
        report.vertices, report.triangles, report.vertex_buffer_bytes
    );
    let (size, center) = (report.bounds.size(), report.bounds.center());
    info!(
        "Bounds: {:.1} x {:.1} x {:.1} centred on ({:.1}, {:.1}, {:.1})",
        size.x, size.y, size.z, center.x, center.y, center.z
    );
    info!(
        "Placed {} props (stride {}) and {} foliage (stride {})",
        report.props, report.prop_stride, report.foliage, report.foliage_stride
    );
    match report.spawn {
        Some(spawn) => info!(
            "Player spawn at ({:.2}, {:.2}, {:.2}), vertex {}",
            spawn.position.x, spawn.position.y, spawn.position.z, spawn.vertex_index
        ),
        None => info!("No player spawn on this island"),
    }

    if let Some(dir) = &config.debug.dump_maps {
        dump_maps(&world, config, dir)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let loaded = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("isle: {err}");
            return ExitCode::FAILURE;
        }
    };
    let config = &loaded.config;

    isle_log::init_logging(config.debug.log_dir.as_deref(), Some(config));
    report_loaded(&loaded);

    info!(
        "Isle: {}x{} {} island, seed {}",
        config.map.width,
        config.map.height,
        config.map.biome.name(),
        config.map.seed
    );

    match run(config, args.rng_seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
