//! Generation settings with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use isle_terrain::{
    Biome, CurveShape, Keyframe, NoiseParams, PropKind, SEED_LIMIT, TerrainBand, default_bands,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "isle.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Map dimensions, seed and shaping curves.
    pub map: MapConfig,
    /// Noise and band settings used when `map.biome` is forest.
    pub forest: BiomeConfig,
    /// Noise and band settings used when `map.biome` is desert.
    pub desert: BiomeConfig,
    /// Prop, foliage and spawn placement.
    pub placement: PlacementConfig,
    /// Logging and debug output.
    pub debug: DebugConfig,
}

/// Map dimensions, seed and shaping curves shared by both biomes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    /// Cells along x. Must equal `height`.
    pub width: usize,
    /// Cells along z.
    pub height: usize,
    /// Noise zoom; `0` is treated as `0.1`.
    pub scale: f32,
    /// `0` for random octave offsets, otherwise in `±100000`.
    pub seed: i32,
    /// Active region preset.
    pub biome: Biome,
    /// Maps normalized noise to surface height before falloff.
    pub height_curve: CurveShape,
    /// Maps distance from the map center to attenuation.
    pub falloff_curve: CurveShape,
}

/// Per-biome noise shaping and terrain bands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BiomeConfig {
    /// Noise layers, `0..=8`.
    pub octaves: u32,
    /// Amplitude decay per octave, `0..=1`.
    pub persistence: f32,
    /// Frequency growth per octave, `2..=10`.
    pub lacunarity: f32,
    /// Vertical scale applied to the shaped surface.
    pub height_multiplier: f32,
    /// Classification bands in ascending threshold order.
    pub bands: Vec<TerrainBand>,
}

/// Ground cover placed by the foliage pass, one kind per biome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FoliageConfig {
    pub forest: PropKind,
    pub desert: PropKind,
}

/// Prop, foliage and spawn placement settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlacementConfig {
    /// Index into the divisors of the map width; higher is sparser.
    pub density_index: usize,
    /// Density index of the foliage pass.
    pub foliage_density_index: usize,
    /// Maximum deviation from a prop's authored scale.
    pub scale_variation: f32,
    /// Highest vertex elevation the player may spawn on.
    pub spawn_max_elevation: f32,
    /// Offset from the ground hit to the spawned player's origin.
    pub spawn_offset: [f32; 3],
    pub foliage: FoliageConfig,
}

/// Logging and debug output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter (e.g. "debug", "info,isle_scene=trace").
    pub log_level: String,
    /// Directory for noise/falloff/colour map PNGs, if any.
    pub dump_maps: Option<PathBuf>,
    /// Directory for the JSON log file, if any.
    pub log_dir: Option<PathBuf>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            scale: 25.0,
            seed: 0,
            biome: Biome::Forest,
            height_curve: CurveShape::keyframes(vec![
                Keyframe::new(0.0, 0.0),
                Keyframe::new(0.3, 0.05),
                Keyframe::new(0.6, 0.3),
                Keyframe::new(1.0, 1.0),
            ]),
            falloff_curve: CurveShape::Island { a: 3.0, b: 2.2 },
        }
    }
}

impl BiomeConfig {
    pub fn forest() -> Self {
        Self {
            octaves: 5,
            persistence: 0.5,
            lacunarity: 2.0,
            height_multiplier: 1.0,
            bands: default_bands(Biome::Forest),
        }
    }

    pub fn desert() -> Self {
        Self {
            octaves: 3,
            persistence: 0.35,
            lacunarity: 2.5,
            height_multiplier: 0.6,
            bands: default_bands(Biome::Desert),
        }
    }
}

impl Default for BiomeConfig {
    fn default() -> Self {
        Self::forest()
    }
}

impl Default for FoliageConfig {
    fn default() -> Self {
        Self {
            forest: PropKind {
                footprint_radius: 0.0,
                ..PropKind::new("grass", 0.8)
            },
            desert: PropKind {
                footprint_radius: 0.0,
                ..PropKind::new("dead_grass", 0.7)
            },
        }
    }
}

impl FoliageConfig {
    /// The foliage kind used for `biome`.
    pub fn for_biome(&self, biome: Biome) -> &PropKind {
        match biome {
            Biome::Forest => &self.forest,
            Biome::Desert => &self.desert,
        }
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            density_index: 3,
            foliage_density_index: 1,
            scale_variation: 0.25,
            spawn_max_elevation: 0.4,
            spawn_offset: [0.0, 1.0, 0.0],
            foliage: FoliageConfig::default(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            dump_maps: None,
            log_dir: None,
        }
    }
}

// --- Derived views ---

impl Config {
    /// Settings of the biome selected by `map.biome`.
    pub fn active_biome(&self) -> &BiomeConfig {
        match self.map.biome {
            Biome::Forest => &self.forest,
            Biome::Desert => &self.desert,
        }
    }

    /// Noise parameters for the active biome.
    pub fn noise_params(&self) -> NoiseParams {
        let biome = self.active_biome();
        NoiseParams {
            width: self.map.width,
            height: self.map.height,
            seed: self.map.seed,
            scale: self.map.scale,
            octaves: biome.octaves,
            persistence: biome.persistence,
            lacunarity: biome.lacunarity,
        }
    }

    /// Clamp every numeric setting into its valid range.
    ///
    /// Returns one message per changed setting, so callers that install
    /// logging after loading the config can still report them.
    pub fn sanitize(&mut self) -> Vec<String> {
        let mut clamps = Vec::new();
        let seed = self.map.seed.clamp(-SEED_LIMIT, SEED_LIMIT);
        if seed != self.map.seed {
            clamps.push(format!("seed {} clamped to {seed}", self.map.seed));
            self.map.seed = seed;
        }
        self.forest.sanitize("forest", &mut clamps);
        self.desert.sanitize("desert", &mut clamps);
        clamps
    }
}

impl BiomeConfig {
    fn sanitize(&mut self, name: &str, clamps: &mut Vec<String>) {
        let octaves = self.octaves.min(8);
        if octaves != self.octaves {
            clamps.push(format!("{name}: octaves {} clamped to {octaves}", self.octaves));
            self.octaves = octaves;
        }
        let persistence = self.persistence.clamp(0.0, 1.0);
        if persistence != self.persistence {
            clamps.push(format!(
                "{name}: persistence {} clamped to {persistence}",
                self.persistence
            ));
            self.persistence = persistence;
        }
        let lacunarity = self.lacunarity.clamp(2.0, 10.0);
        if lacunarity != self.lacunarity {
            clamps.push(format!(
                "{name}: lacunarity {} clamped to {lacunarity}",
                self.lacunarity
            ));
            self.lacunarity = lacunarity;
        }
    }
}

// --- Load / Save / Reload ---

/// Per-user configuration directory, e.g. `~/.config/isle` on Linux.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("isle"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Path of the config file inside `config_dir`.
pub fn config_file(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE)
}

impl Config {
    /// Load `isle.ron` from `config_dir`, writing the defaults there first if
    /// the file does not exist.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_file(config_dir);

        if path.exists() {
            let config = Self::read(&path)?;
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", path.display());
            Ok(config)
        }
    }

    /// Save to `config_dir/isle.ron`, creating the directory if needed.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized = ron::ser::to_string_pretty(self, pretty)?;

        std::fs::write(&path, serialized).map_err(|source| ConfigError::Write { path, source })
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
