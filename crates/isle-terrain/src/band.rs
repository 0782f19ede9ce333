//! Terrain bands: height-threshold classification with colours and prop variants.

use serde::{Deserialize, Serialize};

/// Region preset selecting noise parameters, bands and ground cover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    #[default]
    Forest,
    Desert,
}

impl Biome {
    pub fn name(self) -> &'static str {
        match self {
            Biome::Forest => "forest",
            Biome::Desert => "desert",
        }
    }
}

impl std::str::FromStr for Biome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "forest" | "0" => Ok(Biome::Forest),
            "desert" | "1" => Ok(Biome::Desert),
            other => Err(format!("unknown biome: {other}")),
        }
    }
}

/// How a placed prop's uniform scale is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum ScaleRule {
    /// Authored scale perturbed by `±scale_variation`.
    #[default]
    Perturb,
    /// Drawn uniformly from `[0.5, 4.0]`, ignoring the authored scale.
    Wide,
}

/// A decorative object that bands can place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropKind {
    pub name: String,
    /// Uniform scale the prop was authored at.
    pub authored_scale: f32,
    pub scale_rule: ScaleRule,
    /// Horizontal radius of the prop's collision surface at scale `1.0`.
    pub footprint_radius: f32,
}

impl PropKind {
    pub fn new(name: impl Into<String>, authored_scale: f32) -> Self {
        Self {
            name: name.into(),
            authored_scale,
            ..Default::default()
        }
    }

    pub fn wide(name: impl Into<String>) -> Self {
        Self {
            scale_rule: ScaleRule::Wide,
            ..Self::new(name, 1.0)
        }
    }
}

impl Default for PropKind {
    fn default() -> Self {
        Self {
            name: String::new(),
            authored_scale: 1.0,
            scale_rule: ScaleRule::Perturb,
            footprint_radius: 0.5,
        }
    }
}

/// A height-bounded terrain class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainBand {
    pub name: String,
    /// Samples at or below this height belong to the band, unless an
    /// earlier band already claims them.
    pub height_threshold: f32,
    /// RGB colour used by colour maps and mesh vertex colours.
    pub color: [u8; 3],
    /// Props that may be placed on this band.
    #[serde(default)]
    pub props: Vec<PropKind>,
}

impl TerrainBand {
    pub fn new(name: impl Into<String>, height_threshold: f32, color: [u8; 3]) -> Self {
        Self {
            name: name.into(),
            height_threshold,
            color,
            props: Vec::new(),
        }
    }

    pub fn with_props(mut self, props: Vec<PropKind>) -> Self {
        self.props = props;
        self
    }
}

/// First band, in array order, whose threshold is at least `height`.
///
/// Bands are not sorted or validated; an empty or misordered list simply
/// fails to match.
pub fn classify(bands: &[TerrainBand], height: f32) -> Option<&TerrainBand> {
    bands.iter().find(|band| height <= band.height_threshold)
}

/// Built-in band presets for each biome.
pub fn default_bands(biome: Biome) -> Vec<TerrainBand> {
    match biome {
        Biome::Forest => vec![
            TerrainBand::new("water", 0.0, [48, 96, 200]),
            TerrainBand::new("sand", 0.3, [214, 200, 140])
                .with_props(vec![PropKind::new("driftwood", 1.0), PropKind::new("shell", 0.5)]),
            TerrainBand::new("grass", 0.6, [86, 152, 60]).with_props(vec![
                PropKind::new("oak", 1.5),
                PropKind::new("pine", 1.5),
                PropKind::wide("boulder"),
            ]),
            TerrainBand::new("rock", 0.85, [110, 96, 84])
                .with_props(vec![PropKind::wide("boulder"), PropKind::new("pine", 1.2)]),
            TerrainBand::new("peak", 1.0, [236, 236, 240]),
        ],
        Biome::Desert => vec![
            TerrainBand::new("oasis", 0.0, [40, 120, 170]),
            TerrainBand::new("flats", 0.35, [224, 196, 128])
                .with_props(vec![PropKind::new("cactus", 1.2), PropKind::new("skull", 0.6)]),
            TerrainBand::new("dunes", 0.7, [204, 164, 96]).with_props(vec![
                PropKind::new("cactus", 1.4),
                PropKind::wide("sandstone"),
            ]),
            TerrainBand::new("mesa", 1.0, [160, 96, 64])
                .with_props(vec![PropKind::wide("sandstone")]),
        ],
    }
}
