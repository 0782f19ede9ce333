//! Debug map rendering: 2D images of the noise, falloff and band colour maps.
//!
//! These images mirror the intermediate stages of a generation run so that
//! parameter changes can be inspected without building a mesh.

mod image;
mod renderers;

pub use self::image::DebugImage;
pub use renderers::{render_colour_map, render_falloff_map, render_noise_map};
