use glam::Vec3;

/// What kind of surface a ground query landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceTag {
    /// The generated terrain mesh.
    Terrain,
    /// A placed prop.
    Prop,
}

/// Result of a successful ground query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundHit {
    /// World-space hit point.
    pub point: Vec3,
    /// Unit surface normal at the hit, facing up.
    pub normal: Vec3,
    pub surface: SurfaceTag,
}

/// Downward surface lookup.
///
/// Implementors must be side-effect free: the same origin always yields the
/// same answer for the lifetime of the value.
pub trait GroundQuery {
    /// Cast straight down from `origin` and return the first surface hit.
    fn query(&self, origin: Vec3) -> Option<GroundHit>;
}

impl<T: GroundQuery + ?Sized> GroundQuery for &T {
    fn query(&self, origin: Vec3) -> Option<GroundHit> {
        (**self).query(origin)
    }
}
