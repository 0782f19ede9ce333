use glam::Vec3;

/// Axis-aligned bounding box in mesh space.
///
/// Invariant: `min <= max` on every axis for non-empty boxes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create an AABB from two corners, sorting components per axis.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest box enclosing every point, or `None` for no points.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        Some(rest.iter().fold(Self::new(first, first), |acc, &p| Self {
            min: acc.min.min(p),
            max: acc.max.max(p),
        }))
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// The box transformed by a uniform scale about the origin.
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(self.min * factor, self.max * factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_corners() {
        let b = Aabb::new(Vec3::new(1.0, -1.0, 5.0), Vec3::new(-1.0, 2.0, 0.0));
        assert_eq!(b.min, Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(b.max, Vec3::new(1.0, 2.0, 5.0));
    }

    #[test]
    fn test_from_points() {
        let pts = [Vec3::ZERO, Vec3::new(2.0, 0.5, -1.0), Vec3::new(-3.0, 1.0, 4.0)];
        let b = Aabb::from_points(&pts).unwrap();
        assert_eq!(b.min, Vec3::new(-3.0, 0.0, -1.0));
        assert_eq!(b.max, Vec3::new(2.0, 1.0, 4.0));
        assert!(pts.iter().all(|&p| p.cmpge(b.min).all() && p.cmple(b.max).all()));
        assert!(Aabb::from_points(&[]).is_none());
    }

    #[test]
    fn test_size_center_scaled() {
        let b = Aabb::new(Vec3::ZERO, Vec3::new(4.0, 2.0, 4.0));
        assert_eq!(b.size(), Vec3::new(4.0, 2.0, 4.0));
        assert_eq!(b.center(), Vec3::new(2.0, 1.0, 2.0));
        assert_eq!(b.scaled(2.0).max, Vec3::new(8.0, 4.0, 8.0));
        assert_eq!(b.scaled(-1.0).min, Vec3::new(-4.0, -2.0, -4.0));
    }
}
