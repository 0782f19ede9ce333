//! Per-vertex normal reconstruction from triangle geometry.

use glam::Vec3;

/// Smooth vertex normals: the area-weighted sum of the face normals of every
/// triangle touching a vertex, normalized.
///
/// Face normals follow the index winding, `(b - a) × (c - a)`. Vertices not
/// referenced by any triangle, or whose faces cancel out, get `Vec3::Y`.
///
/// # Panics
///
/// Panics if an index is out of range for `positions`.
pub fn recalculate_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    for n in &mut normals {
        *n = n.try_normalize().unwrap_or(Vec3::Y);
    }
    normals
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_single_triangle_normal() {
        let positions = [Vec3::ZERO, Vec3::Z, Vec3::X];
        let normals = recalculate_normals(&positions, &[0, 1, 2]);
        for n in normals {
            assert!((n - Vec3::Y).length() < EPSILON, "expected +Y, got {n}");
        }
    }

    #[test]
    fn test_reversed_winding_flips_normal() {
        let positions = [Vec3::ZERO, Vec3::X, Vec3::Z];
        let normals = recalculate_normals(&positions, &[0, 1, 2]);
        assert!((normals[0] + Vec3::Y).length() < EPSILON);
    }

    #[test]
    fn test_unreferenced_vertex_defaults_up() {
        let positions = [Vec3::ZERO, Vec3::Z, Vec3::X, Vec3::new(5.0, 5.0, 5.0)];
        let normals = recalculate_normals(&positions, &[0, 1, 2]);
        assert_eq!(normals[3], Vec3::Y);
    }

    #[test]
    fn test_normals_are_unit_length() {
        let positions = [
            Vec3::ZERO,
            Vec3::new(0.0, 0.5, 1.0),
            Vec3::new(1.0, 0.2, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
        ];
        let normals = recalculate_normals(&positions, &[0, 1, 2, 2, 1, 3]);
        for n in normals {
            assert!((n.length() - 1.0).abs() < 1e-5);
        }
    }
}
