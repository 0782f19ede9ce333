//! Scalar response curves used to shape heights and falloff.

use serde::{Deserialize, Serialize};

/// A function sampled over `t ∈ [0, 1]`.
pub trait Curve {
    fn evaluate(&self, t: f32) -> f32;
}

impl<F> Curve for F
where
    F: Fn(f32) -> f32,
{
    fn evaluate(&self, t: f32) -> f32 {
        self(t)
    }
}

/// A single control point of a [`CurveShape::Keyframes`] curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
}

impl Keyframe {
    pub const fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// Serializable curve description.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum CurveShape {
    /// `f(t) = t`.
    #[default]
    Linear,
    /// `f(t) = c` for every `t`.
    Constant(f32),
    /// Piecewise-linear interpolation between keys sorted by time.
    /// Inputs before the first key or after the last one hold the end value.
    Keyframes(Vec<Keyframe>),
    /// Island falloff `t^a / (t^a + (b - b·t)^a)`: near zero in the middle
    /// of the map and rising steeply toward the edges.
    Island { a: f32, b: f32 },
}

impl CurveShape {
    /// Build a keyframe curve, sorting the keys by time.
    pub fn keyframes(mut keys: Vec<Keyframe>) -> Self {
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self::Keyframes(keys)
    }
}

impl Curve for CurveShape {
    fn evaluate(&self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::Constant(c) => *c,
            Self::Keyframes(keys) => sample_keys(keys, t),
            Self::Island { a, b } => {
                let num = t.max(0.0).powf(*a);
                let den = num + (b - b * t).max(0.0).powf(*a);
                if den == 0.0 { 0.0 } else { num / den }
            }
        }
    }
}

fn sample_keys(keys: &[Keyframe], t: f32) -> f32 {
    let (Some(first), Some(last)) = (keys.first(), keys.last()) else {
        return 0.0;
    };
    if t <= first.time {
        return first.value;
    }
    if t >= last.time {
        return last.value;
    }
    for pair in keys.windows(2) {
        let (k0, k1) = (pair[0], pair[1]);
        if t <= k1.time {
            let span = k1.time - k0.time;
            if span <= f32::EPSILON {
                return k1.value;
            }
            let s = (t - k0.time) / span;
            return k0.value + (k1.value - k0.value) * s;
        }
    }
    last.value
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_linear_and_constant() {
        assert_eq!(CurveShape::Linear.evaluate(0.3), 0.3);
        assert_eq!(CurveShape::Constant(0.7).evaluate(0.1), 0.7);
    }

    #[test]
    fn test_closure_is_a_curve() {
        let square = |t: f32| t * t;
        assert!((square.evaluate(0.5) - 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_keyframes_interpolate_and_clamp() {
        let curve = CurveShape::keyframes(vec![
            Keyframe::new(1.0, 1.0),
            Keyframe::new(0.0, 0.0),
            Keyframe::new(0.5, 0.1),
        ]);
        assert!((curve.evaluate(0.25) - 0.05).abs() < EPSILON);
        assert!((curve.evaluate(0.75) - 0.55).abs() < EPSILON);
        assert_eq!(curve.evaluate(-1.0), 0.0);
        assert_eq!(curve.evaluate(2.0), 1.0);
    }

    #[test]
    fn test_empty_keyframes_evaluate_to_zero() {
        assert_eq!(CurveShape::Keyframes(Vec::new()).evaluate(0.5), 0.0);
    }

    #[test]
    fn test_island_curve_is_monotonic() {
        let curve = CurveShape::Island { a: 3.0, b: 2.2 };
        assert!(curve.evaluate(0.0).abs() < EPSILON);
        assert!((curve.evaluate(1.0) - 1.0).abs() < EPSILON);

        let mut prev = curve.evaluate(0.0);
        for i in 1..=100 {
            let v = curve.evaluate(i as f32 / 100.0);
            assert!(v >= prev, "island curve decreased at step {i}: {prev} -> {v}");
            prev = v;
        }
    }

    #[test]
    fn test_curve_shape_ron_roundtrip() {
        let shape = CurveShape::keyframes(vec![Keyframe::new(0.0, 0.0), Keyframe::new(1.0, 1.0)]);
        let text = ron::to_string(&shape).unwrap();
        let back: CurveShape = ron::from_str(&text).unwrap();
        assert_eq!(shape, back);
    }
}
