//! Structured transform deltas and their CSS rendering.

use glam::Vec3;
use smallvec::SmallVec;
use std::fmt;

/// One CSS transform function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    /// Pixels.
    Translate(Vec3),
    /// Rotation about `axis` (components are 0 or 1).
    Rotate { axis: Vec3, degrees: f32 },
    Scale(Vec3),
}

/// Ordered list of transform functions appended after an element's origin
/// transform. An empty descriptor is the rest state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformDescriptor {
    ops: SmallVec<[TransformOp; 4]>,
}

impl TransformDescriptor {
    #[inline]
    pub fn identity() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    #[inline]
    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    /// Zero translations are dropped so the rest state stays empty.
    pub fn translate(mut self, offset: Vec3) -> Self {
        if offset != Vec3::ZERO {
            self.ops.push(TransformOp::Translate(offset));
        }
        self
    }

    pub fn rotate(mut self, axis: Vec3, degrees: f32) -> Self {
        if axis != Vec3::ZERO && degrees != 0.0 {
            self.ops.push(TransformOp::Rotate { axis, degrees });
        }
        self
    }

    pub fn scale(mut self, factors: Vec3) -> Self {
        if factors != Vec3::ONE {
            self.ops.push(TransformOp::Scale(factors));
        }
        self
    }

    /// Net translation across all translate functions.
    pub fn translation(&self) -> Vec3 {
        self.ops
            .iter()
            .filter_map(|op| match op {
                TransformOp::Translate(v) => Some(*v),
                _ => None,
            })
            .sum()
    }

    /// Net per-axis scale across all scale functions.
    pub fn scale_factors(&self) -> Vec3 {
        self.ops
            .iter()
            .filter_map(|op| match op {
                TransformOp::Scale(v) => Some(*v),
                _ => None,
            })
            .fold(Vec3::ONE, |acc, v| acc * v)
    }

    pub fn rotations(&self) -> impl Iterator<Item = (Vec3, f32)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            TransformOp::Rotate { axis, degrees } => Some((*axis, *degrees)),
            _ => None,
        })
    }

    /// Origin first, this delta appended. Never replaces the origin.
    pub fn compose(&self, origin: &str) -> String {
        let origin = origin.trim();
        if self.is_identity() {
            return origin.to_string();
        }
        if origin.is_empty() || origin == "none" {
            return self.to_string();
        }
        format!("{} {}", origin, self)
    }
}

impl fmt::Display for TransformDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match op {
                TransformOp::Translate(v) => write!(
                    f,
                    "translate3d({}px, {}px, {}px)",
                    css_num(v.x),
                    css_num(v.y),
                    css_num(v.z)
                )?,
                TransformOp::Rotate { axis, degrees } => write!(
                    f,
                    "rotate3d({}, {}, {}, {}deg)",
                    css_num(axis.x),
                    css_num(axis.y),
                    css_num(axis.z),
                    css_num(*degrees)
                )?,
                TransformOp::Scale(v) => write!(
                    f,
                    "scale3d({}, {}, {})",
                    css_num(v.x),
                    css_num(v.y),
                    css_num(v.z)
                )?,
            }
        }
        Ok(())
    }
}

// Three decimals is below a device pixel; adding 0.0 folds -0 into 0.
#[inline]
fn css_num(v: f32) -> f32 {
    (v * 1000.0).round() / 1000.0 + 0.0
}
