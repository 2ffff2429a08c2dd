//! Signal → transform synthesis.
//!
//! Every transform type is one arm of a single `match`; the falloff and the
//! rotation memory are computed once, outside the per-type formulas.

use crate::config::{Axes, ConstraintAxis, InteractionConfig, TransformType};
use crate::constants::{
    CONSTRAINED_COMPENSATION, HALF_TURN_DEG, SCALE_PERCENT, SPECTRUM_BIN_MAX,
    TILT_LIFT_PER_STRENGTH,
};
use crate::interaction::{self, InteractionType};
use crate::rotation::RotationTracker;
use crate::transform::TransformDescriptor;
use crate::vector;
use glam::{Vec2, Vec3};

/// Geometry of the input for one element on one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Signal {
    /// Pointer minus element anchor, in pixels.
    Proximity { offset: Vec2 },
    /// Pointer position across the element box, each component in
    /// `[-1, 1]`, already passed through [`constrain`].
    Axes { x: f32, y: f32, compensation: f32 },
    /// Normalized audio level in `[0, 1]`.
    Level { value: f32 },
}

impl Signal {
    /// Build a tracking signal, applying the element's constraint axis.
    pub fn tracking(x: f32, y: f32, constraint: Option<ConstraintAxis>) -> Self {
        let (x, y, compensation) = constrain(x, y, constraint);
        Self::Axes { x, y, compensation }
    }

    /// Build an audio signal from a byte frequency bin.
    pub fn from_bin(bin: u8) -> Self {
        Self::Level {
            value: normalize_bin(bin),
        }
    }
}

#[inline]
pub fn normalize_bin(bin: u8) -> f32 {
    f32::from(bin) / SPECTRUM_BIN_MAX
}

/// Zero the constrained input and report the depth compensation that keeps
/// `x + y` proportional when one of them is gone.
#[inline]
pub fn constrain(x: f32, y: f32, constraint: Option<ConstraintAxis>) -> (f32, f32, f32) {
    match constraint {
        Some(ConstraintAxis::X) => (0.0, y, CONSTRAINED_COMPENSATION),
        Some(ConstraintAxis::Y) => (x, 0.0, CONSTRAINED_COMPENSATION),
        None => (x, y, 1.0),
    }
}

/// Pointer offset from the centre of a box of `half_extent`, clamped to
/// `[-1, 1]` per axis. A degenerate box yields zero on that axis.
pub fn tracking_offset(pointer: Vec2, center: Vec2, half_extent: Vec2) -> Vec2 {
    let d = pointer - center;
    let axis = |d: f32, half: f32| {
        if half > 0.0 {
            (d / half).clamp(-1.0, 1.0)
        } else {
            0.0
        }
    };
    Vec2::new(axis(d.x, half_extent.x), axis(d.y, half_extent.y))
}

/// Compute the transform delta for one element.
///
/// `rotation` is only read and written for proximity-driven `Rotate`.
pub fn synthesize(
    signal: Signal,
    config: &InteractionConfig,
    rotation: &mut RotationTracker,
) -> TransformDescriptor {
    match signal {
        Signal::Proximity { offset } => proximity(offset, config, rotation),
        Signal::Axes { x, y, compensation } => tracking(x, y, compensation, config),
        Signal::Level { value } => level(value.clamp(0.0, 1.0), config),
    }
}

fn proximity(
    offset: Vec2,
    config: &InteractionConfig,
    rotation: &mut RotationTracker,
) -> TransformDescriptor {
    let distance = offset.length();
    if !interaction::is_within_reach(distance, config.start_distance) {
        // at rest the element shows 0deg, so re-entry eases from there
        rotation.reset();
        return TransformDescriptor::identity();
    }
    let f = interaction::factor(distance, config.start_distance, config.interaction_type);
    let dir = vector::direction(offset.x, offset.y, distance);
    let repel = config.interaction_type.is_repulsion();
    let s = config.strength;

    match config.transform_type {
        TransformType::Translate => {
            let mut movement = s * f;
            if config.interaction_type == InteractionType::Attraction {
                movement = movement.min((distance - config.minimum_distance).max(0.0));
            }
            let sign = if repel { -1.0 } else { 1.0 };
            let v = dir * movement * sign;
            TransformDescriptor::identity().translate(Vec3::new(v.x, v.y, 0.0))
        }
        TransformType::Rotate => {
            let mut target = vector::angle_of(offset.y, offset.x);
            if repel {
                target += HALF_TURN_DEG;
            }
            let angle = rotation.advance(target, f);
            TransformDescriptor::identity().rotate(Vec3::Z, angle)
        }
        TransformType::Scale => {
            let k = if repel { -1.0 } else { 1.0 };
            let u = 1.0 + k * s * SCALE_PERCENT * f;
            TransformDescriptor::identity().scale(Vec3::new(u, u, 1.0))
        }
        TransformType::Tilt | TransformType::TiltInverse => {
            let input = if repel { -dir * f } else { dir * f };
            tilt(input.x, input.y, s, config.transform_type)
        }
        TransformType::Unsupported => TransformDescriptor::identity(),
    }
}

fn tracking(x: f32, y: f32, compensation: f32, config: &InteractionConfig) -> TransformDescriptor {
    let s = config.strength;
    let axes = config.transform_axes;
    let on = |enabled: bool, v: f32| if enabled { v } else { 0.0 };
    let depth = (x + y) * compensation;

    match config.transform_type {
        TransformType::Translate => TransformDescriptor::identity().translate(Vec3::new(
            on(axes.x, x * s),
            on(axes.y, y * s),
            on(axes.z, depth * s),
        )),
        TransformType::Rotate => composite_rotation(
            on(axes.x, y * s),
            on(axes.y, x * s),
            on(axes.z, depth * s),
        ),
        TransformType::Scale => TransformDescriptor::identity().scale(Vec3::new(
            1.0 + on(axes.x, x * s * SCALE_PERCENT),
            1.0 + on(axes.y, y * s * SCALE_PERCENT),
            1.0 + on(axes.z, depth * s * SCALE_PERCENT),
        )),
        TransformType::Tilt | TransformType::TiltInverse => tilt(x, y, s, config.transform_type),
        TransformType::Unsupported => TransformDescriptor::identity(),
    }
}

fn level(value: f32, config: &InteractionConfig) -> TransformDescriptor {
    let s = config.strength;
    let sign = if config.interaction_type.is_repulsion() {
        -1.0
    } else {
        1.0
    };
    let axes = config.transform_axes;

    match config.transform_type {
        TransformType::Translate => {
            let push = sign * s * value;
            TransformDescriptor::identity().translate(axis_mask(axes) * push)
        }
        TransformType::Rotate => {
            let axis = if axes.is_empty() {
                Vec3::Z
            } else {
                axis_mask(axes)
            };
            TransformDescriptor::identity().rotate(axis, sign * s * value)
        }
        TransformType::Scale => {
            let u = 1.0 + sign * s * SCALE_PERCENT * value;
            TransformDescriptor::identity().scale(Vec3::new(u, u, 1.0))
        }
        TransformType::Tilt | TransformType::TiltInverse => {
            let v = sign * value;
            tilt(v, v, s, config.transform_type)
        }
        TransformType::Unsupported => TransformDescriptor::identity(),
    }
}

/// Cross-coupled tilt: Y input turns about X, X input turns about Y, lifted
/// towards the viewer by a constant depth.
fn tilt(x: f32, y: f32, strength: f32, kind: TransformType) -> TransformDescriptor {
    let k = if kind == TransformType::TiltInverse {
        -1.0
    } else {
        1.0
    };
    TransformDescriptor::identity()
        .translate(Vec3::new(0.0, 0.0, strength * TILT_LIFT_PER_STRENGTH))
        .rotate(Vec3::X, -k * y * strength)
        .rotate(Vec3::Y, k * x * strength)
}

/// Single rotation about the axis made of every contributing component,
/// by the first nonzero magnitude in X, Y, Z order.
fn composite_rotation(rx: f32, ry: f32, rz: f32) -> TransformDescriptor {
    let axis = Vec3::new(
        if rx != 0.0 { 1.0 } else { 0.0 },
        if ry != 0.0 { 1.0 } else { 0.0 },
        if rz != 0.0 { 1.0 } else { 0.0 },
    );
    let degrees = [rx, ry, rz]
        .into_iter()
        .find(|r| *r != 0.0)
        .unwrap_or(0.0);
    TransformDescriptor::identity().rotate(axis, degrees)
}

#[inline]
fn axis_mask(axes: Axes) -> Vec3 {
    Vec3::new(
        if axes.x { 1.0 } else { 0.0 },
        if axes.y { 1.0 } else { 0.0 },
        if axes.z { 1.0 } else { 0.0 },
    )
}
