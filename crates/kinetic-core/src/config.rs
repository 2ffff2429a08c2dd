//! Per-element interaction configuration and its markup surface.

use crate::constants::*;
use crate::error::ConfigurationError;
use crate::interaction::InteractionType;
use std::fmt;
use std::str::FromStr;

/// Visual effect produced by a signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TransformType {
    #[default]
    Translate,
    Rotate,
    Scale,
    Tilt,
    TiltInverse,
    /// Unknown name from markup; synthesizes the identity.
    Unsupported,
}

impl TransformType {
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "translate" => Self::Translate,
            "rotate" => Self::Rotate,
            "scale" => Self::Scale,
            "tilt" => Self::Tilt,
            "tilt_inv" | "tilt-inv" | "tiltinverse" => Self::TiltInverse,
            other => {
                log::warn!("[config] unknown transform type `{}`; element stays at origin", other);
                Self::Unsupported
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Subset of `{X, Y, Z}` a tracking or audio response may drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Axes {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl Axes {
    pub const NONE: Self = Self {
        x: false,
        y: false,
        z: false,
    };
    pub const XY: Self = Self {
        x: true,
        y: true,
        z: false,
    };
    pub const XYZ: Self = Self {
        x: true,
        y: true,
        z: true,
    };

    #[inline]
    pub fn contains(self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    #[inline]
    pub fn with(mut self, axis: Axis) -> Self {
        match axis {
            Axis::X => self.x = true,
            Axis::Y => self.y = true,
            Axis::Z => self.z = true,
        }
        self
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.x || self.y || self.z)
    }

    /// Accepts any mix of `x`, `y`, `z` letters with arbitrary separators,
    /// e.g. `"X,Y"`, `"xz"`, `"x y z"`. Other characters are ignored.
    pub fn parse(list: &str) -> Self {
        list.chars().fold(Self::NONE, |axes, c| match c {
            'x' | 'X' => axes.with(Axis::X),
            'y' | 'Y' => axes.with(Axis::Y),
            'z' | 'Z' => axes.with(Axis::Z),
            _ => axes,
        })
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::XY
    }
}

/// Input axis forced to zero before a tracking transform is computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstraintAxis {
    X,
    Y,
}

impl FromStr for ConstraintAxis {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(Self::X),
            "Y" => Ok(Self::Y),
            other => Err(ConfigurationError::InvalidConstraintAxis(other.to_string())),
        }
    }
}

/// Which signal geometry drives the element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Response {
    /// Distance from the pointer to the element centre, with falloff.
    #[default]
    Proximity,
    /// Pointer offset across the element's own box, normalized to `[-1, 1]`.
    Tracking,
}

impl Response {
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "tracking" | "transformer" => Self::Tracking,
            _ => Self::Proximity,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InteractionConfig {
    pub active: bool,
    pub strength: f32,
    pub transform_origin: String,
    pub start_distance: f32,
    pub minimum_distance: f32,
    pub interaction_type: InteractionType,
    pub transform_type: TransformType,
    pub transform_axes: Axes,
    pub constraint_axis: Option<ConstraintAxis>,
    pub response: Response,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            active: true,
            strength: DEFAULT_STRENGTH,
            transform_origin: DEFAULT_TRANSFORM_ORIGIN.to_string(),
            start_distance: DEFAULT_START_DISTANCE,
            minimum_distance: DEFAULT_MINIMUM_DISTANCE,
            interaction_type: InteractionType::default(),
            transform_type: TransformType::default(),
            transform_axes: Axes::default(),
            constraint_axis: None,
            response: Response::default(),
        }
    }
}

impl InteractionConfig {
    pub fn strength(mut self, strength: f32) -> Self {
        self.strength = strength;
        self
    }

    pub fn start_distance(mut self, start_distance: f32) -> Self {
        self.start_distance = start_distance;
        self
    }

    pub fn minimum_distance(mut self, minimum_distance: f32) -> Self {
        self.minimum_distance = minimum_distance;
        self
    }

    pub fn interaction(mut self, interaction_type: InteractionType) -> Self {
        self.interaction_type = interaction_type;
        self
    }

    pub fn transform(mut self, transform_type: TransformType) -> Self {
        self.transform_type = transform_type;
        self
    }

    pub fn axes(mut self, axes: Axes) -> Self {
        self.transform_axes = axes;
        self
    }

    pub fn constraint(mut self, axis: ConstraintAxis) -> Self {
        self.constraint_axis = Some(axis);
        self
    }

    pub fn response(mut self, response: Response) -> Self {
        self.response = response;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Check the numeric invariants the synthesizer relies on.
    pub fn validate(self) -> Result<Self, ConfigurationError> {
        if self.start_distance.is_nan() || self.start_distance <= 0.0 {
            return Err(ConfigurationError::InvalidStartDistance(self.start_distance));
        }
        if self.minimum_distance.is_nan() || self.minimum_distance < 0.0 {
            return Err(ConfigurationError::InvalidMinimumDistance(
                self.minimum_distance,
            ));
        }
        Ok(self)
    }

    /// Build a config from `data-kinetic-*` attributes. `lookup` returns the
    /// raw attribute value, or `None` when the attribute is absent; absent
    /// attributes keep their defaults.
    pub fn from_attributes<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(v) = lookup(ATTR_ACTIVE) {
            config.active = !matches!(v.trim(), "false" | "0" | "off");
        }
        if let Some(v) = lookup(ATTR_STRENGTH) {
            config.strength = parse_number(ATTR_STRENGTH, &v)?;
        }
        if let Some(v) = lookup(ATTR_TRANSFORM_ORIGIN) {
            config.transform_origin = v.trim().to_string();
        }
        if let Some(v) = lookup(ATTR_START_DISTANCE) {
            config.start_distance = parse_number(ATTR_START_DISTANCE, &v)?;
        }
        if let Some(v) = lookup(ATTR_MINIMUM_DISTANCE) {
            config.minimum_distance = parse_number(ATTR_MINIMUM_DISTANCE, &v)?;
        }
        if let Some(v) = lookup(ATTR_INTERACTION_TYPE) {
            config.interaction_type = InteractionType::parse(&v);
        }
        if let Some(v) = lookup(ATTR_TRANSFORM_TYPE) {
            config.transform_type = TransformType::parse(&v);
        }
        if let Some(v) = lookup(ATTR_TRANSFORM_AXES) {
            config.transform_axes = Axes::parse(&v);
        }
        if let Some(v) = lookup(ATTR_CONSTRAINT_AXIS) {
            config.constraint_axis = Some(v.parse()?);
        }
        if let Some(v) = lookup(ATTR_RESPONSE) {
            config.response = Response::parse(&v);
        }
        config.validate()
    }
}

fn parse_number(name: &'static str, raw: &str) -> Result<f32, ConfigurationError> {
    raw.trim()
        .trim_end_matches("px")
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigurationError::InvalidNumber {
            name,
            value: raw.to_string(),
        })
}

impl fmt::Display for TransformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Translate => "translate",
            Self::Rotate => "rotate",
            Self::Scale => "scale",
            Self::Tilt => "tilt",
            Self::TiltInverse => "tilt_inv",
            Self::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}
