// Shared tuning constants and the attribute surface read by the web frontend.

// Vector math
pub const DISTANCE_EPSILON: f32 = 1e-4; // floor used when normalizing direction vectors
pub const FULL_TURN_DEG: f32 = 360.0;
pub const HALF_TURN_DEG: f32 = 180.0;

// Transform synthesis
pub const SCALE_PERCENT: f32 = 0.01; // strength is expressed in percent for scale
pub const TILT_LIFT_PER_STRENGTH: f32 = 2.0; // translateZ = strength * lift for tilt
pub const CONSTRAINED_COMPENSATION: f32 = 2.0; // Z contribution when one input is nulled

// Audio
pub const SPECTRUM_BIN_MAX: f32 = 255.0; // byte frequency data upper bound

// Config defaults
pub const DEFAULT_STRENGTH: f32 = 20.0;
pub const DEFAULT_START_DISTANCE: f32 = 200.0;
pub const DEFAULT_MINIMUM_DISTANCE: f32 = 0.0;
pub const DEFAULT_TRANSFORM_ORIGIN: &str = "center";

// Markup attribute names
pub const MARKER_ATTR: &str = "data-kinetic";
pub const ATTR_ACTIVE: &str = "data-kinetic-active";
pub const ATTR_STRENGTH: &str = "data-kinetic-strength";
pub const ATTR_TRANSFORM_ORIGIN: &str = "data-kinetic-transform-origin";
pub const ATTR_START_DISTANCE: &str = "data-kinetic-start-distance";
pub const ATTR_INTERACTION_TYPE: &str = "data-kinetic-interaction-type";
pub const ATTR_TRANSFORM_TYPE: &str = "data-kinetic-transform-type";
pub const ATTR_MINIMUM_DISTANCE: &str = "data-kinetic-minimum-distance";
pub const ATTR_TRANSFORM_AXES: &str = "data-kinetic-transform-axes";
pub const ATTR_CONSTRAINT_AXIS: &str = "data-kinetic-constraint-axis";
pub const ATTR_RESPONSE: &str = "data-kinetic-response";
