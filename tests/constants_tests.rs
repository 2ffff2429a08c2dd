// Host-side tests for constants and their relationships.

use kinetic_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(DISTANCE_EPSILON > 0.0 && DISTANCE_EPSILON < 1e-2);
    assert_eq!(FULL_TURN_DEG, 2.0 * HALF_TURN_DEG);
    assert!(SCALE_PERCENT > 0.0);
    assert!(TILT_LIFT_PER_STRENGTH > 0.0);
    assert_eq!(CONSTRAINED_COMPENSATION, 2.0);
    assert_eq!(SPECTRUM_BIN_MAX, 255.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_satisfy_config_invariants() {
    assert!(DEFAULT_START_DISTANCE > 0.0);
    assert!(DEFAULT_MINIMUM_DISTANCE >= 0.0);
    assert!(DEFAULT_MINIMUM_DISTANCE < DEFAULT_START_DISTANCE);
    assert!(DEFAULT_STRENGTH > 0.0);
}

#[test]
fn attribute_names_share_marker_prefix() {
    for name in [
        ATTR_ACTIVE,
        ATTR_STRENGTH,
        ATTR_TRANSFORM_ORIGIN,
        ATTR_START_DISTANCE,
        ATTR_INTERACTION_TYPE,
        ATTR_TRANSFORM_TYPE,
        ATTR_MINIMUM_DISTANCE,
        ATTR_TRANSFORM_AXES,
        ATTR_CONSTRAINT_AXIS,
        ATTR_RESPONSE,
    ] {
        assert!(name.starts_with(MARKER_ATTR), "{name}");
        assert!(name.len() > MARKER_ATTR.len());
    }
}
