// Host-side tests for the data-kinetic-* attribute surface.

use kinetic_core::constants::*;
use kinetic_core::*;
use std::collections::HashMap;

fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn parse(pairs: &[(&str, &str)]) -> Result<InteractionConfig, ConfigurationError> {
    let map = attrs(pairs);
    InteractionConfig::from_attributes(|name| map.get(name).cloned())
}

#[test]
fn absent_attributes_keep_defaults() {
    let config = parse(&[]).expect("defaults are valid");
    assert_eq!(config, InteractionConfig::default());
    assert!(config.active);
    assert_eq!(config.strength, DEFAULT_STRENGTH);
    assert_eq!(config.transform_axes, Axes::XY);
    assert_eq!(config.constraint_axis, None);
}

#[test]
fn full_attribute_set_parses() {
    let config = parse(&[
        (ATTR_ACTIVE, "false"),
        (ATTR_STRENGTH, "35"),
        (ATTR_TRANSFORM_ORIGIN, "top left"),
        (ATTR_START_DISTANCE, "150px"),
        (ATTR_MINIMUM_DISTANCE, "12.5"),
        (ATTR_INTERACTION_TYPE, "repulsion"),
        (ATTR_TRANSFORM_TYPE, "tilt_inv"),
        (ATTR_TRANSFORM_AXES, "X,Z"),
        (ATTR_CONSTRAINT_AXIS, "Y"),
        (ATTR_RESPONSE, "tracking"),
    ])
    .expect("valid attributes");

    assert!(!config.active);
    assert_eq!(config.strength, 35.0);
    assert_eq!(config.transform_origin, "top left");
    assert_eq!(config.start_distance, 150.0);
    assert_eq!(config.minimum_distance, 12.5);
    assert_eq!(config.interaction_type, InteractionType::Repulsion);
    assert_eq!(config.transform_type, TransformType::TiltInverse);
    assert!(config.transform_axes.contains(Axis::X));
    assert!(!config.transform_axes.contains(Axis::Y));
    assert!(config.transform_axes.contains(Axis::Z));
    assert_eq!(config.constraint_axis, Some(ConstraintAxis::Y));
    assert_eq!(config.response, Response::Tracking);
}

#[test]
fn invalid_constraint_axis_is_fatal() {
    let err = parse(&[(ATTR_CONSTRAINT_AXIS, "Z")]).unwrap_err();
    assert_eq!(err, ConfigurationError::InvalidConstraintAxis("Z".to_string()));
    assert!(parse(&[(ATTR_CONSTRAINT_AXIS, "")]).is_err());
    for loose in ["x", "y", " X ", "Y "] {
        assert_eq!(
            parse(&[(ATTR_CONSTRAINT_AXIS, loose)]).unwrap_err(),
            ConfigurationError::InvalidConstraintAxis(loose.to_string())
        );
    }
}

#[test]
fn unknown_type_names_fall_back() {
    let config = parse(&[
        (ATTR_INTERACTION_TYPE, "gravity"),
        (ATTR_TRANSFORM_TYPE, "skew"),
    ])
    .expect("unknown names are not errors");
    assert_eq!(config.interaction_type, InteractionType::Unrecognized);
    assert_eq!(config.transform_type, TransformType::Unsupported);
}

#[test]
fn distance_invariants_are_enforced() {
    assert_eq!(
        parse(&[(ATTR_START_DISTANCE, "0")]).unwrap_err(),
        ConfigurationError::InvalidStartDistance(0.0)
    );
    assert_eq!(
        parse(&[(ATTR_MINIMUM_DISTANCE, "-1")]).unwrap_err(),
        ConfigurationError::InvalidMinimumDistance(-1.0)
    );
    assert!(InteractionConfig::default()
        .start_distance(f32::NAN)
        .validate()
        .is_err());
}

#[test]
fn non_numeric_values_are_rejected() {
    let err = parse(&[(ATTR_STRENGTH, "lots")]).unwrap_err();
    assert!(matches!(
        err,
        ConfigurationError::InvalidNumber {
            name: ATTR_STRENGTH,
            ..
        }
    ));
}

#[test]
fn axes_parse_ignores_separators() {
    assert_eq!(Axes::parse("x y z"), Axes::XYZ);
    assert_eq!(Axes::parse("YX"), Axes::XY);
    assert!(Axes::parse("").is_empty());
    assert!(Axes::parse("w").is_empty());
}

#[test]
fn transform_type_names_round_trip_through_display() {
    for t in [
        TransformType::Translate,
        TransformType::Rotate,
        TransformType::Scale,
        TransformType::Tilt,
        TransformType::TiltInverse,
    ] {
        assert_eq!(TransformType::parse(&t.to_string()), t);
    }
}
