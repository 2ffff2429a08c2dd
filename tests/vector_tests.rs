// Host-side tests for planar vector helpers and angle wrap-around.

use glam::Vec2;
use kinetic_core::vector::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn distance_is_euclidean() {
    assert!(approx(distance(Vec2::ZERO, Vec2::new(3.0, 4.0)), 5.0));
    assert!(approx(distance(Vec2::new(-1.0, -1.0), Vec2::new(2.0, 3.0)), 5.0));
}

#[test]
fn direction_is_unit_length() {
    let d = direction(3.0, 4.0, 5.0);
    assert!(approx(d.x, 0.6));
    assert!(approx(d.y, 0.8));
}

#[test]
fn direction_on_anchor_is_finite() {
    // Signal exactly on the element: no division by zero
    let d = direction(0.0, 0.0, 0.0);
    assert!(d.x.is_finite() && d.y.is_finite());
    assert_eq!(d, Vec2::ZERO);

    let tiny = direction(1e-6, 0.0, 1e-6);
    assert!(tiny.x.is_finite());
    assert!(tiny.x <= 1.0);
}

#[test]
fn angle_of_covers_all_quadrants() {
    assert!(approx(angle_of(1.0, 0.0), 0.0));
    assert!(approx(angle_of(0.0, 1.0), 90.0));
    assert!(approx(angle_of(-1.0, 0.0), 180.0));
    assert!(approx(angle_of(0.0, -1.0), 270.0));
    assert!(approx(angle_of(1.0, -1.0), 315.0));
}

#[test]
fn angle_of_stays_in_range() {
    for i in 0..72 {
        let a = (i as f32 * 5.0).to_radians();
        let deg = angle_of(a.cos(), a.sin());
        assert!((0.0..360.0).contains(&deg), "angle {deg} out of range");
    }
}

#[test]
fn shortest_delta_crosses_zero_forwards() {
    assert!(approx(shortest_delta(10.0, 350.0), 20.0));
    assert!(approx(shortest_delta(350.0, 10.0), -20.0));
}

#[test]
fn shortest_delta_within_half_turn() {
    for t in (0..360).step_by(7) {
        for c in (0..360).step_by(11) {
            let d = shortest_delta(t as f32, c as f32);
            assert!((-180.0..=180.0).contains(&d), "delta {d} for {t} vs {c}");
        }
    }
}

#[test]
fn shortest_delta_is_antisymmetric() {
    for a in (0..360).step_by(10) {
        for b in (0..360).step_by(10) {
            let ab = shortest_delta(a as f32, b as f32);
            let ba = shortest_delta(b as f32, a as f32);
            // exactly opposite points are ambiguous
            if (ab.abs() - 180.0).abs() < 1e-3 {
                continue;
            }
            assert!(approx(ab, -ba), "{a} vs {b}: {ab} / {ba}");
        }
    }
}

#[test]
fn normalize_degrees_wraps_into_range() {
    assert!(approx(normalize_degrees(-10.0), 350.0));
    assert!(approx(normalize_degrees(720.0), 0.0));
    assert!(approx(normalize_degrees(365.0), 5.0));
    let tiny = normalize_degrees(-1e-7);
    assert!((0.0..360.0).contains(&tiny));
}
