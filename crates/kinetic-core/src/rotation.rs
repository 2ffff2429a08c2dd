use crate::vector::{normalize_degrees, shortest_delta};

/// Per-element rotation memory.
///
/// Holding the last committed angle lets each frame rotate along the shorter
/// arc towards the target, so crossing the 0/360 seam never spins the element
/// a full turn.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationTracker {
    current: f32,
}

impl RotationTracker {
    pub fn new(initial_deg: f32) -> Self {
        Self {
            current: normalize_degrees(initial_deg),
        }
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Move `factor` of the way from the stored angle to `target_deg` and
    /// return the new angle. The result is stored normalized to `[0, 360)`.
    pub fn advance(&mut self, target_deg: f32, factor: f32) -> f32 {
        let delta = shortest_delta(target_deg, self.current);
        self.current = normalize_degrees(self.current + delta * factor);
        self.current
    }

    pub fn reset(&mut self) {
        self.current = 0.0;
    }
}
