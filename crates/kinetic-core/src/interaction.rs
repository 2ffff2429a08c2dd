//! Distance falloff shared by every proximity-driven transform.

/// How an element responds to a nearby signal.
///
/// All recognized kinds share the same falloff curve; they differ in how the
/// synthesizer turns the factor into motion (direction, capping, shrink vs.
/// grow). `Unrecognized` keeps a typo'd configuration animating with no
/// attenuation rather than failing the whole driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InteractionType {
    #[default]
    Linear,
    Attraction,
    Repulsion,
    Unrecognized,
}

impl InteractionType {
    /// Lenient parse of the markup value; unknown names map to
    /// [`InteractionType::Unrecognized`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "linear" => Self::Linear,
            "attraction" => Self::Attraction,
            "repulsion" => Self::Repulsion,
            other => {
                log::warn!("[config] unknown interaction type `{}`; using no falloff", other);
                Self::Unrecognized
            }
        }
    }

    #[inline]
    pub fn is_repulsion(self) -> bool {
        self == Self::Repulsion
    }
}

/// Whether a signal at `distance` is close enough to move the element at all.
/// The boundary itself is at rest.
#[inline]
pub fn is_within_reach(distance: f32, start_distance: f32) -> bool {
    distance < start_distance
}

/// Falloff factor in `[0, 1]`: 1 when the signal sits on the element, 0 at
/// `start_distance` and beyond.
pub fn factor(distance: f32, start_distance: f32, interaction_type: InteractionType) -> f32 {
    let normalized = (distance / start_distance).clamp(0.0, 1.0);
    match interaction_type {
        InteractionType::Linear | InteractionType::Attraction | InteractionType::Repulsion => {
            1.0 - normalized
        }
        InteractionType::Unrecognized => 1.0,
    }
}
