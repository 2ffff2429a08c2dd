//! Transform computation engine for pointer- and audio-reactive elements.
//!
//! Platform-independent: the web frontend supplies the element handles, the
//! frame scheduler and the presenter through the traits in [`driver`].

pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod input;
pub mod interaction;
pub mod rotation;
pub mod synth;
pub mod transform;
pub mod vector;

pub use config::{Axes, Axis, ConstraintAxis, InteractionConfig, Response, TransformType};
pub use driver::{
    AnimationDriver, Bounds, DriverState, ElementHandle, ElementId, FrameRequest, FrameScheduler,
    Presenter,
};
pub use error::ConfigurationError;
pub use input::{InputSample, SharedPointer, SignalSource, SpectrumSource};
pub use interaction::InteractionType;
pub use rotation::RotationTracker;
pub use synth::{synthesize, Signal};
pub use transform::{TransformDescriptor, TransformOp};
