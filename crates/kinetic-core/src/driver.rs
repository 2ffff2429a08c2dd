//! Frame-driven lifecycle for a set of managed elements.
//!
//! The driver never schedules itself. It asks a [`FrameScheduler`] for one
//! frame at a time and the host calls [`AnimationDriver::tick`] when that
//! frame fires. Whether another frame is requested is decided by the driver
//! state at the end of each tick, so `stop` and `destroy` only have to cancel
//! the single outstanding request.

use crate::config::{InteractionConfig, Response};
use crate::constants::MARKER_ATTR;
use crate::error::ConfigurationError;
use crate::input::{InputSample, SignalSource};
use crate::rotation::RotationTracker;
use crate::synth::{self, Signal};
use crate::transform::TransformDescriptor;
use fnv::FnvHashMap;
use glam::Vec2;

/// Layout box of an element in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub center: Vec2,
    pub half_extent: Vec2,
}

impl Bounds {
    pub fn from_rect(left: f32, top: f32, width: f32, height: f32) -> Self {
        let half_extent = Vec2::new(width, height) * 0.5;
        Self {
            center: Vec2::new(left, top) + half_extent,
            half_extent,
        }
    }
}

/// A presentable element the driver can manage.
pub trait ElementHandle {
    /// Whether the element opted in via the marker attribute.
    fn has_marker(&self) -> bool;
    /// Transform the element carries before any interactive effect.
    fn origin_transform(&self) -> String;
    fn bounds(&self) -> Bounds;
}

/// Opaque id of a pending frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub i32);

/// The host's "run me on the next frame" primitive.
pub trait FrameScheduler {
    /// Returns `None` when the host refused to schedule.
    fn request_frame(&mut self) -> Option<FrameRequest>;
    fn cancel_frame(&mut self, request: FrameRequest);
}

/// Applies composed transform strings to elements.
pub trait Presenter<E> {
    /// Called once on attach with the configured transform origin.
    fn prepare(&mut self, _element: &E, _transform_origin: &str) {}
    fn commit(&mut self, element: &E, transform: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Active,
    /// Terminal. Nothing can be attached or started again.
    Destroyed,
}

struct ElementState<E> {
    element: E,
    origin: String,
    config: InteractionConfig,
    rotation: RotationTracker,
    channel: usize,
    last_committed: Option<String>,
}

impl<E: ElementHandle> ElementState<E> {
    fn signal(&self, sample: InputSample) -> Signal {
        match sample {
            InputSample::Pointer { x, y } => {
                let pointer = Vec2::new(x, y);
                let bounds = self.element.bounds();
                match self.config.response {
                    Response::Proximity => Signal::Proximity {
                        offset: pointer - bounds.center,
                    },
                    Response::Tracking => {
                        let t = synth::tracking_offset(pointer, bounds.center, bounds.half_extent);
                        Signal::tracking(t.x, t.y, self.config.constraint_axis)
                    }
                }
            }
            InputSample::Audio { value, .. } => Signal::Level { value },
        }
    }

    fn rest(&mut self) -> TransformDescriptor {
        self.rotation.reset();
        TransformDescriptor::identity()
    }
}

pub struct AnimationDriver<E, S, P> {
    source: SignalSource,
    scheduler: S,
    presenter: P,
    elements: FnvHashMap<ElementId, ElementState<E>>,
    next_id: u32,
    state: DriverState,
    pending: Option<FrameRequest>,
    bins: Vec<u8>,
}

impl<E, S, P> AnimationDriver<E, S, P>
where
    E: ElementHandle,
    S: FrameScheduler,
    P: Presenter<E>,
{
    pub fn new(source: SignalSource, scheduler: S, presenter: P) -> Self {
        Self {
            source,
            scheduler,
            presenter,
            elements: FnvHashMap::default(),
            next_id: 0,
            state: DriverState::Idle,
            pending: None,
            bins: Vec::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> DriverState {
        self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == DriverState::Active
    }

    #[inline]
    pub fn pending_frame(&self) -> Option<FrameRequest> {
        self.pending
    }

    #[inline]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Managed element handles, in no particular order.
    pub fn elements(&self) -> impl Iterator<Item = &E> + '_ {
        self.elements.values().map(|s| &s.element)
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Stored rotation of a managed element, in `[0, 360)`.
    pub fn current_angle(&self, id: ElementId) -> Option<f32> {
        self.elements.get(&id).map(|s| s.rotation.current())
    }

    /// Take an element under management. Its current transform becomes the
    /// origin every computed delta is appended to. An active config starts
    /// the driver.
    pub fn attach(
        &mut self,
        element: E,
        config: InteractionConfig,
    ) -> Result<ElementId, ConfigurationError> {
        let active = config.active;
        let id = self.attach_paused(element, config)?;
        if active {
            self.start();
        }
        Ok(id)
    }

    /// Like [`attach`](Self::attach) but never starts the driver.
    pub fn attach_paused(
        &mut self,
        element: E,
        config: InteractionConfig,
    ) -> Result<ElementId, ConfigurationError> {
        if self.state == DriverState::Destroyed {
            return Err(ConfigurationError::Destroyed);
        }
        if !element.has_marker() {
            return Err(ConfigurationError::MissingMarker(MARKER_ATTR));
        }
        let config = config.validate()?;
        let origin = element.origin_transform();
        self.presenter.prepare(&element, &config.transform_origin);

        let id = ElementId(self.next_id);
        self.next_id += 1;
        log::info!(
            "[driver] attach element {} transform={} origin=`{}`",
            id.0,
            config.transform_type,
            origin
        );
        self.elements.insert(
            id,
            ElementState {
                element,
                origin,
                config,
                rotation: RotationTracker::default(),
                channel: id.0 as usize,
                last_committed: None,
            },
        );
        Ok(id)
    }

    /// Release one element, restoring its origin transform.
    pub fn detach(&mut self, id: ElementId) -> Option<E> {
        let state = self.elements.remove(&id)?;
        self.presenter.commit(&state.element, &state.origin);
        log::info!("[driver] detach element {}", id.0);
        Some(state.element)
    }

    /// Begin animating. Starting an active driver only re-requests a frame
    /// the host previously refused. A destroyed driver never starts.
    pub fn start(&mut self) {
        match self.state {
            DriverState::Destroyed => {
                log::warn!("[driver] start after destroy ignored");
                return;
            }
            DriverState::Active if self.pending.is_some() => return,
            _ => {}
        }
        self.state = DriverState::Active;
        log::debug!("[driver] start ({} elements)", self.elements.len());
        self.schedule();
    }

    /// Run one frame. Called by the host when the requested frame fires.
    pub fn tick(&mut self) {
        self.pending = None;
        if self.state != DriverState::Active {
            return;
        }

        let pointer = match &mut self.source {
            SignalSource::Pointer(shared) => shared.latest(),
            SignalSource::Spectrum(source) => {
                if !source.refresh(&mut self.bins) {
                    self.bins.clear();
                }
                None
            }
        };
        let audio = self.source.is_audio();

        for state in self.elements.values_mut() {
            let sample = if audio {
                (!self.bins.is_empty()).then(|| {
                    let channel_index = state.channel % self.bins.len();
                    InputSample::Audio {
                        channel_index,
                        value: synth::normalize_bin(self.bins[channel_index]),
                    }
                })
            } else {
                pointer.map(|p| InputSample::Pointer { x: p.x, y: p.y })
            };
            let delta = match sample {
                // inactive elements ride along at rest
                Some(sample) if state.config.active => {
                    if let Some(channel) = sample.channel() {
                        log::trace!("[driver] bin {} -> {:?}", channel, sample);
                    }
                    let signal = state.signal(sample);
                    synth::synthesize(signal, &state.config, &mut state.rotation)
                }
                _ => state.rest(),
            };
            let composed = delta.compose(&state.origin);
            if state.last_committed.as_deref() != Some(composed.as_str()) {
                self.presenter.commit(&state.element, &composed);
                state.last_committed = Some(composed);
            }
        }

        self.schedule();
    }

    /// Stop animating and put every element back at its origin. Safe to call
    /// in any state; no frame is pending once it returns.
    pub fn stop(&mut self) {
        if let Some(request) = self.pending.take() {
            self.scheduler.cancel_frame(request);
        }
        if self.state != DriverState::Active {
            return;
        }
        self.state = DriverState::Idle;
        for state in self.elements.values_mut() {
            self.presenter.commit(&state.element, &state.origin);
            state.rotation.reset();
            state.last_committed = None;
        }
        log::debug!("[driver] stop");
    }

    /// `stop` plus release of every element. Idempotent; the driver stays
    /// `Destroyed` afterwards.
    pub fn destroy(&mut self) {
        self.stop();
        if !self.elements.is_empty() {
            log::info!("[driver] destroy ({} elements)", self.elements.len());
        }
        self.state = DriverState::Destroyed;
        self.elements.clear();
        self.bins.clear();
    }

    fn schedule(&mut self) {
        if self.pending.is_some() {
            return;
        }
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("[driver] frame request refused; animation halted until start()");
        }
    }
}
