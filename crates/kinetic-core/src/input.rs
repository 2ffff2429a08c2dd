//! Input samples and the sources they are read from.

use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

/// One reading for one element on one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputSample {
    /// Absolute pointer coordinates (viewport pixels).
    Pointer { x: f32, y: f32 },
    /// Normalized level of one frequency bin, in `[0, 1]`.
    Audio { channel_index: usize, value: f32 },
}

impl InputSample {
    /// Frequency bin an audio sample was read from.
    #[inline]
    pub fn channel(&self) -> Option<usize> {
        match self {
            Self::Audio { channel_index, .. } => Some(*channel_index),
            Self::Pointer { .. } => None,
        }
    }
}

/// Latest pointer position, written by a single listener and read by every
/// driver tick.
///
/// Writes and reads are not paired: a tick may see a sample up to one frame
/// old, which the transforms tolerate since each tick recomputes from
/// scratch.
#[derive(Clone, Debug, Default)]
pub struct SharedPointer(Rc<Cell<Option<Vec2>>>);

impl SharedPointer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn store(&self, x: f32, y: f32) {
        self.0.set(Some(Vec2::new(x, y)));
    }

    #[inline]
    pub fn latest(&self) -> Option<Vec2> {
        self.0.get()
    }

    /// Forget the last position, e.g. when the pointer leaves the page.
    #[inline]
    pub fn clear(&self) {
        self.0.set(None);
    }
}

/// Streaming frequency data, sampled once per tick.
pub trait SpectrumSource {
    /// Overwrite `bins` with the current byte frequency data (0..=255 per
    /// bin). Returns `false` when no data is available this tick.
    fn refresh(&mut self, bins: &mut Vec<u8>) -> bool;
}

/// Where a driver reads its input from.
pub enum SignalSource {
    Pointer(SharedPointer),
    Spectrum(Box<dyn SpectrumSource>),
}

impl SignalSource {
    pub fn is_audio(&self) -> bool {
        matches!(self, Self::Spectrum(_))
    }
}
