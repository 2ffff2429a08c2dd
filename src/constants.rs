// Web-side tuning constants and CSS property names.

// Analyser
pub const ANALYSER_FFT_SIZE: u32 = 256; // 128 frequency bins
pub const ANALYSER_SMOOTHING: f64 = 0.8;
pub const ANALYSER_MIN_DB: f64 = -90.0;
pub const ANALYSER_MAX_DB: f64 = -10.0;

// Style properties written by the presenter
pub const CSS_TRANSFORM: &str = "transform";
pub const CSS_TRANSFORM_ORIGIN: &str = "transform-origin";

// Selector used to discover managed elements under a container
pub const MARKER_SELECTOR: &str = "[data-kinetic]";
