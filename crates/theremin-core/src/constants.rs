// Shared calibration/animation/audio tuning constants.

// Calibration layout
pub const REQUIRED_CLICKS: usize = 9; // confirmed fixations per calibration run (3x3 grid)
pub const CALIBRATION_PADDING_PX: f32 = 50.0; // inset of the lattice from every viewport edge
pub const MAX_CALIBRATION_POINTS: usize = 100; // upper bound on required clicks (10x10 grid)
pub const CALIBRATION_SCATTER_PX: f32 = 100.0; // max per-axis jitter applied to lattice points

// Target wandering while waiting for a click
pub const TARGET_SPEED_PX_PER_MS: f32 = 0.05; // max drift per axis per millisecond

// Indicator (pupils inside the face)
pub const INDICATOR_RADIUS_PX: f32 = 11.0; // distance the pupils travel from the eye center

// Oscillator mapping
pub const FREQ_MIN_HZ: f32 = 20.0; // lowest audible pitch
pub const FREQ_MAX_HZ: f32 = 22_000.0; // highest audible pitch
pub const GLIDE_SEC: f32 = 1.0; // time to slide toward a new pitch
pub const OSC_GAIN: f32 = 0.25; // output level of the oscillator
pub const OSC_START_HZ: f32 = 440.0; // pitch before the first sample arrives
