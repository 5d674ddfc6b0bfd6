pub mod animator;
pub mod audio;
pub mod calibration;
pub mod config;
pub mod constants;
pub mod fusion;
pub mod geometry;
pub mod surface;

pub use animator::*;
pub use audio::*;
pub use calibration::*;
pub use config::*;
pub use constants::*;
pub use fusion::*;
pub use geometry::*;
pub use surface::*;
