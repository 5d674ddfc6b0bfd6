use crate::constants::*;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("calibration needs at least one point")]
    NoCalibrationPoints,
    #[error("calibration asks for {count} points; at most {max} are supported")]
    TooManyPoints { count: usize, max: usize },
    #[error("{name} must be a finite, non-negative number (got {value})")]
    Negative { name: &'static str, value: f32 },
    #[error("frequency band is inverted: {min_hz} Hz > {max_hz} Hz")]
    InvertedBand { min_hz: f32, max_hz: f32 },
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CalibrationConfig {
    pub required_count: usize,
    pub padding: f32,
    pub scatter: f32,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            required_count: REQUIRED_CLICKS,
            padding: CALIBRATION_PADDING_PX,
            scatter: CALIBRATION_SCATTER_PX,
        }
    }
}

impl CalibrationConfig {
    /// Side of the square lattice needed to cover `required_count` points.
    ///
    /// Integer `ceil(sqrt(required_count))`; never overflows.
    pub fn grid_size(&self) -> usize {
        let n = self.required_count;
        let covers = |g: usize| g.checked_mul(g).map_or(true, |sq| sq >= n);
        let mut g = ((n as f64).sqrt() as usize).max(1);
        while !covers(g) {
            g += 1;
        }
        while g > 1 && covers(g - 1) {
            g -= 1;
        }
        g
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.required_count == 0 {
            return Err(ConfigError::NoCalibrationPoints);
        }
        if self.required_count > MAX_CALIBRATION_POINTS {
            return Err(ConfigError::TooManyPoints {
                count: self.required_count,
                max: MAX_CALIBRATION_POINTS,
            });
        }
        non_negative("padding", self.padding)?;
        non_negative("scatter", self.scatter)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimatorConfig {
    pub speed_px_per_ms: f32,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            speed_px_per_ms: TARGET_SPEED_PX_PER_MS,
        }
    }
}

impl AnimatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("speed", self.speed_px_per_ms)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FusionConfig {
    pub indicator_radius: f32,
    pub min_hz: f32,
    pub max_hz: f32,
    pub glide: Duration,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            indicator_radius: INDICATOR_RADIUS_PX,
            min_hz: FREQ_MIN_HZ,
            max_hz: FREQ_MAX_HZ,
            glide: Duration::from_secs_f32(GLIDE_SEC),
        }
    }
}

impl FusionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("indicator radius", self.indicator_radius)?;
        non_negative("min frequency", self.min_hz)?;
        non_negative("max frequency", self.max_hz)?;
        if self.min_hz > self.max_hz {
            return Err(ConfigError::InvertedBand {
                min_hz: self.min_hz,
                max_hz: self.max_hz,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThereminConfig {
    pub calibration: CalibrationConfig,
    pub animator: AnimatorConfig,
    pub fusion: FusionConfig,
}

impl ThereminConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.calibration.validate()?;
        self.animator.validate()?;
        self.fusion.validate()
    }
}
