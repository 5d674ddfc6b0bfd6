//! Bounded random-walk motion for the calibration target.
//!
//! The animator does not own a display loop. A driver (the browser's
//! `requestAnimationFrame` in the web frontend, a manual clock in tests) calls
//! [`TargetAnimator::frame`] with a timestamp and reschedules while it returns
//! [`FrameOutcome::Continue`].

use crate::config::AnimatorConfig;
use crate::geometry::{clamp, Point};
use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;

/// Start/stop handle over a frame loop. The calibration controller only sees
/// this; whoever implements it owns the [`TargetAnimator`] and the scheduler.
pub trait AnimationDriver {
    fn start(&mut self);
    fn stop(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Halt,
}

#[derive(Debug)]
pub struct TargetAnimator {
    speed: f32,
    running: bool,
    last_timestamp: Option<f64>,
    frame_pending: bool,
}

impl TargetAnimator {
    pub fn new(config: &AnimatorConfig) -> Self {
        Self {
            speed: config.speed_px_per_ms,
            running: false,
            last_timestamp: None,
            frame_pending: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin wandering. Returns `true` when the caller must schedule the first
    /// frame; `false` if a frame from an earlier run is still pending and will
    /// pick the loop back up.
    pub fn start(&mut self) -> bool {
        self.running = true;
        self.last_timestamp = None;
        log::debug!("[animator] start");
        if self.frame_pending {
            false
        } else {
            self.frame_pending = true;
            true
        }
    }

    /// Takes effect at the top of the next frame callback.
    pub fn stop(&mut self) {
        self.running = false;
        log::debug!("[animator] stop");
    }

    /// One scheduled frame. `timestamp_ms` must come from a monotonic clock.
    pub fn frame<S, R>(&mut self, timestamp_ms: f64, surface: &mut S, rng: &mut R) -> FrameOutcome
    where
        S: Surface + ?Sized,
        R: Rng,
    {
        self.frame_pending = false;
        if !self.running {
            self.last_timestamp = None;
            return FrameOutcome::Halt;
        }
        let delta_ms = match self.last_timestamp {
            Some(prev) => (timestamp_ms - prev).max(0.0) as f32,
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);

        let next = self.wander(surface, rng, delta_ms);
        surface.move_target(next);

        self.frame_pending = true;
        FrameOutcome::Continue
    }

    fn wander<S, R>(&self, surface: &S, rng: &mut R, delta_ms: f32) -> Point
    where
        S: Surface + ?Sized,
        R: Rng,
    {
        let viewport = surface.viewport();
        let max = viewport.extent() - surface.target_size();
        let pos = surface.target_position();
        let step = self.speed * delta_ms;
        let dx = rng.gen_range(-1.0f32..=1.0) * step;
        let dy = rng.gen_range(-1.0f32..=1.0) * step;
        Vec2::new(clamp(pos.x + dx, 0.0, max.x), clamp(pos.y + dy, 0.0, max.y))
    }
}
