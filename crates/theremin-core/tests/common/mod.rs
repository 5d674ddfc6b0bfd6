// Recording fakes shared by the host-side tests.

#![allow(dead_code)]

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use theremin_core::*;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[derive(Default)]
pub struct FakeSurface {
    pub viewport: Viewport,
    pub target: Point,
    pub target_size: Vec2,
    pub moves: Vec<Point>,
    pub indicator: Option<Vec2>,
    pub progress: Vec<f32>,
    pub views: Vec<View>,
    pub labels: Vec<(Control, String)>,
}

impl FakeSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            target_size: Vec2::new(20.0, 20.0),
            ..Default::default()
        }
    }

    pub fn last_label(&self, control: Control) -> Option<&str> {
        self.labels
            .iter()
            .rev()
            .find(|(c, _)| *c == control)
            .map(|(_, text)| text.as_str())
    }
}

impl Surface for FakeSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }
    fn target_position(&self) -> Point {
        self.target
    }
    fn target_size(&self) -> Vec2 {
        self.target_size
    }
    fn move_target(&mut self, at: Point) {
        self.target = at;
        self.moves.push(at);
    }
    fn set_indicator_offset(&mut self, offset: Vec2) {
        self.indicator = Some(offset);
    }
    fn set_progress(&mut self, fraction: f32) {
        self.progress.push(fraction);
    }
    fn show_view(&mut self, view: View) {
        self.views.push(view);
    }
    fn set_label(&mut self, control: Control, text: &str) {
        self.labels.push((control, text.to_string()));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum OscCall {
    Start,
    Stop,
    Glide(f32, Duration),
}

#[derive(Default, Debug)]
pub struct FakeOscillator {
    pub calls: Vec<OscCall>,
}

impl Oscillator for FakeOscillator {
    fn start(&mut self) {
        self.calls.push(OscCall::Start);
    }
    fn stop(&mut self) {
        self.calls.push(OscCall::Stop);
    }
    fn glide_to(&mut self, frequency_hz: f32, duration: Duration) {
        self.calls.push(OscCall::Glide(frequency_hz, duration));
    }
}

/// Frame scheduler driven by hand: `pump` plays the role of one
/// `requestAnimationFrame` callback.
pub struct ManualDriver {
    pub animator: TargetAnimator,
    pub scheduled: bool,
    pub starts: usize,
    pub stops: usize,
}

impl ManualDriver {
    pub fn new(speed_px_per_ms: f32) -> Self {
        Self {
            animator: TargetAnimator::new(&AnimatorConfig { speed_px_per_ms }),
            scheduled: false,
            starts: 0,
            stops: 0,
        }
    }

    /// Runs the pending frame, if any. Returns whether one ran.
    pub fn pump(&mut self, timestamp_ms: f64, surface: &mut FakeSurface, rng: &mut StdRng) -> bool {
        if !self.scheduled {
            return false;
        }
        self.scheduled = false;
        if self.animator.frame(timestamp_ms, surface, rng) == FrameOutcome::Continue {
            self.scheduled = true;
        }
        true
    }
}

impl AnimationDriver for ManualDriver {
    fn start(&mut self) {
        self.starts += 1;
        if self.animator.start() {
            self.scheduled = true;
        }
    }
    fn stop(&mut self) {
        self.stops += 1;
        self.animator.stop();
    }
}
