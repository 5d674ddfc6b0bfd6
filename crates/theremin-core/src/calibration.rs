//! Calibration: a shuffled, scattered grid of targets the user confirms one
//! click at a time while the gaze estimator learns from where they look.

use crate::animator::AnimationDriver;
use crate::config::CalibrationConfig;
use crate::geometry::{clamp, Point, Viewport};
use crate::surface::{Surface, View};
use glam::Vec2;
use instant::Instant;
use rand::seq::SliceRandom;
use rand::Rng;

/// Evenly spaced `grid x grid` lattice inset by `padding` from every edge.
///
/// Points are emitted column by column (x outer, y inner). A single-cell grid
/// sits at the viewport center.
pub fn lattice(grid: usize, padding: f32, viewport: Viewport) -> Vec<Point> {
    if grid == 0 {
        return Vec::new();
    }
    if grid == 1 {
        return vec![viewport.center()];
    }
    let span = viewport.extent() - Vec2::splat(2.0 * padding);
    let step = span / (grid - 1) as f32;
    let mut points = Vec::with_capacity(grid * grid);
    for i in 0..grid {
        for j in 0..grid {
            points.push(Vec2::new(
                padding + i as f32 * step.x,
                padding + j as f32 * step.y,
            ));
        }
    }
    points
}

/// Jitter each point by up to `radius` per axis, then pull it back into
/// `[padding, extent - padding]`.
pub fn scatter<R: Rng>(
    points: &mut [Point],
    radius: f32,
    padding: f32,
    viewport: Viewport,
    rng: &mut R,
) {
    let hi = viewport.extent() - Vec2::splat(padding);
    for p in points.iter_mut() {
        let dx = if radius > 0.0 { rng.gen_range(-radius..=radius) } else { 0.0 };
        let dy = if radius > 0.0 { rng.gen_range(-radius..=radius) } else { 0.0 };
        *p = Vec2::new(
            clamp(p.x + dx, padding, hi.x),
            clamp(p.y + dy, padding, hi.y),
        );
    }
}

/// Ordered calibration targets. Fixed once built; only ever indexed.
#[derive(Clone, Debug, PartialEq)]
pub struct CalibrationPlan {
    points: Vec<Point>,
}

impl CalibrationPlan {
    /// Lattice sized for `config.required_count`, scattered, shuffled, and
    /// truncated to exactly `required_count` points.
    pub fn generate<R: Rng>(config: &CalibrationConfig, viewport: Viewport, rng: &mut R) -> Self {
        let grid = config.grid_size();
        let mut points = lattice(grid, config.padding, viewport);
        scatter(&mut points, config.scatter, config.padding, viewport, rng);
        let mut plan = Self::shuffled(points, rng);
        plan.points.truncate(config.required_count);
        log::info!(
            "[calibration] plan: {} points from a {}x{} grid over {}x{}",
            plan.len(),
            grid,
            grid,
            viewport.width,
            viewport.height
        );
        plan
    }

    /// Uniform Fisher-Yates permutation of `points`.
    pub fn shuffled<R: Rng>(mut points: Vec<Point>, rng: &mut R) -> Self {
        points.shuffle(rng);
        Self { points }
    }

    /// Use `points` as-is, in order.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalibrationPhase {
    Idle,
    AwaitingClick { cursor: usize },
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickOutcome {
    /// Click arrived before `begin` or after completion.
    Ignored,
    Advanced { progress: f32 },
    Completed,
}

pub struct CalibrationController<D: AnimationDriver> {
    plan: CalibrationPlan,
    cursor: usize,
    begun: bool,
    animation: D,
    on_complete: Option<Box<dyn FnOnce()>>,
    started_at: Option<Instant>,
}

impl<D: AnimationDriver> CalibrationController<D> {
    pub fn new(plan: CalibrationPlan, animation: D, on_complete: impl FnOnce() + 'static) -> Self {
        Self {
            plan,
            cursor: 0,
            begun: false,
            animation,
            on_complete: Some(Box::new(on_complete)),
            started_at: None,
        }
    }

    pub fn required_count(&self) -> usize {
        self.plan.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn plan(&self) -> &CalibrationPlan {
        &self.plan
    }

    pub fn animation(&self) -> &D {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut D {
        &mut self.animation
    }

    pub fn phase(&self) -> CalibrationPhase {
        if !self.begun {
            CalibrationPhase::Idle
        } else if self.cursor >= self.required_count() {
            CalibrationPhase::Complete
        } else {
            CalibrationPhase::AwaitingClick {
                cursor: self.cursor,
            }
        }
    }

    /// Fraction of the plan confirmed so far, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        match self.required_count() {
            0 => 1.0,
            n => self.cursor as f32 / n as f32,
        }
    }

    /// Show the welcome panel with the first target wandering on it. No-op
    /// once begun.
    pub fn begin<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if self.begun {
            log::warn!("[calibration] begin called twice; ignoring");
            return;
        }
        self.begun = true;
        self.cursor = 0;
        self.started_at = Some(Instant::now());
        surface.show_view(View::Welcome);
        match self.plan.get(0) {
            Some(first) => {
                surface.move_target(first);
                self.animation.start();
                log::info!(
                    "[calibration] awaiting {} clicks, first target ({:.0},{:.0})",
                    self.required_count(),
                    first.x,
                    first.y
                );
            }
            None => {
                log::warn!("[calibration] empty plan; completing immediately");
                self.finish(surface);
            }
        }
    }

    /// The user clicked the target.
    pub fn confirm_click<S: Surface + ?Sized>(&mut self, surface: &mut S) -> ClickOutcome {
        if !matches!(self.phase(), CalibrationPhase::AwaitingClick { .. }) {
            log::debug!("[calibration] click ignored in {:?}", self.phase());
            return ClickOutcome::Ignored;
        }
        if self.cursor == 0 {
            surface.show_view(View::Calibrating);
        }
        self.cursor += 1;
        let progress = self.progress();
        surface.set_progress(progress);
        log::debug!(
            "[calibration] click {}/{}",
            self.cursor,
            self.required_count()
        );

        if self.cursor == self.required_count() {
            self.finish(surface);
            return ClickOutcome::Completed;
        }
        if let Some(next) = self.plan.get(self.cursor) {
            surface.move_target(next);
        }
        ClickOutcome::Advanced { progress }
    }

    fn finish<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.animation.stop();
        surface.show_view(View::Ready);
        if let Some(started) = self.started_at.take() {
            log::info!(
                "[calibration] complete after {} clicks in {:.1}s",
                self.cursor,
                started.elapsed().as_secs_f32()
            );
        }
        if let Some(done) = self.on_complete.take() {
            done();
        }
    }
}
