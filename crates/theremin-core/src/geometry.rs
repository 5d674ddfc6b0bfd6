//! Clamping and indicator-angle math shared by the animator, calibration and
//! fusion loop.

use glam::Vec2;

/// A screen position in CSS pixels.
pub type Point = Vec2;

/// Size of the interactive surface. Read fresh from the [`Surface`] whenever
/// it is needed since the window may be resized between operations.
///
/// [`Surface`]: crate::Surface
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Point {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Restrict `value` to `[lo, hi]`.
///
/// Never panics: an inverted range (`lo > hi`) resolves to `lo`, unlike
/// `f32::clamp`.
#[inline]
pub fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    value.min(hi).max(lo)
}

/// Component-wise [`clamp`] of a point into the box `[lo, hi]`.
#[inline]
pub fn clamp_point(p: Point, lo: Point, hi: Point) -> Point {
    Vec2::new(clamp(p.x, lo.x, hi.x), clamp(p.y, lo.y, hi.y))
}

/// Angle (radians, `atan2` convention) from the viewport center toward `p`.
///
/// `p` is first clamped into the centered box `[-w/2, w/2] x [-h/2, h/2]`, so
/// samples far outside the viewport point at the nearest corner or edge.
pub fn indicator_angle(p: Point, viewport: Viewport) -> f32 {
    let half = viewport.center();
    let rel = clamp_point(p - half, -half, half);
    rel.y.atan2(rel.x)
}

/// Offset of fixed magnitude `radius` along `angle`.
#[inline]
pub fn indicator_offset(angle: f32, radius: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin()) * radius
}
