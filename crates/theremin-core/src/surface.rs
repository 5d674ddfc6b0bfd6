//! Seams to the page: what the core reads from and writes to the rendering
//! surface, and how it drives the oscillator.
//!
//! Nothing here references platform APIs. The web frontend implements them
//! over the DOM and WebAudio; tests implement them with recording fakes.

use crate::geometry::{Point, Viewport};
use glam::Vec2;
use std::time::Duration;

/// Which top-level panel of the page is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Welcome,
    Calibrating,
    Ready,
}

/// Buttons whose label text the core updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    PlayPause,
    InputMode,
}

pub trait Surface {
    fn viewport(&self) -> Viewport;
    /// Top-left corner of the target element.
    fn target_position(&self) -> Point;
    fn target_size(&self) -> Vec2;
    fn move_target(&mut self, at: Point);
    fn set_indicator_offset(&mut self, offset: Vec2);
    /// `fraction` is in `[0, 1]`.
    fn set_progress(&mut self, fraction: f32);
    fn show_view(&mut self, view: View);
    fn set_label(&mut self, control: Control, text: &str);
}

/// A single continuously sounding voice.
pub trait Oscillator {
    fn start(&mut self);
    fn stop(&mut self);
    /// Slide the pitch toward `frequency_hz`, arriving after `duration`.
    fn glide_to(&mut self, frequency_hz: f32, duration: Duration);
}
