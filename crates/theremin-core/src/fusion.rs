//! Pointer/gaze fusion: pick one live input stream and forward its samples to
//! the indicator, the target and the oscillator.

use crate::audio::AudioEngine;
use crate::config::FusionConfig;
use crate::geometry::{clamp, indicator_angle, indicator_offset, Point};
use crate::surface::{Control, Oscillator, Surface};

/// Which stream currently drives the outputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    Pointer,
    #[default]
    Gaze,
}

impl InputMode {
    pub fn toggled(self) -> Self {
        match self {
            InputMode::Pointer => InputMode::Gaze,
            InputMode::Gaze => InputMode::Pointer,
        }
    }

    /// Text for the switch button: it offers the *other* mode.
    pub fn switch_label(self) -> &'static str {
        match self {
            InputMode::Pointer => "Use gaze",
            InputMode::Gaze => "Use mouse",
        }
    }
}

#[inline]
pub fn playback_label(playing: bool) -> &'static str {
    if playing {
        "pause"
    } else {
        "play"
    }
}

pub struct PointerFusion<O> {
    config: FusionConfig,
    mode: InputMode,
    playing: bool,
    audio: AudioEngine<O>,
}

impl<O: Oscillator> PointerFusion<O> {
    pub fn new(config: FusionConfig) -> Self {
        Self {
            config,
            mode: InputMode::default(),
            playing: true,
            audio: AudioEngine::Uninitialized,
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Requested playback state; holds before audio is ready too.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn audio(&self) -> &AudioEngine<O> {
        &self.audio
    }

    /// Hand over the oscillator once the audio handshake resolved. It starts
    /// unless playback was paused while audio was still pending.
    pub fn attach_audio<S: Surface + ?Sized>(&mut self, oscillator: O, surface: &mut S) {
        self.audio.attach(oscillator);
        if self.playing {
            self.audio.start();
        }
        surface.set_label(Control::PlayPause, playback_label(self.playing));
    }

    /// Pointer-move sample. Returns whether it was forwarded.
    pub fn on_pointer_move<S: Surface + ?Sized>(&mut self, at: Point, surface: &mut S) -> bool {
        if self.mode != InputMode::Pointer {
            return false;
        }
        self.forward(at, surface);
        true
    }

    /// Gaze-estimator sample; `None` when the estimator had no prediction.
    pub fn on_gaze_sample<S: Surface + ?Sized>(
        &mut self,
        sample: Option<Point>,
        surface: &mut S,
    ) -> bool {
        let Some(at) = sample else {
            log::trace!("[fusion] empty gaze sample");
            return false;
        };
        if self.mode != InputMode::Gaze {
            return false;
        }
        self.forward(at, surface);
        true
    }

    fn forward<S: Surface + ?Sized>(&mut self, at: Point, surface: &mut S) {
        let angle = indicator_angle(at, surface.viewport());
        let offset = indicator_offset(angle, self.config.indicator_radius);
        surface.set_indicator_offset(offset);
        // No clamp here: the note may leave the screen.
        surface.move_target(at);
        let hz = clamp(at.x, self.config.min_hz, self.config.max_hz);
        self.audio.glide_to(hz, self.config.glide);
        log::trace!(
            "[fusion] ({:.0},{:.0}) angle={:.2} hz={:.0}",
            at.x,
            at.y,
            angle,
            hz
        );
    }

    /// Flip between pointer and gaze. Subscriptions are left alone; only
    /// which stream gets through changes.
    pub fn toggle_mode<S: Surface + ?Sized>(&mut self, surface: &mut S) -> InputMode {
        self.mode = self.mode.toggled();
        surface.set_label(Control::InputMode, self.mode.switch_label());
        log::info!("[fusion] input mode -> {:?}", self.mode);
        self.mode
    }

    /// Start or stop the oscillator. Returns the new playing state.
    pub fn toggle_playback<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if self.playing {
            self.audio.stop();
            self.playing = false;
        } else {
            self.audio.start();
            self.playing = true;
        }
        surface.set_label(Control::PlayPause, playback_label(self.playing));
        log::info!("[fusion] playing={}", self.playing);
        self.playing
    }
}
