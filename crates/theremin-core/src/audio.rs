use crate::surface::Oscillator;
use std::time::Duration;

/// Audio output with a readiness handshake in front of it.
///
/// Every control call is dropped until [`AudioEngine::attach`] hands over a
/// ready oscillator, so callers can wire buttons before the browser has
/// granted an audio context.
#[derive(Debug)]
pub enum AudioEngine<O> {
    Uninitialized,
    Ready(O),
}

impl<O> Default for AudioEngine<O> {
    fn default() -> Self {
        AudioEngine::Uninitialized
    }
}

impl<O: Oscillator> AudioEngine<O> {
    pub fn attach(&mut self, oscillator: O) {
        if self.is_ready() {
            log::warn!("[audio] replacing an already attached oscillator");
        }
        *self = AudioEngine::Ready(oscillator);
        log::info!("[audio] ready");
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, AudioEngine::Ready(_))
    }

    pub fn oscillator(&self) -> Option<&O> {
        match self {
            AudioEngine::Ready(o) => Some(o),
            AudioEngine::Uninitialized => None,
        }
    }

    /// Returns whether the call reached the oscillator.
    pub fn start(&mut self) -> bool {
        self.with_ready("start", |o| o.start())
    }

    pub fn stop(&mut self) -> bool {
        self.with_ready("stop", |o| o.stop())
    }

    pub fn glide_to(&mut self, frequency_hz: f32, duration: Duration) -> bool {
        self.with_ready("glide", |o| o.glide_to(frequency_hz, duration))
    }

    fn with_ready(&mut self, op: &str, f: impl FnOnce(&mut O)) -> bool {
        match self {
            AudioEngine::Ready(o) => {
                f(o);
                true
            }
            AudioEngine::Uninitialized => {
                log::debug!("[audio] {} before ready; dropped", op);
                false
            }
        }
    }
}
