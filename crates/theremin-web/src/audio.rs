use std::time::Duration;
use theremin_core::{Oscillator, OSC_GAIN, OSC_START_HZ};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Sine oscillator routed through a fixed gain to the speakers.
///
/// A stopped `OscillatorNode` cannot be restarted, so every `start` builds a
/// fresh node at the last requested pitch.
pub struct WebOscillator {
    audio_ctx: web::AudioContext,
    gain: web::GainNode,
    node: Option<web::OscillatorNode>,
    frequency_hz: f32,
}

/// Create the audio context and wait for the browser to let it run.
pub async fn init_audio() -> anyhow::Result<WebOscillator> {
    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let resumed = audio_ctx
        .resume()
        .map_err(|e| anyhow::anyhow!("resume: {:?}", e))?;
    JsFuture::from(resumed)
        .await
        .map_err(|e| anyhow::anyhow!("resume rejected: {:?}", e))?;

    let gain = web::GainNode::new(&audio_ctx).map_err(|e| anyhow::anyhow!("GainNode: {:?}", e))?;
    gain.gain().set_value(OSC_GAIN);
    gain.connect_with_audio_node(&audio_ctx.destination())
        .map_err(|e| anyhow::anyhow!("connect: {:?}", e))?;

    log::info!(
        "[audio] context {:?} at {} Hz",
        audio_ctx.state(),
        audio_ctx.sample_rate()
    );
    Ok(WebOscillator {
        audio_ctx,
        gain,
        node: None,
        frequency_hz: OSC_START_HZ,
    })
}

impl Oscillator for WebOscillator {
    fn start(&mut self) {
        if self.node.is_some() {
            return;
        }
        let node = match web::OscillatorNode::new(&self.audio_ctx) {
            Ok(n) => n,
            Err(e) => {
                log::error!("[audio] OscillatorNode error: {:?}", e);
                return;
            }
        };
        node.set_type(web::OscillatorType::Sine);
        node.frequency().set_value(self.frequency_hz);
        if let Err(e) = node.connect_with_audio_node(&self.gain) {
            log::error!("[audio] connect error: {:?}", e);
            return;
        }
        if let Err(e) = node.start() {
            log::error!("[audio] start error: {:?}", e);
            return;
        }
        self.node = Some(node);
    }

    fn stop(&mut self) {
        if let Some(node) = self.node.take() {
            let _ = node.stop();
            let _ = node.disconnect();
        }
    }

    fn glide_to(&mut self, frequency_hz: f32, duration: Duration) {
        self.frequency_hz = frequency_hz;
        let Some(node) = &self.node else {
            return;
        };
        let param = node.frequency();
        let now = self.audio_ctx.current_time();
        let _ = param.cancel_scheduled_values(now);
        let _ = param.set_value_at_time(param.value(), now);
        // exponential ramps need a positive target
        let target = frequency_hz.max(1.0);
        let end = now + duration.as_secs_f64();
        let _ = param.exponential_ramp_to_value_at_time(target, end);
    }
}
