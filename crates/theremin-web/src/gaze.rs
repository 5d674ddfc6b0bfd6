//! Bindings to the WebGazer script loaded by the page (`window.webgazer`).
//!
//! Every binding is `catch` so a page without the script logs a warning
//! instead of trapping.

use crate::events::Subscription;
use glam::Vec2;
use theremin_core::Point;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = webgazer, js_name = setGazeListener)]
    fn set_gaze_listener(listener: &js_sys::Function) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = webgazer, js_name = clearGazeListener)]
    fn clear_gaze_listener() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = webgazer)]
    fn begin() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = webgazer, js_name = showPredictionPoints)]
    fn show_prediction_points(show: bool) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = webgazer, js_name = showVideo)]
    fn show_video(show: bool) -> Result<JsValue, JsValue>;
}

/// Hide the debug overlays and start the estimator so it learns from the
/// calibration clicks.
pub fn start_estimator() {
    if let Err(e) = show_prediction_points(false).and_then(|_| show_video(false)) {
        log::warn!("[gaze] overlay toggles failed: {:?}", e);
    }
    match begin() {
        Ok(_) => log::info!("[gaze] estimator started"),
        Err(e) => log::warn!("[gaze] estimator unavailable: {:?}", e),
    }
}

/// `{x, y}` prediction, or `None` for a null/incomplete one.
pub fn parse_sample(data: &JsValue) -> Option<Point> {
    if data.is_null() || data.is_undefined() {
        return None;
    }
    let coord = |key: &str| {
        js_sys::Reflect::get(data, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_f64())
            .filter(|v| v.is_finite())
    };
    Some(Vec2::new(coord("x")? as f32, coord("y")? as f32))
}

pub fn subscribe(mut handler: impl FnMut(Option<Point>) + 'static) -> Option<Subscription> {
    let callback = Closure::wrap(Box::new(move |data: JsValue, _elapsed_ms: f64| {
        handler(parse_sample(&data));
    }) as Box<dyn FnMut(JsValue, f64)>);
    match set_gaze_listener(callback.as_ref().unchecked_ref()) {
        Ok(_) => Some(Subscription::gaze(callback)),
        Err(e) => {
            log::warn!("[gaze] listener not registered: {:?}", e);
            None
        }
    }
}

pub(crate) fn clear_listener() {
    if let Err(e) = clear_gaze_listener() {
        log::debug!("[gaze] clear listener failed: {:?}", e);
    }
}
