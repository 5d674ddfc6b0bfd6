use theremin_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn set_display(document: &web::Document, id: &str, display: &str) {
    if let Some(el) = html_element_by_id(document, id) {
        let _ = el.style().set_property("display", display);
    }
}

/// `innerWidth || documentElement.clientWidth || body.clientWidth`, and the
/// same chain for height.
pub fn viewport_extent() -> Viewport {
    let Some(window) = web::window() else {
        return Viewport::default();
    };
    let document = window.document();
    let root = document.as_ref().and_then(|d| d.document_element());
    let body = document.as_ref().and_then(|d| d.body());
    let positive = |v: f64| (v > 0.0).then_some(v);

    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .and_then(positive)
        .or_else(|| root.as_ref().and_then(|e| positive(e.client_width() as f64)))
        .or_else(|| body.as_ref().map(|b| b.client_width() as f64))
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .and_then(positive)
        .or_else(|| root.as_ref().and_then(|e| positive(e.client_height() as f64)))
        .or_else(|| body.as_ref().map(|b| b.client_height() as f64))
        .unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}
