use crate::dom;
use crate::ui;
use glam::Vec2;
use theremin_core::{Control, Point, Surface, View, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] over the page DOM. Elements are looked up on every call and any
/// missing one turns the call into a no-op.
#[derive(Clone)]
pub struct DomSurface {
    document: web::Document,
}

impl DomSurface {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }

    fn target(&self) -> Option<web::HtmlElement> {
        dom::html_element_by_id(&self.document, ui::TARGET_ID)
    }
}

impl Surface for DomSurface {
    fn viewport(&self) -> Viewport {
        dom::viewport_extent()
    }

    fn target_position(&self) -> Point {
        self.target()
            .map(|el| Vec2::new(el.offset_left() as f32, el.offset_top() as f32))
            .unwrap_or_default()
    }

    fn target_size(&self) -> Vec2 {
        self.target()
            .map(|el| Vec2::new(el.offset_width() as f32, el.offset_height() as f32))
            .unwrap_or_default()
    }

    fn move_target(&mut self, at: Point) {
        if let Some(el) = self.target() {
            let style = el.style();
            let _ = style.set_property("left", &ui::px(at.x));
            let _ = style.set_property("top", &ui::px(at.y));
        }
    }

    fn set_indicator_offset(&mut self, offset: Vec2) {
        if let Ok(Some(pupils)) = self.document.query_selector(ui::PUPILS_SELECTOR) {
            let _ = pupils.set_attribute_ns(None, "transform", &ui::pupil_transform(offset));
        }
    }

    fn set_progress(&mut self, fraction: f32) {
        let Some(container) = dom::html_element_by_id(&self.document, ui::PROGRESS_ID) else {
            return;
        };
        let bar = container
            .query_selector("div")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        if let Some(bar) = bar {
            let width = ui::progress_width(fraction, container.offset_width() as f32);
            let _ = bar.style().set_property("width", &ui::px(width));
        }
    }

    fn show_view(&mut self, view: View) {
        for (id, display) in ui::view_display(view) {
            dom::set_display(&self.document, id, display);
        }
        log::info!("[ui] view -> {:?}", view);
    }

    fn set_label(&mut self, control: Control, text: &str) {
        if let Some(el) = self.document.get_element_by_id(ui::control_id(control)) {
            el.set_inner_html(text);
        }
    }
}
