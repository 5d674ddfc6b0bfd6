use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys as web;

enum Listener {
    Dom {
        target: web::EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(web::Event)>,
    },
    Gaze {
        callback: Closure<dyn FnMut(JsValue, f64)>,
    },
}

/// A registered handler. Dropping it unregisters the handler; call
/// [`Subscription::keep_alive`] for handlers that live as long as the page.
pub struct Subscription {
    listener: Option<Listener>,
}

impl Subscription {
    pub(crate) fn gaze(callback: Closure<dyn FnMut(JsValue, f64)>) -> Self {
        Self {
            listener: Some(Listener::Gaze { callback }),
        }
    }

    pub fn keep_alive(mut self) {
        match self.listener.take() {
            Some(Listener::Dom { callback, .. }) => callback.forget(),
            Some(Listener::Gaze { callback }) => callback.forget(),
            None => {}
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        match self.listener.take() {
            Some(Listener::Dom {
                target,
                event,
                callback,
            }) => {
                let _ = target
                    .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
                log::debug!("[events] removed {} listener", event);
            }
            Some(Listener::Gaze { .. }) => {
                crate::gaze::clear_listener();
            }
            None => {}
        }
    }
}

pub fn listen(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(web::Event) + 'static,
) -> Option<Subscription> {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        Ok(()) => Some(Subscription {
            listener: Some(Listener::Dom {
                target: target.clone(),
                event,
                callback,
            }),
        }),
        Err(e) => {
            log::error!("[events] {} listener error: {:?}", event, e);
            None
        }
    }
}

/// Click handler on the element with `element_id`; `None` when the element is
/// not on the page.
pub fn on_click(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> Option<Subscription> {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::debug!("[events] no #{} on the page; click not wired", element_id);
        return None;
    };
    listen(el.as_ref(), "click", move |_| handler())
}
