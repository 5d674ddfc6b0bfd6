use crate::surface::DomSurface;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use theremin_core::{AnimationDriver, FrameOutcome, TargetAnimator};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Drives a [`TargetAnimator`] from `requestAnimationFrame`.
pub struct RafAnimation {
    animator: Rc<RefCell<TargetAnimator>>,
    tick: Tick,
}

impl RafAnimation {
    pub fn new(animator: TargetAnimator, surface: DomSurface, mut rng: StdRng) -> Self {
        let animator = Rc::new(RefCell::new(animator));
        let tick: Tick = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let animator_tick = animator.clone();
        let mut surface = surface;
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
            let outcome = animator_tick
                .borrow_mut()
                .frame(timestamp_ms, &mut surface, &mut rng);
            if outcome == FrameOutcome::Continue {
                request_frame(&tick_clone);
            }
        }) as Box<dyn FnMut(f64)>));
        Self { animator, tick }
    }
}

impl AnimationDriver for RafAnimation {
    fn start(&mut self) {
        if self.animator.borrow_mut().start() {
            request_frame(&self.tick);
        }
    }

    fn stop(&mut self) {
        self.animator.borrow_mut().stop();
    }
}

fn request_frame(tick: &Tick) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
