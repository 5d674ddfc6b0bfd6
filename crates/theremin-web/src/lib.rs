#![cfg(target_arch = "wasm32")]
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use theremin_core::{
    CalibrationController, CalibrationPlan, Control, PointerFusion, Surface, TargetAnimator,
    ThereminConfig,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod animation;
mod audio;
mod dom;
mod events;
mod gaze;
mod surface;
mod ui;

use animation::RafAnimation;
use audio::WebOscillator;
use events::Subscription;
use surface::DomSurface;

type Fusion = Rc<RefCell<PointerFusion<WebOscillator>>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("theremin-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn load_config(document: &web::Document) -> anyhow::Result<ThereminConfig> {
    let mut config = ThereminConfig::default();
    let override_clicks = document
        .get_element_by_id(ui::CALIBRATION_ID)
        .and_then(|el| el.get_attribute(ui::REQUIRED_CLICKS_ATTR));
    if let Some(raw) = override_clicks {
        match ui::parse_required_clicks(&raw) {
            Some(n) => config.calibration.required_count = n,
            None => log::warn!("[config] ignoring {}={:?}", ui::REQUIRED_CLICKS_ATTR, raw),
        }
        if let Err(e) = config.calibration.validate() {
            log::warn!("[config] {}; keeping the default", e);
            config.calibration.required_count = theremin_core::REQUIRED_CLICKS;
        }
    }
    config.validate()?;
    Ok(config)
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = load_config(&document)?;
    let mut surface = DomSurface::new(document.clone());

    gaze::start_estimator();

    let fusion: Fusion = Rc::new(RefCell::new(PointerFusion::new(config.fusion.clone())));
    wire_controls(&document, &fusion, &surface);

    let mut rng = StdRng::from_entropy();
    let plan = CalibrationPlan::generate(&config.calibration, surface.viewport(), &mut rng);
    let animation = RafAnimation::new(TargetAnimator::new(&config.animator), surface.clone(), rng);

    // Filled once the target click is wired; released when calibration ends.
    let target_click: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let on_complete = {
        let fusion = fusion.clone();
        let surface = surface.clone();
        let target_click = target_click.clone();
        move || {
            spawn_local(async move {
                drop(target_click.borrow_mut().take());
                if let Err(e) = start_theremin(fusion, surface).await {
                    log::error!("[fusion] start error: {:?}", e);
                }
            });
        }
    };

    let controller = Rc::new(RefCell::new(CalibrationController::new(
        plan,
        animation,
        on_complete,
    )));
    controller.borrow_mut().begin(&mut surface);

    let subscription = {
        let controller = controller.clone();
        let mut surface = surface.clone();
        events::on_click(&document, ui::TARGET_ID, move || {
            controller.borrow_mut().confirm_click(&mut surface);
        })
    };
    if subscription.is_none() {
        log::warn!("[calibration] no #{} target; calibration cannot advance", ui::TARGET_ID);
    }
    *target_click.borrow_mut() = subscription;
    Ok(())
}

/// Play/pause and mouse/gaze buttons. Wired up front so they respond
/// during calibration too; audio calls are dropped until the context is ready.
fn wire_controls(document: &web::Document, fusion: &Fusion, surface: &DomSurface) {
    let play_pause = {
        let fusion = fusion.clone();
        let mut surface = surface.clone();
        events::on_click(document, ui::PLAY_PAUSE_ID, move || {
            fusion.borrow_mut().toggle_playback(&mut surface);
        })
    };
    let mode_switch = {
        let fusion = fusion.clone();
        let mut surface = surface.clone();
        events::on_click(document, ui::MODE_SWITCH_ID, move || {
            fusion.borrow_mut().toggle_mode(&mut surface);
        })
    };
    for sub in play_pause.into_iter().chain(mode_switch) {
        sub.keep_alive();
    }

    let mut surface = surface.clone();
    let label = fusion.borrow().mode().switch_label();
    surface.set_label(Control::InputMode, label);
}

async fn start_theremin(fusion: Fusion, mut surface: DomSurface) -> anyhow::Result<()> {
    let oscillator = audio::init_audio().await?;
    fusion.borrow_mut().attach_audio(oscillator, &mut surface);

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let pointer = {
        let fusion = fusion.clone();
        let mut surface = surface.clone();
        events::listen(document.as_ref(), "mousemove", move |ev| {
            if let Some(m) = ev.dyn_ref::<web::MouseEvent>() {
                let at = Vec2::new(m.client_x() as f32, m.client_y() as f32);
                fusion.borrow_mut().on_pointer_move(at, &mut surface);
            }
        })
    };
    let gaze = {
        let fusion = fusion.clone();
        let mut surface = surface.clone();
        gaze::subscribe(move |sample| {
            fusion.borrow_mut().on_gaze_sample(sample, &mut surface);
        })
    };

    let streams: Vec<Subscription> = pointer.into_iter().chain(gaze).collect();
    log::info!("[fusion] live with {} input stream(s)", streams.len());
    for sub in streams {
        sub.keep_alive();
    }
    Ok(())
}
