use crate::dom;
use crate::effects::{
    AudioBarEffect, DynamicLightingEffect, NeuralPulseEffect, ParticleFieldEffect, SphereEffect,
};
use crate::scheduler::Scheduler;
use fx_core::{viewport_percent, EffectKind, PointerSignal, StartSummary};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn effect_seed(base: u64, index: u64) -> u64 {
    base ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Owns the whole animation subsystem for one mount host: starts the effects
/// best-effort, runs the shared frame loop, routes pointer and resize events,
/// and tears everything down on request.
pub struct Orchestrator {
    scheduler: Rc<Scheduler>,
    lighting: Rc<RefCell<Option<DynamicLightingEffect>>>,
    summary: StartSummary,
    pointer_move: Option<Closure<dyn FnMut(web::PointerEvent)>>,
    pointer_leave: Option<Closure<dyn FnMut(web::PointerEvent)>>,
    resize: Option<Closure<dyn FnMut()>>,
    torn_down: bool,
}

impl Orchestrator {
    /// Mount the effects into `host`. Every effect is attempted; one failing
    /// never blocks the rest, and the summary records what was skipped. With
    /// reduced motion requested nothing mounts at all.
    pub fn start(host: &web::Element) -> Self {
        let viewport = dom::viewport();
        let scheduler = Rc::new(Scheduler::new(viewport));
        let lighting: Rc<RefCell<Option<DynamicLightingEffect>>> = Rc::new(RefCell::new(None));
        let mut summary = StartSummary::default();

        if dom::prefers_reduced_motion() {
            log::info!("reduced motion requested, effects stay inert");
            return Self {
                scheduler,
                lighting,
                summary,
                pointer_move: None,
                pointer_leave: None,
                resize: None,
                torn_down: false,
            };
        }

        let base_seed = js_sys::Date::now() as u64;

        match SphereEffect::start(host, viewport) {
            Ok(e) => {
                scheduler.register(Box::new(e));
                summary.record(EffectKind::Sphere, Ok(()));
            }
            Err(e) => {
                log::warn!("skipping {}: {e}", EffectKind::Sphere);
                summary.record(EffectKind::Sphere, Err(e));
            }
        }
        match ParticleFieldEffect::start(host, viewport, effect_seed(base_seed, 1)) {
            Ok(e) => {
                scheduler.register(Box::new(e));
                summary.record(EffectKind::ParticleField, Ok(()));
            }
            Err(e) => {
                log::warn!("skipping {}: {e}", EffectKind::ParticleField);
                summary.record(EffectKind::ParticleField, Err(e));
            }
        }
        match NeuralPulseEffect::start(host, viewport, effect_seed(base_seed, 2)) {
            Ok(e) => {
                scheduler.register(Box::new(e));
                summary.record(EffectKind::NeuralPulse, Ok(()));
            }
            Err(e) => {
                log::warn!("skipping {}: {e}", EffectKind::NeuralPulse);
                summary.record(EffectKind::NeuralPulse, Err(e));
            }
        }
        match AudioBarEffect::start(host) {
            Ok(e) => {
                scheduler.register(Box::new(e));
                summary.record(EffectKind::AudioBars, Ok(()));
            }
            Err(e) => {
                log::warn!("skipping {}: {e}", EffectKind::AudioBars);
                summary.record(EffectKind::AudioBars, Err(e));
            }
        }
        // Lighting lives outside the frame loop; it only reacts to pointer
        // events, so the orchestrator keeps a direct handle.
        match DynamicLightingEffect::start(host) {
            Ok(e) => {
                *lighting.borrow_mut() = Some(e);
                summary.record(EffectKind::DynamicLighting, Ok(()));
            }
            Err(e) => {
                log::warn!("skipping {}: {e}", EffectKind::DynamicLighting);
                summary.record(EffectKind::DynamicLighting, Err(e));
            }
        }

        log::info!(
            "effects started: {} of {}",
            summary.started_count(),
            EffectKind::ALL.len()
        );

        let mut this = Self {
            scheduler,
            lighting,
            summary,
            pointer_move: None,
            pointer_leave: None,
            resize: None,
            torn_down: false,
        };
        this.attach_listeners();
        this.scheduler.run();
        this
    }

    pub fn summary(&self) -> &StartSummary {
        &self.summary
    }

    fn attach_listeners(&mut self) {
        let Some(window) = web::window() else { return };

        let signals = self.scheduler.signals();
        let lighting = self.lighting.clone();
        let pointer_move = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut s = signals.borrow_mut();
            let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
            s.pointer = PointerSignal::from_client(x, y, s.viewport);
            if let Some(l) = lighting.borrow().as_ref() {
                let (px, py) = viewport_percent(x, y, s.viewport);
                l.pointer_moved(px, py);
            }
        }) as Box<dyn FnMut(web::PointerEvent)>);
        let _ = window.add_event_listener_with_callback(
            "pointermove",
            pointer_move.as_ref().unchecked_ref(),
        );
        self.pointer_move = Some(pointer_move);

        let signals = self.scheduler.signals();
        let lighting = self.lighting.clone();
        let pointer_leave = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            signals.borrow_mut().pointer.clear();
            if let Some(l) = lighting.borrow().as_ref() {
                l.pointer_left();
            }
        }) as Box<dyn FnMut(web::PointerEvent)>);
        let _ = window.add_event_listener_with_callback(
            "pointerleave",
            pointer_leave.as_ref().unchecked_ref(),
        );
        self.pointer_leave = Some(pointer_leave);

        let scheduler = self.scheduler.clone();
        let resize = Closure::wrap(Box::new(move || {
            scheduler.resize_all(dom::viewport());
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
        self.resize = Some(resize);
    }

    /// Stop the loop, remove listeners, and pull every surface out of the
    /// DOM. Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;

        if let Some(window) = web::window() {
            if let Some(cb) = self.pointer_move.take() {
                let _ = window.remove_event_listener_with_callback(
                    "pointermove",
                    cb.as_ref().unchecked_ref(),
                );
            }
            if let Some(cb) = self.pointer_leave.take() {
                let _ = window.remove_event_listener_with_callback(
                    "pointerleave",
                    cb.as_ref().unchecked_ref(),
                );
            }
            if let Some(cb) = self.resize.take() {
                let _ = window
                    .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
            }
        }

        self.scheduler.stop_all();
        if let Some(mut lighting) = self.lighting.borrow_mut().take() {
            use crate::effects::Effect;
            lighting.stop();
        }
        log::info!("effects torn down");
    }
}

impl Drop for Orchestrator {
    fn drop(&mut self) {
        self.teardown();
    }
}
