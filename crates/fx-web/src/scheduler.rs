use crate::effects::Effect;
use fx_core::{CancelToken, FrameSignals, Viewport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Longest frame delta fed to effects. Tab switches can park the loop for
/// seconds; a capped dt keeps the simulations from teleporting.
const MAX_DT_SEC: f32 = 0.1;

/// Single requestAnimationFrame loop driving every registered effect.
///
/// One loop, one clock: effects never schedule their own callbacks, so a
/// single cancel tears the whole subsystem down and no frame sees two
/// different timestamps.
pub struct Scheduler {
    effects: Rc<RefCell<Vec<Box<dyn Effect>>>>,
    signals: Rc<RefCell<FrameSignals>>,
    cancel: CancelToken,
}

impl Scheduler {
    pub fn new(viewport: Viewport) -> Self {
        let signals = FrameSignals {
            viewport,
            ..FrameSignals::default()
        };
        Self {
            effects: Rc::new(RefCell::new(Vec::new())),
            signals: Rc::new(RefCell::new(signals)),
            cancel: CancelToken::new(),
        }
    }

    pub fn register(&self, effect: Box<dyn Effect>) {
        self.effects.borrow_mut().push(effect);
    }

    pub fn effect_count(&self) -> usize {
        self.effects.borrow().len()
    }

    /// Shared per-frame inputs. The orchestrator's event listeners write into
    /// this cell; effects read a copy each frame.
    pub fn signals(&self) -> Rc<RefCell<FrameSignals>> {
        self.signals.clone()
    }

    /// Start the self-rescheduling frame loop. Returns immediately; frames
    /// run until [`Scheduler::stop_all`] cancels the token.
    pub fn run(&self) {
        let effects = self.effects.clone();
        let signals = self.signals.clone();
        let cancel = self.cancel.clone();
        let start = Instant::now();
        let mut last = start;

        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if cancel.is_cancelled() {
                // Not rescheduled; the closure cell keeps the Closure alive
                // because it cannot be dropped from inside its own call.
                return;
            }
            let now = Instant::now();
            let dt = (now - last).as_secs_f32().min(MAX_DT_SEC);
            last = now;
            let now_sec = (now - start).as_secs_f64();

            let frame_signals = *signals.borrow();
            for effect in effects.borrow_mut().iter_mut() {
                effect.frame(now_sec, dt, &frame_signals);
            }

            if let Some(w) = web::window() {
                if let Some(cb) = tick_clone.borrow().as_ref() {
                    let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(w) = web::window() {
            if let Some(cb) = tick.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }

    pub fn resize_all(&self, viewport: Viewport) {
        self.signals.borrow_mut().viewport = viewport;
        for effect in self.effects.borrow_mut().iter_mut() {
            effect.resize(viewport);
        }
    }

    /// Cancel the loop and stop every effect. Idempotent; a second call finds
    /// an empty effect list.
    pub fn stop_all(&self) {
        self.cancel.cancel();
        for effect in self.effects.borrow_mut().iter_mut() {
            effect.stop();
        }
        self.effects.borrow_mut().clear();
    }
}
