//! Browser front end for the hero animation effects.
//!
//! On module load this auto-mounts onto the first `.header` element if one
//! exists. Pages that want explicit control construct a [`HeroFx`] handle
//! instead and call `destroy` when the hero section unmounts.

#![cfg(target_arch = "wasm32")]

mod dom;
mod effects;
mod orchestrator;
mod scheduler;

pub use orchestrator::Orchestrator;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

thread_local! {
    static AUTO_MOUNT: RefCell<Option<Orchestrator>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hero effects module loaded");

    let host = dom::window_document().and_then(|d| d.query_selector(".header").ok().flatten());
    if let Some(host) = host {
        AUTO_MOUNT.with(|slot| {
            *slot.borrow_mut() = Some(Orchestrator::start(&host));
        });
    }
}

/// JS-facing handle: mounts the effects onto a host element and tears them
/// down on `destroy`.
#[wasm_bindgen]
pub struct HeroFx {
    inner: Option<Orchestrator>,
}

#[wasm_bindgen]
impl HeroFx {
    #[wasm_bindgen(constructor)]
    pub fn new(host: web::Element) -> HeroFx {
        HeroFx {
            inner: Some(Orchestrator::start(&host)),
        }
    }

    /// Idempotent: later calls find nothing to tear down.
    pub fn destroy(&mut self) {
        if let Some(mut orchestrator) = self.inner.take() {
            orchestrator.teardown();
        }
    }
}

/// Tear down the auto-mounted instance, if any.
#[wasm_bindgen]
pub fn unmount() {
    AUTO_MOUNT.with(|slot| {
        if let Some(mut orchestrator) = slot.borrow_mut().take() {
            orchestrator.teardown();
        }
    });
}
