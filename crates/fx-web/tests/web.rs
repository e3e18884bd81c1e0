#![cfg(target_arch = "wasm32")]

use fx_web::HeroFx;
use wasm_bindgen_test::*;
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_host() -> web::Element {
    let document = web::window().unwrap().document().unwrap();
    let host = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    host
}

#[wasm_bindgen_test]
fn destroy_empties_the_host() {
    let host = fresh_host();
    let mut fx = HeroFx::new(host.clone());
    fx.destroy();
    assert_eq!(host.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn destroy_twice_is_a_no_op() {
    let host = fresh_host();
    let mut fx = HeroFx::new(host.clone());
    fx.destroy();
    fx.destroy();
    assert_eq!(host.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn dom_effects_mount_synchronously() {
    let host = fresh_host();
    let mut fx = HeroFx::new(host.clone());
    // Headless runners may report prefers-reduced-motion, in which case the
    // orchestrator mounts nothing on purpose.
    let reduced = web::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false);
    if !reduced {
        assert!(host.child_element_count() > 0);
        assert!(host.query_selector(".audio-visualizer").unwrap().is_some());
        assert!(host.query_selector(".particle-canvas").unwrap().is_some());
        assert!(host.query_selector(".neural-network").unwrap().is_some());
        assert!(host.query_selector(".dynamic-lighting").unwrap().is_some());
    }
    fx.destroy();
    assert_eq!(host.child_element_count(), 0);
}
