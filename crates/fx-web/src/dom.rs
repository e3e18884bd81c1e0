use fx_core::{EffectError, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Accessibility contract: when the user asks for reduced motion, none of the
/// effects may start. Read once at orchestrator init.
pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

pub fn viewport() -> Viewport {
    let (mut w, mut h) = (1.0, 1.0);
    if let Some(window) = web::window() {
        if let Some(v) = window.inner_width().ok().and_then(|v| v.as_f64()) {
            w = v;
        }
        if let Some(v) = window.inner_height().ok().and_then(|v| v.as_f64()) {
            h = v;
        }
    }
    Viewport::new(w as f32, h as f32)
}

pub fn js_setup(e: JsValue) -> EffectError {
    EffectError::Setup(format!("{e:?}"))
}

/// Create a surface element inside the host. The class name is what the page
/// stylesheet positions and layers.
pub fn create_surface(
    host: &web::Element,
    tag: &str,
    class_name: &str,
) -> Result<web::Element, EffectError> {
    let document =
        window_document().ok_or(EffectError::CapabilityUnavailable("no document"))?;
    let el = document.create_element(tag).map_err(js_setup)?;
    el.set_class_name(class_name);
    host.append_child(&el).map_err(js_setup)?;
    Ok(el)
}

/// Create a canvas surface sized in CSS pixels, one drawing unit per pixel.
/// The 2D effects want their coordinate space equal to the viewport.
pub fn create_canvas(
    host: &web::Element,
    class_name: &str,
    viewport: Viewport,
) -> Result<web::HtmlCanvasElement, EffectError> {
    let canvas: web::HtmlCanvasElement = create_surface(host, "canvas", class_name)?
        .dyn_into()
        .map_err(|_| EffectError::CapabilityUnavailable("canvas element"))?;
    size_canvas(&canvas, viewport, 1.0);
    Ok(canvas)
}

/// Resize a canvas backing store. A `dpr_cap` of 1.0 keeps CSS-pixel drawing;
/// the GPU canvas passes [`fx_core::MAX_DEVICE_PIXEL_RATIO`].
pub fn size_canvas(canvas: &web::HtmlCanvasElement, viewport: Viewport, dpr_cap: f64) {
    let dpr = web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .clamp(1.0, dpr_cap.max(1.0));
    canvas.set_width(((viewport.width as f64 * dpr) as u32).max(1));
    canvas.set_height(((viewport.height as f64 * dpr) as u32).max(1));
}
