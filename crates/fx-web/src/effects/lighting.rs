use crate::dom;
use crate::effects::Effect;
use fx_core::{EffectError, EffectKind, FrameSignals, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

/// CSS-variable glow that tracks the pointer. Purely reactive: the
/// orchestrator feeds it pointer positions, and the stylesheet does the rest
/// by reading `--mouse-x`/`--mouse-y` off the surface. No frame loop.
pub struct DynamicLightingEffect {
    surface: Option<web::HtmlElement>,
}

impl DynamicLightingEffect {
    pub fn start(host: &web::Element) -> Result<Self, EffectError> {
        let surface: web::HtmlElement = dom::create_surface(host, "div", "dynamic-lighting")?
            .dyn_into()
            .map_err(|_| EffectError::CapabilityUnavailable("html element"))?;
        Ok(Self {
            surface: Some(surface),
        })
    }

    /// Pointer position as viewport percentages.
    pub fn pointer_moved(&self, pct_x: f32, pct_y: f32) {
        if let Some(el) = &self.surface {
            let style = el.style();
            let _ = style.set_property("--mouse-x", &format!("{pct_x:.2}%"));
            let _ = style.set_property("--mouse-y", &format!("{pct_y:.2}%"));
            let _ = el.class_list().add_1("active");
        }
    }

    pub fn pointer_left(&self) {
        if let Some(el) = &self.surface {
            let _ = el.class_list().remove_1("active");
        }
    }
}

impl Effect for DynamicLightingEffect {
    fn kind(&self) -> EffectKind {
        EffectKind::DynamicLighting
    }

    fn frame(&mut self, _now_sec: f64, _dt: f32, _signals: &FrameSignals) {}

    fn resize(&mut self, _viewport: Viewport) {}

    fn stop(&mut self) {
        if let Some(surface) = self.surface.take() {
            surface.remove();
        }
    }
}
