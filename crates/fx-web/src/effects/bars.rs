use crate::dom;
use crate::effects::Effect;
use fx_core::{BarSim, EffectError, EffectKind, FrameSignals, Viewport, BAR_COUNT};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Simulated frequency bars: a container div with [`BAR_COUNT`] child divs
/// whose heights follow the bar oscillator. Styling and layout come from the
/// page stylesheet.
pub struct AudioBarEffect {
    surface: Option<web::Element>,
    bars: Vec<web::HtmlElement>,
    sim: BarSim,
}

impl AudioBarEffect {
    pub fn start(host: &web::Element) -> Result<Self, EffectError> {
        let surface = dom::create_surface(host, "div", "audio-visualizer")?;
        let mut bars = Vec::with_capacity(BAR_COUNT);
        for _ in 0..BAR_COUNT {
            let bar: web::HtmlElement = dom::create_surface(&surface, "div", "visualizer-bar")?
                .dyn_into()
                .map_err(|_| EffectError::CapabilityUnavailable("html element"))?;
            let _ = bar.style().set_property("height", "4px");
            bars.push(bar);
        }
        Ok(Self {
            surface: Some(surface),
            bars,
            sim: BarSim::new(BAR_COUNT),
        })
    }
}

impl Effect for AudioBarEffect {
    fn kind(&self) -> EffectKind {
        EffectKind::AudioBars
    }

    fn frame(&mut self, now_sec: f64, _dt: f32, _signals: &FrameSignals) {
        if self.surface.is_none() {
            return;
        }
        for (i, bar) in self.bars.iter().enumerate() {
            let h = self.sim.height_px(now_sec, i);
            let _ = bar.style().set_property("height", &format!("{h:.1}px"));
        }
    }

    fn resize(&mut self, _viewport: Viewport) {}

    fn stop(&mut self) {
        // Removing the container takes the bars with it.
        if let Some(surface) = self.surface.take() {
            surface.remove();
        }
        self.bars.clear();
    }
}
