use crate::dom;
use crate::effects::Effect;
use fx_core::{
    Connection, EffectError, EffectKind, FrameSignals, ParticleField, Viewport, PARTICLE_COLORS,
    PARTICLE_COUNT,
};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ParticleFieldEffect {
    canvas: Option<web::HtmlCanvasElement>,
    ctx: web::CanvasRenderingContext2d,
    field: ParticleField,
    connections: Vec<Connection>,
}

impl ParticleFieldEffect {
    pub fn start(
        host: &web::Element,
        viewport: Viewport,
        seed: u64,
    ) -> Result<Self, EffectError> {
        let canvas = dom::create_canvas(host, "particle-canvas", viewport)?;
        let ctx = canvas
            .get_context("2d")
            .map_err(dom::js_setup)?
            .ok_or(EffectError::CapabilityUnavailable("2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| EffectError::CapabilityUnavailable("2d context"))?;
        let field = ParticleField::new(viewport.width, viewport.height, PARTICLE_COUNT, seed);
        Ok(Self {
            canvas: Some(canvas),
            ctx,
            field,
            connections: Vec::new(),
        })
    }
}

impl Effect for ParticleFieldEffect {
    fn kind(&self) -> EffectKind {
        EffectKind::ParticleField
    }

    fn frame(&mut self, _now_sec: f64, dt: f32, _signals: &FrameSignals) {
        if self.canvas.is_none() {
            return;
        }
        self.field.step(dt);

        let bounds = self.field.bounds();
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, bounds.width as f64, bounds.height as f64);

        for p in self.field.particles() {
            ctx.set_fill_style_str(PARTICLE_COLORS[p.color]);
            ctx.set_global_alpha(p.opacity as f64);
            ctx.begin_path();
            let _ = ctx.arc(
                p.x as f64,
                p.y as f64,
                p.radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.fill();
        }

        self.field.connections(&mut self.connections);
        ctx.set_line_width(1.0);
        let ps = self.field.particles();
        for c in &self.connections {
            let alpha = (c.strength * 0.3) as f64;
            ctx.set_stroke_style_str(&format!("rgba(74, 144, 226, {alpha:.3})"));
            ctx.set_global_alpha(alpha);
            ctx.begin_path();
            ctx.move_to(ps[c.a].x as f64, ps[c.a].y as f64);
            ctx.line_to(ps[c.b].x as f64, ps[c.b].y as f64);
            ctx.stroke();
        }
        ctx.set_global_alpha(1.0);
    }

    fn resize(&mut self, viewport: Viewport) {
        if let Some(canvas) = &self.canvas {
            dom::size_canvas(canvas, viewport, 1.0);
        }
        self.field.resize(viewport.width, viewport.height);
    }

    fn stop(&mut self) {
        if let Some(canvas) = self.canvas.take() {
            canvas.remove();
        }
    }
}
