use crate::dom;
use crate::effects::Effect;
use fx_core::{
    EffectError, EffectKind, FrameSignals, PulseGraph, Viewport, EDGE_PROBABILITY, NEURAL_LAYERS,
    NODES_PER_LAYER,
};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct NeuralPulseEffect {
    canvas: Option<web::HtmlCanvasElement>,
    ctx: web::CanvasRenderingContext2d,
    graph: PulseGraph,
}

impl NeuralPulseEffect {
    pub fn start(
        host: &web::Element,
        viewport: Viewport,
        seed: u64,
    ) -> Result<Self, EffectError> {
        let canvas = dom::create_canvas(host, "neural-network", viewport)?;
        let ctx = canvas
            .get_context("2d")
            .map_err(dom::js_setup)?
            .ok_or(EffectError::CapabilityUnavailable("2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| EffectError::CapabilityUnavailable("2d context"))?;
        let graph = PulseGraph::layered(
            viewport.width,
            viewport.height,
            NEURAL_LAYERS,
            NODES_PER_LAYER,
            EDGE_PROBABILITY,
            seed,
        );
        Ok(Self {
            canvas: Some(canvas),
            ctx,
            graph,
        })
    }
}

impl Effect for NeuralPulseEffect {
    fn kind(&self) -> EffectKind {
        EffectKind::NeuralPulse
    }

    fn frame(&mut self, _now_sec: f64, dt: f32, signals: &FrameSignals) {
        if self.canvas.is_none() {
            return;
        }
        self.graph.step(dt);

        let ctx = &self.ctx;
        let vp = signals.viewport;
        ctx.clear_rect(0.0, 0.0, vp.width as f64, vp.height as f64);

        let nodes = self.graph.nodes();
        for e in self.graph.edges() {
            let (from, to) = (&nodes[e.from], &nodes[e.to]);
            let gradient = ctx.create_linear_gradient(
                from.x as f64,
                from.y as f64,
                to.x as f64,
                to.y as f64,
            );
            let alpha = e.alpha();
            let _ = gradient.add_color_stop(0.0, &format!("rgba(142, 68, 173, {alpha:.3})"));
            let _ = gradient.add_color_stop(1.0, &format!("rgba(74, 144, 226, {alpha:.3})"));
            ctx.set_stroke_style_canvas_gradient(&gradient);
            ctx.set_line_width((e.weight * 3.0) as f64);
            ctx.begin_path();
            ctx.move_to(from.x as f64, from.y as f64);
            ctx.line_to(to.x as f64, to.y as f64);
            ctx.stroke();
        }

        for n in nodes {
            let radius = n.pulse_radius().max(0.5) as f64;
            let alpha = n.alpha();
            if let Ok(gradient) = ctx.create_radial_gradient(
                n.x as f64,
                n.y as f64,
                0.0,
                n.x as f64,
                n.y as f64,
                radius,
            ) {
                let _ =
                    gradient.add_color_stop(0.0, &format!("rgba(80, 200, 120, {alpha:.3})"));
                let _ = gradient.add_color_stop(1.0, "rgba(80, 200, 120, 0)");
                ctx.set_fill_style_canvas_gradient(&gradient);
                ctx.begin_path();
                let _ = ctx.arc(n.x as f64, n.y as f64, radius, 0.0, std::f64::consts::TAU);
                ctx.fill();
            }
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        if let Some(canvas) = &self.canvas {
            dom::size_canvas(canvas, viewport, 1.0);
        }
        self.graph.relayout(viewport.width, viewport.height);
    }

    fn stop(&mut self) {
        if let Some(canvas) = self.canvas.take() {
            canvas.remove();
        }
    }
}
