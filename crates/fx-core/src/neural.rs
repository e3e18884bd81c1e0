//! Layered feed-forward pulse graph.
//!
//! Nodes sit on a fixed grid derived from the surface size: layer `l` of `L`
//! at `width / (L + 1) * (l + 1)`, node `n` of `N` at
//! `height / (N + 1) * (n + 1)`. Edges only ever join a node to one in the
//! next layer, so the layer structure is deterministic for a given seed.

use crate::constants::{
    EDGE_RATE_MAX, EDGE_RATE_MIN, NODE_ACTIVITY_JITTER, NODE_PULSE_RATE, NODE_SIZE_MAX,
    NODE_SIZE_MIN,
};
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Node {
    pub x: f32,
    pub y: f32,
    pub base_size: f32,
    /// Monotonically increasing, radians.
    pub phase: f32,
    /// Clamped to [0, 1] after every perturbation.
    pub activity: f32,
}

impl Node {
    /// Rendered radius: the base size breathing by +/- 2px with the phase.
    pub fn pulse_radius(&self) -> f32 {
        self.base_size + self.phase.sin() * 2.0
    }

    pub fn alpha(&self) -> f32 {
        self.activity * 0.8 + 0.2
    }
}

/// Edge between `from` (layer i) and `to` (layer i + 1). The node relation is
/// by index and read-only; nodes are shared by many edges.
#[derive(Clone, Debug)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    /// Fixed at creation, in [0, 1]. Drawn as line width `weight * 3`.
    pub weight: f32,
    /// Ping-pong oscillator state in [0, 1].
    pub activity: f32,
    rate: f32,
    rising: bool,
}

impl Edge {
    pub fn alpha(&self) -> f32 {
        self.activity * 0.5 + 0.1
    }
}

pub struct PulseGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    layers: usize,
    per_layer: usize,
    rng: StdRng,
}

impl PulseGraph {
    /// Build the layered topology. Every (layer i, layer i + 1) node pair is
    /// considered once and kept with probability `edge_prob`.
    pub fn layered(
        width: f32,
        height: f32,
        layers: usize,
        per_layer: usize,
        edge_prob: f32,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut nodes = Vec::with_capacity(layers * per_layer);
        for layer in 0..layers {
            for n in 0..per_layer {
                nodes.push(Node {
                    x: grid_x(width, layers, layer),
                    y: grid_y(height, per_layer, n),
                    base_size: rng.gen_range(NODE_SIZE_MIN..NODE_SIZE_MAX),
                    phase: rng.gen_range(0.0..std::f32::consts::TAU),
                    activity: rng.gen(),
                });
            }
        }

        let mut edges = Vec::new();
        for layer in 0..layers.saturating_sub(1) {
            for a in 0..per_layer {
                for b in 0..per_layer {
                    if rng.gen::<f32>() < edge_prob {
                        edges.push(Edge {
                            from: layer * per_layer + a,
                            to: (layer + 1) * per_layer + b,
                            weight: rng.gen(),
                            activity: rng.gen(),
                            rate: rng.gen_range(EDGE_RATE_MIN..EDGE_RATE_MAX),
                            rising: rng.gen(),
                        });
                    }
                }
            }
        }

        Self {
            nodes,
            edges,
            layers,
            per_layer,
            rng,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Re-seat the grid on a new surface size. Topology and oscillator state
    /// are untouched.
    pub fn relayout(&mut self, width: f32, height: f32) {
        for (i, node) in self.nodes.iter_mut().enumerate() {
            node.x = grid_x(width, self.layers, i / self.per_layer);
            node.y = grid_y(height, self.per_layer, i % self.per_layer);
        }
    }

    pub fn step(&mut self, dt: f32) {
        for edge in &mut self.edges {
            let delta = edge.rate * dt;
            if edge.rising {
                edge.activity += delta;
                if edge.activity >= 1.0 {
                    edge.activity = 1.0;
                    edge.rising = false;
                }
            } else {
                edge.activity -= delta;
                if edge.activity <= 0.0 {
                    edge.activity = 0.0;
                    edge.rising = true;
                }
            }
        }
        for node in &mut self.nodes {
            node.phase += NODE_PULSE_RATE * dt;
            let jitter = self.rng.gen_range(-0.5..0.5) * NODE_ACTIVITY_JITTER * dt;
            node.activity = (node.activity + jitter).clamp(0.0, 1.0);
        }
    }
}

#[inline]
fn grid_x(width: f32, layers: usize, layer: usize) -> f32 {
    width / (layers as f32 + 1.0) * (layer as f32 + 1.0)
}

#[inline]
fn grid_y(height: f32, per_layer: usize, n: usize) -> f32 {
    height / (per_layer as f32 + 1.0) * (n as f32 + 1.0)
}
