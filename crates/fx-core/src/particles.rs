//! Bouncing particle field with proximity connections.
//!
//! Particles live in surface pixel space. The pool is fixed at construction;
//! motion is perpetual because boundary contact reflects velocity instead of
//! retiring the particle. After every step each position is inside
//! `[0, width] x [0, height]`.

use crate::constants::{
    CONNECT_DISTANCE, PARTICLE_COLORS, PARTICLE_OPACITY_MAX, PARTICLE_OPACITY_MIN,
    PARTICLE_RADIUS_MAX, PARTICLE_RADIUS_MIN, PARTICLE_SPEED,
};
use crate::signals::Viewport;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub opacity: f32,
    /// Index into [`PARTICLE_COLORS`].
    pub color: usize,
}

/// One line to draw between particles `a` and `b`. `strength` is 1.0 at zero
/// distance and falls linearly to 0.0 at the connection threshold.
#[derive(Clone, Copy, Debug)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub strength: f32,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Viewport,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, count: usize, seed: u64) -> Self {
        let bounds = Viewport::new(width, height);
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.gen_range(0.0..bounds.width),
                y: rng.gen_range(0.0..bounds.height),
                vx: rng.gen_range(-PARTICLE_SPEED..PARTICLE_SPEED),
                vy: rng.gen_range(-PARTICLE_SPEED..PARTICLE_SPEED),
                radius: rng.gen_range(PARTICLE_RADIUS_MIN..PARTICLE_RADIUS_MAX),
                opacity: rng.gen_range(PARTICLE_OPACITY_MIN..PARTICLE_OPACITY_MAX),
                color: rng.gen_range(0..PARTICLE_COLORS.len()),
            })
            .collect();
        Self { particles, bounds }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Viewport {
        self.bounds
    }

    /// Update bounds only. Positions are left alone; anything now outside the
    /// surface is pulled back by the clamp in the next `step`.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds.resize(width, height);
    }

    /// Integrate one frame. Reflection and clamping happen in the same pass,
    /// and velocity only flips when it points outward, so a particle caught
    /// beyond a shrunken bound does not oscillate against it.
    pub fn step(&mut self, dt: f32) {
        let (w, h) = (self.bounds.width, self.bounds.height);
        for p in &mut self.particles {
            p.x += p.vx * dt;
            p.y += p.vy * dt;
            if p.x <= 0.0 {
                p.x = 0.0;
                p.vx = p.vx.abs();
            } else if p.x >= w {
                p.x = w;
                p.vx = -p.vx.abs();
            }
            if p.y <= 0.0 {
                p.y = 0.0;
                p.vy = p.vy.abs();
            } else if p.y >= h {
                p.y = h;
                p.vy = -p.vy.abs();
            }
        }
    }

    /// Collect every unordered pair closer than the threshold. O(n^2), which
    /// is fine at the pool sizes we run; a spatial grid would be the next step
    /// if the count ever grows past a few hundred.
    pub fn connections(&self, out: &mut Vec<Connection>) {
        out.clear();
        for i in 0..self.particles.len() {
            let a = &self.particles[i];
            for (jo, b) in self.particles[i + 1..].iter().enumerate() {
                let dx = a.x - b.x;
                let dy = a.y - b.y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist < CONNECT_DISTANCE {
                    out.push(Connection {
                        a: i,
                        b: i + 1 + jo,
                        strength: connection_strength(dist),
                    });
                }
            }
        }
    }
}

/// Line strength for a pair at `distance`: 1 at contact, 0 at the threshold.
#[inline]
pub fn connection_strength(distance: f32) -> f32 {
    (1.0 - distance / CONNECT_DISTANCE).clamp(0.0, 1.0)
}
