//! Unit sphere mesh and the CPU mirror of the displacement noise.
//!
//! The mesh is built once from latitude/longitude subdivision and never
//! mutated; displacement happens in the vertex shader. `fbm` reproduces the
//! shader's noise exactly so the displacement math can be tested natively.

use crate::constants::{SPHERE_DISPLACEMENT, SPHERE_NOISE_FREQ};
use glam::Vec3;

#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

pub struct SphereMesh {
    pub vertices: Vec<SphereVertex>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Lat/long subdivision of the unit sphere. `(stacks + 1) * (slices + 1)`
    /// vertices (the seam column is duplicated for clean texture coordinates)
    /// and `2 * stacks * slices` triangles.
    pub fn build(stacks: u32, slices: u32) -> Self {
        let mut vertices = Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);
        for i in 0..=stacks {
            let phi = std::f32::consts::PI * i as f32 / stacks as f32;
            for j in 0..=slices {
                let theta = std::f32::consts::TAU * j as f32 / slices as f32;
                let x = phi.sin() * theta.cos();
                let y = phi.cos();
                let z = phi.sin() * theta.sin();
                vertices.push(SphereVertex {
                    position: [x, y, z],
                    // Unit radius, so the position doubles as the normal.
                    normal: [x, y, z],
                    uv: [j as f32 / slices as f32, i as f32 / stacks as f32],
                });
            }
        }

        let mut indices = Vec::with_capacity((stacks * slices * 6) as usize);
        for i in 0..stacks {
            for j in 0..slices {
                let first = i * (slices + 1) + j;
                let second = first + slices + 1;
                indices.extend_from_slice(&[first, second, first + 1]);
                indices.extend_from_slice(&[second, second + 1, first + 1]);
            }
        }

        Self { vertices, indices }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Multi-octave lattice noise in [-1, 1]. Octave `i` doubles the spatial
/// frequency, halves the weight, and drifts at `0.1 * (i + 1)` per second, so
/// the low-frequency swell dominates and the surface moves without jitter.
pub fn fbm(p: Vec3, t: f32, octaves: u32) -> f32 {
    let mut sum = 0.0;
    let mut total = 0.0;
    let mut freq = SPHERE_NOISE_FREQ;
    let mut weight = 1.0;
    for i in 0..octaves {
        let q = p * freq + Vec3::splat(t * 0.1 * (i + 1) as f32);
        sum += weight * (q.x.sin() * q.y.sin() * q.z.sin());
        total += weight;
        freq *= 2.0;
        weight *= 0.5;
    }
    sum / total
}

/// Radial displacement for a vertex at `p`: the noise sum scaled down to a
/// tenth of the radius and swollen by `1 + pointer magnitude`.
pub fn displacement(p: Vec3, t: f32, octaves: u32, pointer_magnitude: f32) -> f32 {
    fbm(p, t, octaves) * SPHERE_DISPLACEMENT * (1.0 + pointer_magnitude)
}
