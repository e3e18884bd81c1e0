//! The five effect variants behind one interface.
//!
//! Each effect owns exactly one surface inside the mount host, mutates only
//! its own state, and reads the shared signals by value. `stop` removes the
//! surface and is safe to call more than once.

use fx_core::{EffectKind, FrameSignals, Viewport};

mod bars;
mod lighting;
mod neural;
mod particles;
mod sphere;

pub use bars::AudioBarEffect;
pub use lighting::DynamicLightingEffect;
pub use neural::NeuralPulseEffect;
pub use particles::ParticleFieldEffect;
pub use sphere::SphereEffect;

pub trait Effect {
    fn kind(&self) -> EffectKind;

    /// Advance one frame. `now_sec` is time since the loop started, `dt` the
    /// delta to the previous frame in seconds.
    fn frame(&mut self, now_sec: f64, dt: f32, signals: &FrameSignals);

    /// The viewport changed; reallocate the surface and any projection state.
    fn resize(&mut self, viewport: Viewport);

    /// Release the surface. Idempotent.
    fn stop(&mut self);
}
