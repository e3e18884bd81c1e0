//! Pointer and viewport signals owned by the orchestrator.
//!
//! Effects receive these by value each frame and never mutate them; the
//! original page kept the equivalent state in ambient globals, which made
//! teardown unreliable.

use glam::Vec2;

/// Viewport (or surface) size in CSS pixels. Never zero on either axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        *self = Self::new(width, height);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// Normalized pointer position, both axes in [-1, 1] with +y pointing up.
///
/// A cleared signal sits at the origin and reads as "no pointer"; its
/// magnitude is zero, so pointer-driven terms fall away.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSignal {
    pub x: f32,
    pub y: f32,
}

impl PointerSignal {
    pub fn from_client(client_x: f32, client_y: f32, viewport: Viewport) -> Self {
        Self {
            x: ((client_x / viewport.width) * 2.0 - 1.0).clamp(-1.0, 1.0),
            y: (-((client_y / viewport.height) * 2.0 - 1.0)).clamp(-1.0, 1.0),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn magnitude(self) -> f32 {
        Vec2::new(self.x, self.y).length()
    }
}

/// Client coordinates as viewport percentages, for the CSS lighting surface.
#[inline]
pub fn viewport_percent(client_x: f32, client_y: f32, viewport: Viewport) -> (f32, f32) {
    (
        (client_x / viewport.width * 100.0).clamp(0.0, 100.0),
        (client_y / viewport.height * 100.0).clamp(0.0, 100.0),
    )
}

/// Everything an effect may read during one frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameSignals {
    pub pointer: PointerSignal,
    pub viewport: Viewport,
}
