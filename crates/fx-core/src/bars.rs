//! Simulated frequency bars.
//!
//! No real audio analysis: each bar's height is a deterministic, phase-shifted
//! oscillator over elapsed time, so heights are continuous and independent per
//! bar. A real-analyser replacement must keep both properties.

use crate::constants::{BAR_AMPLITUDE_PX, BAR_FLOOR_PX, BAR_PHASE_STEP, BAR_TIME_SCALE};

pub struct BarSim {
    count: usize,
}

impl BarSim {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Height in pixels for bar `index` at `t_sec` seconds of elapsed time.
    pub fn height_px(&self, t_sec: f64, index: usize) -> f32 {
        let phase = t_sec * BAR_TIME_SCALE + index as f64 * BAR_PHASE_STEP;
        phase.sin().abs() as f32 * BAR_AMPLITUDE_PX + BAR_FLOOR_PX
    }

    pub fn sample(&self, t_sec: f64, out: &mut [f32]) {
        for (i, h) in out.iter_mut().enumerate().take(self.count) {
            *h = self.height_px(t_sec, i);
        }
    }
}
