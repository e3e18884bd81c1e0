//! Effect lifecycle types: error taxonomy, cancellation, and the
//! best-effort start summary.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// The five effect variants behind the common start/stop interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    Sphere,
    ParticleField,
    NeuralPulse,
    AudioBars,
    DynamicLighting,
}

impl EffectKind {
    pub const ALL: [EffectKind; 5] = [
        EffectKind::Sphere,
        EffectKind::ParticleField,
        EffectKind::NeuralPulse,
        EffectKind::AudioBars,
        EffectKind::DynamicLighting,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EffectKind::Sphere => "sphere",
            EffectKind::ParticleField => "particle-field",
            EffectKind::NeuralPulse => "neural-pulse",
            EffectKind::AudioBars => "audio-bars",
            EffectKind::DynamicLighting => "dynamic-lighting",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error)]
pub enum EffectError {
    /// The host lacks a capability (rendering context, document). The effect
    /// simply does not start; this is not a page-visible failure.
    #[error("capability unavailable: {0}")]
    CapabilityUnavailable(&'static str),
    /// Setup raised an actual error. Logged and skipped.
    #[error("effect setup failed: {0}")]
    Setup(String),
}

impl EffectError {
    pub fn is_capability(&self) -> bool {
        matches!(self, EffectError::CapabilityUnavailable(_))
    }
}

/// Shared stop flag for a frame loop. Cloning hands out another handle to the
/// same flag; cancelling any handle stops the loop, and cancelling again is a
/// no-op.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Outcome of a best-effort start pass: which effects run and which were
/// skipped, with the reason kept for logging.
#[derive(Debug, Default)]
pub struct StartSummary {
    pub started: Vec<EffectKind>,
    pub skipped: Vec<(EffectKind, EffectError)>,
}

impl StartSummary {
    pub fn record(&mut self, kind: EffectKind, result: Result<(), EffectError>) {
        match result {
            Ok(()) => self.started.push(kind),
            Err(e) => self.skipped.push((kind, e)),
        }
    }

    pub fn started_count(&self) -> usize {
        self.started.len()
    }

    pub fn is_started(&self, kind: EffectKind) -> bool {
        self.started.contains(&kind)
    }
}
