use crate::mode::{Mode, Outcome};
use rand::prelude::*;
use std::collections::VecDeque;

/// Supplier of fresh outcomes for the controller.
///
/// Implementations must return a member of `mode`'s domain, each with
/// probability 1/N per call and independent across calls.
pub trait OutcomeSource {
    fn draw(&mut self, mode: Mode) -> Outcome;
}

/// Uniform draws backed by a `StdRng`.
pub struct UniformSource {
    rng: StdRng,
}

impl UniformSource {
    /// Seeded from OS entropy (`crypto.getRandomValues` in the browser).
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl OutcomeSource for UniformSource {
    fn draw(&mut self, mode: Mode) -> Outcome {
        let index = self.rng.gen_range(0..mode.cardinality());
        mode.outcome_at(index).unwrap_or_else(|| mode.default_outcome())
    }
}

/// Replays a queue of predetermined outcomes, then falls back to uniform draws.
///
/// A queued value from the wrong domain is skipped so the source never hands
/// the controller something outside the active mode.
pub struct ScriptedSource {
    script: VecDeque<Outcome>,
    fallback: UniformSource,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = Outcome>) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback: UniformSource::seeded(0),
        }
    }

    pub fn push(&mut self, outcome: Outcome) {
        self.script.push_back(outcome);
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl OutcomeSource for ScriptedSource {
    fn draw(&mut self, mode: Mode) -> Outcome {
        while let Some(next) = self.script.pop_front() {
            if next.mode() == mode {
                return next;
            }
            log::warn!("[source] skipping scripted {next} for mode {mode}");
        }
        self.fallback.draw(mode)
    }
}
