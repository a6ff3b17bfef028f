//! Gain envelopes expressed as Web Audio style automation steps.
//!
//! Every tone fades in linearly, holds, then decays exponentially toward
//! [`ENVELOPE_FLOOR`]. Starting from silence and ending near it keeps the
//! oscillator start/stop free of clicks.

use crate::constants::{
    ATTACK_END_FRACTION, ENVELOPE_FLOOR, OVERTONE_RELEASE_END_FRACTION, OVERTONE_SUSTAIN_END_FRACTION,
    SUSTAIN_END_FRACTION,
};
use crate::cue::ToneEvent;
use smallvec::SmallVec;

/// One gain automation call, with absolute times in audio-context seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GainStep {
    SetAt { value: f32, time: f64 },
    LinearRampTo { value: f32, time: f64 },
    ExponentialRampTo { value: f32, time: f64 },
}

impl GainStep {
    pub fn time(&self) -> f64 {
        match *self {
            GainStep::SetAt { time, .. }
            | GainStep::LinearRampTo { time, .. }
            | GainStep::ExponentialRampTo { time, .. } => time,
        }
    }

    pub fn value(&self) -> f32 {
        match *self {
            GainStep::SetAt { value, .. }
            | GainStep::LinearRampTo { value, .. }
            | GainStep::ExponentialRampTo { value, .. } => value,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Envelope {
    steps: SmallVec<[GainStep; 4]>,
}

impl Envelope {
    /// Envelope for `tone` when its oscillator starts at `start` (absolute seconds).
    pub fn for_tone(tone: &ToneEvent, start: f64) -> Self {
        let d = tone.duration_sec;
        let (sustain_end, release_end) = if tone.harmonic_overtone {
            (OVERTONE_SUSTAIN_END_FRACTION, OVERTONE_RELEASE_END_FRACTION)
        } else {
            (SUSTAIN_END_FRACTION, 1.0)
        };
        let peak = tone.peak_volume;
        let steps = [
            GainStep::SetAt { value: 0.0, time: start },
            GainStep::LinearRampTo { value: peak, time: start + d * ATTACK_END_FRACTION },
            GainStep::SetAt { value: peak, time: start + d * sustain_end },
            GainStep::ExponentialRampTo { value: ENVELOPE_FLOOR, time: start + d * release_end },
        ];
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    pub fn steps(&self) -> &[GainStep] {
        &self.steps
    }

    /// Time at which the envelope reaches its final value.
    pub fn end_time(&self) -> f64 {
        self.steps.last().map(GainStep::time).unwrap_or(0.0)
    }

    /// Evaluate the automation curve at `t` the way an AudioParam would.
    pub fn gain_at(&self, t: f64) -> f32 {
        let mut value = 0.0_f32;
        let mut time = f64::NEG_INFINITY;
        for step in self.steps.iter() {
            let target_time = step.time();
            if t < target_time {
                return match *step {
                    GainStep::SetAt { .. } => value,
                    GainStep::LinearRampTo { value: target, .. } => {
                        let frac = progress(time, target_time, t);
                        value + (target - value) * frac
                    }
                    GainStep::ExponentialRampTo { value: target, .. } => {
                        if value <= 0.0 || target <= 0.0 {
                            return value;
                        }
                        let frac = progress(time, target_time, t);
                        value * (target / value).powf(frac)
                    }
                };
            }
            value = step.value();
            time = target_time;
        }
        value
    }
}

fn progress(from: f64, to: f64, t: f64) -> f32 {
    if !from.is_finite() || to <= from {
        return 1.0;
    }
    (((t - from) / (to - from)).clamp(0.0, 1.0)) as f32
}
