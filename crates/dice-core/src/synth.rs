//! Procedural feedback cues.
//!
//! The synthesizer turns a [`CueKind`] into oscillator + envelope pairs on a
//! shared audio context. Playback is best-effort: a gated category, a
//! missing audio backend or a released context all end in silence, never in
//! an error for the caller.

use crate::constants::CUE_LEAD_SEC;
use crate::cue::{CueKind, FeedbackCue, ToneEvent, Waveform};
use crate::envelope::Envelope;
use crate::error::AudioError;
use crate::gate::{CapabilitySnapshot, FeatureCategory, FeatureGate};
use std::cell::RefCell;
use std::rc::Rc;

/// A tone pinned to absolute audio-context time, ready for a backend.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledTone {
    pub frequency_hz: f32,
    pub waveform: Waveform,
    pub start_sec: f64,
    pub stop_sec: f64,
    pub harmonic_overtone: bool,
    pub envelope: Envelope,
}

impl ScheduledTone {
    pub fn at_origin(tone: &ToneEvent, origin_sec: f64) -> Self {
        let start_sec = origin_sec + tone.start_offset_sec;
        Self {
            frequency_hz: tone.frequency_hz,
            waveform: tone.waveform,
            start_sec,
            stop_sec: start_sec + tone.duration_sec,
            harmonic_overtone: tone.harmonic_overtone,
            envelope: Envelope::for_tone(tone, start_sec),
        }
    }
}

/// Audio rendering context the synthesizer drives.
pub trait AudioBackend {
    /// Context clock in seconds.
    fn current_time(&self) -> f64;
    fn is_suspended(&self) -> bool;
    fn resume(&self) -> Result<(), AudioError>;
    fn schedule_tone(&self, tone: &ScheduledTone) -> Result<(), AudioError>;
    fn close(&self) -> Result<(), AudioError>;
}

pub type BackendFactory = Box<dyn Fn() -> Result<Box<dyn AudioBackend>, AudioError>>;

/// What a cue request ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CuePlayback {
    /// This many tones were handed to the backend.
    Scheduled(usize),
    /// User disabled or never purchased the category.
    Gated,
    /// No audio backend could be created on this host.
    Unavailable,
    /// The synthesizer was already torn down.
    Released,
}

enum ContextSlot {
    Unopened,
    Open(Box<dyn AudioBackend>),
    Unavailable,
    Released,
}

pub struct ToneSynthesizer {
    gate: Rc<dyn FeatureGate>,
    factory: BackendFactory,
    context: RefCell<ContextSlot>,
}

impl ToneSynthesizer {
    /// The backend is not created until the first permitted cue.
    pub fn new(gate: Rc<dyn FeatureGate>, factory: BackendFactory) -> Self {
        Self {
            gate,
            factory,
            context: RefCell::new(ContextSlot::Unopened),
        }
    }

    /// Whether a cue requested now would be allowed to sound.
    pub fn is_available(&self) -> bool {
        let slot_ok = matches!(*self.context.borrow(), ContextSlot::Unopened | ContextSlot::Open(_));
        slot_ok && self.snapshot().allows_playback()
    }

    pub fn play_cue(&self, kind: CueKind) -> CuePlayback {
        // Permissions are read fresh on every request.
        let snapshot = self.snapshot();
        if !snapshot.allows_playback() {
            log::debug!("[synth] {:?} gated: {:?}", kind, snapshot);
            return CuePlayback::Gated;
        }

        let mut slot = self.context.borrow_mut();
        if matches!(*slot, ContextSlot::Unopened) {
            *slot = match (self.factory)() {
                Ok(backend) => ContextSlot::Open(backend),
                Err(e) => {
                    log::warn!("[synth] audio disabled: {}", e);
                    ContextSlot::Unavailable
                }
            };
        }
        let backend = match &*slot {
            ContextSlot::Open(backend) => backend,
            ContextSlot::Unavailable | ContextSlot::Unopened => return CuePlayback::Unavailable,
            ContextSlot::Released => {
                log::warn!("[synth] {:?} requested after release", kind);
                return CuePlayback::Released;
            }
        };

        // Autoplay policies leave fresh contexts suspended until a user gesture.
        if backend.is_suspended() {
            if let Err(e) = backend.resume() {
                log::warn!("[synth] resume failed: {}", e);
            }
        }

        let cue = FeedbackCue::for_kind(kind);
        let origin = backend.current_time() + CUE_LEAD_SEC;
        let mut scheduled = 0;
        for tone in cue.tones() {
            match backend.schedule_tone(&ScheduledTone::at_origin(tone, origin)) {
                Ok(()) => scheduled += 1,
                Err(e) => log::warn!("[synth] dropped {:.0} Hz tone: {}", tone.frequency_hz, e),
            }
        }
        log::debug!("[synth] {:?} scheduled {} tones at t={:.3}", kind, scheduled, origin);
        CuePlayback::Scheduled(scheduled)
    }

    /// Release the shared context. Only the first call does anything.
    pub fn close(&self) {
        let previous = std::mem::replace(&mut *self.context.borrow_mut(), ContextSlot::Released);
        match previous {
            ContextSlot::Open(backend) => {
                if let Err(e) = backend.close() {
                    log::warn!("[synth] close failed: {}", e);
                }
                log::debug!("[synth] audio context released");
            }
            ContextSlot::Released => log::warn!("[synth] close called twice"),
            ContextSlot::Unopened | ContextSlot::Unavailable => {}
        }
    }

    pub fn is_released(&self) -> bool {
        matches!(*self.context.borrow(), ContextSlot::Released)
    }

    fn snapshot(&self) -> CapabilitySnapshot {
        CapabilitySnapshot::query(self.gate.as_ref(), FeatureCategory::SoundEffects)
    }
}

impl Drop for ToneSynthesizer {
    fn drop(&mut self) {
        if let ContextSlot::Open(backend) = std::mem::replace(self.context.get_mut(), ContextSlot::Released) {
            if let Err(e) = backend.close() {
                log::warn!("[synth] close on drop failed: {}", e);
            }
        }
    }
}
