//! Test doubles for hosts without a browser: a fixed feature gate and an
//! audio backend that records every call instead of making sound.

use crate::error::AudioError;
use crate::gate::{FeatureCategory, FeatureGate};
use crate::synth::{AudioBackend, BackendFactory, ScheduledTone, ToneSynthesizer};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Gate answering the same for every category; flags can be flipped between calls.
pub struct StaticGate {
    enabled: Cell<bool>,
    purchased: Cell<bool>,
}

impl StaticGate {
    pub fn new(enabled: bool, purchased: bool) -> Self {
        Self {
            enabled: Cell::new(enabled),
            purchased: Cell::new(purchased),
        }
    }

    pub fn allow_all() -> Self {
        Self::new(true, true)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    pub fn set_purchased(&self, purchased: bool) {
        self.purchased.set(purchased);
    }
}

impl FeatureGate for StaticGate {
    fn is_enabled(&self, _category: FeatureCategory) -> bool {
        self.enabled.get()
    }

    fn is_purchased(&self, _category: FeatureCategory) -> bool {
        self.purchased.get()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BackendCall {
    Resume,
    Schedule(ScheduledTone),
    Close,
}

/// Audio backend that logs calls. Share it through [`recording_factory`].
#[derive(Default)]
pub struct RecordingBackend {
    calls: RefCell<Vec<BackendCall>>,
    opened: Cell<usize>,
    suspended: Cell<bool>,
    time: Cell<f64>,
}

impl RecordingBackend {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Starts suspended, like a context created before any user gesture.
    pub fn suspended() -> Rc<Self> {
        let backend = Self::default();
        backend.suspended.set(true);
        Rc::new(backend)
    }

    pub fn set_time(&self, seconds: f64) {
        self.time.set(seconds);
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.borrow().clone()
    }

    pub fn tones(&self) -> Vec<ScheduledTone> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                BackendCall::Schedule(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    /// How many times the factory built a context.
    pub fn opened(&self) -> usize {
        self.opened.get()
    }

    pub fn count(&self, call: fn(&BackendCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| call(c)).count()
    }
}

struct SharedRecording(Rc<RecordingBackend>);

impl AudioBackend for SharedRecording {
    fn current_time(&self) -> f64 {
        self.0.time.get()
    }

    fn is_suspended(&self) -> bool {
        self.0.suspended.get()
    }

    fn resume(&self) -> Result<(), AudioError> {
        self.0.suspended.set(false);
        self.0.calls.borrow_mut().push(BackendCall::Resume);
        Ok(())
    }

    fn schedule_tone(&self, tone: &ScheduledTone) -> Result<(), AudioError> {
        self.0
            .calls
            .borrow_mut()
            .push(BackendCall::Schedule(tone.clone()));
        Ok(())
    }

    fn close(&self) -> Result<(), AudioError> {
        self.0.calls.borrow_mut().push(BackendCall::Close);
        Ok(())
    }
}

pub fn recording_factory(backend: &Rc<RecordingBackend>) -> BackendFactory {
    let shared = Rc::clone(backend);
    Box::new(move || -> Result<Box<dyn AudioBackend>, AudioError> {
        shared.opened.set(shared.opened.get() + 1);
        Ok(Box::new(SharedRecording(Rc::clone(&shared))))
    })
}

/// Factory for hosts with no audio at all.
pub fn unavailable_factory() -> BackendFactory {
    Box::new(|| -> Result<Box<dyn AudioBackend>, AudioError> {
        Err(AudioError::Unavailable("no audio output on this host".to_owned()))
    })
}

/// Synthesizer that never makes a sound.
pub fn muted_synth() -> Rc<ToneSynthesizer> {
    Rc::new(ToneSynthesizer::new(
        Rc::new(StaticGate::new(false, false)),
        unavailable_factory(),
    ))
}
