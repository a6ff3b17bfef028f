use dice_core::{AudioBackend, AudioError, BackendFactory, GainStep, ScheduledTone, Waveform};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn js_err(e: JsValue) -> String {
    format!("{:?}", e)
}

/// Await a context promise off the call path; a rejection is only logged.
fn settle(promise: js_sys::Promise, what: &'static str) {
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("[audio] {} rejected: {:?}", what, e);
        }
    });
}

/// Browser audio context: one oscillator -> gain -> destination chain per tone.
pub struct WebAudioBackend {
    ctx: web::AudioContext,
}

impl WebAudioBackend {
    pub fn open() -> Result<Self, AudioError> {
        let ctx = web::AudioContext::new().map_err(|e| AudioError::Unavailable(js_err(e)))?;
        log::info!("[audio] context created at {} Hz", ctx.sample_rate());
        Ok(Self { ctx })
    }

    /// Factory handed to the synthesizer so the context is only built on first use.
    pub fn factory() -> BackendFactory {
        Box::new(|| -> Result<Box<dyn AudioBackend>, AudioError> { Ok(Box::new(Self::open()?)) })
    }
}

fn oscillator_type(waveform: Waveform) -> web::OscillatorType {
    match waveform {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Square => web::OscillatorType::Square,
        Waveform::Saw => web::OscillatorType::Sawtooth,
        Waveform::Triangle => web::OscillatorType::Triangle,
    }
}

fn apply_step(param: &web::AudioParam, step: &GainStep) -> Result<web::AudioParam, JsValue> {
    match *step {
        GainStep::SetAt { value, time } => param.set_value_at_time(value, time),
        GainStep::LinearRampTo { value, time } => param.linear_ramp_to_value_at_time(value, time),
        GainStep::ExponentialRampTo { value, time } => {
            param.exponential_ramp_to_value_at_time(value, time)
        }
    }
}

impl AudioBackend for WebAudioBackend {
    fn current_time(&self) -> f64 {
        self.ctx.current_time()
    }

    fn is_suspended(&self) -> bool {
        self.ctx.state() == web::AudioContextState::Suspended
    }

    fn resume(&self) -> Result<(), AudioError> {
        let promise = self.ctx.resume().map_err(|e| AudioError::Context(js_err(e)))?;
        settle(promise, "resume");
        Ok(())
    }

    fn schedule_tone(&self, tone: &ScheduledTone) -> Result<(), AudioError> {
        let schedule_err = |e: JsValue| AudioError::Schedule(js_err(e));
        let src = web::OscillatorNode::new(&self.ctx).map_err(schedule_err)?;
        src.set_type(oscillator_type(tone.waveform));
        src.frequency().set_value(tone.frequency_hz);

        let gain = web::GainNode::new(&self.ctx).map_err(schedule_err)?;
        let param = gain.gain();
        for step in tone.envelope.steps() {
            apply_step(&param, step).map_err(schedule_err)?;
        }

        src.connect_with_audio_node(&gain).map_err(schedule_err)?;
        gain.connect_with_audio_node(&self.ctx.destination())
            .map_err(schedule_err)?;
        src.start_with_when(tone.start_sec).map_err(schedule_err)?;
        src.stop_with_when(tone.stop_sec).map_err(schedule_err)?;
        Ok(())
    }

    fn close(&self) -> Result<(), AudioError> {
        let promise = self.ctx.close().map_err(|e| AudioError::Context(js_err(e)))?;
        settle(promise, "close");
        Ok(())
    }
}
