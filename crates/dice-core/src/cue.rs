use crate::constants::{OVERTONE_RATIO, OVERTONE_VOLUME_SCALE};
use smallvec::SmallVec;

/// Basic oscillator shape used by the tone synthesizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Saw,
    Triangle,
}

/// Semantic action a cue accompanies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CueKind {
    Roll,
    Flip,
}

/// One synthesized tone inside a cue.
///
/// Fields:
/// - `frequency_hz`: oscillator pitch in Hertz
/// - `duration_sec`: oscillator lifetime; the envelope fits inside it
/// - `peak_volume`: linear gain reached after the attack
/// - `start_offset_sec`: start relative to the cue origin, never to a previous tone
/// - `waveform`: oscillator shape
/// - `harmonic_overtone`: quieter partial above a chime fundamental; gets the shorter envelope
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneEvent {
    pub frequency_hz: f32,
    pub duration_sec: f64,
    pub peak_volume: f32,
    pub start_offset_sec: f64,
    pub waveform: Waveform,
    pub harmonic_overtone: bool,
}

impl ToneEvent {
    /// Soft sine tone with the standard envelope.
    pub const fn gentle(frequency_hz: f32, duration_sec: f64, peak_volume: f32, start_offset_sec: f64) -> Self {
        Self {
            frequency_hz,
            duration_sec,
            peak_volume,
            start_offset_sec,
            waveform: Waveform::Sine,
            harmonic_overtone: false,
        }
    }

    /// Offset at which this tone's oscillator stops.
    pub fn end_offset_sec(&self) -> f64 {
        self.start_offset_sec + self.duration_sec
    }
}

/// Fundamental plus its octave overtone at reduced volume, both starting together.
pub fn chime(base_hz: f32, duration_sec: f64, peak_volume: f32, start_offset_sec: f64) -> [ToneEvent; 2] {
    let fundamental = ToneEvent::gentle(base_hz, duration_sec, peak_volume, start_offset_sec);
    let overtone = ToneEvent {
        frequency_hz: base_hz * OVERTONE_RATIO,
        peak_volume: peak_volume * OVERTONE_VOLUME_SCALE,
        harmonic_overtone: true,
        ..fundamental
    };
    [fundamental, overtone]
}

/// Fixed, time-ordered sequence of tones for one semantic action.
#[derive(Clone, Debug)]
pub struct FeedbackCue {
    pub kind: CueKind,
    tones: SmallVec<[ToneEvent; 6]>,
}

// Tumbling: four rising tones, ~150-200 ms apart.
const ROLL_TUMBLE: [ToneEvent; 4] = [
    ToneEvent::gentle(220.0, 0.30, 0.08, 0.00),
    ToneEvent::gentle(262.0, 0.25, 0.07, 0.15),
    ToneEvent::gentle(294.0, 0.25, 0.06, 0.30),
    ToneEvent::gentle(330.0, 0.30, 0.07, 0.50),
];
const ROLL_CHIME_HZ: f32 = 392.0; // G4
const ROLL_CHIME_DURATION_SEC: f64 = 0.8;
const ROLL_CHIME_VOLUME: f32 = 0.10;
const ROLL_CHIME_OFFSET_SEC: f64 = 1.4;

// Spinning shimmer: higher and tighter than the roll, matching the shorter coin animation.
const FLIP_SHIMMER: [ToneEvent; 4] = [
    ToneEvent::gentle(440.0, 0.20, 0.05, 0.00),
    ToneEvent::gentle(523.0, 0.20, 0.05, 0.12),
    ToneEvent::gentle(587.0, 0.20, 0.05, 0.24),
    ToneEvent::gentle(659.0, 0.25, 0.06, 0.40),
];
const FLIP_CHIME_HZ: f32 = 784.0; // G5
const FLIP_CHIME_DURATION_SEC: f64 = 0.9;
const FLIP_CHIME_VOLUME: f32 = 0.12;
const FLIP_CHIME_OFFSET_SEC: f64 = 1.1;

impl FeedbackCue {
    pub fn for_kind(kind: CueKind) -> Self {
        let (lead, chime_tones) = match kind {
            CueKind::Roll => (
                ROLL_TUMBLE,
                chime(ROLL_CHIME_HZ, ROLL_CHIME_DURATION_SEC, ROLL_CHIME_VOLUME, ROLL_CHIME_OFFSET_SEC),
            ),
            CueKind::Flip => (
                FLIP_SHIMMER,
                chime(FLIP_CHIME_HZ, FLIP_CHIME_DURATION_SEC, FLIP_CHIME_VOLUME, FLIP_CHIME_OFFSET_SEC),
            ),
        };
        let tones = lead.into_iter().chain(chime_tones).collect();
        Self { kind, tones }
    }

    /// Tones in scheduling order: the lead-in phrase, then the chime.
    pub fn tones(&self) -> &[ToneEvent] {
        &self.tones
    }

    /// Offset at which the last oscillator stops.
    pub fn span_sec(&self) -> f64 {
        self.tones
            .iter()
            .map(ToneEvent::end_offset_sec)
            .fold(0.0, f64::max)
    }
}
