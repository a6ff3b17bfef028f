// Shared timing/audio tuning constants used by the controller, synthesizer and web frontend.

use std::time::Duration;

// Busy-period length per mode. The frontend animations must settle at exactly these instants.
pub const DIE_BUSY_DURATION: Duration = Duration::from_millis(2000);
pub const COIN_BUSY_DURATION: Duration = Duration::from_millis(1800);

// Cue origin lead over the audio context clock (seconds)
pub const CUE_LEAD_SEC: f64 = 0.005;

// Fundamental envelope, as fractions of tone duration
pub const ATTACK_END_FRACTION: f64 = 0.1;
pub const SUSTAIN_END_FRACTION: f64 = 0.6;

// Overtones hold for a shorter time and are silent well before the oscillator stops
pub const OVERTONE_SUSTAIN_END_FRACTION: f64 = 0.4;
pub const OVERTONE_RELEASE_END_FRACTION: f64 = 0.7;

// Exponential ramps cannot reach zero; decay toward this floor instead
pub const ENVELOPE_FLOOR: f32 = 0.001;

// Chime overtone: frequency multiple and peak relative to the fundamental
pub const OVERTONE_RATIO: f32 = 2.0;
pub const OVERTONE_VOLUME_SCALE: f32 = 0.3;

// Persisted capability records
pub const PURCHASES_STORAGE_KEY: &str = "dice-app-premium";
pub const ENABLED_STORAGE_KEY: &str = "dice-app-enabled";
