// Host-side tests for tone gain envelopes.

use dice_core::constants::ENVELOPE_FLOOR;
use dice_core::*;

fn tone(duration_sec: f64, peak: f32, overtone: bool) -> ToneEvent {
    ToneEvent {
        harmonic_overtone: overtone,
        ..ToneEvent::gentle(440.0, duration_sec, peak, 0.0)
    }
}

#[test]
fn fundamental_fades_in_holds_then_decays() {
    let start = 3.0;
    let env = Envelope::for_tone(&tone(1.0, 0.1, false), start);

    assert_eq!(env.gain_at(start - 0.01), 0.0);
    assert_eq!(env.gain_at(start), 0.0);
    assert!((env.gain_at(start + 0.05) - 0.05).abs() < 1e-4, "attack not linear");
    assert!((env.gain_at(start + 0.1) - 0.1).abs() < 1e-6);
    assert!((env.gain_at(start + 0.35) - 0.1).abs() < 1e-6, "not sustaining");
    assert!((env.gain_at(start + 0.6) - 0.1).abs() < 1e-6);

    let mid_decay = env.gain_at(start + 0.8);
    assert!(mid_decay < 0.1 && mid_decay > ENVELOPE_FLOOR);
    assert!((env.gain_at(start + 1.0) - ENVELOPE_FLOOR).abs() < 1e-6);
    assert!((env.gain_at(start + 5.0) - ENVELOPE_FLOOR).abs() < 1e-6);
    assert!((env.end_time() - (start + 1.0)).abs() < 1e-9);
}

#[test]
fn decay_is_exponential() {
    let env = Envelope::for_tone(&tone(1.0, 0.1, false), 0.0);
    // Equal time steps divide the gain by a constant factor.
    let a = env.gain_at(0.7);
    let b = env.gain_at(0.8);
    let c = env.gain_at(0.9);
    assert!((b / a - c / b).abs() < 1e-3, "ratios {} vs {}", b / a, c / b);
}

#[test]
fn envelope_is_monotonic_within_each_phase() {
    let env = Envelope::for_tone(&tone(0.8, 0.12, false), 0.0);
    let mut prev = env.gain_at(0.0);
    for i in 1..=8 {
        let g = env.gain_at(0.01 * i as f64);
        assert!(g >= prev, "attack dipped at step {i}");
        prev = g;
    }
    let mut prev = env.gain_at(0.48);
    for i in 1..=32 {
        let g = env.gain_at(0.48 + 0.01 * i as f64);
        assert!(g <= prev + 1e-7, "release rose at step {i}");
        prev = g;
    }
}

#[test]
fn overtone_sustains_less_and_ends_early() {
    let fundamental = Envelope::for_tone(&tone(1.0, 0.1, false), 0.0);
    let overtone = Envelope::for_tone(&tone(1.0, 0.03, true), 0.0);

    assert!((overtone.gain_at(0.1) - 0.03).abs() < 1e-6);
    // Fundamental still holds at 50 %, overtone already decaying.
    assert!((fundamental.gain_at(0.5) - 0.1).abs() < 1e-6);
    assert!(overtone.gain_at(0.5) < 0.03);
    assert!((overtone.gain_at(0.7) - ENVELOPE_FLOOR).abs() < 1e-6);
    assert!(overtone.end_time() < fundamental.end_time());
}

#[test]
fn steps_follow_web_audio_call_order() {
    let env = Envelope::for_tone(&tone(0.5, 0.08, false), 1.0);
    let steps = env.steps();
    assert_eq!(steps.len(), 4);
    assert!(matches!(steps[0], GainStep::SetAt { value, .. } if value == 0.0));
    assert!(matches!(steps[1], GainStep::LinearRampTo { .. }));
    assert!(matches!(steps[2], GainStep::SetAt { .. }));
    assert!(matches!(steps[3], GainStep::ExponentialRampTo { .. }));
    for pair in steps.windows(2) {
        assert!(pair[1].time() >= pair[0].time());
    }
    // Exponential ramps must never target zero.
    assert!(steps[3].value() > 0.0);
}

#[test]
fn every_cue_tone_starts_and_ends_quietly() {
    for kind in [CueKind::Roll, CueKind::Flip] {
        for t in FeedbackCue::for_kind(kind).tones() {
            let env = Envelope::for_tone(t, 0.0);
            assert_eq!(env.gain_at(0.0), 0.0);
            assert!(env.gain_at(t.duration_sec) <= ENVELOPE_FLOOR + 1e-6);
        }
    }
}
