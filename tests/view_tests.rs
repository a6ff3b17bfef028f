// Host-side tests for the state -> presentation mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]

mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/view.rs"]
mod view;

use dice_core::{
    AnimationStatus, CapabilitySnapshot, CoinSide, DieFace, FeatureCategory, Mode, Outcome,
};
use view::*;

const BUSY: AnimationStatus = AnimationStatus::Busy {
    throwing: true,
    rolling: true,
};

fn face(v: u8) -> DieFace {
    DieFace::new(v).unwrap()
}

#[test]
fn action_label_tracks_mode_and_status() {
    assert_eq!(action_label(Mode::Die, AnimationStatus::Idle), "Roll the Dice");
    assert_eq!(action_label(Mode::Die, BUSY), "Rolling...");
    assert_eq!(action_label(Mode::Coin, AnimationStatus::Idle), "Toss the Coin");
    assert_eq!(action_label(Mode::Coin, BUSY), "Flipping...");
}

#[test]
fn every_face_has_a_distinct_pose() {
    let poses: Vec<&str> = (1..=6).map(|v| die_rotation(face(v))).collect();
    for (i, a) in poses.iter().enumerate() {
        for b in &poses[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(
        die_rotation(face(1)),
        "rotateX(-540deg) rotateY(360deg) rotateZ(0deg)"
    );
}

#[test]
fn tails_is_half_a_turn_past_heads() {
    let heads = coin_rotation_deg(CoinSide::Heads);
    let tails = coin_rotation_deg(CoinSide::Tails);
    assert_eq!(heads % 360, 0);
    assert_eq!((heads - tails).abs(), 180);
}

#[test]
fn resting_transform_per_outcome() {
    assert_eq!(
        resting_transform(Outcome::Coin(CoinSide::Tails)),
        "rotateX(-900deg)"
    );
    assert_eq!(
        resting_transform(Outcome::Die(face(6))),
        die_rotation(face(6))
    );
}

#[test]
fn shadow_follows_animation() {
    assert_eq!(shadow_modifier(AnimationStatus::Idle), Some("visible"));
    assert_eq!(shadow_modifier(BUSY), Some("animating"));
    let spinning_only = AnimationStatus::Busy {
        throwing: false,
        rolling: true,
    };
    assert_eq!(shadow_modifier(spinning_only), None);
}

#[test]
fn feature_toggle_states() {
    let snap = |purchased, enabled_by_user| CapabilitySnapshot {
        enabled_by_user,
        purchased,
    };
    let toggle = FeatureToggle::from_snapshot;
    assert_eq!(toggle(snap(false, false), true), FeatureToggle::Locked);
    // A stale enabled flag without a purchase still reads as locked.
    assert_eq!(toggle(snap(false, true), true), FeatureToggle::Locked);
    assert_eq!(toggle(snap(true, false), true), FeatureToggle::Off);
    assert_eq!(toggle(snap(true, false), false), FeatureToggle::Off);
    assert_eq!(toggle(snap(true, true), true), FeatureToggle::On);
    assert_eq!(toggle(snap(true, true), false), FeatureToggle::Unavailable);
    assert_eq!(FeatureToggle::On.data_state(), "on");
    assert_eq!(FeatureToggle::Unavailable.data_state(), "unavailable");
}

#[test]
fn toggle_labels_name_their_feature() {
    let states = [
        FeatureToggle::Locked,
        FeatureToggle::Off,
        FeatureToggle::On,
        FeatureToggle::Unavailable,
    ];
    for (i, a) in states.iter().enumerate() {
        for b in &states[i + 1..] {
            for category in FeatureCategory::all() {
                assert_ne!(a.aria_label(category), b.aria_label(category));
            }
        }
    }
    for state in states {
        assert_ne!(
            state.aria_label(FeatureCategory::SoundEffects),
            state.aria_label(FeatureCategory::AmbientSound)
        );
    }
}
