//! Pure mapping from controller state to presentation values.
//!
//! No DOM access here so the mapping can be tested on the host.

use crate::constants::{COIN_HEADS_ROTATION_DEG, COIN_TAILS_ROTATION_DEG};
use dice_core::{
    AnimationStatus, CapabilitySnapshot, CoinSide, DieFace, FeatureCategory, Mode, Outcome,
};

/// Text for the main action button.
pub fn action_label(mode: Mode, status: AnimationStatus) -> &'static str {
    match (mode, status.is_busy()) {
        (Mode::Die, false) => "Roll the Dice",
        (Mode::Die, true) => "Rolling...",
        (Mode::Coin, false) => "Toss the Coin",
        (Mode::Coin, true) => "Flipping...",
    }
}

/// Resting rotation that brings `face` to the top of the cube.
///
/// Every pose keeps the same number of full turns as the roll keyframes end
/// on, so settling never spins backwards.
pub fn die_rotation(face: DieFace) -> &'static str {
    match face.value() {
        2 => "rotateX(-630deg) rotateY(270deg) rotateZ(0deg)",
        3 => "rotateX(-630deg) rotateY(360deg) rotateZ(0deg)",
        4 => "rotateX(-450deg) rotateY(360deg) rotateZ(0deg)",
        5 => "rotateX(-630deg) rotateY(450deg) rotateZ(0deg)",
        6 => "rotateX(-720deg) rotateY(360deg) rotateZ(0deg)",
        _ => "rotateX(-540deg) rotateY(360deg) rotateZ(0deg)",
    }
}

pub fn coin_rotation_deg(side: CoinSide) -> i32 {
    match side {
        CoinSide::Heads => COIN_HEADS_ROTATION_DEG,
        CoinSide::Tails => COIN_TAILS_ROTATION_DEG,
    }
}

/// CSS transform for the settled pose of `outcome`.
pub fn resting_transform(outcome: Outcome) -> String {
    match outcome {
        Outcome::Die(face) => die_rotation(face).to_owned(),
        Outcome::Coin(side) => format!("rotateX({}deg)", coin_rotation_deg(side)),
    }
}

/// Extra class for the shadow under the die or coin.
pub fn shadow_modifier(status: AnimationStatus) -> Option<&'static str> {
    if status.is_throwing() {
        Some("animating")
    } else if !status.is_busy() {
        Some("visible")
    } else {
        None
    }
}

/// State of a premium feature's toggle button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureToggle {
    /// Not purchased yet; clicking opens the premium modal.
    Locked,
    Off,
    On,
    /// Switched on, but the host cannot play it (no audio output).
    Unavailable,
}

impl FeatureToggle {
    /// `playable` is whether the feature would actually sound right now.
    pub fn from_snapshot(snapshot: CapabilitySnapshot, playable: bool) -> Self {
        match (snapshot.purchased, snapshot.enabled_by_user, playable) {
            (false, _, _) => FeatureToggle::Locked,
            (true, false, _) => FeatureToggle::Off,
            (true, true, true) => FeatureToggle::On,
            (true, true, false) => FeatureToggle::Unavailable,
        }
    }

    pub fn aria_label(self, category: FeatureCategory) -> &'static str {
        use FeatureCategory::*;
        match (self, category) {
            (FeatureToggle::Locked, SoundEffects) => "Unlock sound effects",
            (FeatureToggle::Off, SoundEffects) => "Turn sound effects on",
            (FeatureToggle::On, SoundEffects) => "Turn sound effects off",
            (FeatureToggle::Unavailable, SoundEffects) => "Sound effects unavailable",
            (FeatureToggle::Locked, AmbientSound) => "Unlock fireplace ambience",
            (FeatureToggle::Off, AmbientSound) => "Turn fireplace ambience on",
            (FeatureToggle::On, AmbientSound) => "Turn fireplace ambience off",
            (FeatureToggle::Unavailable, AmbientSound) => "Fireplace ambience unavailable",
        }
    }

    pub fn data_state(self) -> &'static str {
        match self {
            FeatureToggle::Locked => "locked",
            FeatureToggle::Off => "off",
            FeatureToggle::On => "on",
            FeatureToggle::Unavailable => "unavailable",
        }
    }
}
