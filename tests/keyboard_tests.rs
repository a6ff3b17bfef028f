// Host-side tests for the key map.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]

mod keys {
    include!("../src/events/keys.rs");
}

use dice_core::Mode;
use keys::*;

#[test]
fn space_and_enter_trigger() {
    assert_eq!(action_for_key(" "), Some(KeyAction::Trigger));
    assert_eq!(action_for_key("Enter"), Some(KeyAction::Trigger));
}

#[test]
fn mode_keys_are_case_insensitive() {
    for key in ["d", "D"] {
        assert_eq!(action_for_key(key), Some(KeyAction::SwitchMode(Mode::Die)));
    }
    for key in ["c", "C"] {
        assert_eq!(action_for_key(key), Some(KeyAction::SwitchMode(Mode::Coin)));
    }
}

#[test]
fn feature_and_premium_keys() {
    assert_eq!(action_for_key("s"), Some(KeyAction::ToggleSound));
    assert_eq!(action_for_key("S"), Some(KeyAction::ToggleSound));
    assert_eq!(action_for_key("a"), Some(KeyAction::ToggleAmbient));
    assert_eq!(action_for_key("A"), Some(KeyAction::ToggleAmbient));
    assert_eq!(action_for_key("p"), Some(KeyAction::TogglePremium));
    assert_eq!(action_for_key("P"), Some(KeyAction::TogglePremium));
}

#[test]
fn unmapped_keys_are_ignored() {
    for key in ["", "x", "Escape", "ArrowUp", "Shift", "Space", "dd"] {
        assert_eq!(action_for_key(key), None, "key {:?}", key);
    }
}

#[test]
fn only_trigger_suppresses_browser_default() {
    assert!(suppresses_default(KeyAction::Trigger));
    assert!(!suppresses_default(KeyAction::SwitchMode(Mode::Die)));
    assert!(!suppresses_default(KeyAction::SwitchMode(Mode::Coin)));
    assert!(!suppresses_default(KeyAction::ToggleSound));
    assert!(!suppresses_default(KeyAction::ToggleAmbient));
    assert!(!suppresses_default(KeyAction::TogglePremium));
}
