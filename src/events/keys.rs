use dice_core::Mode;

/// What a key press asks the app to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Trigger,
    SwitchMode(Mode),
    ToggleSound,
    ToggleAmbient,
    TogglePremium,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        " " | "Enter" => Some(KeyAction::Trigger),
        "d" | "D" => Some(KeyAction::SwitchMode(Mode::Die)),
        "c" | "C" => Some(KeyAction::SwitchMode(Mode::Coin)),
        "s" | "S" => Some(KeyAction::ToggleSound),
        "a" | "A" => Some(KeyAction::ToggleAmbient),
        "p" | "P" => Some(KeyAction::TogglePremium),
        _ => None,
    }
}

/// Keys whose browser default (page scroll, button activation) must be suppressed.
#[inline]
pub fn suppresses_default(action: KeyAction) -> bool {
    matches!(action, KeyAction::Trigger)
}
