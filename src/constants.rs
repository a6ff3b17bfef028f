/// DOM hooks and presentation tuning for the web frontend.
///
/// Element ids match `index.html`; keeping them here keeps string literals
/// out of the wiring code.
// Scene
pub const DIE_ID: &str = "die";
pub const DIE_WRAPPER_ID: &str = "die-wrapper";
pub const DIE_SCENE_ID: &str = "die-scene";
pub const DIE_SHADOW_ID: &str = "die-shadow";
pub const COIN_ID: &str = "coin";
pub const COIN_WRAPPER_ID: &str = "coin-wrapper";
pub const COIN_SCENE_ID: &str = "coin-scene";
pub const COIN_SHADOW_ID: &str = "coin-shadow";

// Controls
pub const ACTION_BUTTON_ID: &str = "roll-button";
pub const MODE_DIE_BUTTON_ID: &str = "mode-die";
pub const MODE_COIN_BUTTON_ID: &str = "mode-coin";
pub const SOUND_TOGGLE_ID: &str = "sound-toggle";
pub const AMBIENT_TOGGLE_ID: &str = "ambient-toggle";

// Fireplace ambience layer, shown while the ambient upgrade is on
pub const AMBIENCE_ID: &str = "ambience";

// Premium modal
pub const PREMIUM_OPEN_ID: &str = "premium-open";
pub const PREMIUM_MODAL_ID: &str = "premium-modal";
pub const PREMIUM_CLOSE_ID: &str = "premium-close";
pub const PURCHASE_SOUND_ID: &str = "purchase-sound-effects";
pub const PURCHASE_AMBIENT_ID: &str = "purchase-ambient-sound";

// CSS classes toggled by the renderer
pub const CLASS_ROLLING: &str = "rolling";
pub const CLASS_FLIPPING: &str = "flipping";
pub const CLASS_THROWING: &str = "throwing";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_PURCHASED: &str = "purchased";
pub const CLASS_PLAYING: &str = "playing";

// Coin resting angles: several full turns, plus a half turn for tails
pub const COIN_HEADS_ROTATION_DEG: i32 = -720;
pub const COIN_TAILS_ROTATION_DEG: i32 = -900;
