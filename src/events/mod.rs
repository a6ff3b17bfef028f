pub mod buttons;
pub mod keyboard;
pub mod keys;
