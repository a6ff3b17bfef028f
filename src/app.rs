use crate::events::keys::KeyAction;
use crate::modal;
use crate::render::RenderState;
use crate::view::FeatureToggle;
use dice_core::{AnimationController, CapabilityStore, FeatureCategory, FeatureGate};
use std::rc::Rc;
use web_sys as web;

/// Everything the DOM handlers need: the controller and the capability store.
pub struct App {
    pub controller: AnimationController,
    pub store: Rc<CapabilityStore>,
    pub document: web::Document,
}

impl App {
    pub fn dispatch(&self, action: KeyAction) {
        match action {
            KeyAction::Trigger => {
                self.controller.trigger();
            }
            KeyAction::SwitchMode(mode) => {
                self.controller.switch_mode(mode);
            }
            KeyAction::ToggleSound => self.toggle_feature(FeatureCategory::SoundEffects),
            KeyAction::ToggleAmbient => self.toggle_feature(FeatureCategory::AmbientSound),
            KeyAction::TogglePremium => modal::toggle(&self.document),
        }
    }

    /// Flip a premium feature; offers the purchase first if it is still locked.
    pub fn toggle_feature(&self, category: FeatureCategory) {
        if !self.store.is_purchased(category) {
            modal::open(&self.document);
            return;
        }
        let on = self.store.toggle_enabled(category);
        log::info!("[app] {:?} {}", category, if on { "on" } else { "off" });
    }

    /// Simulated checkout: unlocks immediately, no payment involved.
    pub fn purchase(&self, category: FeatureCategory) {
        if self.store.is_purchased(category) {
            return;
        }
        self.store.purchase(category);
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            view: self.controller.view(),
            sound: FeatureToggle::from_snapshot(
                self.store.snapshot(FeatureCategory::SoundEffects),
                self.controller.synth().is_available(),
            ),
            // The ambience layer is a looping video; the page can always show it.
            ambient: FeatureToggle::from_snapshot(
                self.store.snapshot(FeatureCategory::AmbientSound),
                true,
            ),
            sound_purchased: self.store.is_purchased(FeatureCategory::SoundEffects),
            ambient_purchased: self.store.is_purchased(FeatureCategory::AmbientSound),
        }
    }

    /// Page is going away: settle nothing further and release audio.
    pub fn shutdown(&self) {
        self.controller.teardown();
        self.controller.synth().close();
    }
}
