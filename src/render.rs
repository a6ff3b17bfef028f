use crate::constants::*;
use crate::dom;
use crate::view::{self, FeatureToggle};
use dice_core::{ControllerView, FeatureCategory, Mode, Outcome};
use web_sys as web;

/// Everything drawn from controller and store state in one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderState {
    pub view: ControllerView,
    pub sound: FeatureToggle,
    pub ambient: FeatureToggle,
    pub sound_purchased: bool,
    pub ambient_purchased: bool,
}

struct SceneIds {
    body: &'static str,
    wrapper: &'static str,
    shadow: &'static str,
    spin_class: &'static str,
}

fn scene_ids(mode: Mode) -> SceneIds {
    match mode {
        Mode::Die => SceneIds {
            body: DIE_ID,
            wrapper: DIE_WRAPPER_ID,
            shadow: DIE_SHADOW_ID,
            spin_class: CLASS_ROLLING,
        },
        Mode::Coin => SceneIds {
            body: COIN_ID,
            wrapper: COIN_WRAPPER_ID,
            shadow: COIN_SHADOW_ID,
            spin_class: CLASS_FLIPPING,
        },
    }
}

fn body_style(outcome: Outcome, busy: bool) -> String {
    // The coin's flip keyframes read their final angle from a custom property.
    let end_rotation = match outcome {
        Outcome::Coin(side) => format!("--end-rotation: {}deg;", view::coin_rotation_deg(side)),
        Outcome::Die(_) => String::new(),
    };
    if busy {
        end_rotation
    } else {
        format!("{} transform: {};", end_rotation, view::resting_transform(outcome))
    }
}

pub fn apply(document: &web::Document, state: &RenderState) {
    let ControllerView {
        mode,
        outcome,
        status,
    } = state.view;
    let busy = status.is_busy();

    dom::set_class(document, DIE_SCENE_ID, CLASS_HIDDEN, mode != Mode::Die);
    dom::set_class(document, COIN_SCENE_ID, CLASS_HIDDEN, mode != Mode::Coin);

    let ids = scene_ids(mode);
    dom::set_class(document, ids.body, ids.spin_class, status.is_rolling());
    dom::set_class(document, ids.wrapper, CLASS_THROWING, status.is_throwing());
    if let Some(el) = document.get_element_by_id(ids.body) {
        _ = el.set_attribute("data-outcome", &outcome.to_string());
        _ = el.set_attribute("style", body_style(outcome, busy).trim());
    }
    let shadow = view::shadow_modifier(status);
    dom::set_class(document, ids.shadow, "animating", shadow == Some("animating"));
    dom::set_class(document, ids.shadow, "visible", shadow == Some("visible"));

    dom::set_text(document, ACTION_BUTTON_ID, view::action_label(mode, status));
    dom::set_disabled(document, ACTION_BUTTON_ID, busy);
    for (id, button_mode) in [(MODE_DIE_BUTTON_ID, Mode::Die), (MODE_COIN_BUTTON_ID, Mode::Coin)] {
        dom::set_class(document, id, CLASS_ACTIVE, mode == button_mode);
        dom::set_disabled(document, id, busy);
    }

    for (id, toggle, category) in [
        (SOUND_TOGGLE_ID, state.sound, FeatureCategory::SoundEffects),
        (AMBIENT_TOGGLE_ID, state.ambient, FeatureCategory::AmbientSound),
    ] {
        if let Some(el) = document.get_element_by_id(id) {
            _ = el.set_attribute("data-state", toggle.data_state());
            _ = el.set_attribute("aria-label", toggle.aria_label(category));
        }
    }
    dom::set_class(document, AMBIENCE_ID, CLASS_PLAYING, state.ambient == FeatureToggle::On);
    dom::set_class(document, PURCHASE_SOUND_ID, CLASS_PURCHASED, state.sound_purchased);
    dom::set_disabled(document, PURCHASE_SOUND_ID, state.sound_purchased);
    dom::set_class(document, PURCHASE_AMBIENT_ID, CLASS_PURCHASED, state.ambient_purchased);
    dom::set_disabled(document, PURCHASE_AMBIENT_ID, state.ambient_purchased);
}
