use super::keys::KeyAction;
use crate::app::App;
use crate::constants::*;
use crate::{dom, modal};
use dice_core::{FeatureCategory, Mode};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn wire_action(document: &web::Document, element_id: &str, app: &Rc<App>, action: KeyAction) {
    let app = app.clone();
    dom::add_click_listener(document, element_id, move || app.dispatch(action));
}

pub fn wire_buttons(document: &web::Document, app: &Rc<App>) {
    wire_action(document, ACTION_BUTTON_ID, app, KeyAction::Trigger);
    wire_action(document, MODE_DIE_BUTTON_ID, app, KeyAction::SwitchMode(Mode::Die));
    wire_action(document, MODE_COIN_BUTTON_ID, app, KeyAction::SwitchMode(Mode::Coin));
    wire_action(document, SOUND_TOGGLE_ID, app, KeyAction::ToggleSound);
    wire_action(document, AMBIENT_TOGGLE_ID, app, KeyAction::ToggleAmbient);

    let doc_open = document.clone();
    dom::add_click_listener(document, PREMIUM_OPEN_ID, move || modal::open(&doc_open));
    let doc_close = document.clone();
    dom::add_click_listener(document, PREMIUM_CLOSE_ID, move || modal::close(&doc_close));

    for (id, category) in [
        (PURCHASE_SOUND_ID, FeatureCategory::SoundEffects),
        (PURCHASE_AMBIENT_ID, FeatureCategory::AmbientSound),
    ] {
        let app = app.clone();
        dom::add_click_listener(document, id, move || app.purchase(category));
    }

    wire_backdrop_close(document);
}

// Clicking the dimmed backdrop (not the dialog inside it) closes the modal.
fn wire_backdrop_close(document: &web::Document) {
    let Some(dialog) = document.get_element_by_id(PREMIUM_MODAL_ID) else {
        return;
    };
    let doc = document.clone();
    let dialog_for_check = dialog.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let on_backdrop = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|el| el == dialog_for_check)
            .unwrap_or(false);
        if on_backdrop {
            modal::close(&doc);
        }
    }) as Box<dyn FnMut(_)>);
    _ = dialog.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
