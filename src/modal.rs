//! The premium upgrade dialog.
//!
//! Visibility lives in the `hidden` class; `aria-hidden` mirrors it so
//! screen readers skip the closed dialog.

use crate::constants::{CLASS_HIDDEN, PREMIUM_MODAL_ID};
use web_sys as web;

fn set_open(document: &web::Document, open: bool) {
    let Some(el) = document.get_element_by_id(PREMIUM_MODAL_ID) else {
        log::warn!("[modal] missing #{}", PREMIUM_MODAL_ID);
        return;
    };
    _ = el.class_list().toggle_with_force(CLASS_HIDDEN, !open);
    _ = el.set_attribute("aria-hidden", if open { "false" } else { "true" });
    log::debug!("[modal] {}", if open { "open" } else { "closed" });
}

pub fn open(document: &web::Document) {
    set_open(document, true);
}

pub fn close(document: &web::Document) {
    set_open(document, false);
}

pub fn is_open(document: &web::Document) -> bool {
    document
        .get_element_by_id(PREMIUM_MODAL_ID)
        .map(|el| !el.class_list().contains(CLASS_HIDDEN))
        .unwrap_or(false)
}

pub fn toggle(document: &web::Document) {
    set_open(document, !is_open(document));
}
