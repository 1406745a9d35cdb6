use crate::constants::{LOADING_OVERLAY_ID, MAIN_CONTENT_ID};
use web_sys as web;

#[inline]
fn show_element(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1("hidden");
        // fallback for pages without the .hidden rule
        _ = el.set_attribute("style", "");
    }
}

#[inline]
fn hide_element(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

/// Swap the loading overlay for the main content.
pub fn reveal(document: &web::Document) {
    hide_element(document, LOADING_OVERLAY_ID);
    show_element(document, MAIN_CONTENT_ID);
    if let Some(body) = document.body() {
        _ = body.class_list().add_1("loaded");
    }
}
