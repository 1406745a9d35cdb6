use crate::constants::*;
use crate::core::chrome::{footer_inner_html, navbar_inner_html, navbar_scrolled, Page};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn active_page(placeholder: &web::Element) -> Page {
    Page::from_data_active(&placeholder.get_attribute("data-active").unwrap_or_default())
}

fn replace_placeholder(
    document: &web::Document,
    id: &str,
    tag: &str,
    class: &str,
    inner_html: impl FnOnce(&web::Element) -> String,
) -> Option<web::Element> {
    let placeholder = document.get_element_by_id(id)?;
    let el = document.create_element(tag).ok()?;
    el.set_class_name(class);
    el.set_inner_html(&inner_html(&placeholder));
    placeholder.replace_with_with_node_1(&el).ok()?;
    Some(el)
}

/// Swap header, loading header and footer placeholders for real markup.
pub fn install(document: &web::Document) {
    replace_placeholder(document, HEADER_PLACEHOLDER_ID, "nav", "main-navbar", |p| {
        navbar_inner_html(active_page(p))
    });
    if let Some(nav) = replace_placeholder(
        document,
        LOADING_HEADER_PLACEHOLDER_ID,
        "nav",
        "main-navbar",
        |p| navbar_inner_html(active_page(p)),
    ) {
        _ = nav.class_list().add_1("loading-navbar");
    }
    replace_placeholder(document, FOOTER_PLACEHOLDER_ID, "footer", "main-footer", |_| {
        footer_inner_html()
    });
    wire_navbar_scroll(document);
}

fn update_navbars(document: &web::Document, scroll_y: f64) {
    let Ok(navbars) = document.query_selector_all(".main-navbar") else {
        return;
    };
    let scrolled = navbar_scrolled(scroll_y);
    for i in 0..navbars.length() {
        let Some(nav) = navbars.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let classes = nav.class_list();
        if classes.contains("loading-navbar") {
            continue;
        }
        _ = if scrolled {
            classes.add_1("scrolled")
        } else {
            classes.remove_1("scrolled")
        };
    }
}

fn wire_navbar_scroll(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let scroll_y = |w: &web::Window| w.scroll_y().unwrap_or(0.0);
    update_navbars(document, scroll_y(&window));
    let doc = document.clone();
    let win = window.clone();
    dom::listen(&window, "scroll", move |_: web::Event| {
        update_navbars(&doc, scroll_y(&win));
    });
}
