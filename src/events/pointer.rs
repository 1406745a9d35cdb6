use crate::dom;
use crate::frame::BackgroundLoop;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Feed pointer, touch, resize and visibility events into the background loop.
pub fn wire_background_inputs(bg: &Rc<RefCell<BackgroundLoop>>) {
    let Some(window) = web::window() else {
        return;
    };

    let bg_move = bg.clone();
    dom::listen(&window, "pointermove", move |ev: web::PointerEvent| {
        bg_move
            .borrow_mut()
            .state
            .pointer_moved(ev.client_x() as f64, ev.client_y() as f64);
    });

    let bg_touch = bg.clone();
    dom::listen(&window, "touchmove", move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            bg_touch
                .borrow_mut()
                .state
                .pointer_moved(touch.client_x() as f64, touch.client_y() as f64);
        }
    });

    let bg_resize = bg.clone();
    dom::listen(&window, "resize", move |_: web::Event| {
        bg_resize.borrow_mut().resized();
    });

    if let Some(document) = window.document() {
        let bg_vis = bg.clone();
        let doc = document.clone();
        dom::listen(&document, "visibilitychange", move |_: web::Event| {
            bg_vis.borrow_mut().visibility_changed(doc.hidden());
        });
    }
}
