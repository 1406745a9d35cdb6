use crate::core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach `handler` to `target` for the lifetime of the page.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(element: &web::Element, mut handler: impl FnMut() + 'static) {
    listen(element, "click", move |_: web::Event| handler());
}

/// Current window inner size in CSS pixels; zero if unavailable.
pub fn window_viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width, height)
}

/// Match the canvas backing store to the window and report the new size.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> Viewport {
    let vp = window_viewport();
    canvas.set_width(vp.width.max(0.0) as u32);
    canvas.set_height(vp.height.max(0.0) as u32);
    vp
}

pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_style(element: &web::Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

/// `?key=` from the current location, already percent-decoded.
pub fn query_param(key: &str) -> Option<String> {
    let search = web::window()?.location().search().ok()?;
    web::UrlSearchParams::new_with_str(&search).ok()?.get(key)
}

/// `designer.html?name=...` link for a roster full name.
pub fn designer_href(full_name: &str) -> String {
    let encoded: String = js_sys::encode_uri_component(full_name).into();
    format!("designer.html?name={encoded}")
}
