#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::core::{GridSpec, RendererState};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub mod constants;
pub mod core;
mod dom;
mod events;
mod fetch;
mod frame;
mod loading;
mod overlay;
mod pages;

thread_local! {
    static BACKGROUND: RefCell<Option<Rc<RefCell<frame::BackgroundLoop>>>> = const { RefCell::new(None) };
    static GATE: RefCell<Option<Rc<RefCell<loading::GateRuntime>>>> = const { RefCell::new(None) };
}

fn default_grid_spec() -> anyhow::Result<GridSpec> {
    Ok(GridSpec::new(
        GRID_SPACING,
        GRID_MAX_OFFSET,
        DOT_RADIUS,
        DOT_COLOR,
        BACKGROUND_COLOR,
    )?)
}

/// Find `#backgroundCanvas`, creating it as the first body child if missing.
fn background_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = match document.get_element_by_id(BACKGROUND_CANVAS_ID) {
        Some(el) => el,
        None => {
            let el = document
                .create_element("canvas")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            el.set_id(BACKGROUND_CANVAS_ID);
            let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
            body.insert_before(&el, body.first_child().as_ref())
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            el
        }
    };
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

fn start_background(document: &web::Document) -> anyhow::Result<()> {
    let canvas = background_canvas(document)?;
    let viewport = dom::sync_canvas_to_window(&canvas);
    let state = RendererState::new(default_grid_spec()?, viewport);
    let bg = frame::build_loop(canvas, state)?;
    events::wire_background_inputs(&bg);
    {
        let mut bg = bg.borrow_mut();
        bg.visibility_changed(document.hidden());
        bg.start();
    }
    log::info!(
        "[grid] background running at {}x{}",
        viewport.width,
        viewport.height
    );
    BACKGROUND.with(|slot| *slot.borrow_mut() = Some(bg));
    Ok(())
}

/// Page-script control over the background animation.
#[wasm_bindgen]
pub struct CanvasBackground {
    inner: Rc<RefCell<frame::BackgroundLoop>>,
}

#[wasm_bindgen]
impl CanvasBackground {
    pub fn start(&self) {
        self.inner.borrow_mut().start();
    }

    pub fn stop(&self) {
        self.inner.borrow_mut().stop();
    }

    /// Replace the grid parameters; applies from the next frame.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(
        &self,
        spacing: f64,
        max_offset: f64,
        dot_radius: f64,
        dot_color: String,
    ) -> Result<(), JsValue> {
        let spec = GridSpec::new(spacing, max_offset, dot_radius, dot_color, BACKGROUND_COLOR)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner.borrow_mut().state.set_spec(spec);
        Ok(())
    }
}

/// Handle to the running background, if this page has one.
#[wasm_bindgen(js_name = canvasBackground)]
pub fn canvas_background() -> Option<CanvasBackground> {
    BACKGROUND.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|inner| CanvasBackground {
                inner: inner.clone(),
            })
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gradshow-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    pages::chrome::install(&document);

    // The loading screen must come up even if the background cannot.
    match loading::start_loading_gate(&document) {
        Ok(Some(runtime)) => GATE.with(|slot| *slot.borrow_mut() = Some(runtime)),
        Ok(None) => {}
        Err(e) => {
            log::error!("[gate] {:?}; revealing immediately", e);
            overlay::reveal(&document);
        }
    }
    if let Err(e) = start_background(&document) {
        log::error!("[grid] background disabled: {:?}", e);
    }

    pages::populate(document).await
}
