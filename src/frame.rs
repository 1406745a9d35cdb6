use crate::core::{DotCanvas, FrameHandle, FrameScheduler, RendererState, Viewport};
use glam::DVec2;
use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D canvas backend for the grid.
pub struct CanvasDots {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasDots {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }
}

impl DotCanvas for CanvasDots {
    fn clear(&mut self, color: &str, viewport: Viewport) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn fill_dot(&mut self, center: DVec2, radius: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
    }
}

/// `requestAnimationFrame` scheduler. Every request gets its own one-shot
/// callback that reports its handle back, so the loop can tell the pending
/// frame from a stale one. A cancelled callback is never invoked and its
/// small closure stays allocated.
pub struct RafScheduler {
    window: web::Window,
    owner: Weak<RefCell<BackgroundLoop>>,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let id = Rc::new(Cell::new(0));
        let fired = id.clone();
        let owner = self.owner.clone();
        let cb = Closure::once_into_js(move || {
            if let Some(bg) = owner.upgrade() {
                bg.borrow_mut().frame(FrameHandle(fired.get()));
            }
        });
        match self.window.request_animation_frame(cb.unchecked_ref()) {
            Ok(raw) => {
                id.set(raw);
                Some(FrameHandle(raw))
            }
            Err(e) => {
                log::warn!("[grid] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0);
    }
}

pub struct BackgroundLoop {
    pub state: RendererState,
    pub scheduler: RafScheduler,
    pub surface: CanvasDots,
    pub canvas: web::HtmlCanvasElement,
}

impl BackgroundLoop {
    pub fn start(&mut self) {
        self.state.start(&mut self.scheduler);
    }

    pub fn stop(&mut self) {
        self.state.stop(&mut self.scheduler);
    }

    pub fn visibility_changed(&mut self, hidden: bool) {
        self.state.visibility_changed(hidden, &mut self.scheduler);
    }

    pub fn resized(&mut self) {
        let vp = crate::dom::sync_canvas_to_window(&self.canvas);
        self.state.resized(vp);
    }

    fn frame(&mut self, fired: FrameHandle) {
        self.state.on_frame(fired, &mut self.scheduler, &mut self.surface);
    }
}

/// Build the loop around `canvas`. The loop is idle until `start` is called.
pub fn build_loop(
    canvas: web::HtmlCanvasElement,
    state: RendererState,
) -> anyhow::Result<Rc<RefCell<BackgroundLoop>>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let surface = CanvasDots::new(&canvas)?;
    Ok(Rc::new_cyclic(|owner| {
        RefCell::new(BackgroundLoop {
            state,
            scheduler: RafScheduler {
                window,
                owner: owner.clone(),
            },
            surface,
            canvas,
        })
    }))
}
