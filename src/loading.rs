use crate::constants::*;
use crate::core::{GateConfig, GateSink, GateTimer, LoadingGate, TimerHost};
use crate::{dom, overlay};
use fnv::FnvHashMap;
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ArmedTimer {
    handle: i32,
    repeating: bool,
    callback: Closure<dyn FnMut()>,
}

/// `setTimeout`/`setInterval` backed timer host.
///
/// Cancelled callbacks are parked in `retired` instead of dropped: the gate
/// cancels timers from inside timer callbacks, and a closure must not be
/// freed while it is running.
pub struct WindowTimers {
    window: web::Window,
    runtime: Weak<RefCell<GateRuntime>>,
    armed: FnvHashMap<GateTimer, ArmedTimer>,
    retired: Vec<Closure<dyn FnMut()>>,
}

impl WindowTimers {
    fn callback(&self, timer: GateTimer) -> Closure<dyn FnMut()> {
        let runtime = self.runtime.clone();
        Closure::wrap(Box::new(move || {
            if let Some(rt) = runtime.upgrade() {
                rt.borrow_mut().fire(timer);
            }
        }) as Box<dyn FnMut()>)
    }

    fn arm(&mut self, timer: GateTimer, delay: Duration, repeating: bool) {
        self.cancel(timer);
        let callback = self.callback(timer);
        let ms = delay.as_millis().min(i32::MAX as u128) as i32;
        let f = callback.as_ref().unchecked_ref();
        let handle = if repeating {
            self.window
                .set_interval_with_callback_and_timeout_and_arguments_0(f, ms)
        } else {
            self.window
                .set_timeout_with_callback_and_timeout_and_arguments_0(f, ms)
        };
        match handle {
            Ok(handle) => {
                self.armed.insert(
                    timer,
                    ArmedTimer {
                        handle,
                        repeating,
                        callback,
                    },
                );
            }
            Err(e) => log::warn!("[gate] could not arm {:?}: {:?}", timer, e),
        }
    }

    /// Drop parked callbacks. Only call from outside any timer callback.
    fn release_retired(&mut self) {
        self.retired.clear();
    }
}

impl TimerHost for WindowTimers {
    fn schedule_once(&mut self, timer: GateTimer, after: Duration) {
        self.arm(timer, after, false);
    }

    fn schedule_repeating(&mut self, timer: GateTimer, every: Duration) {
        self.arm(timer, every, true);
    }

    fn cancel(&mut self, timer: GateTimer) {
        if let Some(armed) = self.armed.remove(&timer) {
            if armed.repeating {
                self.window.clear_interval_with_handle(armed.handle);
            } else {
                self.window.clear_timeout_with_handle(armed.handle);
            }
            self.retired.push(armed.callback);
        }
    }
}

/// Drives the `#loadingImage` element.
pub struct ImageDisplay {
    document: web::Document,
    image: Option<web::HtmlImageElement>,
}

impl ImageDisplay {
    fn new(document: web::Document) -> Self {
        let image = document
            .get_element_by_id(LOADING_IMAGE_ID)
            .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok());
        if let Some(img) = &image {
            _ = img.style().set_property("transition", FADE_TRANSITION_CSS);
        }
        Self { document, image }
    }

    fn style(&self, opacity: &str, transform: &str) {
        if let Some(img) = &self.image {
            let style = img.style();
            _ = style.set_property("opacity", opacity);
            _ = style.set_property("transform", transform);
        }
    }
}

impl GateSink for ImageDisplay {
    fn begin_fade_out(&mut self) {
        self.style("0", FADED_OUT_SCALE);
    }

    fn show_photo(&mut self, reference: &str) {
        if let Some(img) = &self.image {
            img.set_src(reference);
        }
    }

    fn fade_in(&mut self) {
        self.style("1", "scale(1)");
    }

    fn reveal(&mut self) {
        overlay::reveal(&self.document);
    }
}

pub struct GateRuntime {
    gate: LoadingGate,
    timers: WindowTimers,
    display: ImageDisplay,
    started: Instant,
}

impl GateRuntime {
    fn fire(&mut self, timer: GateTimer) {
        let GateRuntime {
            gate,
            timers,
            display,
            started,
        } = self;
        let was_revealed = gate.is_revealed();
        gate.fire(timer, timers, display);
        if gate.is_revealed() && !was_revealed {
            log::info!("[gate] revealed after {} ms", started.elapsed().as_millis());
        }
    }

    fn host_loaded(&mut self) {
        let GateRuntime {
            gate,
            timers,
            display,
            started,
        } = self;
        log::debug!("[gate] host load after {} ms", started.elapsed().as_millis());
        gate.host_loaded(timers, display);
        // not inside a timer callback here
        timers.release_retired();
    }

    fn page_hidden(&mut self, persisted: bool) {
        self.gate.page_hidden(persisted, &mut self.timers);
        self.timers.release_retired();
    }
}

pub fn gate_config() -> GateConfig {
    GateConfig {
        minimum_display: MINIMUM_LOADING_TIME,
        cycle_interval: PHOTO_CYCLE_INTERVAL,
        fade_delay: PHOTO_FADE_DELAY,
        hard_timeout: Some(LOADING_HARD_TIMEOUT),
    }
}

fn preload(photos: &[String]) {
    for src in photos {
        if let Ok(img) = web::HtmlImageElement::new() {
            img.set_src(src);
        }
    }
}

/// Start the loading screen if the page has one. Returns the runtime so the
/// caller can keep it alive.
pub fn start_loading_gate(
    document: &web::Document,
) -> anyhow::Result<Option<Rc<RefCell<GateRuntime>>>> {
    if document.get_element_by_id(LOADING_OVERLAY_ID).is_none() {
        return Ok(None);
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let photos: Vec<String> = LOADING_PHOTOS.iter().map(|p| p.to_string()).collect();
    let gate = LoadingGate::new(photos, gate_config())?;
    preload(gate.photos());

    let runtime = Rc::new_cyclic(|weak| {
        RefCell::new(GateRuntime {
            gate,
            timers: WindowTimers {
                window: window.clone(),
                runtime: weak.clone(),
                armed: FnvHashMap::default(),
                retired: Vec::new(),
            },
            display: ImageDisplay::new(document.clone()),
            started: Instant::now(),
        })
    });
    {
        let mut rt = runtime.borrow_mut();
        let GateRuntime { gate, timers, .. } = &mut *rt;
        gate.start(timers);
    }

    if document.ready_state() == "complete" {
        runtime.borrow_mut().host_loaded();
    } else {
        let rt_load = runtime.clone();
        let once = Closure::once(move || {
            rt_load.borrow_mut().host_loaded();
        });
        _ = window.add_event_listener_with_callback("load", once.as_ref().unchecked_ref());
        once.forget();
    }

    let rt_hide = runtime.clone();
    dom::listen(&window, "pagehide", move |ev: web::PageTransitionEvent| {
        rt_hide.borrow_mut().page_hidden(ev.persisted());
    });

    Ok(Some(runtime))
}
