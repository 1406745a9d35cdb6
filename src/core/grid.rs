use super::error::ConfigError;
use glam::DVec2;

// Attraction grid: a lattice of dots, each pulled a fixed distance toward the
// pointer and repainted every animation frame.

/// Per-session drawing parameters for the background grid.
///
/// Rows and columns are not stored; they are derived from the viewport on
/// every frame via [`GridSpec::extent`].
#[derive(Clone, Debug, PartialEq)]
pub struct GridSpec {
    pub spacing: f64,
    pub max_offset: f64,
    pub dot_radius: f64,
    pub dot_color: String,
    pub background: String,
}

impl GridSpec {
    pub fn new(
        spacing: f64,
        max_offset: f64,
        dot_radius: f64,
        dot_color: impl Into<String>,
        background: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(ConfigError::Spacing(spacing));
        }
        for (name, value) in [("max_offset", max_offset), ("dot_radius", dot_radius)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { name, value });
            }
        }
        Ok(Self {
            spacing,
            max_offset,
            dot_radius,
            dot_color: dot_color.into(),
            background: background.into(),
        })
    }

    /// Number of columns and rows needed to cover `viewport` with one spare
    /// cell past the far edges.
    #[inline]
    pub fn extent(&self, viewport: Viewport) -> GridExtent {
        GridExtent {
            cols: cells_for(viewport.width, self.spacing) + 1,
            rows: cells_for(viewport.height, self.spacing) + 1,
        }
    }

    /// Undisplaced position of the node at (`col`, `row`).
    #[inline]
    pub fn node(&self, col: usize, row: usize) -> DVec2 {
        DVec2::new(col as f64 * self.spacing, row as f64 * self.spacing)
    }
}

#[inline]
fn cells_for(length: f64, spacing: f64) -> usize {
    if length.is_finite() && length > 0.0 {
        (length / spacing).ceil() as usize
    } else {
        0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridExtent {
    pub cols: usize,
    pub rows: usize,
}

impl GridExtent {
    #[inline]
    pub fn node_count(&self) -> usize {
        self.cols * self.rows
    }
}

/// Canvas size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Last known pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub pos: DVec2,
    /// False until the first move/touch event arrives.
    pub seen_input: bool,
}

impl PointerState {
    pub fn centered(viewport: Viewport) -> Self {
        Self {
            pos: viewport.center(),
            seen_input: false,
        }
    }

    #[inline]
    pub fn moved_to(&mut self, x: f64, y: f64) {
        self.pos = DVec2::new(x, y);
        self.seen_input = true;
    }
}

/// Position of `node` after pulling it `distance` toward `pointer`.
///
/// When the pointer sits exactly on the node the angle is `atan2(0, 0) == 0`
/// and the node still moves `distance` along +x.
#[inline]
pub fn attracted_position(node: DVec2, pointer: DVec2, distance: f64) -> DVec2 {
    let angle = (pointer.y - node.y).atan2(pointer.x - node.x);
    node + DVec2::new(angle.cos(), angle.sin()) * distance
}

/// Drawing surface the grid paints into (a 2D canvas in the browser).
pub trait DotCanvas {
    fn clear(&mut self, color: &str, viewport: Viewport);
    fn fill_dot(&mut self, center: DVec2, radius: f64, color: &str);
}

/// Paint one full frame: background, then every displaced node.
pub fn draw_frame(
    spec: &GridSpec,
    viewport: Viewport,
    pointer: &PointerState,
    canvas: &mut impl DotCanvas,
) -> GridExtent {
    canvas.clear(&spec.background, viewport);
    let extent = spec.extent(viewport);
    for row in 0..extent.rows {
        for col in 0..extent.cols {
            let pos = attracted_position(spec.node(col, row), pointer.pos, spec.max_offset);
            canvas.fill_dot(pos, spec.dot_radius, &spec.dot_color);
        }
    }
    extent
}

/// Token returned by the host for a requested animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Host frame scheduling (`requestAnimationFrame` in the browser).
pub trait FrameScheduler {
    /// Ask for the next frame. `None` means the host refused; the loop then
    /// stays idle until the next `start` or visibility change.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Owned renderer state for one page session.
///
/// `running` is the caller's intent (`start`/`stop`); `hidden` mirrors the
/// document visibility. Frames are only requested while running and visible,
/// and at most one frame is pending at any time.
#[derive(Debug)]
pub struct RendererState {
    spec: GridSpec,
    viewport: Viewport,
    pointer: PointerState,
    running: bool,
    hidden: bool,
    pending: Option<FrameHandle>,
    frames_drawn: u64,
}

impl RendererState {
    pub fn new(spec: GridSpec, viewport: Viewport) -> Self {
        Self {
            spec,
            viewport,
            pointer: PointerState::centered(viewport),
            running: false,
            hidden: false,
            pending: None,
            frames_drawn: 0,
        }
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn set_spec(&mut self, spec: GridSpec) {
        self.spec = spec;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer.moved_to(x, y);
    }

    /// Takes effect on the next frame. Before any pointer input the default
    /// pointer follows the new center.
    pub fn resized(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if !self.pointer.seen_input {
            self.pointer = PointerState::centered(viewport);
        }
    }

    pub fn start(&mut self, scheduler: &mut impl FrameScheduler) {
        if self.running {
            return;
        }
        self.running = true;
        log::debug!("[grid] start (hidden={})", self.hidden);
        self.request_next(scheduler);
    }

    pub fn stop(&mut self, scheduler: &mut impl FrameScheduler) {
        self.running = false;
        self.cancel_pending(scheduler);
        log::debug!("[grid] stop after {} frames", self.frames_drawn);
    }

    pub fn visibility_changed(&mut self, hidden: bool, scheduler: &mut impl FrameScheduler) {
        self.hidden = hidden;
        if hidden {
            self.cancel_pending(scheduler);
        } else {
            self.request_next(scheduler);
        }
    }

    /// Frame callback for the frame identified by `fired`. Only the pending
    /// frame draws; any other tick (cancelled, or left over from before a
    /// `stop`) returns `false` and leaves the chain untouched.
    pub fn on_frame(
        &mut self,
        fired: FrameHandle,
        scheduler: &mut impl FrameScheduler,
        canvas: &mut impl DotCanvas,
    ) -> bool {
        if self.pending != Some(fired) {
            log::debug!("[grid] ignoring stray frame {}", fired.0);
            return false;
        }
        self.pending = None;
        if !self.running || self.hidden {
            return false;
        }
        draw_frame(&self.spec, self.viewport, &self.pointer, canvas);
        self.frames_drawn += 1;
        self.request_next(scheduler);
        true
    }

    fn request_next(&mut self, scheduler: &mut impl FrameScheduler) {
        if self.running && !self.hidden && self.pending.is_none() {
            self.pending = scheduler.request_frame();
        }
    }

    fn cancel_pending(&mut self, scheduler: &mut impl FrameScheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
    }
}
