// Host-side tests for the attraction grid.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod shared {
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod grid {
        include!("../src/core/grid.rs");
    }
}

use glam::DVec2;
use shared::error::ConfigError;
use shared::grid::*;

fn spec(spacing: f64, max_offset: f64) -> GridSpec {
    GridSpec::new(spacing, max_offset, 2.0, "#d0d0d0", "#f0f0f0").unwrap()
}

#[derive(Default)]
struct RecordingCanvas {
    clears: Vec<(String, Viewport)>,
    dots: Vec<(DVec2, f64, String)>,
}

impl DotCanvas for RecordingCanvas {
    fn clear(&mut self, color: &str, viewport: Viewport) {
        self.clears.push((color.to_string(), viewport));
    }

    fn fill_dot(&mut self, center: DVec2, radius: f64, color: &str) {
        self.dots.push((center, radius, color.to_string()));
    }
}

#[derive(Default)]
struct FakeScheduler {
    next_id: i32,
    requested: Vec<FrameHandle>,
    cancelled: Vec<FrameHandle>,
    refuse: bool,
}

impl FrameScheduler for FakeScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        if self.refuse {
            return None;
        }
        self.next_id += 1;
        let h = FrameHandle(self.next_id);
        self.requested.push(h);
        Some(h)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}

impl FakeScheduler {
    fn last(&self) -> FrameHandle {
        *self.requested.last().expect("no frame requested")
    }
}

#[test]
fn grid_covers_viewport_with_spare_cell() {
    let spacings = [1.0, 7.5, 30.0, 33.3, 100.0, 1000.0];
    let sizes = [
        (0.0, 0.0),
        (1.0, 1.0),
        (29.9, 30.1),
        (800.0, 600.0),
        (1366.0, 768.0),
        (1920.0, 1080.0),
    ];
    for s in spacings {
        let g = spec(s, 12.0);
        for (w, h) in sizes {
            let e = g.extent(Viewport::new(w, h));
            assert!(e.cols as f64 * s >= w, "cols short for s={s} w={w}");
            assert!(e.rows as f64 * s >= h, "rows short for s={s} h={h}");
            // last node sits on or past the far edge
            assert!((e.cols - 1) as f64 * s >= w);
            assert!((e.rows - 1) as f64 * s >= h);
        }
    }
}

#[test]
fn extent_matches_ceil_plus_one() {
    let g = spec(30.0, 12.0);
    assert_eq!(
        g.extent(Viewport::new(800.0, 600.0)),
        GridExtent { cols: 28, rows: 21 }
    );
    assert_eq!(
        g.extent(Viewport::new(810.0, 0.0)),
        GridExtent { cols: 28, rows: 1 }
    );
}

#[test]
fn displaced_point_is_max_offset_toward_pointer() {
    let nodes = [
        DVec2::new(0.0, 0.0),
        DVec2::new(30.0, 60.0),
        DVec2::new(900.0, 15.0),
    ];
    let pointers = [
        DVec2::new(400.0, 300.0),
        DVec2::new(-50.0, 10.0),
        DVec2::new(30.0, 61.0),
        DVec2::new(1e4, -1e4),
    ];
    for n in nodes {
        for p in pointers {
            let d = attracted_position(n, p, 12.0);
            assert!(((d - n).length() - 12.0).abs() < 1e-9);
            let toward = (p - n).normalize();
            let moved = (d - n).normalize();
            assert!(toward.dot(moved) > 1.0 - 1e-9, "n={n:?} p={p:?}");
        }
    }
}

#[test]
fn pointer_on_node_displaces_along_positive_x() {
    let n = DVec2::new(60.0, 90.0);
    let d = attracted_position(n, n, 10.0);
    assert_eq!(d, DVec2::new(70.0, 90.0));
}

#[test]
fn draw_frame_clears_then_draws_every_node() {
    let g = spec(30.0, 12.0);
    let vp = Viewport::new(100.0, 50.0);
    let pointer = PointerState::centered(vp);
    let mut canvas = RecordingCanvas::default();

    let extent = draw_frame(&g, vp, &pointer, &mut canvas);

    assert_eq!(extent, GridExtent { cols: 5, rows: 3 });
    assert_eq!(canvas.clears, vec![("#f0f0f0".to_string(), vp)]);
    assert_eq!(canvas.dots.len(), extent.node_count());
    assert!(canvas
        .dots
        .iter()
        .all(|(_, r, c)| *r == 2.0 && c == "#d0d0d0"));
    // first node is (0,0) pulled toward the center (50,25)
    let expected = attracted_position(DVec2::ZERO, DVec2::new(50.0, 25.0), 12.0);
    assert!((canvas.dots[0].0 - expected).length() < 1e-12);
}

#[test]
fn spec_rejects_bad_values() {
    assert_eq!(
        GridSpec::new(0.0, 1.0, 1.0, "a", "b"),
        Err(ConfigError::Spacing(0.0))
    );
    assert!(GridSpec::new(f64::NAN, 1.0, 1.0, "a", "b").is_err());
    assert!(matches!(
        GridSpec::new(30.0, -1.0, 1.0, "a", "b"),
        Err(ConfigError::Negative {
            name: "max_offset",
            ..
        })
    ));
    assert!(GridSpec::new(30.0, 0.0, 0.0, "a", "b").is_ok());
}

#[test]
fn pointer_defaults_to_center_and_follows_resize_until_input() {
    let mut r = RendererState::new(spec(30.0, 12.0), Viewport::new(800.0, 600.0));
    assert_eq!(r.pointer().pos, DVec2::new(400.0, 300.0));

    r.resized(Viewport::new(1000.0, 500.0));
    assert_eq!(r.pointer().pos, DVec2::new(500.0, 250.0));

    r.pointer_moved(10.0, 20.0);
    r.resized(Viewport::new(200.0, 200.0));
    assert_eq!(r.pointer().pos, DVec2::new(10.0, 20.0));
}

#[test]
fn start_requests_a_single_frame() {
    let mut sched = FakeScheduler::default();
    let mut r = RendererState::new(spec(30.0, 12.0), Viewport::new(100.0, 100.0));
    r.start(&mut sched);
    r.start(&mut sched);
    assert_eq!(sched.requested.len(), 1);
    assert!(r.is_running());
    assert!(r.has_pending_frame());
}

#[test]
fn each_frame_draws_and_requests_the_next() {
    let mut sched = FakeScheduler::default();
    let mut canvas = RecordingCanvas::default();
    let mut r = RendererState::new(spec(30.0, 12.0), Viewport::new(60.0, 60.0));
    r.start(&mut sched);

    assert!(r.on_frame(sched.last(), &mut sched, &mut canvas));
    assert!(r.on_frame(sched.last(), &mut sched, &mut canvas));
    assert_eq!(r.frames_drawn(), 2);
    assert_eq!(sched.requested.len(), 3);
    assert_eq!(canvas.clears.len(), 2);
}

#[test]
fn stop_cancels_pending_frame_and_ignores_stray_tick() {
    let mut sched = FakeScheduler::default();
    let mut canvas = RecordingCanvas::default();
    let mut r = RendererState::new(spec(30.0, 12.0), Viewport::new(60.0, 60.0));
    r.start(&mut sched);
    r.stop(&mut sched);

    assert_eq!(sched.cancelled, vec![FrameHandle(1)]);
    assert!(!r.has_pending_frame());

    // host failed to cancel and the tick arrives anyway
    assert!(!r.on_frame(FrameHandle(1), &mut sched, &mut canvas));
    assert!(canvas.clears.is_empty());
    assert_eq!(sched.requested.len(), 1);

    r.start(&mut sched);
    assert_eq!(sched.requested.len(), 2);
}

#[test]
fn stale_tick_after_restart_does_not_fork_the_loop() {
    let mut sched = FakeScheduler::default();
    let mut canvas = RecordingCanvas::default();
    let mut r = RendererState::new(spec(30.0, 12.0), Viewport::new(60.0, 60.0));
    r.start(&mut sched);
    r.stop(&mut sched);
    r.start(&mut sched);
    assert_eq!(sched.requested, vec![FrameHandle(1), FrameHandle(2)]);

    // frame 1 was cancelled but still fires
    assert!(!r.on_frame(FrameHandle(1), &mut sched, &mut canvas));
    assert_eq!(sched.requested.len(), 2);
    assert!(r.has_pending_frame());

    assert!(r.on_frame(FrameHandle(2), &mut sched, &mut canvas));
    assert_eq!(r.frames_drawn(), 1);
    assert_eq!(sched.requested.len(), 3);

    // a late duplicate of frame 2 is ignored too
    assert!(!r.on_frame(FrameHandle(2), &mut sched, &mut canvas));
    assert_eq!(r.frames_drawn(), 1);

    r.stop(&mut sched);
    assert_eq!(sched.cancelled, vec![FrameHandle(1), FrameHandle(3)]);
    assert!(!r.has_pending_frame());
}

#[test]
fn hidden_document_pauses_and_visible_resumes() {
    let mut sched = FakeScheduler::default();
    let mut canvas = RecordingCanvas::default();
    let mut r = RendererState::new(spec(30.0, 12.0), Viewport::new(60.0, 60.0));
    r.start(&mut sched);

    r.visibility_changed(true, &mut sched);
    assert_eq!(sched.cancelled.len(), 1);
    assert!(!r.on_frame(FrameHandle(1), &mut sched, &mut canvas));

    r.visibility_changed(false, &mut sched);
    assert_eq!(sched.requested.len(), 2);
    assert!(r.on_frame(FrameHandle(2), &mut sched, &mut canvas));
}

#[test]
fn becoming_visible_does_not_restart_a_stopped_loop() {
    let mut sched = FakeScheduler::default();
    let mut r = RendererState::new(spec(30.0, 12.0), Viewport::new(60.0, 60.0));
    r.start(&mut sched);
    r.visibility_changed(true, &mut sched);
    r.stop(&mut sched);
    r.visibility_changed(false, &mut sched);
    assert_eq!(sched.requested.len(), 1);
    assert!(!r.has_pending_frame());
}

#[test]
fn starting_while_hidden_waits_for_visibility() {
    let mut sched = FakeScheduler::default();
    let mut r = RendererState::new(spec(30.0, 12.0), Viewport::new(60.0, 60.0));
    r.visibility_changed(true, &mut sched);
    r.start(&mut sched);
    assert!(sched.requested.is_empty());
    r.visibility_changed(false, &mut sched);
    assert_eq!(sched.requested.len(), 1);
}

#[test]
fn resize_applies_to_the_next_frame() {
    let mut sched = FakeScheduler::default();
    let mut canvas = RecordingCanvas::default();
    let mut r = RendererState::new(spec(30.0, 12.0), Viewport::new(60.0, 60.0));
    r.start(&mut sched);
    r.on_frame(sched.last(), &mut sched, &mut canvas);
    assert_eq!(canvas.dots.len(), 9);

    r.resized(Viewport::new(120.0, 60.0));
    let mut canvas = RecordingCanvas::default();
    r.on_frame(sched.last(), &mut sched, &mut canvas);
    assert_eq!(canvas.dots.len(), 15);
    assert_eq!(canvas.clears[0].1, Viewport::new(120.0, 60.0));
}

#[test]
fn refused_frame_request_leaves_loop_idle() {
    let mut sched = FakeScheduler {
        refuse: true,
        ..Default::default()
    };
    let mut r = RendererState::new(spec(30.0, 12.0), Viewport::new(60.0, 60.0));
    r.start(&mut sched);
    assert!(r.is_running());
    assert!(!r.has_pending_frame());
}

#[test]
fn set_spec_changes_next_frame() {
    let mut sched = FakeScheduler::default();
    let mut r = RendererState::new(spec(30.0, 12.0), Viewport::new(60.0, 60.0));
    r.start(&mut sched);
    r.set_spec(spec(20.0, 5.0));
    let mut canvas = RecordingCanvas::default();
    r.on_frame(sched.last(), &mut sched, &mut canvas);
    assert_eq!(canvas.dots.len(), 16);
    assert_eq!(r.spec().max_offset, 5.0);
}
