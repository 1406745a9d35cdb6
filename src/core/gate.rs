use super::error::ConfigError;
use super::timers::{GateTimer, TimerHost};
use std::time::Duration;

/// Timing for the loading screen. Every duration is supplied by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct GateConfig {
    /// Shortest time the loading screen stays up.
    pub minimum_display: Duration,
    /// Period of the photo-cycle ticker.
    pub cycle_interval: Duration,
    /// Gap between "begin fade-out" and the photo swap + "fade-in".
    pub fade_delay: Duration,
    /// Forces the page-loaded flag if the host never signals it.
    pub hard_timeout: Option<Duration>,
}

impl GateConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cycle_interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if self.fade_delay >= self.cycle_interval {
            return Err(ConfigError::FadeTooLong {
                fade_ms: self.fade_delay.as_millis(),
                interval_ms: self.cycle_interval.as_millis(),
            });
        }
        Ok(())
    }
}

/// Receives the gate's semantic display signals. Styling is up to the host.
pub trait GateSink {
    fn begin_fade_out(&mut self);
    fn show_photo(&mut self, reference: &str);
    fn fade_in(&mut self);
    /// Called exactly once per gate.
    fn reveal(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GatePhase {
    /// Constructed, `start` not yet called.
    Idle,
    Loading,
    /// Terminal.
    Revealed,
    /// Torn down before revealing. Terminal.
    Closed,
}

/// Loading-screen coordinator: cycles photos until both the minimum display
/// time has passed and the page has loaded, then reveals once.
///
/// Callbacks from the host that arrive after reveal or teardown are ignored,
/// so a timer the host failed to cancel cannot touch the display.
#[derive(Debug)]
pub struct LoadingGate {
    photos: Vec<String>,
    config: GateConfig,
    phase: GatePhase,
    photo_index: usize,
    page_loaded: bool,
    minimum_time_elapsed: bool,
    forced_load: bool,
    ticks: u64,
}

impl LoadingGate {
    pub fn new(photos: Vec<String>, config: GateConfig) -> Result<Self, ConfigError> {
        if photos.is_empty() {
            return Err(ConfigError::NoPhotos);
        }
        config.validate()?;
        Ok(Self {
            photos,
            config,
            phase: GatePhase::Idle,
            photo_index: 0,
            page_loaded: false,
            minimum_time_elapsed: false,
            forced_load: false,
            ticks: 0,
        })
    }

    pub fn photos(&self) -> &[String] {
        &self.photos
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn photo_index(&self) -> usize {
        self.photo_index
    }

    pub fn current_photo(&self) -> &str {
        &self.photos[self.photo_index]
    }

    pub fn page_loaded(&self) -> bool {
        self.page_loaded
    }

    pub fn minimum_time_elapsed(&self) -> bool {
        self.minimum_time_elapsed
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == GatePhase::Revealed
    }

    /// True when the page-loaded flag was set by the hard timeout.
    pub fn load_was_forced(&self) -> bool {
        self.forced_load
    }

    /// Number of photo-cycle ticks handled so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Enter `Loading` and arm the ticker and one-shot timers. The host-loaded
    /// signal is delivered separately through [`LoadingGate::host_loaded`].
    pub fn start(&mut self, timers: &mut impl TimerHost) {
        if self.phase != GatePhase::Idle {
            return;
        }
        self.phase = GatePhase::Loading;
        timers.schedule_repeating(GateTimer::PhotoCycle, self.config.cycle_interval);
        timers.schedule_once(GateTimer::MinimumTime, self.config.minimum_display);
        if let Some(hard) = self.config.hard_timeout {
            timers.schedule_once(GateTimer::HardTimeout, hard);
        }
        log::debug!(
            "[gate] loading: {} photos, min={}ms interval={}ms",
            self.photos.len(),
            self.config.minimum_display.as_millis(),
            self.config.cycle_interval.as_millis()
        );
    }

    /// Dispatch a fired host timer.
    pub fn fire(
        &mut self,
        timer: GateTimer,
        timers: &mut impl TimerHost,
        sink: &mut impl GateSink,
    ) {
        if self.phase != GatePhase::Loading {
            return;
        }
        match timer {
            GateTimer::PhotoCycle => {
                self.photo_index = (self.photo_index + 1) % self.photos.len();
                self.ticks += 1;
                sink.begin_fade_out();
                timers.schedule_once(GateTimer::FadeSwap, self.config.fade_delay);
            }
            GateTimer::FadeSwap => {
                sink.show_photo(&self.photos[self.photo_index]);
                sink.fade_in();
            }
            GateTimer::MinimumTime => {
                self.minimum_time_elapsed = true;
                self.evaluate(timers, sink);
            }
            GateTimer::HardTimeout => {
                if !self.page_loaded {
                    log::warn!("[gate] host load signal missing; forcing reveal readiness");
                    self.page_loaded = true;
                    self.forced_load = true;
                }
                self.evaluate(timers, sink);
            }
        }
    }

    /// The host page finished loading.
    pub fn host_loaded(&mut self, timers: &mut impl TimerHost, sink: &mut impl GateSink) {
        if self.phase != GatePhase::Loading {
            return;
        }
        self.page_loaded = true;
        self.evaluate(timers, sink);
    }

    /// Cancel everything this gate scheduled. Safe to call in any phase.
    pub fn teardown(&mut self, timers: &mut impl TimerHost) {
        timers.cancel_all();
        if matches!(self.phase, GatePhase::Idle | GatePhase::Loading) {
            self.phase = GatePhase::Closed;
        }
    }

    /// The page is being hidden for navigation. A page kept in the
    /// back/forward cache (`persisted`) may come back, so the gate keeps its
    /// timers and can still reveal, at worst through the hard timeout.
    /// Otherwise the gate is torn down.
    pub fn page_hidden(&mut self, persisted: bool, timers: &mut impl TimerHost) {
        if persisted {
            log::debug!("[gate] page cached while {:?}; keeping timers", self.phase);
            return;
        }
        self.teardown(timers);
    }

    fn evaluate(&mut self, timers: &mut impl TimerHost, sink: &mut impl GateSink) {
        if self.phase != GatePhase::Loading || !(self.page_loaded && self.minimum_time_elapsed) {
            return;
        }
        self.phase = GatePhase::Revealed;
        timers.cancel_all();
        log::info!(
            "[gate] reveal (photo {} of {}, forced={})",
            self.photo_index + 1,
            self.photos.len(),
            self.forced_load
        );
        sink.reveal();
    }
}
