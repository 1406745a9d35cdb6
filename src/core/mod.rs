pub mod chrome;
pub mod error;
pub mod gallery;
pub mod gate;
pub mod grid;
pub mod names;
pub mod roster;
pub mod timers;

pub use error::ConfigError;
pub use gate::{GateConfig, GatePhase, GateSink, LoadingGate};
pub use grid::{
    attracted_position, draw_frame, DotCanvas, FrameHandle, FrameScheduler, GridSpec,
    RendererState, Viewport,
};
pub use roster::{DesignerView, Graduate, Roster};
pub use timers::{GateTimer, TimerHost};
