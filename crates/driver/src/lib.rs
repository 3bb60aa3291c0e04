//! The scene driver loop.
//!
//! [`SceneDriver`] owns the mutable viewport state, a monotonic clock,
//! per-frame animation bindings, orbit-control damping, parameter-panel
//! bindings, and asynchronous asset intake. Every frame it applies the
//! time-based transforms and issues exactly one render request to an
//! injected [`Renderer`].
//!
//! The loop is cooperative and single-threaded: a [`FrameScheduler`] hands
//! out one frame timing at a time, and the next frame is only pulled after
//! the current `tick` returns.

pub mod animate;
pub mod clock;
pub mod controls;
pub mod driver;
pub mod error;
pub mod panel;
pub mod renderer;
pub mod scheduler;
pub mod viewport;

pub use animate::Animation;
pub use controls::OrbitController;
pub use driver::{Phase, SceneDriver};
pub use error::{DriverError, RenderError};
pub use panel::{
    ControlBinding, ControlRange, ControlValue, LightField, MaterialField, PanelRegistry,
    ParamTarget,
};
pub use renderer::Renderer;
pub use scheduler::{FrameScheduler, IntervalScheduler, ManualScheduler};
pub use viewport::ViewportState;
