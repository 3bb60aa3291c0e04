use thiserror::Error;

/// Errors a [`crate::Renderer`] may return from a render request.
///
/// `SurfaceLost` is recoverable (the driver re-applies the current output
/// size and carries on); `OutOfMemory` is fatal; `Transient` covers outdated
/// or timed-out frames that resolve themselves by the next tick.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render surface lost")]
    SurfaceLost,

    #[error("render surface out of memory")]
    OutOfMemory,

    #[error("transient render failure: {0}")]
    Transient(String),
}

/// Fatal driver failures; everything recoverable is handled inside `tick`.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Render(#[from] RenderError),
}
