//! wgpu backend and winit host loop for the scene driver.
//!
//! The backend draws the scene's primitives with an analytic SDF pass: every
//! visible object becomes a sphere, box, or torus record in a storage buffer
//! and a fullscreen raymarch shades them with the scene's lights. Generated
//! text renders one slab per shaped glyph; anything the pass cannot express
//! degrades to its closest primitive, never to an error.

pub mod backend;
pub mod gpu_types;
pub mod run;

pub use backend::GpuRenderer;
pub use run::run;
