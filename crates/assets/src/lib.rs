//! Asynchronous asset loading for the demo scenes.
//!
//! Loads run on background threads and deliver exactly one completion event
//! per request over a channel. The frame loop drains that channel once per
//! tick, so a load that never finishes simply leaves its dependent object
//! out of the scene.

pub mod error;
pub mod font;
pub mod loader;
pub mod manager;
pub mod texture;

pub use error::AssetError;
pub use font::FontData;
pub use loader::{AssetData, AssetEvent, AssetHandle, AssetLoader};
pub use manager::LoadingManager;
pub use texture::{EnvironmentData, TextureData};
