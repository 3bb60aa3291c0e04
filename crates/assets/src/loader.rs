use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use crate::error::AssetError;
use crate::font::FontData;
use crate::manager::LoadingManager;
use crate::texture::{self, EnvironmentData, TextureData};

/// Identifier handed back the moment a load is requested.
///
/// The handle is valid immediately; the data arrives later as an
/// [`AssetEvent`] carrying the same handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetHandle(u64);

impl AssetHandle {
    /// Rebuild a handle from its raw id, for hosts that persist or fabricate
    /// handles outside a live loader.
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Payload of a successfully completed load.
#[derive(Debug, Clone)]
pub enum AssetData {
    Texture(TextureData),
    Environment(EnvironmentData),
    Font(FontData),
}

/// One-shot completion notification for a single load request.
#[derive(Debug)]
pub struct AssetEvent {
    pub handle: AssetHandle,
    pub path: PathBuf,
    pub result: Result<AssetData, AssetError>,
}

/// Spawns background decode work and reports completions over a channel.
///
/// Each `load_*` call returns immediately; the decode runs on its own thread
/// and posts exactly one [`AssetEvent`]. There is no retry, cancellation, or
/// timeout.
pub struct AssetLoader {
    tx: Sender<AssetEvent>,
    manager: Arc<LoadingManager>,
    next_id: AtomicU64,
}

impl AssetLoader {
    /// Create a loader and the event channel the frame loop will drain.
    pub fn new() -> (Self, Receiver<AssetEvent>) {
        let (tx, rx) = channel();
        let loader = Self {
            tx,
            manager: Arc::new(LoadingManager::new()),
            next_id: AtomicU64::new(1),
        };
        (loader, rx)
    }

    pub fn manager(&self) -> Arc<LoadingManager> {
        Arc::clone(&self.manager)
    }

    /// Load a color texture (sRGB encoded).
    pub fn load_texture(&self, path: impl Into<PathBuf>) -> AssetHandle {
        let path = path.into();
        self.spawn(path, move |p| {
            texture::decode_texture(p, true).map(AssetData::Texture)
        })
    }

    /// Load a non-color data texture (normal, roughness, height, ...).
    pub fn load_data_texture(&self, path: impl Into<PathBuf>) -> AssetHandle {
        let path = path.into();
        self.spawn(path, move |p| {
            texture::decode_texture(p, false).map(AssetData::Texture)
        })
    }

    /// Load an equirectangular HDR environment map.
    pub fn load_environment(&self, path: impl Into<PathBuf>) -> AssetHandle {
        let path = path.into();
        self.spawn(path, move |p| {
            texture::decode_environment(p).map(AssetData::Environment)
        })
    }

    /// Load a typeface-JSON font.
    pub fn load_font(&self, path: impl Into<PathBuf>) -> AssetHandle {
        let path = path.into();
        self.spawn(path, move |p| {
            let bytes = std::fs::read(p).map_err(|source| AssetError::Io {
                path: p.to_path_buf(),
                source,
            })?;
            FontData::parse(p, &bytes).map(AssetData::Font)
        })
    }

    fn spawn<F>(&self, path: PathBuf, decode: F) -> AssetHandle
    where
        F: FnOnce(&Path) -> Result<AssetData, AssetError> + Send + 'static,
    {
        let handle = AssetHandle(self.next_id.fetch_add(1, Ordering::Relaxed));
        let tx = self.tx.clone();
        let manager = Arc::clone(&self.manager);
        manager.item_started(&path);

        thread::spawn(move || {
            let result = decode(&path);
            match &result {
                Ok(_) => manager.item_completed(&path),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "asset load failed");
                    manager.item_failed(&path);
                }
            }
            // The receiver may already be gone during teardown; nothing to do.
            let _ = tx.send(AssetEvent {
                handle,
                path,
                result,
            });
        });

        handle
    }
}
