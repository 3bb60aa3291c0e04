use std::collections::HashMap;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use glam::Vec3;
use scene::{ObjectId, PerspectiveCamera, Scene};

use assets::{AssetData, AssetEvent, AssetHandle};

use crate::animate::{Animation, AnimationBinding};
use crate::clock::Clock;
use crate::controls::OrbitController;
use crate::error::{DriverError, RenderError};
use crate::panel::PanelRegistry;
use crate::renderer::Renderer;
use crate::scheduler::FrameScheduler;
use crate::viewport::ViewportState;

/// Lifecycle of the driver loop. There is no terminal state: the loop runs
/// until the host tears the scheduler down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
}

type AttachFn = Box<dyn FnOnce(&mut Scene, AssetData)>;

/// Owns the scene, camera, viewport, clock, and per-frame bindings, and
/// drives an injected [`Renderer`] one frame at a time.
pub struct SceneDriver<R: Renderer> {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub controls: OrbitController,
    pub panel: PanelRegistry,
    viewport: ViewportState,
    clock: Clock,
    animations: Vec<AnimationBinding>,
    renderer: R,
    asset_events: Option<Receiver<AssetEvent>>,
    attachments: HashMap<AssetHandle, AttachFn>,
    phase: Phase,
}

impl<R: Renderer> SceneDriver<R> {
    /// Build a driver around `renderer` and sync it with the initial
    /// viewport. `asset_events` is the completion channel from the loader;
    /// pass `None` for scenes that load nothing.
    pub fn new(
        renderer: R,
        scene: Scene,
        width: u32,
        height: u32,
        device_pixel_ratio: f64,
        asset_events: Option<Receiver<AssetEvent>>,
    ) -> Self {
        let viewport = ViewportState::new(width.max(1), height.max(1), device_pixel_ratio);
        let camera = PerspectiveCamera::new(viewport.aspect());
        let controls = OrbitController::from_camera(&camera);
        let mut driver = Self {
            scene,
            camera,
            controls,
            panel: PanelRegistry::new(),
            viewport,
            clock: Clock::new(),
            animations: Vec::new(),
            renderer,
            asset_events,
            attachments: HashMap::new(),
            phase: Phase::Idle,
        };
        driver.sync_renderer();
        driver
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.clock.elapsed_seconds()
    }

    /// Spin `object` at a constant angular velocity, starting from its
    /// current rotation.
    pub fn animate(&mut self, object: ObjectId, rate: Vec3) {
        let base_rotation = self
            .scene
            .object(object)
            .map(|o| o.transform.rotation)
            .unwrap_or(Vec3::ZERO);
        self.animations.push(AnimationBinding {
            object,
            base_rotation,
            animation: Animation::Spin { rate },
        });
    }

    /// Register the one-shot scene mutation to run when `handle` finishes
    /// loading. If the load fails, the closure is dropped and the scene is
    /// left as it is.
    pub fn on_asset<F>(&mut self, handle: AssetHandle, attach: F)
    where
        F: FnOnce(&mut Scene, AssetData) + 'static,
    {
        self.attachments.insert(handle, Box::new(attach));
    }

    /// Handle a host resize. Zero dimensions are ignored; identical inputs
    /// are idempotent.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport.width = width;
        self.viewport.height = height;
        self.camera.set_aspect(width, height);
        self.sync_renderer();
    }

    /// Handle a monitor/DPI change.
    pub fn set_device_pixel_ratio(&mut self, ratio: f64) {
        self.viewport.device_pixel_ratio = ratio;
        self.sync_renderer();
    }

    fn sync_renderer(&mut self) {
        self.renderer
            .set_output_size(self.viewport.width, self.viewport.height);
        self.renderer
            .set_pixel_ratio_cap(self.viewport.effective_pixel_ratio());
    }

    /// Enter the `Running` phase. Hosts that drive `tick` from their own
    /// event loop call this once before the first frame.
    pub fn start(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Running;
            tracing::info!(
                objects = self.scene.object_count(),
                lights = self.scene.lights().len(),
                "scene driver running"
            );
        }
    }

    /// Pull frames from `scheduler` until it reports host teardown.
    pub fn run<S: FrameScheduler>(&mut self, scheduler: &mut S) -> Result<(), DriverError> {
        self.start();
        while let Some(elapsed) = scheduler.next_frame() {
            self.tick(elapsed)?;
        }
        tracing::info!("frame scheduler ended, driver stopping");
        Ok(())
    }

    /// Advance one frame: drain asset completions, ease the orbit damping,
    /// apply animation bindings from absolute elapsed time, and issue
    /// exactly one render request.
    ///
    /// Recoverable render failures are handled here; only fatal ones
    /// propagate.
    pub fn tick(&mut self, elapsed: Duration) -> Result<(), DriverError> {
        if self.phase != Phase::Running {
            tracing::debug!("tick before start, ignoring");
            return Ok(());
        }

        let t = self.clock.advance(elapsed);
        self.drain_asset_events();
        self.controls.update(&mut self.camera);
        for binding in &self.animations {
            binding.apply(&mut self.scene, t);
        }

        match self.renderer.render(&self.scene, &self.camera) {
            Ok(()) => Ok(()),
            // Reconfigure the surface if lost
            Err(RenderError::SurfaceLost) => {
                tracing::warn!("render surface lost, reapplying output size");
                self.sync_renderer();
                Ok(())
            }
            // Out of memory: nothing sensible left to do
            Err(err @ RenderError::OutOfMemory) => Err(err.into()),
            // Outdated/timeout frames resolve themselves by the next tick
            Err(RenderError::Transient(reason)) => {
                tracing::debug!(reason, "transient render failure");
                Ok(())
            }
        }
    }

    fn drain_asset_events(&mut self) {
        let Some(events) = &self.asset_events else {
            return;
        };
        // try_recv only: a load that never completes must not block a frame.
        let mut completed = Vec::new();
        while let Ok(event) = events.try_recv() {
            completed.push(event);
        }
        for event in completed {
            match event.result {
                Ok(data) => {
                    if let Some(attach) = self.attachments.remove(&event.handle) {
                        attach(&mut self.scene, data);
                        tracing::info!(path = %event.path.display(), "asset attached to scene");
                    } else {
                        tracing::debug!(path = %event.path.display(), "asset loaded, no attachment");
                    }
                }
                Err(error) => {
                    self.attachments.remove(&event.handle);
                    tracing::warn!(
                        path = %event.path.display(),
                        %error,
                        "asset failed, leaving its object out of the scene"
                    );
                }
            }
        }
    }
}
