use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowBuilder;

use assets::AssetEvent;
use driver::{ControlValue, SceneDriver};
use scene::Scene;

use crate::backend::GpuRenderer;

/// Open a window, build a [`SceneDriver`] over the GPU backend, and run it
/// off the winit event loop until the window closes.
///
/// `build` runs once after the driver exists and is where a demo registers
/// animations, panel controls, and asset attachments. The window itself is
/// the frame scheduler here: every `AboutToWait` requests a redraw and every
/// `RedrawRequested` becomes one driver tick.
///
/// Panel controls have a keyboard host: Tab selects the next control,
/// `]` steps the selected value up, `[` steps it down, and either bracket
/// toggles a boolean control.
pub fn run<F>(
    title: &str,
    scene: Scene,
    asset_events: Option<Receiver<AssetEvent>>,
    build: F,
) -> Result<()>
where
    F: FnOnce(&mut SceneDriver<GpuRenderer>),
{
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(title)
            .build(&event_loop)
            .context("failed to create window")?,
    );

    let renderer = pollster::block_on(GpuRenderer::new(window.clone()))?;
    let scale_factor = window.scale_factor();
    let logical: LogicalSize<u32> = window.inner_size().to_logical(scale_factor);
    let mut driver = SceneDriver::new(
        renderer,
        scene,
        logical.width,
        logical.height,
        scale_factor,
        asset_events,
    );
    build(&mut driver);
    driver.start();

    let start = Instant::now();
    let mut dragging = false;
    let mut cursor: Option<(f64, f64)> = None;
    let mut active_control = 0usize;

    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == driver.renderer().window().id() => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(physical_size) => {
                    let scale = driver.renderer().window().scale_factor();
                    let logical: LogicalSize<u32> = physical_size.to_logical(scale);
                    driver.on_resize(logical.width, logical.height);
                }
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    driver.set_device_pixel_ratio(*scale_factor);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    if *button == MouseButton::Left {
                        dragging = *state == ElementState::Pressed;
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    if dragging {
                        if let Some((last_x, last_y)) = cursor {
                            driver
                                .controls
                                .rotate(position.x - last_x, position.y - last_y);
                        }
                    }
                    cursor = Some((position.x, position.y));
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    let amount = match delta {
                        MouseScrollDelta::LineDelta(_, y) => -*y,
                        MouseScrollDelta::PixelDelta(pos) => -(pos.y as f32) / 50.0,
                    };
                    driver.controls.zoom(amount);
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    if event.state == ElementState::Pressed {
                        if let PhysicalKey::Code(code) = event.physical_key {
                            handle_key(&mut driver, &mut active_control, code);
                        }
                    }
                }
                WindowEvent::RedrawRequested => {
                    if let Err(error) = driver.tick(start.elapsed()) {
                        tracing::error!(%error, "fatal render failure, exiting");
                        elwt.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                driver.renderer().window().request_redraw();
            }
            _ => {}
        }
    })?;
    Ok(())
}

fn handle_key(driver: &mut SceneDriver<GpuRenderer>, active: &mut usize, code: KeyCode) {
    let count = driver.panel.len();
    if count == 0 {
        return;
    }
    match code {
        KeyCode::Tab => {
            *active = (*active + 1) % count;
            if let Some(binding) = driver.panel.bindings().get(*active) {
                tracing::info!(label = %binding.label, "panel control selected");
            }
        }
        KeyCode::BracketLeft => nudge(driver, *active, -1.0),
        KeyCode::BracketRight => nudge(driver, *active, 1.0),
        _ => {}
    }
}

fn nudge(driver: &mut SceneDriver<GpuRenderer>, index: usize, direction: f64) {
    let Some(binding) = driver.panel.bindings().get(index) else {
        return;
    };
    let label = binding.label.clone();
    let next = match driver.panel.get(&driver.scene, index) {
        Some(ControlValue::Bool(current)) => ControlValue::Bool(!current),
        Some(ControlValue::Number(current)) => {
            let step = match binding.range {
                Some(range) if range.step > 0.0 => {
                    // Fine-step controls would take forever a notch at a time.
                    range.step.max((range.max - range.min) / 100.0)
                }
                Some(range) => (range.max - range.min) / 100.0,
                None => 0.1,
            };
            ControlValue::Number(current + direction * step)
        }
        None => return,
    };
    driver.panel.set(&mut driver.scene, index, next);
    if let Some(value) = driver.panel.get(&driver.scene, index) {
        tracing::info!(label = %label, ?value, "panel control changed");
    }
}
