use std::time::Duration;

use driver::{
    ControlRange, ControlValue, FrameScheduler, ManualScheduler, MaterialField, ParamTarget,
    Phase, RenderError, Renderer, SceneDriver,
};
use glam::Vec3;
use scene::{Geometry, Material, PerspectiveCamera, Scene, SceneObject};

/// Renderer stand-in that records every call the driver makes.
#[derive(Debug, Default)]
struct RecordingRenderer {
    output_size: Option<(u32, u32)>,
    resize_calls: usize,
    pixel_ratio_cap: Option<f64>,
    render_calls: usize,
    fail_next: Option<RenderError>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, _scene: &Scene, _camera: &PerspectiveCamera) -> Result<(), RenderError> {
        self.render_calls += 1;
        match self.fail_next.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn set_output_size(&mut self, width: u32, height: u32) {
        self.output_size = Some((width, height));
        self.resize_calls += 1;
    }

    fn set_pixel_ratio_cap(&mut self, ratio: f64) {
        self.pixel_ratio_cap = Some(ratio);
    }
}

fn driver_with(
    scene: Scene,
    width: u32,
    height: u32,
    dpr: f64,
) -> SceneDriver<RecordingRenderer> {
    SceneDriver::new(RecordingRenderer::default(), scene, width, height, dpr, None)
}

fn spinning_object(scene: &mut Scene) -> scene::ObjectId {
    let mat = scene.add_material(Material::standard());
    scene.add_object(SceneObject::new("sphere", Geometry::sphere(1.0, 40, 40), mat))
}

#[test]
fn resize_updates_renderer_and_camera_exactly() {
    let mut driver = driver_with(Scene::new(), 800, 600, 1.0);
    driver.on_resize(1920, 1080);

    assert_eq!(driver.renderer().output_size, Some((1920, 1080)));
    assert_eq!(driver.camera.aspect, 1920.0 / 1080.0);
    assert_eq!(driver.renderer().pixel_ratio_cap, Some(1.0));
    assert_eq!(driver.viewport().width, 1920);
    assert_eq!(driver.viewport().height, 1080);
}

#[test]
fn pixel_ratio_never_exceeds_two() {
    let mut driver = driver_with(Scene::new(), 800, 600, 3.0);
    assert_eq!(driver.renderer().pixel_ratio_cap, Some(2.0));

    driver.set_device_pixel_ratio(1.5);
    assert_eq!(driver.renderer().pixel_ratio_cap, Some(1.5));

    driver.set_device_pixel_ratio(2.75);
    assert_eq!(driver.renderer().pixel_ratio_cap, Some(2.0));
}

#[test]
fn zero_dimension_resize_is_ignored() {
    let mut driver = driver_with(Scene::new(), 800, 600, 1.0);
    let before = *driver.viewport();

    driver.on_resize(0, 1080);
    driver.on_resize(1920, 0);

    assert_eq!(*driver.viewport(), before);
    assert_eq!(driver.renderer().output_size, Some((800, 600)));
}

#[test]
fn spin_rotation_matches_elapsed_time() {
    let mut scene = Scene::new();
    let object = spinning_object(&mut scene);
    let mut driver = driver_with(scene, 800, 600, 1.0);
    driver.animate(object, Vec3::new(0.0, 0.4, 0.0));

    driver.start();
    driver.tick(Duration::from_secs(5)).unwrap();

    let rotation = driver.scene.object(object).unwrap().transform.rotation;
    assert!((rotation.y - 2.0).abs() < 1e-6);
    assert_eq!(rotation.x, 0.0);
}

#[test]
fn animation_replay_is_deterministic() {
    let mut scene = Scene::new();
    let object = spinning_object(&mut scene);
    let mut driver = driver_with(scene, 800, 600, 1.0);
    driver.animate(object, Vec3::new(-0.4, 0.4, 0.0));
    driver.start();

    driver.tick(Duration::from_secs(1)).unwrap();
    let at_one = driver.scene.object(object).unwrap().transform.rotation;
    driver.tick(Duration::from_secs(3)).unwrap();
    let at_three = driver.scene.object(object).unwrap().transform.rotation;

    let delta = at_three - at_one;
    assert!((delta.y - 0.8).abs() < 1e-6);
    assert!((delta.x + 0.8).abs() < 1e-6);
}

#[test]
fn exactly_one_render_per_tick_and_none_while_idle() {
    let mut driver = driver_with(Scene::new(), 800, 600, 1.0);

    driver.tick(Duration::from_millis(16)).unwrap();
    assert_eq!(driver.renderer().render_calls, 0);
    assert_eq!(driver.phase(), Phase::Idle);

    driver.start();
    for i in 1..=3u64 {
        driver.tick(Duration::from_millis(16 * i)).unwrap();
    }
    assert_eq!(driver.renderer().render_calls, 3);
    assert_eq!(driver.phase(), Phase::Running);
}

#[test]
fn clock_never_rewinds() {
    let mut scene = Scene::new();
    let object = spinning_object(&mut scene);
    let mut driver = driver_with(scene, 800, 600, 1.0);
    driver.animate(object, Vec3::new(0.0, 1.0, 0.0));
    driver.start();

    driver.tick(Duration::from_secs(2)).unwrap();
    driver.tick(Duration::from_secs(1)).unwrap();

    assert_eq!(driver.elapsed_seconds(), 2.0);
    let rotation = driver.scene.object(object).unwrap().transform.rotation;
    assert!((rotation.y - 2.0).abs() < 1e-6);
}

#[test]
fn run_consumes_the_scheduler_then_returns() {
    let mut driver = driver_with(Scene::new(), 800, 600, 1.0);
    let mut scheduler = ManualScheduler::fixed_step(Duration::from_millis(16), 5);

    driver.run(&mut scheduler).unwrap();

    assert_eq!(driver.renderer().render_calls, 5);
    assert_eq!(driver.phase(), Phase::Running);
    assert!(scheduler.next_frame().is_none());
}

#[test]
fn surface_lost_is_recovered_by_reapplying_the_viewport() {
    let mut driver = driver_with(Scene::new(), 800, 600, 1.0);
    driver.start();
    let resizes_before = driver.renderer().resize_calls;

    driver.renderer_mut().fail_next = Some(RenderError::SurfaceLost);
    driver.tick(Duration::from_millis(16)).unwrap();

    assert_eq!(driver.renderer().resize_calls, resizes_before + 1);
    // The loop keeps going afterwards.
    driver.tick(Duration::from_millis(32)).unwrap();
    assert_eq!(driver.renderer().render_calls, 2);
}

#[test]
fn out_of_memory_is_fatal() {
    let mut driver = driver_with(Scene::new(), 800, 600, 1.0);
    driver.start();
    driver.renderer_mut().fail_next = Some(RenderError::OutOfMemory);
    assert!(driver.tick(Duration::from_millis(16)).is_err());
}

#[test]
fn panel_write_is_visible_before_the_next_tick() {
    let mut scene = Scene::new();
    let mat = scene.add_material(Material::physical());
    let mut driver = driver_with(scene, 800, 600, 1.0);
    driver.panel.register_control(
        "metalness",
        ParamTarget::Material {
            material: mat,
            field: MaterialField::Metalness,
        },
        Some(ControlRange::new(0.0, 1.0, 0.0001)),
    );

    driver
        .panel
        .set(&mut driver.scene, 0, ControlValue::Number(0.25));

    let value = driver.scene.material(mat).unwrap().as_standard().unwrap().metalness;
    assert!((value - 0.25).abs() < 1e-6);

    // Out-of-range writes are clamped, never rejected.
    driver
        .panel
        .set(&mut driver.scene, 0, ControlValue::Number(7.5));
    let clamped = driver.scene.material(mat).unwrap().as_standard().unwrap().metalness;
    assert_eq!(clamped, 1.0);
}

#[test]
fn panel_read_back_round_trips() {
    let mut scene = Scene::new();
    let mat = scene.add_material(Material::physical());
    let mut driver = driver_with(scene, 800, 600, 1.0);
    driver.panel.register_control(
        "ior",
        ParamTarget::Material {
            material: mat,
            field: MaterialField::Ior,
        },
        Some(ControlRange::new(1.0, 2.0, 0.0001)),
    );

    driver
        .panel
        .set(&mut driver.scene, 0, ControlValue::Number(1.3333));
    match driver.panel.get(&driver.scene, 0) {
        Some(ControlValue::Number(v)) => assert!((v - 1.3333).abs() < 1e-4),
        other => panic!("expected a number, got {other:?}"),
    }
}
