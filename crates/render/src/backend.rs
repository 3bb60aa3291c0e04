use std::sync::Arc;

use anyhow::{Context, Result};
use wgpu::util::DeviceExt;
use winit::window::Window;

use driver::{RenderError, Renderer};
use scene::{PerspectiveCamera, Scene};

use crate::gpu_types::{self, CameraUniform, GpuScene, SceneCounts};

/// Initial storage-buffer size per primitive kind; grown on demand.
const INITIAL_BUFFER_SIZE: u64 = 1024;

/// wgpu implementation of the driver's renderer seam.
///
/// Output sizing follows the canvas model: `set_output_size` receives
/// logical pixels and the surface is configured at `logical * pixel_ratio`,
/// where the ratio arrives pre-capped from the driver.
pub struct GpuRenderer {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    counts_buffer: wgpu::Buffer,
    spheres_buffer: wgpu::Buffer,
    spheres_capacity: u64,
    boxes_buffer: wgpu::Buffer,
    boxes_capacity: u64,
    toruses_buffer: wgpu::Buffer,
    toruses_capacity: u64,
    lights_buffer: wgpu::Buffer,
    lights_capacity: u64,
    bind_group: wgpu::BindGroup,
    bind_group_layout: wgpu::BindGroupLayout,
    logical_size: (u32, u32),
    pixel_ratio: f64,
}

impl GpuRenderer {
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let instance = wgpu::Instance::default();
        let surface = unsafe {
            instance.create_surface_unsafe(wgpu::SurfaceTargetUnsafe::from_window(&*window)?)?
        };
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to get adapter")?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Scene Renderer Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await
            .context("failed to request device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            desired_maximum_frame_latency: 2,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let camera_uniform = CameraUniform {
            view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            view_proj_inv: glam::Mat4::IDENTITY.to_cols_array_2d(),
            eye: [0.0; 4],
        };
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::bytes_of(&camera_uniform),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let counts = SceneCounts {
            spheres: 0,
            boxes: 0,
            toruses: 0,
            lights: 0,
        };
        let counts_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Counts"),
            contents: bytemuck::bytes_of(&counts),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let make_storage = |label: &str| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: INITIAL_BUFFER_SIZE,
                usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };
        let spheres_buffer = make_storage("spheres");
        let boxes_buffer = make_storage("boxes");
        let toruses_buffer = make_storage("toruses");
        let lights_buffer = make_storage("lights");

        let bind_group_layout = create_bind_group_layout(&device);
        let bind_group = create_bind_group(
            &device,
            &bind_group_layout,
            &camera_buffer,
            &counts_buffer,
            &spheres_buffer,
            &boxes_buffer,
            &toruses_buffer,
            &lights_buffer,
        );

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("scene.wgsl").into()),
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            camera_buffer,
            counts_buffer,
            spheres_buffer,
            spheres_capacity: INITIAL_BUFFER_SIZE,
            boxes_buffer,
            boxes_capacity: INITIAL_BUFFER_SIZE,
            toruses_buffer,
            toruses_capacity: INITIAL_BUFFER_SIZE,
            lights_buffer,
            lights_capacity: INITIAL_BUFFER_SIZE,
            bind_group,
            bind_group_layout,
            logical_size: (size.width.max(1), size.height.max(1)),
            pixel_ratio: 1.0,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    fn reconfigure(&mut self) {
        let (w, h) = self.logical_size;
        self.config.width = ((f64::from(w) * self.pixel_ratio) as u32).max(1);
        self.config.height = ((f64::from(h) * self.pixel_ratio) as u32).max(1);
        self.surface.configure(&self.device, &self.config);
    }

    fn upload(&mut self, gpu_scene: &GpuScene) {
        let mut rebind = false;
        rebind |= Self::ensure_capacity(
            &self.device,
            &mut self.spheres_buffer,
            &mut self.spheres_capacity,
            "spheres",
            bytemuck::cast_slice::<_, u8>(&gpu_scene.spheres).len() as u64,
        );
        rebind |= Self::ensure_capacity(
            &self.device,
            &mut self.boxes_buffer,
            &mut self.boxes_capacity,
            "boxes",
            bytemuck::cast_slice::<_, u8>(&gpu_scene.boxes).len() as u64,
        );
        rebind |= Self::ensure_capacity(
            &self.device,
            &mut self.toruses_buffer,
            &mut self.toruses_capacity,
            "toruses",
            bytemuck::cast_slice::<_, u8>(&gpu_scene.toruses).len() as u64,
        );
        rebind |= Self::ensure_capacity(
            &self.device,
            &mut self.lights_buffer,
            &mut self.lights_capacity,
            "lights",
            bytemuck::cast_slice::<_, u8>(&gpu_scene.lights).len() as u64,
        );
        if rebind {
            self.bind_group = create_bind_group(
                &self.device,
                &self.bind_group_layout,
                &self.camera_buffer,
                &self.counts_buffer,
                &self.spheres_buffer,
                &self.boxes_buffer,
                &self.toruses_buffer,
                &self.lights_buffer,
            );
        }

        if !gpu_scene.spheres.is_empty() {
            self.queue
                .write_buffer(&self.spheres_buffer, 0, bytemuck::cast_slice::<_, u8>(&gpu_scene.spheres));
        }
        if !gpu_scene.boxes.is_empty() {
            self.queue
                .write_buffer(&self.boxes_buffer, 0, bytemuck::cast_slice::<_, u8>(&gpu_scene.boxes));
        }
        if !gpu_scene.toruses.is_empty() {
            self.queue
                .write_buffer(&self.toruses_buffer, 0, bytemuck::cast_slice::<_, u8>(&gpu_scene.toruses));
        }
        if !gpu_scene.lights.is_empty() {
            self.queue
                .write_buffer(&self.lights_buffer, 0, bytemuck::cast_slice::<_, u8>(&gpu_scene.lights));
        }
        self.queue
            .write_buffer(&self.counts_buffer, 0, bytemuck::bytes_of(&gpu_scene.counts()));
    }

    fn ensure_capacity(
        device: &wgpu::Device,
        buffer: &mut wgpu::Buffer,
        capacity: &mut u64,
        label: &str,
        required: u64,
    ) -> bool {
        if required <= *capacity {
            return false;
        }
        buffer.destroy();
        *buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: required,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        *capacity = required;
        true
    }
}

impl Renderer for GpuRenderer {
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), RenderError> {
        let view_proj = camera.view_projection_matrix();
        let camera_uniform = CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            view_proj_inv: view_proj.inverse().to_cols_array_2d(),
            eye: [camera.eye.x, camera.eye.y, camera.eye.z, 0.0],
        };
        self.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&camera_uniform));

        let gpu_scene = gpu_types::collect_scene(scene);
        self.upload(&gpu_scene);

        let output = self.surface.get_current_texture().map_err(|e| match e {
            wgpu::SurfaceError::Lost => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Transient(other.to_string()),
        })?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("enc") });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.draw(0..3, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();

        Ok(())
    }

    fn set_output_size(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.logical_size = (width, height);
        self.reconfigure();
    }

    fn set_pixel_ratio_cap(&mut self, ratio: f64) {
        self.pixel_ratio = ratio.max(0.1);
        self.reconfigure();
    }
}

fn create_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    let uniform = |binding| wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    };
    let storage = |binding| wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Storage { read_only: true },
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    };
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("bind layout"),
        entries: &[
            uniform(0),
            uniform(1),
            storage(2),
            storage(3),
            storage(4),
            storage(5),
        ],
    })
}

#[allow(clippy::too_many_arguments)]
fn create_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    camera: &wgpu::Buffer,
    counts: &wgpu::Buffer,
    spheres: &wgpu::Buffer,
    boxes: &wgpu::Buffer,
    toruses: &wgpu::Buffer,
    lights: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("bind group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: camera.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: counts.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: spheres.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 3,
                resource: boxes.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 4,
                resource: toruses.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 5,
                resource: lights.as_entire_binding(),
            },
        ],
    })
}
