use std::sync::Arc;

use glam::{Mat4, Vec3};
use morphcloud::{Blessing, BlessingDesk, FrameClock, Scene, ShapeId};
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::shader::{Uniforms, SHADER_SOURCE};
use crate::ViewerSource;

const GOLD: [f32; 3] = [1.0, 0.843, 0.0];
const MAIN_POINT_SIZE: f32 = 0.06;
const GLOW_POINT_SIZE: f32 = 0.28;
/// Cursor travel (in pixels) below which a press counts as a click.
const CLICK_SLOP: f64 = 4.0;

#[derive(Debug, Error)]
pub enum GpuError {
    #[error("failed to create GPU surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter found: {0}")]
    NoAdapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create GPU device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported {0}")]
    UnsupportedSurface(&'static str),
}

/// Prefer an sRGB format and take the first advertised alpha mode.
fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
) -> Result<(wgpu::TextureFormat, wgpu::CompositeAlphaMode), GpuError> {
    let format = caps
        .formats
        .iter()
        .find(|f| f.is_srgb())
        .or_else(|| caps.formats.first())
        .copied()
        .ok_or(GpuError::UnsupportedSurface("texture formats"))?;
    let alpha_mode = caps
        .alpha_modes
        .first()
        .copied()
        .ok_or(GpuError::UnsupportedSurface("alpha modes"))?;
    Ok((format, alpha_mode))
}

pub struct Camera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target: Vec3,
}

impl Camera {
    fn new() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.1,
            distance: 15.0,
            target: Vec3::ZERO,
        }
    }

    fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }
}

/// One instanced point layer: its positions and its uniforms.
struct Layer {
    vertex_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    count: u32,
    color: [f32; 4],
    point_size: f32,
}

impl Layer {
    fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        label: &str,
        count: usize,
        color: [f32; 4],
        point_size: f32,
    ) -> Self {
        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{label} Positions")),
            size: (count.max(1) * 3 * std::mem::size_of::<f32>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{label} Uniforms")),
            size: std::mem::size_of::<Uniforms>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} Bind Group")),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Self {
            vertex_buffer,
            uniform_buffer,
            bind_group,
            count: count as u32,
            color,
            point_size,
        }
    }

    fn upload(&self, queue: &wgpu::Queue, positions: &[u8], view_proj: Mat4, time: f32) {
        if !positions.is_empty() {
            queue.write_buffer(&self.vertex_buffer, 0, positions);
        }
        let uniforms = Uniforms {
            view_proj: view_proj.to_cols_array_2d(),
            color: self.color,
            point_size: self.point_size,
            time,
            _padding: [0.0; 2],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    render_pipeline: wgpu::RenderPipeline,
    main_layer: Layer,
    glow_layer: Layer,
    pub camera: Camera,
}

impl GpuState {
    pub async fn new(window: Arc<Window>, main_count: usize, glow_count: usize) -> Result<Self, GpuError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let (surface_format, alpha_mode) = choose_surface_format(&surface_caps)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Uniform Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let main_layer = Layer::new(
            &device,
            &uniform_bind_group_layout,
            "Main",
            main_count,
            [GOLD[0], GOLD[1], GOLD[2], 0.9],
            MAIN_POINT_SIZE,
        );
        let glow_layer = Layer::new(
            &device,
            &uniform_bind_group_layout,
            "Glow",
            glow_count,
            [GOLD[0], GOLD[1] * 0.9, GOLD[2] + 0.2, 0.18],
            GLOW_POINT_SIZE,
        );

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Point Shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let render_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Render Pipeline Layout"),
            bind_group_layouts: &[&uniform_bind_group_layout],
            push_constant_ranges: &[],
        });

        // Additive, no depth: overlapping points brighten instead of hiding each other.
        let additive = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
        };

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Render Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: (3 * std::mem::size_of::<f32>()) as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &[wgpu::VertexAttribute {
                        offset: 0,
                        shader_location: 0,
                        format: wgpu::VertexFormat::Float32x3,
                    }],
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(additive),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            render_pipeline,
            main_layer,
            glow_layer,
            camera: Camera::new(),
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Upload the animator's buffers and the camera for this frame.
    fn upload(&mut self, scene: &Scene, time: f32) {
        let animator = scene.animator();
        let aspect = self.config.width as f32 / self.config.height as f32;
        let proj = Mat4::perspective_rh(50.0_f32.to_radians(), aspect, 0.1, 200.0);
        let model = Mat4::from_rotation_y(animator.rotation());
        let view_proj = proj * self.camera.view_matrix() * model;

        self.main_layer
            .upload(&self.queue, animator.positions().as_bytes(), view_proj, time);
        self.glow_layer
            .upload(&self.queue, animator.glow_positions().as_bytes(), view_proj, time);
    }

    pub fn render(&mut self, scene: &Scene, time: f32) -> Result<(), wgpu::SurfaceError> {
        self.upload(scene, time);

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.02,
                            g: 0.02,
                            b: 0.02,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.render_pipeline);
            // Glow first so the sharp points sit on top of the haze.
            for layer in [&self.glow_layer, &self.main_layer] {
                if layer.count == 0 {
                    continue;
                }
                render_pass.set_bind_group(0, &layer.bind_group, &[]);
                render_pass.set_vertex_buffer(0, layer.vertex_buffer.slice(..));
                render_pass.draw(0..6, 0..layer.count);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

pub struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    scene: Scene,
    desk: BlessingDesk<ViewerSource>,
    clock: FrameClock,
    mouse_pressed: bool,
    last_mouse_pos: Option<(f64, f64)>,
    drag_distance: f64,
}

impl App {
    pub fn new(scene: Scene, desk: BlessingDesk<ViewerSource>) -> Self {
        Self {
            window: None,
            gpu_state: None,
            scene,
            desk,
            clock: FrameClock::new(),
            mouse_pressed: false,
            last_mouse_pos: None,
            drag_distance: 0.0,
        }
    }

    fn select(&mut self, shape: Option<ShapeId>) {
        let elapsed = self.clock.elapsed();
        let ticket = match shape {
            Some(shape) => self.scene.select_shape(shape, elapsed),
            None => self.scene.next_shape(elapsed),
        };
        self.desk.submit(ticket);
        self.update_title(None);
    }

    fn update_title(&self, blessing: Option<&Blessing>) {
        let Some(window) = &self.window else {
            return;
        };
        let shape = self.scene.active_shape();
        let rare = if self.scene.is_rare_drop() { " [RARE]" } else { "" };
        let title = match blessing {
            Some(b) => format!("morphcloud | {}{} | {}: {}", shape, rare, b.title, b.message),
            None => format!("morphcloud | {}{} | ...", shape, rare),
        };
        window.set_title(&title);
    }

    fn handle_key(&mut self, code: KeyCode) {
        let digit = match code {
            KeyCode::Digit1 => Some(0),
            KeyCode::Digit2 => Some(1),
            KeyCode::Digit3 => Some(2),
            KeyCode::Digit4 => Some(3),
            KeyCode::Digit5 => Some(4),
            KeyCode::Digit6 => Some(5),
            KeyCode::Digit7 => Some(6),
            KeyCode::Digit8 => Some(7),
            KeyCode::Digit9 => Some(8),
            KeyCode::Digit0 => Some(9),
            _ => None,
        };

        if let Some(i) = digit {
            self.select(ShapeId::ALL.get(i).copied());
            return;
        }

        match code {
            KeyCode::Space => self.select(None),
            KeyCode::KeyP => self.clock.toggle_pause(),
            _ => {}
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (elapsed, delta) = self.clock.advance();

        if let Some(blessing) = self.scene.receive(&self.desk).cloned() {
            log::info!("{}: {}", blessing.title, blessing.message);
            self.update_title(Some(&blessing));
        }

        self.scene.tick(elapsed, delta);

        if let Some(gpu_state) = &mut self.gpu_state {
            match gpu_state.render(&self.scene, elapsed) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => gpu_state.resize(winit::dpi::PhysicalSize {
                    width: gpu_state.config.width,
                    height: gpu_state.config.height,
                }),
                Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("morphcloud")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let animator = self.scene.animator();
        let counts = (animator.positions().len(), animator.glow_positions().len());
        match pollster::block_on(GpuState::new(window.clone(), counts.0, counts.1)) {
            Ok(gpu_state) => self.gpu_state = Some(gpu_state),
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window);
        self.update_title(self.scene.current_blessing());
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => self.handle_key(code),
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = state == ElementState::Pressed;
                    if self.mouse_pressed {
                        self.drag_distance = 0.0;
                    } else {
                        self.last_mouse_pos = None;
                        if self.drag_distance < CLICK_SLOP {
                            self.select(None);
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.mouse_pressed {
                    if let Some((last_x, last_y)) = self.last_mouse_pos {
                        let dx = position.x - last_x;
                        let dy = position.y - last_y;
                        self.drag_distance += (dx * dx + dy * dy).sqrt();

                        if let Some(gpu_state) = &mut self.gpu_state {
                            gpu_state.camera.yaw -= dx as f32 * 0.005;
                            gpu_state.camera.pitch += dy as f32 * 0.005;
                            gpu_state.camera.pitch = gpu_state.camera.pitch.clamp(-1.5, 1.5);
                        }
                    }
                    self.last_mouse_pos = Some((position.x, position.y));
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                };
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.camera.distance -= scroll * 0.8;
                    gpu_state.camera.distance = gpu_state.camera.distance.clamp(5.0, 40.0);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}
