use crate::dom;
use crate::effects::Effect;
use fx_core::{
    CancelToken, EffectError, EffectKind, FrameSignals, SphereMesh, SphereVertex, Viewport,
    MAX_DEVICE_PIXEL_RATIO, SPHERE_DISPLACEMENT, SPHERE_SLICES, SPHERE_SPIN_RATE, SPHERE_STACKS,
};
use glam::{Mat4, Vec3};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;
use wgpu::util::DeviceExt;

static SPHERE_WGSL: &str = include_str!("../../shaders/sphere.wgsl");

/// Noise-displaced shader sphere. The GPU context is acquired asynchronously;
/// until it lands (or if the host has no adapter) the effect renders nothing
/// and its frame step is a no-op.
pub struct SphereEffect {
    canvas: Option<web::HtmlCanvasElement>,
    gpu: Rc<RefCell<Option<GpuState<'static>>>>,
    stopped: CancelToken,
}

impl SphereEffect {
    pub fn start(host: &web::Element, viewport: Viewport) -> Result<Self, EffectError> {
        let canvas: web::HtmlCanvasElement = dom::create_surface(host, "canvas", "hero-canvas")?
            .dyn_into()
            .map_err(|_| EffectError::CapabilityUnavailable("canvas element"))?;
        dom::size_canvas(&canvas, viewport, MAX_DEVICE_PIXEL_RATIO);

        let gpu: Rc<RefCell<Option<GpuState<'static>>>> = Rc::new(RefCell::new(None));
        let stopped = CancelToken::new();

        let gpu_slot = gpu.clone();
        let stopped_probe = stopped.clone();
        let canvas_gpu = canvas.clone();
        spawn_local(async move {
            // Leak a canvas clone to satisfy the 'static surface lifetime.
            let leaked: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas_gpu.clone()));
            match GpuState::new(leaked).await {
                Ok(state) => {
                    if stopped_probe.is_cancelled() {
                        return;
                    }
                    let _ = canvas_gpu.class_list().add_1("loaded");
                    *gpu_slot.borrow_mut() = Some(state);
                }
                Err(e) => {
                    log::info!("sphere effect degraded, no gpu context: {e:?}");
                }
            }
        });

        Ok(Self {
            canvas: Some(canvas),
            gpu,
            stopped,
        })
    }
}

impl Effect for SphereEffect {
    fn kind(&self) -> EffectKind {
        EffectKind::Sphere
    }

    fn frame(&mut self, now_sec: f64, _dt: f32, signals: &FrameSignals) {
        let Some(canvas) = &self.canvas else { return };
        if let Some(gpu) = self.gpu.borrow_mut().as_mut() {
            gpu.resize_if_needed(canvas.width(), canvas.height());
            let pointer = [signals.pointer.x, signals.pointer.y];
            if let Err(e) = gpu.render(now_sec as f32, pointer) {
                log::error!("sphere render error: {e:?}");
            }
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        if let Some(canvas) = &self.canvas {
            dom::size_canvas(canvas, viewport, MAX_DEVICE_PIXEL_RATIO);
        }
    }

    fn stop(&mut self) {
        self.stopped.cancel();
        self.gpu.borrow_mut().take();
        if let Some(canvas) = self.canvas.take() {
            canvas.remove();
        }
    }
}

// ===================== WebGPU state =====================

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SphereUniforms {
    view_proj: [[f32; 4]; 4],
    pointer: [f32; 2],
    time: f32,
    displacement: f32,
}

struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("no WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {e:?}")))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let mesh = SphereMesh::build(SPHERE_STACKS, SPHERE_SLICES);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere_vb"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere_ib"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sphere_shader"),
            source: wgpu::ShaderSource::Wgsl(SPHERE_WGSL.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sphere_uniforms"),
            size: std::mem::size_of::<SphereUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("sphere_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sphere_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sphere_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SphereVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 24,
                    shader_location: 2,
                },
            ],
        };

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sphere_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_layout],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            bind_group,
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            width,
            height,
        })
    }

    /// Reconfigure the surface when the canvas backing size changed. The
    /// projection follows automatically because `view_proj` reads the stored
    /// size every frame; skipping this on resize stretches the render.
    fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn view_proj(&self, time: f32) -> [[f32; 4]; 4] {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let proj = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, aspect, 0.1, 100.0);
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y);
        let model = Mat4::from_rotation_y(time * SPHERE_SPIN_RATE);
        (proj * view * model).to_cols_array_2d()
    }

    fn render(&mut self, time: f32, pointer: [f32; 2]) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&SphereUniforms {
                view_proj: self.view_proj(time),
                pointer,
                time,
                displacement: SPHERE_DISPLACEMENT,
            }),
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("sphere_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("sphere_rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        // Transparent clear so the page shows through
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.index_count, 0, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
