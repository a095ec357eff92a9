use crate::camera::Camera;
use crate::color::Rgb;
use crate::constants::*;
use crate::dom;
use crate::frame::RenderSurface;
use crate::input::Viewport;
use crate::mesh;
use crate::scene::{MeshKind, Scene};
use glam::Vec3;
use std::ops::Range;
use web_sys as web;

mod helpers;
mod targets;
use helpers::GpuMesh;
use targets::DepthTarget;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    camera_forward: [f32; 4],
    light_pos: [f32; 4],
    light_color: [f32; 4],
    ambient: [f32; 4],
    fog_color: [f32; 4],
    fog_range: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceRaw {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    emissive: [f32; 4],
}

struct SceneMeshes {
    core: GpuMesh,
    glow: GpuMesh,
    satellite: GpuMesh,
}

impl SceneMeshes {
    fn get(&self, kind: MeshKind) -> &GpuMesh {
        match kind {
            MeshKind::Core => &self.core,
            MeshKind::Glow => &self.glow,
            MeshKind::Satellite => &self.satellite,
        }
    }
}

pub struct GpuState<'a> {
    canvas: &'a web::HtmlCanvasElement,
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    lit_pipeline: wgpu::RenderPipeline,
    wire_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,

    meshes: SceneMeshes,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    instances: Vec<InstanceRaw>,

    // CSS size as last requested; the backing store is this times `pixel_ratio`
    css_width: u32,
    css_height: u32,
    pixel_ratio: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, viewport: &Viewport) -> anyhow::Result<Self> {
        let css_width = viewport.width as u32;
        let css_height = viewport.height as u32;
        let pixel_ratio = viewport.pixel_ratio.max(1.0);
        dom::size_canvas(canvas, css_width, css_height, pixel_ratio);
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
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
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
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth = DepthTarget::new(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
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
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let lit_pipeline = helpers::make_mesh_pipeline(
            &device,
            "lit_pipeline",
            &layout,
            &shader,
            "fs_phong",
            wgpu::PrimitiveTopology::TriangleList,
            format,
            None,
            true,
        );
        let wire_pipeline = helpers::make_mesh_pipeline(
            &device,
            "wire_pipeline",
            &layout,
            &shader,
            "fs_unlit",
            wgpu::PrimitiveTopology::LineList,
            format,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            false,
        );
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let core_mesh = mesh::icosphere(CORE_RADIUS, ICOSPHERE_DETAIL);
        let glow_mesh = mesh::icosphere(GLOW_RADIUS, ICOSPHERE_DETAIL);
        let cube_mesh = mesh::cube(SATELLITE_SIZE);
        let meshes = SceneMeshes {
            core: helpers::upload_mesh(&device, "core_mesh", &core_mesh, &core_mesh.indices),
            glow: helpers::upload_mesh(&device, "glow_mesh", &glow_mesh, &glow_mesh.edge_indices()),
            satellite: helpers::upload_mesh(&device, "cube_mesh", &cube_mesh, &cube_mesh.indices),
        };

        let instance_capacity = 8;
        let instance_buffer = create_instance_buffer(&device, instance_capacity);

        log::info!(
            "[gpu] surface {}x{} ({:?}), dpr {:.2}",
            width,
            height,
            format,
            pixel_ratio
        );

        Ok(Self {
            canvas,
            surface,
            device,
            queue,
            config,
            depth,
            lit_pipeline,
            wire_pipeline,
            uniform_buffer,
            bind_group,
            meshes,
            instance_buffer,
            instance_capacity,
            instances: Vec::new(),
            css_width,
            css_height,
            pixel_ratio,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.config.width || height != self.config.height {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn draw(&mut self, scene: &Scene, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        // Opaque kinds first, then the blended wireframe shell
        let mut ranges: [(MeshKind, Range<u32>); 3] = [
            (MeshKind::Core, 0..0),
            (MeshKind::Satellite, 0..0),
            (MeshKind::Glow, 0..0),
        ];
        self.instances.clear();
        for (kind, range) in ranges.iter_mut() {
            let start = self.instances.len() as u32;
            for (id, node) in scene.iter().filter(|(_, n)| n.mesh == *kind) {
                let m = &node.material;
                self.instances.push(InstanceRaw {
                    model: scene.world_matrix(id).to_cols_array_2d(),
                    color: [m.color.r, m.color.g, m.color.b, m.opacity],
                    emissive: [m.emissive.r, m.emissive.g, m.emissive.b, m.shininess],
                });
            }
            *range = start..self.instances.len() as u32;
        }
        if self.instances.len() > self.instance_capacity {
            self.instance_capacity = self.instances.len().next_power_of_two();
            self.instance_buffer = create_instance_buffer(&self.device, self.instance_capacity);
        }
        if !self.instances.is_empty() {
            self.queue.write_buffer(
                &self.instance_buffer,
                0,
                bytemuck::cast_slice(&self.instances),
            );
        }
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&scene_uniforms(scene, camera)),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let bg = scene.background;
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: bg.r as f64,
                            g: bg.g as f64,
                            b: bg.b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            for (kind, range) in ranges {
                if range.is_empty() {
                    continue;
                }
                let pipeline = match kind {
                    MeshKind::Glow => &self.wire_pipeline,
                    MeshKind::Core | MeshKind::Satellite => &self.lit_pipeline,
                };
                let gpu_mesh = self.meshes.get(kind);
                rpass.set_pipeline(pipeline);
                rpass.set_vertex_buffer(0, gpu_mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(gpu_mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..gpu_mesh.index_count, 0, range);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl RenderSurface for GpuState<'_> {
    fn size(&self) -> (u32, u32) {
        (self.css_width, self.css_height)
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.css_width = width;
        self.css_height = height;
        dom::size_canvas(self.canvas, width, height, self.pixel_ratio);
        self.resize_if_needed(self.canvas.width(), self.canvas.height());
    }

    fn render(&mut self, scene: &Scene, camera: &Camera) -> anyhow::Result<()> {
        match self.draw(scene, camera) {
            Ok(()) => Ok(()),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost/outdated; reconfiguring");
                self.reconfigure();
                Ok(())
            }
            Err(e) => Err(anyhow::anyhow!("surface error: {:?}", e)),
        }
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("instances"),
        size: (capacity.max(1) * std::mem::size_of::<InstanceRaw>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn scene_uniforms(scene: &Scene, camera: &Camera) -> SceneUniforms {
    let light = Rgb::from_hex(POINT_LIGHT_COLOR)
        .to_linear()
        .scale(POINT_LIGHT_INTENSITY);
    let ambient = Rgb::from_hex(AMBIENT_LIGHT_COLOR)
        .to_linear()
        .scale(AMBIENT_LIGHT_INTENSITY);
    let light_pos = Vec3::from_array(POINT_LIGHT_POSITION);
    let fog = scene.fog_color;
    SceneUniforms {
        view_proj: camera.view_proj().to_cols_array_2d(),
        camera_pos: camera.eye.extend(1.0).to_array(),
        camera_forward: camera.forward().extend(0.0).to_array(),
        light_pos: light_pos.extend(1.0).to_array(),
        light_color: [light.r, light.g, light.b, 1.0],
        ambient: [ambient.r, ambient.g, ambient.b, 1.0],
        fog_color: [fog.r, fog.g, fog.b, 1.0],
        fog_range: [scene.fog_near, scene.fog_far, 0.0, 0.0],
    }
}
