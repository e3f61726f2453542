use crate::constants::MSAA_SAMPLES;
use glam::Mat4;
use room_core::mesh::{MeshData, Vertex};
use room_core::scene::Lighting;
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
const VERTEX_ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
    0 => Float32x3,
    1 => Float32x3,
    2 => Float32x4,
    3 => Float32x3,
    4 => Float32,
];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view_proj: [[f32; 4]; 4],
    sun: [f32; 4],
    sky: [f32; 4],
    ground: [f32; 4],
}

/// Vertex/index buffers that are rewritten every frame and grow on demand.
struct DynamicMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    index_capacity: usize,
    index_count: u32,
}

impl DynamicMesh {
    fn new(device: &wgpu::Device, vertex_capacity: usize, index_capacity: usize) -> Self {
        let (vertex_buffer, index_buffer) =
            Self::allocate(device, vertex_capacity.max(1), index_capacity.max(1));
        Self {
            vertex_buffer,
            index_buffer,
            vertex_capacity: vertex_capacity.max(1),
            index_capacity: index_capacity.max(1),
            index_count: 0,
        }
    }

    fn allocate(device: &wgpu::Device, vertices: usize, indices: usize) -> (wgpu::Buffer, wgpu::Buffer) {
        let vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("translucent_vertices"),
            size: (vertices * std::mem::size_of::<Vertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let ib = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("translucent_indices"),
            size: (indices * std::mem::size_of::<u32>()) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        (vb, ib)
    }

    fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, mesh: &MeshData) {
        if mesh.vertices.len() > self.vertex_capacity || mesh.indices.len() > self.index_capacity {
            self.vertex_capacity = mesh.vertices.len().next_power_of_two();
            self.index_capacity = mesh.indices.len().next_power_of_two();
            (self.vertex_buffer, self.index_buffer) =
                Self::allocate(device, self.vertex_capacity, self.index_capacity);
        }
        if !mesh.is_empty() {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&mesh.vertices));
            queue.write_buffer(&self.index_buffer, 0, bytemuck::cast_slice(&mesh.indices));
        }
        self.index_count = mesh.indices.len() as u32;
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    view_format: wgpu::TextureFormat,

    opaque_pipeline: wgpu::RenderPipeline,
    translucent_pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,

    opaque_vertices: wgpu::Buffer,
    opaque_indices: wgpu::Buffer,
    opaque_index_count: u32,
    translucent: DynamicMesh,

    msaa_view: wgpu::TextureView,
    depth_view: wgpu::TextureView,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    /// `opaque` is uploaded once; the room's opaque geometry never changes.
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        background: [f32; 3],
        opaque: &MeshData,
    ) -> anyhow::Result<Self> {
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
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
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
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Canvas formats are usually non-sRGB; render through an sRGB view instead.
        let view_format = format.add_srgb_suffix();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: if view_format != format {
                vec![view_format]
            } else {
                vec![]
            },
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("room_shader"),
            source: wgpu::ShaderSource::Wgsl(room_core::ROOM_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
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
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("room_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline_desc = helpers::MeshPipelineDesc {
            layout: &pl,
            shader: &shader,
            vertex_layout: vertex_layout(),
            color_format: view_format,
            depth_format: DEPTH_FORMAT,
            sample_count: MSAA_SAMPLES,
        };
        let opaque_pipeline = helpers::make_mesh_pipeline(
            &device,
            "opaque_pipeline",
            &pipeline_desc,
            helpers::Blending::Opaque,
        );
        let translucent_pipeline = helpers::make_mesh_pipeline(
            &device,
            "translucent_pipeline",
            &pipeline_desc,
            helpers::Blending::Translucent,
        );

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let opaque_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("opaque_vertices"),
            contents: bytemuck::cast_slice(&opaque.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let opaque_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("opaque_indices"),
            contents: bytemuck::cast_slice(&opaque.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let translucent = DynamicMesh::new(&device, 1024, 2048);

        let (_, msaa_view) = helpers::create_target_texture(
            &device,
            "msaa_color",
            width,
            height,
            view_format,
            MSAA_SAMPLES,
        );
        let (_, depth_view) = helpers::create_target_texture(
            &device,
            "depth",
            width,
            height,
            DEPTH_FORMAT,
            MSAA_SAMPLES,
        );

        log::info!(
            "[gpu] surface {}x{} format={:?} view={:?} opaque_tris={}",
            width,
            height,
            format,
            view_format,
            opaque.indices.len() / 3
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format,
            opaque_pipeline,
            translucent_pipeline,
            globals_buffer,
            globals_bind_group,
            opaque_vertices,
            opaque_indices,
            opaque_index_count: opaque.indices.len() as u32,
            translucent,
            msaa_view,
            depth_view,
            width,
            height,
            clear_color: wgpu::Color {
                r: background[0] as f64,
                g: background[1] as f64,
                b: background[2] as f64,
                a: 1.0,
            },
        })
    }

    pub fn set_camera(&mut self, view_proj: Mat4, lighting: &Lighting) {
        let g = Globals {
            view_proj: view_proj.to_cols_array_2d(),
            sun: lighting.sun_direction.extend(lighting.sun_intensity).to_array(),
            sky: [
                lighting.sky[0],
                lighting.sky[1],
                lighting.sky[2],
                lighting.hemi_intensity,
            ],
            ground: [lighting.ground[0], lighting.ground[1], lighting.ground[2], 0.0],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&g));
    }

    pub fn set_translucent(&mut self, mesh: &MeshData) {
        self.translucent.upload(&self.device, &self.queue, mesh);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        (_, self.msaa_view) = helpers::create_target_texture(
            &self.device,
            "msaa_color",
            self.width,
            self.height,
            self.view_format,
            MSAA_SAMPLES,
        );
        (_, self.depth_view) = helpers::create_target_texture(
            &self.device,
            "depth",
            self.width,
            self.height,
            DEPTH_FORMAT,
            MSAA_SAMPLES,
        );
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.reconfigure();
                self.surface.get_current_texture()?
            }
            Err(e) => return Err(e),
        };
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("room_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);

            rpass.set_pipeline(&self.opaque_pipeline);
            rpass.set_vertex_buffer(0, self.opaque_vertices.slice(..));
            rpass.set_index_buffer(self.opaque_indices.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.opaque_index_count, 0, 0..1);

            if self.translucent.index_count > 0 {
                rpass.set_pipeline(&self.translucent_pipeline);
                rpass.set_vertex_buffer(0, self.translucent.vertex_buffer.slice(..));
                rpass.set_index_buffer(
                    self.translucent.index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                rpass.draw_indexed(0..self.translucent.index_count, 0, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
