//! wgpu sprite-batch render pipeline
//!
//! Draw calls between [`RenderState::begin_frame`] and [`RenderState::end_frame`]
//! are collected into one vertex buffer; consecutive quads sharing a texture
//! become a single draw.

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use wgpu::util::DeviceExt;
use winit::window::Window;

use super::font;
use super::texture::TextureData;
use super::vertex::{Color, Vertex, colors};
use super::{Canvas, TextureId};
use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::DasherError;
use crate::sim::Rect;

/// Vertex buffer capacity on startup (grows as needed)
const INITIAL_VERTEX_CAPACITY: usize = 6 * 128;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Globals {
    screen_size: [f32; 2],
    _pad: [f32; 2],
}

struct GpuTexture {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
    size: (u32, u32),
}

/// A run of vertices drawn with one texture
#[derive(Debug, Clone, Copy)]
struct Batch {
    texture: TextureId,
    start: u32,
    end: u32,
}

/// Main render state
pub struct RenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,

    globals_bind_group: wgpu::BindGroup,
    texture_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    textures: Vec<GpuTexture>,
    font: TextureId,

    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    vertices: Vec<Vertex>,
    batches: Vec<Batch>,
    clear_color: wgpu::Color,

    /// Surface size in physical pixels
    pub size: (u32, u32),
}

impl RenderState {
    pub fn new(window: Arc<Window>, vsync: bool) -> Result<Self, DasherError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("dasher-device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                .using_resolution(adapter.limits()),
            memory_hints: Default::default(),
            trace: Default::default(),
            experimental_features: Default::default(),
        }))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);
        log::info!("Using surface format: {:?}", surface_format);

        let inner = window.inner_size();
        let (width, height) = (inner.width.max(1), inner.height.max(1));
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: if vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sprite_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("sprite.wgsl").into()),
        });

        // Game logic always works in the fixed logical resolution
        let globals_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globals"),
            contents: bytemuck::bytes_of(&Globals {
                screen_size: [WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32],
                _pad: [0.0; 2],
            }),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bind_group"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("texture_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        // Pixel art: no smoothing
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("sprite_sampler"),
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sprite_pipeline_layout"),
            bind_group_layouts: &[&globals_layout, &texture_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sprite_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let vertex_buffer = create_vertex_buffer(&device, INITIAL_VERTEX_CAPACITY);

        let mut state = Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            globals_bind_group,
            texture_layout,
            sampler,
            textures: Vec::new(),
            font: TextureId(0),
            vertex_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            vertices: Vec::with_capacity(INITIAL_VERTEX_CAPACITY),
            batches: Vec::new(),
            clear_color: to_wgpu_color(colors::BACKGROUND),
            size: (width, height),
        };

        state.font = state.upload_texture(&TextureData::from_rgba(
            font::ATLAS_WIDTH,
            font::ATLAS_HEIGHT,
            font::atlas_rgba(),
        ));

        Ok(state)
    }

    /// Upload decoded pixels; the texture lives as long as this render state
    pub fn upload_texture(&mut self, data: &TextureData) -> TextureId {
        let texture = self.device.create_texture_with_data(
            &self.queue,
            &wgpu::TextureDescriptor {
                label: Some("sprite_texture"),
                size: wgpu::Extent3d {
                    width: data.width,
                    height: data.height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Rgba8UnormSrgb,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            &data.rgba,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sprite_texture_bind_group"),
            layout: &self.texture_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        let id = TextureId(self.textures.len());
        self.textures.push(GpuTexture {
            _texture: texture,
            bind_group,
            size: (data.width, data.height),
        });
        id
    }

    /// Pixel dimensions of an uploaded texture
    pub fn texture_size(&self, id: TextureId) -> Vec2 {
        let (w, h) = self.textures[id.0].size;
        Vec2::new(w as f32, h as f32)
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.size = (new_width, new_height);
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Start collecting draw calls for a new frame
    pub fn begin_frame(&mut self) {
        self.vertices.clear();
        self.batches.clear();
        self.clear_color = to_wgpu_color(colors::BACKGROUND);
    }

    /// Submit the collected draw calls and present
    pub fn end_frame(&mut self) -> Result<(), DasherError> {
        if self.vertices.len() > self.vertex_capacity {
            self.vertex_capacity = self.vertices.len().next_power_of_two();
            self.vertex_buffer = create_vertex_buffer(&self.device, self.vertex_capacity);
        }
        if !self.vertices.is_empty() {
            self.queue
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&self.vertices));
        }

        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(DasherError::OutOfMemory),
            Err(e) => {
                log::warn!("Skipping frame: {:?}", e);
                return Ok(());
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("render_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.globals_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            for batch in &self.batches {
                render_pass.set_bind_group(1, &self.textures[batch.texture.0].bind_group, &[]);
                render_pass.draw(batch.start..batch.end, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Queue a textured quad, merging into the previous batch when possible
    fn push_quad(&mut self, texture: TextureId, source: Rect, dest: Rect, tint: Color) {
        let (tw, th) = self.textures[texture.0].size;
        let (u0, v0) = (source.x / tw as f32, source.y / th as f32);
        let (u1, v1) = (source.right() / tw as f32, source.bottom() / th as f32);
        let (x0, y0, x1, y1) = (dest.x, dest.y, dest.right(), dest.bottom());
        let color = tint.to_linear();

        let start = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&[
            Vertex::new(x0, y0, u0, v0, color),
            Vertex::new(x0, y1, u0, v1, color),
            Vertex::new(x1, y0, u1, v0, color),
            Vertex::new(x1, y0, u1, v0, color),
            Vertex::new(x0, y1, u0, v1, color),
            Vertex::new(x1, y1, u1, v1, color),
        ]);
        let end = self.vertices.len() as u32;

        match self.batches.last_mut() {
            Some(batch) if batch.texture == texture => batch.end = end,
            _ => self.batches.push(Batch { texture, start, end }),
        }
    }
}

impl Canvas for RenderState {
    fn clear(&mut self, color: Color) {
        self.clear_color = to_wgpu_color(color);
    }

    fn draw_texture_region(&mut self, texture: TextureId, source: Rect, position: Vec2, tint: Color) {
        let dest = Rect::new(position.x, position.y, source.width.abs(), source.height.abs());
        self.push_quad(texture, source, dest, tint);
    }

    fn draw_texture_scaled(&mut self, texture: TextureId, position: Vec2, scale: f32, tint: Color) {
        let size = self.texture_size(texture);
        let source = Rect::new(0.0, 0.0, size.x, size.y);
        let dest = Rect::new(position.x, position.y, size.x * scale, size.y * scale);
        self.push_quad(texture, source, dest, tint);
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Color) {
        for (source, dest) in font::layout(text, x, y, size) {
            self.push_quad(self.font, source, dest, color);
        }
    }
}

fn to_wgpu_color(color: Color) -> wgpu::Color {
    let [r, g, b, a] = color.to_linear();
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("vertex_buffer"),
        size: (std::mem::size_of::<Vertex>() * capacity) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl Drop for RenderState {
    fn drop(&mut self) {
        log::info!("Releasing {} textures", self.textures.len());
    }
}
