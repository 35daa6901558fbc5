// Sprite rendering system

use std::collections::HashMap;

use super::{Camera, CameraUniform, TextureHandle, TextureManager, Vertex};
use crate::core::math::IntRect;
use anyhow::{anyhow, Result};
use glam::{Vec2, Vec4};
use wgpu::util::DeviceExt;

/// Sprites the vertex buffer holds before it has to grow
const INITIAL_SPRITE_CAPACITY: usize = 16;

const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// A 2D sprite for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// Top-left corner in screen pixels
    pub position: Vec2,
    /// Size in pixels (width, height)
    pub size: Vec2,
    /// Top-left texture coordinate of the crop
    pub uv_min: Vec2,
    /// Bottom-right texture coordinate of the crop
    pub uv_max: Vec2,
    /// Color tint (RGBA, 1.0 = full color)
    pub color: Vec4,
    /// Texture handle (None = white texture)
    pub texture: Option<TextureHandle>,
}

impl Sprite {
    /// Create a new sprite showing the whole texture
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            uv_min: Vec2::ZERO,
            uv_max: Vec2::ONE,
            color: Vec4::ONE,
            texture: None,
        }
    }

    /// Crop to `region` of a `texture_width` x `texture_height` texture,
    /// drawing it at its native pixel size
    pub fn set_region(&mut self, region: &IntRect, texture_width: u32, texture_height: u32) {
        let (uv_min, uv_max) = region.uv_bounds(texture_width, texture_height);
        self.uv_min = uv_min;
        self.uv_max = uv_max;
        self.size = Vec2::new(region.width as f32, region.height as f32);
    }

    /// Quad corners: top-left, top-right, bottom-right, bottom-left
    pub fn vertices(&self) -> [Vertex; 4] {
        let min = self.position;
        let max = self.position + self.size;

        [
            Vertex::new(min, self.uv_min, self.color),
            Vertex::new(
                Vec2::new(max.x, min.y),
                Vec2::new(self.uv_max.x, self.uv_min.y),
                self.color,
            ),
            Vertex::new(max, self.uv_max, self.color),
            Vertex::new(
                Vec2::new(min.x, max.y),
                Vec2::new(self.uv_min.x, self.uv_max.y),
                self.color,
            ),
        ]
    }
}

/// Draws textured quads, one draw call per sprite
pub struct SpriteRenderer {
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    /// Sprites `vertex_buffer` has room for
    vertex_capacity: usize,
    index_buffer: wgpu::Buffer,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    texture_bind_group_layout: wgpu::BindGroupLayout,
    /// One bind group per texture, created on first use
    texture_bind_groups: HashMap<TextureHandle, wgpu::BindGroup>,
    sprites: Vec<Sprite>,
    /// Texture of each sprite prepared for the current frame
    draws: Vec<TextureHandle>,
}

impl SpriteRenderer {
    /// Create a new sprite renderer
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Result<Self> {
        // Create shader module
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/sprite.wgsl").into()),
        });

        // Create camera bind group layout
        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
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

        // Create texture bind group layout
        let texture_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Texture Bind Group Layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            multisampled: false,
                            view_dimension: wgpu::TextureViewDimension::D2,
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
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

        // Create pipeline layout
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sprite Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout, &texture_bind_group_layout],
            push_constant_ranges: &[],
        });

        // Create render pipeline
        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sprite Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // The Y-down projection flips winding; quads are never back-facing anyway
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let vertex_buffer = Self::create_vertex_buffer(device, INITIAL_SPRITE_CAPACITY);

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sprite Index Buffer"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        // Create camera buffer
        let camera_uniform = CameraUniform {
            view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
        };

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        Ok(Self {
            render_pipeline,
            vertex_buffer,
            vertex_capacity: INITIAL_SPRITE_CAPACITY,
            index_buffer,
            camera_buffer,
            camera_bind_group,
            texture_bind_group_layout,
            texture_bind_groups: HashMap::new(),
            sprites: Vec::new(),
            draws: Vec::new(),
        })
    }

    fn create_vertex_buffer(device: &wgpu::Device, sprites: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Sprite Vertex Buffer"),
            size: (sprites * 4 * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Add a sprite to render
    pub fn add_sprite(&mut self, sprite: Sprite) {
        self.sprites.push(sprite);
    }

    /// Clear all sprites
    pub fn clear(&mut self) {
        self.sprites.clear();
    }

    /// Upload camera and vertex data for the queued sprites
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        camera: &Camera,
        texture_manager: &TextureManager,
    ) -> Result<()> {
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[CameraUniform::new(camera)]),
        );

        self.draws.clear();
        if self.sprites.is_empty() {
            return Ok(());
        }

        if self.sprites.len() > self.vertex_capacity {
            self.vertex_capacity = self.sprites.len().next_power_of_two();
            self.vertex_buffer = Self::create_vertex_buffer(device, self.vertex_capacity);
            log::debug!("Sprite vertex buffer grown to {} sprites", self.vertex_capacity);
        }

        let mut vertices = Vec::with_capacity(self.sprites.len() * 4);
        for sprite in &self.sprites {
            let handle = sprite.texture.unwrap_or_else(|| texture_manager.white());

            if !self.texture_bind_groups.contains_key(&handle) {
                let texture = texture_manager
                    .get(handle)
                    .ok_or_else(|| anyhow!("Sprite references unknown texture {:?}", handle))?;

                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("Sprite Texture Bind Group"),
                    layout: &self.texture_bind_group_layout,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: wgpu::BindingResource::TextureView(&texture.view),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: wgpu::BindingResource::Sampler(&texture.sampler),
                        },
                    ],
                });
                self.texture_bind_groups.insert(handle, bind_group);
            }

            vertices.extend_from_slice(&sprite.vertices());
            self.draws.push(handle);
        }

        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        Ok(())
    }

    /// Record draw calls for the sprites uploaded by `prepare`
    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        if self.draws.is_empty() {
            return;
        }

        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);

        for (i, handle) in self.draws.iter().enumerate() {
            let Some(bind_group) = self.texture_bind_groups.get(handle) else {
                continue;
            };
            render_pass.set_bind_group(1, bind_group, &[]);
            render_pass.draw_indexed(0..QUAD_INDICES.len() as u32, (i * 4) as i32, 0..1);
        }
    }
}
