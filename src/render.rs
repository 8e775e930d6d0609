use std::{mem, path::PathBuf};

use ahash::AHashMap;
use wgpu::*;

use crate::*;

/// Draws a [`Scene`] as one textured quad per placement.
pub struct SceneRenderer {
    pipeline: RenderPipeline,
    textures: GpuTextures,
    bind_groups: AHashMap<PathBuf, BindGroup>,
    instance_buffer: Buffer,
    // one entry per placement. `None` if the placement's texture is missing.
    draws: Vec<Option<XyRect>>,
}

impl SceneRenderer {
    pub fn new(device: &Device, format: TextureFormat, textures: GpuTextures, scene: &Scene) -> Self {
        let shader = device.create_shader_module(ShaderModuleDescriptor {
            label: Some("pipe_jump image shader"),
            source: ShaderSource::Wgsl(include_str!("image.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
            label: Some("pipe_jump image bind group layout"),
            entries: &[
                BindGroupLayoutEntry {
                    binding: 0,
                    visibility: ShaderStages::FRAGMENT,
                    ty: BindingType::Texture {
                        multisampled: false,
                        view_dimension: TextureViewDimension::D2,
                        sample_type: TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                BindGroupLayoutEntry {
                    binding: 1,
                    visibility: ShaderStages::FRAGMENT,
                    ty: BindingType::Sampler(SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some("pipe_jump image pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
            label: Some("pipe_jump image pipeline"),
            layout: Some(&pipeline_layout),
            vertex: VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[VertexBufferLayout {
                    array_stride: mem::size_of::<XyRect>() as BufferAddress,
                    step_mode: VertexStepMode::Instance,
                    attributes: &vertex_attr_array![0 => Float32x2, 1 => Float32x2],
                }],
                compilation_options: PipelineCompilationOptions::default(),
            },
            fragment: Some(FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(ColorTargetState {
                    format,
                    blend: Some(BlendState::ALPHA_BLENDING),
                    write_mask: ColorWrites::ALL,
                })],
                compilation_options: PipelineCompilationOptions::default(),
            }),
            primitive: PrimitiveState {
                topology: PrimitiveTopology::TriangleStrip,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let mut bind_groups = AHashMap::new();
        for placement in scene.placements() {
            if bind_groups.contains_key(&placement.source) {
                continue;
            }
            let Some(texture) = textures.get(&placement.source) else {
                log::warn!("No texture for {}, it won't be drawn", placement.source.display());
                continue;
            };
            let bind_group = device.create_bind_group(&BindGroupDescriptor {
                label: Some("pipe_jump image bind group"),
                layout: &bind_group_layout,
                entries: &[
                    BindGroupEntry {
                        binding: 0,
                        resource: BindingResource::TextureView(&texture.view),
                    },
                    BindGroupEntry {
                        binding: 1,
                        resource: BindingResource::Sampler(&textures.sampler),
                    },
                ],
            });
            bind_groups.insert(placement.source.clone(), bind_group);
        }

        // wgpu doesn't like zero-sized vertex buffers
        let instance_count = scene.len().max(1);
        let instance_buffer = device.create_buffer(&BufferDescriptor {
            label: Some("pipe_jump placement instances"),
            size: (instance_count * mem::size_of::<XyRect>()) as BufferAddress,
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        return Self {
            pipeline,
            textures,
            bind_groups,
            instance_buffer,
            draws: Vec::with_capacity(scene.len()),
        };
    }

    /// Lays out every placement for the current window size and uploads the rects.
    pub fn prepare(&mut self, queue: &Queue, scene: &Scene, window_size: Xy<f32>) {
        self.draws.clear();
        for placement in scene.placements() {
            let rect = self.textures.get(&placement.source).map(|texture| {
                placement
                    .draw_rect(window_size, texture.size)
                    .to_graphics_space(window_size)
            });
            self.draws.push(rect);
        }

        let instances: Vec<XyRect> = self.draws.iter()
            .map(|rect| rect.unwrap_or_default())
            .collect();
        if !instances.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }
    }

    /// Draws the prepared placements back to front.
    pub fn render(&self, render_pass: &mut RenderPass, scene: &Scene) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_vertex_buffer(0, self.instance_buffer.slice(..));

        for (i, (placement, draw)) in scene.placements().iter().zip(&self.draws).enumerate() {
            if draw.is_none() {
                continue;
            }
            let Some(bind_group) = self.bind_groups.get(&placement.source) else {
                continue;
            };
            let i = i as u32;
            render_pass.set_bind_group(0, bind_group, &[]);
            render_pass.draw(0..4, i..i + 1);
        }
        log::trace!("Drew {} placements", self.draws.len());
    }
}
