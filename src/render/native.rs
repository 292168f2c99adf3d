use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use bytemuck::bytes_of;
use log::info;
use pollster::block_on;
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;
use winit::window::{Window, WindowId};

use crate::assets::SceneAssets;
use crate::mesh::{MeshData, MeshKind, VERTEX_STRIDE};
use crate::render::uniforms::{LampUniforms, Lighting, ObjectUniforms};
use crate::scene::{FrameParams, RenderableObject, SceneConfig};
use crate::shader::{ShaderError, ShaderProgram, Stage};
use crate::texture::DecodedTexture;

const PHONG_ATTRIBUTES: [wgpu::VertexAttribute; 3] = [
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: (3 * std::mem::size_of::<f32>()) as u64,
        shader_location: 1,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x2,
        offset: (6 * std::mem::size_of::<f32>()) as u64,
        shader_location: 2,
    },
];

// The lamp reads positions only but walks the same interleaved buffer.
const LAMP_ATTRIBUTES: [wgpu::VertexAttribute; 1] = [wgpu::VertexAttribute {
    format: wgpu::VertexFormat::Float32x3,
    offset: 0,
    shader_location: 0,
}];

/// GPU renderer that draws the tabletop objects and the light indicator.
pub struct Renderer {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    depth: DepthBuffer,
    clear_color: wgpu::Color,
    lighting: Lighting,
    meshes: Vec<GpuMesh>,
    objects: Vec<GpuObject>,
    lamp: GpuLamp,
}

impl Renderer {
    /// Creates the device and uploads meshes, textures and pipelines.
    pub async fn new(
        window: Arc<Window>,
        assets: &SceneAssets,
        objects: &[RenderableObject],
        scene: &SceneConfig,
    ) -> Result<Self> {
        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Err(anyhow!("window has zero area"));
        }

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance.create_surface(Arc::clone(&window))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to acquire GPU adapter")?;
        let adapter_info = adapter.get_info();
        info!(
            "using {} ({:?}, driver {})",
            adapter_info.name, adapter_info.backend, adapter_info.driver_info
        );

        let device_descriptor = wgpu::DeviceDescriptor {
            label: Some("tabletop-device"),
            required_features: wgpu::Features::empty(),
            required_limits: adapter.limits(),
            ..Default::default()
        };
        let (device, queue) = adapter
            .request_device(&device_descriptor)
            .await
            .context("failed to create GPU device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        // Texel and clear colours are written as authored, without sRGB encoding.
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|format| !format.is_srgb())
            .copied()
            .or_else(|| surface_caps.formats.first().copied())
            .context("surface reports no supported formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: surface_caps
                .present_modes
                .iter()
                .copied()
                .find(|mode| {
                    matches!(
                        mode,
                        wgpu::PresentMode::Immediate | wgpu::PresentMode::Mailbox
                    )
                })
                .unwrap_or(wgpu::PresentMode::Fifo),
            desired_maximum_frame_latency: 2,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let depth = DepthBuffer::create(&device, config.width, config.height);

        let meshes = assets
            .meshes
            .iter()
            .map(|mesh| GpuMesh::upload(&device, mesh))
            .collect::<Vec<_>>();

        let mut gpu_objects = Vec::with_capacity(objects.len());
        for ((object, program), texture) in objects
            .iter()
            .zip(&assets.programs)
            .zip(&assets.textures)
        {
            let mesh = mesh_slot(object.mesh)?;
            let texture = GpuTexture::upload(&device, &queue, texture)
                .with_context(|| format!("failed to load texture {}", texture.name))?;
            let gpu_object = GpuObject::create(&device, program, texture, mesh, object, surface_format)?;
            gpu_objects.push(gpu_object);
        }
        info!("uploaded {} objects", gpu_objects.len());

        let lamp = GpuLamp::create(
            &device,
            &assets.lamp_program,
            mesh_slot(MeshKind::Cloth)?,
            scene,
            surface_format,
        )?;

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            size,
            depth,
            clear_color: wgpu::Color {
                r: scene.clear_color.x as f64,
                g: scene.clear_color.y as f64,
                b: scene.clear_color.z as f64,
                a: 1.0,
            },
            lighting: Lighting::from(scene),
            meshes,
            objects: gpu_objects,
            lamp,
        })
    }

    /// Returns the identifier of the window owned by the renderer.
    pub fn window_id(&self) -> WindowId {
        self.window.id()
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Width over height of the current surface.
    pub fn aspect(&self) -> f32 {
        self.size.width as f32 / self.size.height.max(1) as f32
    }

    /// Resizes the swap chain to match the new dimensions.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.size = new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth = DepthBuffer::create(&self.device, new_size.width, new_size.height);
    }

    /// Draws the objects in order, then the light indicator, and presents.
    pub fn render(&mut self, frame: &FrameParams) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        for object in &self.objects {
            let uniforms = ObjectUniforms::new(object.model, frame, &self.lighting);
            self.queue
                .write_buffer(&object.uniform_buffer, 0, bytes_of(&uniforms));
        }
        let lamp_uniforms = LampUniforms::new(self.lamp.model, frame);
        self.queue
            .write_buffer(&self.lamp.uniform_buffer, 0, bytes_of(&lamp_uniforms));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("tabletop-encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
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

            for object in &self.objects {
                let mesh = &self.meshes[object.mesh];
                pass.set_pipeline(&object.pipeline);
                pass.set_bind_group(0, &object.bind_group, &[]);
                pass.set_vertex_buffer(0, mesh.vertex.slice(..));
                pass.draw(0..mesh.vertex_count, 0..1);
            }

            let mesh = &self.meshes[self.lamp.mesh];
            pass.set_pipeline(&self.lamp.pipeline);
            pass.set_bind_group(0, &self.lamp.bind_group, &[]);
            pass.set_vertex_buffer(0, mesh.vertex.slice(..));
            pass.draw(0..mesh.vertex_count, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

fn mesh_slot(kind: MeshKind) -> Result<usize> {
    MeshKind::ALL
        .iter()
        .position(|candidate| *candidate == kind)
        .with_context(|| format!("no mesh slot for {}", kind.name()))
}

fn create_module(
    device: &wgpu::Device,
    program: &ShaderProgram,
    stage: Stage,
) -> Result<wgpu::ShaderModule, ShaderError> {
    let compiled = match stage {
        Stage::Vertex => program.vertex(),
        Stage::Fragment => program.fragment(),
    };
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(&format!("{}-{stage}", program.label())),
        source: wgpu::ShaderSource::Wgsl(compiled.source.as_str().into()),
    });
    match block_on(device.pop_error_scope()) {
        Some(err) => Err(ShaderError::Compile {
            program: program.label().to_string(),
            stage,
            log: err.to_string(),
        }),
        None => Ok(module),
    }
}

struct PipelineSpec<'a> {
    program: &'a ShaderProgram,
    layout: &'a wgpu::BindGroupLayout,
    attributes: &'a [wgpu::VertexAttribute],
    format: wgpu::TextureFormat,
}

fn create_pipeline(device: &wgpu::Device, spec: PipelineSpec<'_>) -> Result<wgpu::RenderPipeline> {
    let vertex_module = create_module(device, spec.program, Stage::Vertex)?;
    let fragment_module = create_module(device, spec.program, Stage::Fragment)?;

    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(&format!("{}-pipeline-layout", spec.program.label())),
        bind_group_layouts: &[spec.layout],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(&format!("{}-pipeline", spec.program.label())),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &vertex_module,
            entry_point: Some(Stage::Vertex.entry_point()),
            compilation_options: Default::default(),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: VERTEX_STRIDE,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: spec.attributes,
            }],
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DepthBuffer::FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: Default::default(),
            bias: Default::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &fragment_module,
            entry_point: Some(Stage::Fragment.entry_point()),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: spec.format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        multiview: None,
        cache: None,
    });
    if let Some(err) = block_on(device.pop_error_scope()) {
        return Err(ShaderError::Link {
            program: spec.program.label().to_string(),
            log: err.to_string(),
        }
        .into());
    }
    Ok(pipeline)
}

fn required_binding(program: &ShaderProgram, name: &str) -> Result<u32> {
    let (group, binding) = program
        .binding(name)
        .with_context(|| format!("{} does not declare `{name}`", program.label()))?;
    if group != 0 {
        return Err(anyhow!(
            "{}: `{name}` is bound to group {group}, expected group 0",
            program.label()
        ));
    }
    Ok(binding)
}

fn uniform_layout_entry(binding: u32, size: usize) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: wgpu::BufferSize::new(size as u64),
        },
        count: None,
    }
}

struct GpuMesh {
    vertex: wgpu::Buffer,
    vertex_count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, mesh: &MeshData) -> Self {
        let vertex = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{}-vertices", mesh.kind.name())),
            contents: mesh.as_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            vertex,
            vertex_count: mesh.vertex_count,
        }
    }
}

struct GpuTexture {
    _texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
}

impl GpuTexture {
    fn upload(device: &wgpu::Device, queue: &wgpu::Queue, decoded: &DecodedTexture) -> Result<Self> {
        check_texture_extent(decoded, device.limits().max_texture_dimension_2d)?;

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(&decoded.name),
            size: wgpu::Extent3d {
                width: decoded.width(),
                height: decoded.height(),
                depth_or_array_layers: 1,
            },
            mip_level_count: decoded.mip_level_count(),
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for (level, mip) in decoded.levels.iter().enumerate() {
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level: level as u32,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                &mip.pixels,
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * mip.width),
                    rows_per_image: Some(mip.height),
                },
                wgpu::Extent3d {
                    width: mip.width,
                    height: mip.height,
                    depth_or_array_layers: 1,
                },
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(&format!("{}-sampler", decoded.name)),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        if let Some(err) = block_on(device.pop_error_scope()) {
            return Err(anyhow!("GPU rejected {}: {err}", decoded.name));
        }

        Ok(Self {
            _texture: texture,
            view,
            sampler,
        })
    }
}

fn check_texture_extent(decoded: &DecodedTexture, max_dimension: u32) -> Result<()> {
    let (width, height) = (decoded.width(), decoded.height());
    if width > max_dimension || height > max_dimension {
        return Err(anyhow!(
            "{} is {width}x{height}, the device allows at most {max_dimension}x{max_dimension}",
            decoded.name
        ));
    }
    Ok(())
}

struct GpuObject {
    mesh: usize,
    model: glam::Mat4,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    _texture: GpuTexture,
}

impl GpuObject {
    fn create(
        device: &wgpu::Device,
        program: &ShaderProgram,
        texture: GpuTexture,
        mesh: usize,
        object: &RenderableObject,
        format: wgpu::TextureFormat,
    ) -> Result<Self> {
        let uniforms_binding = required_binding(program, "uniforms")?;
        let texture_binding = required_binding(program, "object_texture")?;
        let sampler_binding = required_binding(program, "object_sampler")?;

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(&format!("{}-bind-layout", program.label())),
            entries: &[
                uniform_layout_entry(uniforms_binding, std::mem::size_of::<ObjectUniforms>()),
                wgpu::BindGroupLayoutEntry {
                    binding: texture_binding,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: sampler_binding,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline = create_pipeline(
            device,
            PipelineSpec {
                program,
                layout: &layout,
                attributes: &PHONG_ATTRIBUTES,
                format,
            },
        )?;

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{}-uniforms", program.label())),
            size: std::mem::size_of::<ObjectUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{}-bind-group", program.label())),
            layout: &layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: uniforms_binding,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: texture_binding,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: sampler_binding,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
        });

        Ok(Self {
            mesh,
            model: object.model,
            pipeline,
            uniform_buffer,
            bind_group,
            _texture: texture,
        })
    }
}

struct GpuLamp {
    mesh: usize,
    model: glam::Mat4,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl GpuLamp {
    fn create(
        device: &wgpu::Device,
        program: &ShaderProgram,
        mesh: usize,
        scene: &SceneConfig,
        format: wgpu::TextureFormat,
    ) -> Result<Self> {
        let lamp_binding = required_binding(program, "lamp")?;
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("lamp-bind-layout"),
            entries: &[uniform_layout_entry(
                lamp_binding,
                std::mem::size_of::<LampUniforms>(),
            )],
        });

        let pipeline = create_pipeline(
            device,
            PipelineSpec {
                program,
                layout: &layout,
                attributes: &LAMP_ATTRIBUTES,
                format,
            },
        )?;

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("lamp-uniforms"),
            size: std::mem::size_of::<LampUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("lamp-bind-group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: lamp_binding,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Ok(Self {
            mesh,
            model: scene.lamp_model(),
            pipeline,
            uniform_buffer,
            bind_group,
        })
    }
}

struct DepthBuffer {
    _texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl DepthBuffer {
    const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

    fn create(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth-texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self {
            _texture: texture,
            view,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::FLOATS_PER_VERTEX;

    #[test]
    fn phong_attributes_cover_the_interleaved_vertex() {
        let last = PHONG_ATTRIBUTES[2];
        let end = last.offset + last.format.size();
        assert_eq!(end, VERTEX_STRIDE);
        assert_eq!(FLOATS_PER_VERTEX * 4, VERTEX_STRIDE as usize);
        let locations: Vec<_> = PHONG_ATTRIBUTES.iter().map(|a| a.shader_location).collect();
        assert_eq!(locations, vec![0, 1, 2]);
    }

    #[test]
    fn lamp_reads_positions_only() {
        assert_eq!(LAMP_ATTRIBUTES.len(), 1);
        assert_eq!(LAMP_ATTRIBUTES[0].offset, 0);
        assert_eq!(LAMP_ATTRIBUTES[0].format, wgpu::VertexFormat::Float32x3);
    }

    fn flat_texture(width: u32, height: u32) -> DecodedTexture {
        let image = image::RgbImage::new(width, height);
        DecodedTexture::from_image("wood.jpg", image::DynamicImage::ImageRgb8(image)).unwrap()
    }

    #[test]
    fn oversized_textures_are_rejected_by_name() {
        let wide = flat_texture(9000, 1);
        let err = check_texture_extent(&wide, 8192).unwrap_err();
        assert!(err.to_string().contains("wood.jpg"), "{err}");
        assert!(err.to_string().contains("9000x1"), "{err}");

        let tall = flat_texture(1, 9000);
        assert!(check_texture_extent(&tall, 8192).is_err());
    }

    #[test]
    fn textures_at_the_limit_are_accepted() {
        assert!(check_texture_extent(&flat_texture(16, 8), 16).is_ok());
        assert!(check_texture_extent(&flat_texture(8192, 1), 8192).is_ok());
    }

    #[test]
    fn every_mesh_has_a_slot() {
        for (index, kind) in MeshKind::ALL.iter().enumerate() {
            assert_eq!(mesh_slot(*kind).unwrap(), index);
        }
    }
}
