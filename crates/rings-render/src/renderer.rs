use crate::batch::{self, BatchPlan};
use crate::error::RenderError;
use crate::helpers;
use crate::mesh::GpuMesh;
use crate::targets::DepthTarget;
use crate::uniforms::{GlobalUniforms, InstanceData};
use rings_core::{Camera, Scene, SurfaceSize};

/// A planned batch with its uploaded mesh, drawn as a single instanced call.
struct ObjectBatch {
    plan: BatchPlan,
    mesh: GpuMesh,
}

struct GroundDraw {
    mesh: GpuMesh,
    instance_buffer: wgpu::Buffer,
}

pub struct Renderer<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    shader: wgpu::ShaderModule,
    pipeline_layout: wgpu::PipelineLayout,
    double_sided_pipeline: wgpu::RenderPipeline,
    // built on first use by a back-face culled material
    single_sided_pipeline: Option<wgpu::RenderPipeline>,
    ground_pipeline: wgpu::RenderPipeline,

    batches: Vec<ObjectBatch>,
    ground: Option<GroundDraw>,
    synced_objects: Option<usize>,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    staging: Vec<InstanceData>,
}

impl<'w> Renderer<'w> {
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'w>>,
        size: SurfaceSize,
    ) -> Result<Self, RenderError> {
        let width = size.width.max(1);
        let height = size.height.max(1);

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(target)
            .map_err(|e| RenderError::CreateSurface(format!("{e:?}")))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::NoAdapter)?;
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
            .map_err(|e| RenderError::RequestDevice(format!("{e:?}")))?;
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
            .ok_or(RenderError::UnsupportedSurface("no texture formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .ok_or(RenderError::UnsupportedSurface("no alpha modes"))?;
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
        log::info!("[render] surface {width}x{height} format={format:?}");

        let depth = DepthTarget::new(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::SCENE_WGSL.into()),
        });
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<GlobalUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
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
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let double_sided_pipeline =
            helpers::make_scene_pipeline(&device, &pipeline_layout, &shader, "fs_object", format, None);
        let ground_pipeline =
            helpers::make_scene_pipeline(&device, &pipeline_layout, &shader, "fs_ground", format, None);

        let instance_buffer = create_instance_buffer(&device, 1);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            globals_buffer,
            globals_bind_group,
            double_sided_pipeline,
            single_sided_pipeline: None,
            ground_pipeline,
            shader,
            pipeline_layout,
            batches: Vec::new(),
            ground: None,
            synced_objects: None,
            instance_buffer,
            instance_capacity: 1,
            staging: Vec::new(),
        })
    }

    pub fn size(&self) -> SurfaceSize {
        SurfaceSize {
            width: self.config.width,
            height: self.config.height,
        }
    }

    /// Resize the surface and depth buffer; zero sizes and no-op sizes are ignored.
    pub fn resize(&mut self, size: SurfaceSize) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        if size == self.size() {
            return;
        }
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth.recreate(&self.device, size.width, size.height);
    }

    /// Re-apply the current configuration, e.g. after `SurfaceError::Lost`.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        if self.synced_objects != Some(scene.objects().len()) {
            self.sync_scene(scene);
        }
        self.write_instances(scene);
        let globals = GlobalUniforms::new(camera.view_projection(), camera.eye, &scene.fog, scene.time());
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

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
            let [r, g, b] = scene.clear_color;
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
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
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);

            if let Some(ground) = &self.ground {
                rpass.set_pipeline(&self.ground_pipeline);
                rpass.set_vertex_buffer(1, ground.instance_buffer.slice(..));
                ground.mesh.draw(&mut rpass, 0..1);
            }

            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            for batch in &self.batches {
                let plan = &batch.plan;
                if plan.members.is_empty() {
                    continue;
                }
                let pipeline = match (plan.double_sided, &self.single_sided_pipeline) {
                    (true, _) => &self.double_sided_pipeline,
                    (false, Some(culled)) => culled,
                    (false, None) => continue,
                };
                rpass.set_pipeline(pipeline);
                let first = plan.first_instance;
                batch
                    .mesh
                    .draw(&mut rpass, first..first + plan.members.len() as u32);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl<'w> Renderer<'w> {
    /// Group objects by mesh, upload meshes, and size the instance buffer.
    fn sync_scene(&mut self, scene: &Scene) {
        let plans = batch::plan_batches(scene.objects());
        if self.single_sided_pipeline.is_none() && batch::needs_culled_pipeline(&plans) {
            self.single_sided_pipeline = Some(helpers::make_scene_pipeline(
                &self.device,
                &self.pipeline_layout,
                &self.shader,
                "fs_object",
                self.config.format,
                Some(wgpu::Face::Back),
            ));
        }
        self.batches = plans
            .into_iter()
            .map(|plan| ObjectBatch {
                mesh: GpuMesh::upload(&self.device, "object_mesh", &plan.geometry.build()),
                plan,
            })
            .collect();

        let count = scene.objects().len();
        if count > self.instance_capacity {
            self.instance_buffer = create_instance_buffer(&self.device, count);
            self.instance_capacity = count;
        }

        self.ground = scene.ground().map(|g| {
            let instance_buffer = create_instance_buffer(&self.device, 1);
            let data = InstanceData::new(&g.transform, [g.geometry.size, g.geometry.size]);
            self.queue
                .write_buffer(&instance_buffer, 0, bytemuck::bytes_of(&data));
            GroundDraw {
                mesh: GpuMesh::upload(&self.device, "ground_mesh", &g.geometry.build()),
                instance_buffer,
            }
        });

        log::info!(
            "[render] synced {} objects in {} batch(es), ground={}",
            count,
            self.batches.len(),
            self.ground.is_some()
        );
        self.synced_objects = Some(count);
    }

    fn write_instances(&mut self, scene: &Scene) {
        self.staging.clear();
        let objects = scene.objects();
        for batch in &self.batches {
            for &i in &batch.plan.members {
                let object = &objects[i];
                self.staging.push(InstanceData::new(
                    &object.transform,
                    object.material.resolution.to_array(),
                ));
            }
        }
        if !self.staging.is_empty() {
            self.queue
                .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&self.staging));
        }
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("instances"),
        size: (std::mem::size_of::<InstanceData>() * capacity.max(1)) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
