use crate::constants::{AMBIENT_LIGHT, CAMERA_FAR, CAMERA_NEAR, LIGHT_DIR};
use glam::{EulerRot, Mat4, Quat, Vec3};
use landing_core::constants::{CAMERA_DEFAULT_Z, CAMERA_FOV_DEGREES};
use landing_core::{
    draw_pass, normalize_bounds, DrawPass, ModelAsset, ModelId, ModelTransform, Normalization,
    SceneError, SceneRenderer,
};
use wgpu::util::DeviceExt;
use web_sys as web;

mod helpers;
mod mesh;

pub static MODEL_WGSL: &str = include_str!("../shaders/model.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct CameraUniforms {
    view_proj: [[f32; 4]; 4],
    light_dir: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ModelUniforms {
    model: [[f32; 4]; 4],
    tint: [f32; 4],
}

struct GpuModel {
    id: ModelId,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    normalization: Normalization,
    transform: ModelTransform,
    opacity: f32,
}

impl GpuModel {
    fn matrix(&self) -> Mat4 {
        let t = &self.transform;
        let rotation = Quat::from_euler(EulerRot::XYZ, t.rotation.x, t.rotation.y, t.rotation.z);
        let group = Mat4::from_scale_rotation_translation(Vec3::splat(t.scale), rotation, t.position);
        let fit = Mat4::from_translation(self.normalization.offset)
            * Mat4::from_scale(Vec3::splat(self.normalization.scale));
        group * fit
    }
}

/// wgpu-backed scene bound to one canvas. Each loaded asset is a normalized
/// device slab drawn with its own transform and opacity.
pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    opaque_pipeline: wgpu::RenderPipeline,
    blended_pipeline: wgpu::RenderPipeline,
    model_layout: wgpu::BindGroupLayout,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    _depth_texture: wgpu::Texture,
    depth_view: wgpu::TextureView,
    models: Vec<GpuModel>,
    next_id: u32,
    width: u32,
    height: u32,
    camera_z: f32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
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
        // The canvas sits over page content, so it must composite with alpha.
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
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

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("model_shader"),
            source: wgpu::ShaderSource::Wgsl(MODEL_WGSL.into()),
        });
        let camera_layout = helpers::uniform_layout(&device, "camera_bgl");
        let model_layout = helpers::uniform_layout(&device, "model_bgl");
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("model_pl"),
            bind_group_layouts: &[&camera_layout, &model_layout],
            push_constant_ranges: &[],
        });
        let opaque_pipeline =
            helpers::make_model_pipeline(&device, &pipeline_layout, &shader, format, true);
        let blended_pipeline =
            helpers::make_model_pipeline(&device, &pipeline_layout, &shader, format, false);
        let (camera_buffer, camera_bind_group) = helpers::uniform_binding(
            &device,
            &camera_layout,
            "camera_uniforms",
            std::mem::size_of::<CameraUniforms>() as u64,
        );
        let (depth_texture, depth_view) = helpers::create_depth_texture(&device, width, height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            opaque_pipeline,
            blended_pipeline,
            model_layout,
            camera_buffer,
            camera_bind_group,
            _depth_texture: depth_texture,
            depth_view,
            models: Vec::new(),
            next_id: 0,
            width,
            height,
            camera_z: CAMERA_DEFAULT_Z,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            let (tex, view) = helpers::create_depth_texture(&self.device, width, height);
            self._depth_texture = tex;
            self.depth_view = view;
        }
    }

    fn write_camera(&self) {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let proj = Mat4::perspective_rh(
            CAMERA_FOV_DEGREES.to_radians(),
            aspect,
            CAMERA_NEAR,
            CAMERA_FAR,
        );
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, self.camera_z), Vec3::ZERO, Vec3::Y);
        let u = CameraUniforms {
            view_proj: (proj * view).to_cols_array_2d(),
            light_dir: [LIGHT_DIR[0], LIGHT_DIR[1], LIGHT_DIR[2], AMBIENT_LIGHT],
        };
        self.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.write_camera();
        for m in &self.models {
            let u = ModelUniforms {
                model: m.matrix().to_cols_array_2d(),
                tint: [1.0, 1.0, 1.0, m.opacity],
            };
            self.queue
                .write_buffer(&m.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }

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
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.camera_bind_group, &[]);
            // opaque first, then fading models on top without depth writes
            for (pass, pipeline) in [
                (DrawPass::Opaque, &self.opaque_pipeline),
                (DrawPass::Blended, &self.blended_pipeline),
            ] {
                rpass.set_pipeline(pipeline);
                for m in self.models.iter().filter(|m| draw_pass(m.opacity) == pass) {
                    rpass.set_bind_group(1, &m.bind_group, &[]);
                    rpass.set_vertex_buffer(0, m.vertex_buffer.slice(..));
                    rpass.set_index_buffer(m.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                    rpass.draw_indexed(0..m.index_count, 0, 0..1);
                }
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn model_mut(&mut self, id: ModelId) -> Option<&mut GpuModel> {
        self.models.iter_mut().find(|m| m.id == id)
    }
}

impl SceneRenderer for GpuState {
    fn load(&mut self, asset: &ModelAsset) -> Result<ModelId, SceneError> {
        let data = mesh::device_slab();
        if data.indices.is_empty() {
            return Err(SceneError::Load {
                path: asset.path.clone(),
                reason: "empty mesh".to_string(),
            });
        }
        let normalization = normalize_bounds(data.min, data.max, asset.scale_multiplier);
        let vertex_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("model_vb"),
                contents: bytemuck::cast_slice(&data.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("model_ib"),
                contents: bytemuck::cast_slice(&data.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        let (uniform_buffer, bind_group) = helpers::uniform_binding(
            &self.device,
            &self.model_layout,
            "model_uniforms",
            std::mem::size_of::<ModelUniforms>() as u64,
        );
        self.next_id += 1;
        let id = ModelId(self.next_id);
        self.models.push(GpuModel {
            id,
            vertex_buffer,
            index_buffer,
            index_count: data.indices.len() as u32,
            uniform_buffer,
            bind_group,
            normalization,
            transform: ModelTransform::default(),
            opacity: 1.0,
        });
        log::info!(
            "[scene] loaded {} (scale {:.3})",
            asset.path,
            normalization.scale
        );
        Ok(id)
    }

    fn set_transform(&mut self, id: ModelId, transform: &ModelTransform) {
        if let Some(m) = self.model_mut(id) {
            m.transform = *transform;
        }
    }

    fn set_opacity(&mut self, id: ModelId, opacity: f32) {
        if let Some(m) = self.model_mut(id) {
            m.opacity = opacity.clamp(0.0, 1.0);
        }
    }

    fn set_camera_distance(&mut self, distance: f32) {
        if distance.is_finite() && distance > CAMERA_NEAR {
            self.camera_z = distance;
        }
    }

    fn dispose(&mut self, id: ModelId) {
        if let Some(pos) = self.models.iter().position(|m| m.id == id) {
            let m = self.models.remove(pos);
            m.vertex_buffer.destroy();
            m.index_buffer.destroy();
            m.uniform_buffer.destroy();
        }
    }
}
