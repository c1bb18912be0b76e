//! WebGPU render pipeline setup

use wgpu::util::DeviceExt;

use super::scene::build_scene;
use super::vertex::{Vertex, colors};
use crate::game::Renderer;
use crate::sim::GameState;

/// GPU side of the frame: one pipeline, one vertex buffer rebuilt per frame
pub struct RenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,
    pub vertex_buffer: Option<wgpu::Buffer>,
    pub vertex_count: u32,
    /// Backing store size in pixels
    pub size: (u32, u32),
    /// Arena size the scene is expressed in
    pub arena: (f32, f32),
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
        arena: (f32, f32),
    ) -> Result<Self, wgpu::RequestDeviceError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("starfall-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let caps = surface.get_capabilities(adapter);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: choose_format(&caps.formats),
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pipeline = build_pipeline(&device, config.format);
        log::info!("Renderer ready: {}x{} ({:?})", width, height, config.format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer: None,
            vertex_count: 0,
            size: (width, height),
            arena,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Upload vertices given in arena pixels and draw them
    pub fn draw(&mut self, vertices: &[Vertex]) -> Result<(), wgpu::SurfaceError> {
        let clip = to_clip_space(self.arena, vertices);
        self.vertex_count = clip.len() as u32;
        self.vertex_buffer = (!clip.is_empty()).then(|| {
            self.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("scene_vertices"),
                    contents: bytemuck::cast_slice(&clip),
                    usage: wgpu::BufferUsages::VERTEX,
                })
        });

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("scene_encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if let Some(buffer) = &self.vertex_buffer {
                pass.set_pipeline(&self.pipeline);
                pass.set_vertex_buffer(0, buffer.slice(..));
                pass.draw(0..self.vertex_count, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl Renderer for RenderState {
    fn render(&mut self, state: &GameState) {
        match self.draw(&build_scene(state)) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => {
                self.resize(self.size.0, self.size.1);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

/// Prefer an sRGB surface; fall back to whatever comes first
fn choose_format(formats: &[wgpu::TextureFormat]) -> wgpu::TextureFormat {
    formats
        .iter()
        .find(|f| f.is_srgb())
        .or_else(|| formats.first())
        .copied()
        .unwrap_or(wgpu::TextureFormat::Bgra8UnormSrgb)
}

fn clear_color() -> wgpu::Color {
    let [r, g, b, a] = colors::BACKGROUND.map(f64::from);
    wgpu::Color { r, g, b, a }
}

/// Flat-colored, alpha-blended triangle list; no bind groups
fn build_pipeline(device: &wgpu::Device, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_layout"),
        bind_group_layouts: &[],
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("scene_pipeline"),
        layout: Some(&layout),
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
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        // Shapes are emitted with mixed winding
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

/// Convert arena pixels (origin top-left, y down) to normalized device coordinates
pub fn arena_to_ndc(arena: (f32, f32), x: f32, y: f32) -> (f32, f32) {
    (x / arena.0 * 2.0 - 1.0, 1.0 - y / arena.1 * 2.0)
}

/// Map a whole scene into clip space, keeping colors
pub fn to_clip_space(arena: (f32, f32), vertices: &[Vertex]) -> Vec<Vertex> {
    vertices
        .iter()
        .map(|v| {
            let (x, y) = arena_to_ndc(arena, v.position[0], v.position[1]);
            Vertex::new(x, y, v.color)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_to_ndc_corners() {
        let arena = (480.0, 640.0);
        assert_eq!(arena_to_ndc(arena, 0.0, 0.0), (-1.0, 1.0));
        assert_eq!(arena_to_ndc(arena, 480.0, 640.0), (1.0, -1.0));
        assert_eq!(arena_to_ndc(arena, 240.0, 320.0), (0.0, 0.0));
    }

    #[test]
    fn test_clip_space_keeps_colors() {
        let scene = [
            Vertex::new(120.0, 160.0, colors::PLAYER),
            Vertex::new(480.0, 0.0, colors::STAR),
        ];
        let clip = to_clip_space((480.0, 640.0), &scene);
        assert_eq!(clip[0], Vertex::new(-0.5, 0.5, colors::PLAYER));
        assert_eq!(clip[1], Vertex::new(1.0, 1.0, colors::STAR));
    }

    #[test]
    fn test_choose_format_prefers_srgb() {
        use wgpu::TextureFormat::*;
        assert_eq!(choose_format(&[Bgra8Unorm, Rgba8UnormSrgb]), Rgba8UnormSrgb);
        assert_eq!(choose_format(&[Rgba16Float]), Rgba16Float);
        assert_eq!(choose_format(&[]), Bgra8UnormSrgb);
    }

    #[test]
    fn test_clear_color_is_background() {
        let c = clear_color();
        assert_eq!(c.a, 1.0);
        assert!((c.b - colors::BACKGROUND[2] as f64).abs() < 1e-9);
    }
}
