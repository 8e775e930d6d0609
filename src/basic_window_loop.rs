//! Helper functions for `winit` and `wgpu`.
pub use winit::{error::EventLoopError, event_loop::EventLoop};

use std::sync::Arc;

use wgpu::{
    Color, CommandEncoder, CommandEncoderDescriptor, CompositeAlphaMode, Device, DeviceDescriptor, Features, Instance, InstanceDescriptor, Limits, LoadOp, Operations, PresentMode, Queue, RenderPass, RenderPassColorAttachment, RenderPassDescriptor, RequestAdapterOptions, Surface, SurfaceConfiguration, SurfaceError, SurfaceTexture, TextureFormat, TextureUsages, TextureView, TextureViewDescriptor
};
use winit::{
    dpi::PhysicalSize, event_loop::ActiveEventLoop, window::{Window, WindowAttributes}
};

use crate::*;

pub const BACKGROUND_BLACK: Color = Color::BLACK;

/// `Warn` for dependencies, `Info` for this crate. `RUST_LOG` overrides both.
pub fn basic_env_logger_init() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .filter_module("pipe_jump", log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

pub fn basic_surface_config(format: TextureFormat, width: u32, height: u32) -> SurfaceConfiguration {
    return SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format,
        // a zero-sized surface can't be configured. happens when the window is minimized.
        width: width.max(1),
        height: height.max(1),
        present_mode: PresentMode::Fifo,
        alpha_mode: CompositeAlphaMode::Opaque,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
}

/// The window plus everything `wgpu` needs to draw into it.
pub struct Context {
    pub window: Arc<Window>,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub device: Device,
    pub queue: Queue,
}

impl Context {
    /// Creates the window and the GPU device. Has to be called from `resumed()`.
    pub fn new(event_loop: &ActiveEventLoop, attributes: WindowAttributes) -> Result<Self> {
        let window = Arc::new(event_loop.create_window(attributes)?);

        let instance = Instance::new(InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;

        let adapter_options = RequestAdapterOptions {
            compatible_surface: Some(&surface),
            ..Default::default()
        };
        let adapter = pollster::block_on(instance.request_adapter(&adapter_options)).ok_or(Error::NoAdapter)?;
        log::info!("Using adapter {:?}", adapter.get_info().name);

        let device_desc = DeviceDescriptor {
            label: None,
            required_features: Features::empty(),
            required_limits: Limits::downlevel_webgl2_defaults().using_resolution(adapter.limits()),
            memory_hints: wgpu::MemoryHints::MemoryUsage,
        };
        let (device, queue) = pollster::block_on(adapter.request_device(&device_desc, None))?;

        // the images are uploaded as sRGB, so the surface should be sRGB too or the colors come out washed out.
        let caps = surface.get_capabilities(&adapter);
        let format = caps.formats.iter()
            .copied()
            .find(|f| f.is_srgb())
            .or(caps.formats.first().copied())
            .unwrap_or(TextureFormat::Bgra8UnormSrgb);

        let size = window.inner_size();
        let surface_config = basic_surface_config(format, size.width, size.height);
        surface.configure(&device, &surface_config);

        return Ok(Self {
            window,
            surface,
            surface_config,
            device,
            queue,
        });
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.surface_config.width = size.width.max(1);
        self.surface_config.height = size.height.max(1);
        self.surface.configure(&self.device, &self.surface_config);

        self.window.request_redraw();
    }

    pub fn width(&self) -> u32 {
        self.surface_config.width
    }

    pub fn height(&self) -> u32 {
        self.surface_config.height
    }

    pub fn size(&self) -> Xy<f32> {
        return Xy::new(self.width() as f32, self.height() as f32);
    }

    pub fn format(&self) -> TextureFormat {
        self.surface_config.format
    }

    /// Returns `None` when the surface had to be reconfigured. A new redraw is requested in that case.
    pub fn begin_frame(&mut self) -> Result<Option<RenderFrame>> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                log::info!("Surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.surface_config);
                self.window.request_redraw();
                return Ok(None);
            }
            Err(SurfaceError::Timeout) => {
                log::warn!("Timed out waiting for the next surface texture");
                self.window.request_redraw();
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let encoder = self.device.create_command_encoder(&CommandEncoderDescriptor::default());
        let view = frame.texture.create_view(&TextureViewDescriptor::default());

        return Ok(Some(RenderFrame {
            encoder,
            frame,
            view,
        }));
    }
}

pub struct RenderFrame {
    pub encoder: CommandEncoder,
    pub frame: SurfaceTexture,
    pub view: TextureView,
}

impl RenderFrame {
    pub fn begin_render_pass(&mut self, bg_color: Color) -> RenderPass<'_> {
        let color_att = basic_color_attachment(&self.view, bg_color);

        let render_pass_desc = RenderPassDescriptor {
            label: Some("pipe_jump scene pass"),
            color_attachments: &color_att,
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        };
        return self.encoder.begin_render_pass(&render_pass_desc);
    }

    pub fn finish(self, ctx: &Context) {
        ctx.queue.submit(Some(self.encoder.finish()));
        ctx.window.pre_present_notify();
        self.frame.present();
    }
}

pub fn basic_color_attachment(view: &TextureView, bg_color: Color) -> [Option<RenderPassColorAttachment<'_>>; 1] {
    return [Some(RenderPassColorAttachment {
        view,
        resolve_target: None,
        ops: Operations {
            load: LoadOp::Clear(bg_color),
            store: wgpu::StoreOp::Store,
        },
    })];
}
