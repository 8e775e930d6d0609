//! The window that hosts a [`Scene`].
//!
//! ```no_run
//! use pipe_jump::*;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let scene = background_only(&step02_img_dir(Path::new(".")))?;
//!     run_scene_app(AppConfig::default(), scene)?;
//!     Ok(())
//! }
//! ```

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::basic_window_loop::*;
use crate::*;

/// Both lessons share this title.
pub const WINDOW_TITLE: &str = "Pipe & Jump 10 Lessons - Step01 Background";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub window_size: Xy<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        return Self {
            title: WINDOW_TITLE.to_string(),
            window_size: WINDOW_SIZE,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    NotStarted,
    /// The window is open and idle. The scene is only redrawn when the window system asks for it.
    Running,
    Closed,
}

/// Opens the window, shows `scene` and blocks until the window is closed.
///
/// All images are decoded before the window is created: if one of them is broken, no window is ever shown.
pub fn run_scene_app(config: AppConfig, scene: Scene) -> Result<()> {
    let images = DecodedImages::load(&scene)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = SceneApp::new(config, scene, images);
    event_loop.run_app(&mut app)?;

    return app.finish();
}

struct Running {
    ctx: Context,
    renderer: SceneRenderer,
}

struct SceneApp {
    config: AppConfig,
    scene: Scene,
    // dropped once uploaded
    images: Option<DecodedImages>,
    state: ShellState,
    running: Option<Running>,
    error: Option<Error>,
}

impl SceneApp {
    fn new(config: AppConfig, scene: Scene, images: DecodedImages) -> Self {
        return Self {
            config,
            scene,
            images: Some(images),
            state: ShellState::NotStarted,
            running: None,
            error: None,
        };
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let size = self.config.window_size;
        let attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(size.x, size.y));

        let ctx = Context::new(event_loop, attributes)?;
        log::info!("Opened \"{}\" ({}x{})", self.config.title, ctx.width(), ctx.height());

        let images = self.images.take().unwrap_or_default();
        let textures = GpuTextures::upload(&ctx.device, &ctx.queue, &images);
        let renderer = SceneRenderer::new(&ctx.device, ctx.format(), textures, &self.scene);

        ctx.window.request_redraw();
        self.running = Some(Running { ctx, renderer });
        self.state = ShellState::Running;
        return Ok(());
    }

    fn redraw(&mut self) -> Result<()> {
        let Some(running) = &mut self.running else {
            return Ok(());
        };

        let window_size = running.ctx.size();
        running.renderer.prepare(&running.ctx.queue, &self.scene, window_size);

        let Some(mut frame) = running.ctx.begin_frame()? else {
            return Ok(());
        };
        {
            let mut render_pass = frame.begin_render_pass(BACKGROUND_BLACK);
            running.renderer.render(&mut render_pass, &self.scene);
        }
        frame.finish(&running.ctx);

        return Ok(());
    }

    fn close(&mut self, event_loop: &ActiveEventLoop) {
        self.state = ShellState::Closed;
        // drop the surface before the window goes away
        self.running = None;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Error) {
        log::error!("{error}");
        self.error = Some(error);
        self.close(event_loop);
    }

    fn finish(self) -> Result<()> {
        log::info!("Window closed");
        match self.error {
            Some(error) => return Err(error),
            None => return Ok(()),
        }
    }
}

impl ApplicationHandler for SceneApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state != ShellState::NotStarted {
            return;
        }
        if let Err(error) = self.start(event_loop) {
            self.fail(event_loop, error);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if self.state != ShellState::Running {
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.close(event_loop),
            WindowEvent::Resized(size) => {
                if let Some(running) = &mut self.running {
                    running.ctx.resize(size);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(error) = self.redraw() {
                    self.fail(event_loop, error);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.title, "Pipe & Jump 10 Lessons - Step01 Background");
        assert_eq!(config.window_size, Xy::new(960, 540));
    }

    #[test]
    fn broken_image_fails_before_any_window() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bg.png"), b"garbage").unwrap();

        let scene = background_only(dir.path()).unwrap();
        let err = run_scene_app(AppConfig::default(), scene).unwrap_err();
        assert!(matches!(err, Error::ImageDecode { .. }));
    }
}
