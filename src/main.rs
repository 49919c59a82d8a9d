use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

use cube_viewer::cli::Cli;
use cube_viewer::config::ViewerConfig;
use cube_viewer::core::{input_adapter, GpuContext, GpuUniformBackend, InputEvent, UniformTable};
use cube_viewer::frame::FrameIterator;
use cube_viewer::traits::{ProgramHandle, UniformBackend};
use cube_viewer::CubeScene;

const TITLE_UPDATE_INTERVAL: f32 = 1.0;

struct App {
    config: ViewerConfig,
    frame_limit: Option<u64>,
    backend: Box<dyn UniformBackend>,
    scene: CubeScene,
    window: Option<Arc<Window>>,
    frames: FrameIterator,
    last_title_update: f32,
}

impl App {
    fn new(config: ViewerConfig, cli: &Cli) -> Result<Self> {
        let (mut backend, program) = link_backend(cli.cpu_uniforms, config.uniforms.all());
        let scene = CubeScene::new(backend.as_mut(), program, &config)
            .context("Failed to build the transformation pipeline")?;

        Ok(Self {
            config,
            frame_limit: cli.frames,
            backend,
            scene,
            window: None,
            frames: FrameIterator::new(),
            last_title_update: 0.0,
        })
    }

    fn handle_input(&mut self, event_loop: &ActiveEventLoop, event: InputEvent) {
        let camera = self.scene.camera_mut();
        match event {
            InputEvent::Quit => event_loop.exit(),
            InputEvent::Key { button, action } => {
                camera.on_key_event(button, action);
            }
            InputEvent::MouseMove { x, y } => camera.on_mouse_move(x, y),
            InputEvent::CursorLeft => camera.reset_mouse(),
            InputEvent::FocusLost => {
                camera.input_mut().release_all();
                camera.reset_mouse();
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(frame) = self.frames.next() else {
            return;
        };

        if let Err(e) = self.scene.advance(self.backend.as_mut(), frame.delta) {
            log::error!("Frame {} failed: {}", frame.number, e);
        }

        if frame.time - self.last_title_update >= TITLE_UPDATE_INTERVAL {
            self.last_title_update = frame.time;
            if let Some(window) = &self.window {
                let position = self.scene.camera().position();
                window.set_title(&format!(
                    "{} - ({:.2}, {:.2}, {:.2})",
                    self.config.window.title, position.x, position.y, position.z
                ));
            }
        }

        if self.frame_limit.is_some_and(|limit| frame.number + 1 >= limit) {
            log::info!("Frame limit reached after {} frames", frame.number + 1);
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(self.config.window.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        window.set_cursor_visible(false);
        if let Err(e) = window.set_cursor_grab(CursorGrabMode::Confined) {
            log::debug!("Cursor grab unavailable: {}", e);
        }

        self.window = Some(window);
        self.frames = FrameIterator::new();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(input) = input_adapter::translate(&event) {
            self.handle_input(event_loop, input);
        }

        if let WindowEvent::RedrawRequested = event {
            self.redraw(event_loop);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Prefer a GPU uniform buffer; fall back to CPU storage when no adapter exists
fn link_backend(cpu_only: bool, uniforms: [&str; 3]) -> (Box<dyn UniformBackend>, ProgramHandle) {
    if !cpu_only {
        match pollster::block_on(GpuContext::new()) {
            Ok(context) => {
                let mut backend = GpuUniformBackend::new(context);
                let program = backend.link_program(&uniforms);
                return (Box::new(backend), program);
            }
            Err(e) => log::warn!("{}; keeping uniforms in CPU memory", e),
        }
    }

    let mut backend = UniformTable::new();
    let program = backend.link_program(&uniforms);
    (Box::new(backend), program)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };

    if cli.print_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let mut app = App::new(config, &cli)?;
    let event_loop = EventLoop::new()?;

    log::info!("Controls: WASD to move, mouse to look, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
