use std::sync::Arc;

use anyhow::Result;
use box_picker::camera::Camera;
use box_picker::cli::Cli;
use box_picker::config::Config;
use box_picker::core::{
    FrameLoop, ImpactTrigger, InteractionController, LogImpactSound, LogObserver, Viewport,
};
use box_picker::render::BoxRenderer;
use box_picker::scene::ObjectRegistry;
use clap::Parser;
use log::{error, info};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

const WINDOW_TITLE: &str = "Box Picker";

struct App {
    config: Config,
    show_ui: bool,
    window: Option<Arc<Window>>,
    renderer: Option<BoxRenderer>,
    camera: Camera,
    frame_loop: FrameLoop,
    observer: LogObserver,
    sound: LogImpactSound,
}

impl App {
    fn new(config: Config, show_ui: bool) -> Self {
        let viewport = Viewport::new(config.window.width.max(1), config.window.height.max(1));
        let camera = Camera::new(&config.camera, viewport.aspect());

        let mut registry =
            ObjectRegistry::new(config.stage.build()).with_default_color(config.colors.default);
        let handles = config.grid.populate(&mut registry);
        info!("Created {} boxes", handles.len());

        let frame_loop = FrameLoop::new(
            registry,
            viewport,
            InteractionController::new(config.colors.selected),
            ImpactTrigger::new(config.audio.impact_threshold),
        );

        Self {
            config,
            show_ui,
            window: None,
            renderer: None,
            camera,
            frame_loop,
            observer: LogObserver,
            sound: LogImpactSound::default(),
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
                .with_title(WINDOW_TITLE)
                .with_inner_size(winit::dpi::PhysicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(BoxRenderer::new(window.clone(), self.show_ui)) {
            Ok(renderer) => renderer,
            Err(e) => {
                error!("Failed to initialize renderer: {e:#}");
                event_loop.exit();
                return;
            }
        };

        // The real surface size may differ from the requested one
        let size = window.inner_size();
        self.frame_loop
            .input_mut()
            .process_event(&WindowEvent::Resized(size));

        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Overlay gets first refusal
        if let Some(renderer) = &mut self.renderer {
            if renderer.handle_event(&event) {
                return;
            }
        }

        self.frame_loop.input_mut().process_event(&event);

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => self.camera.process_keyboard(&event),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(renderer) = &mut self.renderer {
                    self.frame_loop.tick(
                        &mut self.camera,
                        renderer,
                        &mut self.observer,
                        &mut self.sound,
                    );
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, !cli.no_ui);

    info!("Box Picker - Controls: WASD, Space/Shift, Q/E, R/F, click to remove, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
