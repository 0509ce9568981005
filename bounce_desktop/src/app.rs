use crate::pacer::FramePacer;
use crate::renderer::Renderer;
use crate::simulation::Demo;
use anyhow::{anyhow, Result};
use bounce_core::{Bitmap, Config};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowBuilder},
};

pub struct App {
    window: Arc<Window>,
    renderer: Renderer,
    demo: Demo,
    pacer: FramePacer,
    frame_requested: bool,
}

impl App {
    pub fn new(window: Arc<Window>, renderer: Renderer, demo: Demo, frame_time: Duration) -> Self {
        Self {
            window,
            renderer,
            demo,
            pacer: FramePacer::new(frame_time, Instant::now()),
            frame_requested: false,
        }
    }

    pub fn handle_event(&mut self, event: Event<()>, elwt: &EventLoopWindowTarget<()>) {
        match event {
            Event::WindowEvent { window_id, event } if window_id == self.window.id() => {
                self.handle_window_event(event, elwt)
            }
            Event::AboutToWait => {
                let now = Instant::now();
                if self.pacer.is_due(now) {
                    self.pacer.advance(now);
                    self.frame_requested = true;
                    self.window.request_redraw();
                }
                elwt.set_control_flow(ControlFlow::WaitUntil(self.pacer.deadline()));
            }
            _ => (),
        }
    }

    fn handle_window_event(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                log::info!("Exiting after {} frames", self.demo.clock.frame);
                elwt.exit();
            }

            WindowEvent::Resized(size) => {
                self.renderer.resize(size.width, size.height);
                if size.width > 0 && size.height > 0 {
                    self.demo.resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                // Redraws the OS asks for repaint the scene without advancing it
                if std::mem::take(&mut self.frame_requested) {
                    self.demo.step();
                }
                self.demo.draw(&mut self.renderer);

                match self.renderer.render() {
                    Ok(()) => {}
                    // Reconfigure the surface if lost
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let (width, height) = self.renderer.size;
                        self.renderer.resize(width, height);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("GPU out of memory, exiting");
                        elwt.exit();
                    }
                    Err(e) => log::warn!("Skipping frame: {e:?}"),
                }
            }

            _ => {}
        }
    }
}

/// Open the window and run until it is closed
pub fn run(config: Config, bitmaps: Vec<Arc<Bitmap>>) -> Result<()> {
    let event_loop = EventLoop::new().map_err(|e| anyhow!("Failed to create event loop: {e}"))?;

    let window = WindowBuilder::new()
        .with_title(&config.title)
        .with_inner_size(PhysicalSize::new(config.window_width, config.window_height))
        .build(&event_loop)
        .map_err(|e| anyhow!("Failed to create window: {e}"))?;
    let window = Arc::new(window);

    let renderer = pollster::block_on(Renderer::new(window.clone()))?;

    let mut demo = Demo::new(&config, &bitmaps);
    // The window manager may not grant the requested size
    let (width, height) = renderer.size;
    demo.resize(width, height);

    let mut app = App::new(window, renderer, demo, config.frame_time());
    event_loop
        .run(move |event, elwt| app.handle_event(event, elwt))
        .map_err(|e| anyhow!("Event loop failed: {e}"))?;

    Ok(())
}
