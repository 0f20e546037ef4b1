//! Native window and event loop (winit)

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use super::input::{Key, Keyboard};
use super::time::FrameClock;
use crate::consts::{TARGET_FPS, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::error::DasherError;
use crate::renderer::texture::{
    BACKGROUND_TEXTURE, FOREGROUND_TEXTURE, MIDGROUND_TEXTURE, NEBULA_TEXTURE, SCARFY_TEXTURE,
};
use crate::renderer::{RenderState, SceneTextures, TextureData, draw_scene};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, SheetMetrics, tick};

/// A running game bound to its window
struct Game {
    window: Arc<Window>,
    renderer: RenderState,
    textures: SceneTextures,
    state: GameState,
    input: Keyboard,
    clock: FrameClock,
}

impl Game {
    fn new(event_loop: &ActiveEventLoop, settings: &Settings) -> Result<Self, DasherError> {
        let scale = settings.effective_scale();
        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH * scale, WINDOW_HEIGHT * scale))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attrs)?);
        let inner = window.inner_size();
        log::info!(
            "Window: {}x{} physical, scale {}",
            inner.width,
            inner.height,
            scale
        );

        let mut renderer = RenderState::new(window.clone(), settings.vsync)?;

        let load = |name: &str| -> Result<TextureData, DasherError> {
            let path = settings.asset_path(name);
            let data = TextureData::load(&path)?;
            log::info!("Loaded {} ({}x{})", path.display(), data.width, data.height);
            Ok(data)
        };
        let nebula = load(NEBULA_TEXTURE)?;
        let scarfy = load(SCARFY_TEXTURE)?;
        let background = load(BACKGROUND_TEXTURE)?;
        let midground = load(MIDGROUND_TEXTURE)?;
        let foreground = load(FOREGROUND_TEXTURE)?;

        let metrics = SheetMetrics {
            nebula_sheet: nebula.size(),
            scarfy_sheet: scarfy.size(),
            layer_widths: [
                background.size().x,
                midground.size().x,
                foreground.size().x,
            ],
        };

        let textures = SceneTextures {
            nebula: renderer.upload_texture(&nebula),
            scarfy: renderer.upload_texture(&scarfy),
            background: renderer.upload_texture(&background),
            midground: renderer.upload_texture(&midground),
            foreground: renderer.upload_texture(&foreground),
        };

        let now = Instant::now();
        window.request_redraw();

        Ok(Self {
            window,
            renderer,
            textures,
            state: GameState::new(metrics),
            input: Keyboard::new(),
            clock: FrameClock::new(TARGET_FPS, now),
        })
    }

    /// Advance and draw one frame
    fn frame(&mut self) -> Result<(), DasherError> {
        let now = Instant::now();
        let dt = self.clock.tick(now);

        if let Some(event) = tick(&mut self.state, &self.input.tick_input(), dt) {
            match event {
                GameEvent::Collided { nebula, score } => {
                    log::debug!("Hit nebula {} at {:.2}s", nebula, score)
                }
                GameEvent::Restarted => log::debug!("New run"),
            }
        }
        self.input.end_frame();

        self.renderer.begin_frame();
        draw_scene(&mut self.renderer, &self.textures, &self.state);
        self.renderer.end_frame()?;

        if let Some(fps) = self.clock.take_fps(now) {
            log::debug!("FPS: {:.1}", fps);
        }
        Ok(())
    }
}

struct App {
    settings: Settings,
    game: Option<Game>,
    error: Option<DasherError>,
}

impl App {
    /// Stop the loop; `run` returns the error
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: DasherError) {
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.game.is_some() {
            return;
        }
        match Game::new(event_loop, &self.settings) {
            Ok(game) => self.game = Some(game),
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(game) = &self.game {
            if game.clock.is_frame_due(Instant::now()) {
                game.window.request_redraw();
            }
            event_loop.set_control_flow(ControlFlow::WaitUntil(game.clock.next_frame_at()));
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                game.renderer.resize(size.width, size.height);
            }
            WindowEvent::Focused(false) => {
                game.input.release_all();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                let Some(key) = Key::from_key_code(code) else {
                    return;
                };
                match state {
                    ElementState::Pressed => {
                        game.input.key_down(key);
                        if key == Key::Escape {
                            event_loop.exit();
                        }
                    }
                    ElementState::Released => game.input.key_up(key),
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = game.frame() {
                    self.fail(event_loop, e);
                }
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if self.game.take().is_some() {
            log::info!("Shutting down");
        }
    }
}

/// Open the window and run until it closes
pub fn run(settings: Settings) -> Result<(), DasherError> {
    let event_loop = EventLoop::new()?;
    let mut app = App {
        settings,
        game: None,
        error: None,
    };
    event_loop.run_app(&mut app)?;

    match app.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
