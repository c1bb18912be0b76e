//! Starfall entry point
//!
//! On wasm32 this wires the game to the page: DOM readout, input listeners,
//! WebGPU rendering and the animation-frame loop. Natively it runs a headless
//! autopilot session and prints a JSON summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use starfall::game::{lives_label, score_label};
    use starfall::renderer::RenderState;
    use starfall::sim::GameState;
    use starfall::{Game, GameConfig, Hud, Overlay, QualityPreset, Renderer};

    /// Page-side collaborators: HUD text, overlay panel and the GPU renderer
    struct DomFrontend {
        document: Document,
        render_state: Option<RenderState>,
    }

    impl DomFrontend {
        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }
    }

    impl Hud for DomFrontend {
        fn update(&mut self, score: u64, lives: u8) {
            self.set_text("score", &score_label(score));
            self.set_text("lives", &lives_label(lives));
        }
    }

    impl Overlay for DomFrontend {
        fn show(&mut self, title: &str, message: &str) {
            self.set_text("overlay-title", title);
            self.set_text("overlay-message", message);
            if let Some(el) = self.document.get_element_by_id("overlay") {
                let _ = el.class_list().remove_1("hidden");
            }
        }

        fn hide(&mut self) {
            if let Some(el) = self.document.get_element_by_id("overlay") {
                let _ = el.class_list().add_1("hidden");
            }
        }
    }

    impl Renderer for DomFrontend {
        fn render(&mut self, state: &GameState) {
            if let Some(ref mut render_state) = self.render_state {
                render_state.render(state);
            }
        }
    }

    struct App {
        game: Game,
        frontend: DomFrontend,
    }

    /// `?quality=low|medium|high`, defaulting to medium
    fn quality_from_url(window: &web_sys::Window) -> QualityPreset {
        let search = window.location().search().unwrap_or_default();
        search
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "quality")
            .and_then(|(_, value)| match value.parse::<QualityPreset>() {
                Ok(preset) => Some(preset),
                Err(e) => {
                    log::warn!("{}, using default quality", e);
                    None
                }
            })
            .unwrap_or_default()
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Starfall starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .ok_or("no canvas")?
            .dyn_into()?;

        let config = GameConfig::from_preset(quality_from_url(&window));
        log::info!("Quality preset: {}", config.quality.as_str());

        // Backing store matches the arena at device resolution
        let dpr = window.device_pixel_ratio();
        let width = (config.arena_width as f64 * dpr) as u32;
        let height = (config.arena_height as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&format!("Failed to create surface: {}", e)))?;

        let render_state = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => {
                log::info!("Using adapter: {:?}", adapter.get_info().name);
                let arena = (config.arena_width, config.arena_height);
                match RenderState::new(surface, &adapter, width, height, arena).await {
                    Ok(state) => Some(state),
                    Err(e) => {
                        log::error!("Failed to create device: {}", e);
                        None
                    }
                }
            }
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                None
            }
        };

        let seed = js_sys::Date::now() as u64;
        let mut app = App {
            game: Game::new(seed, config),
            frontend: DomFrontend {
                document,
                render_state,
            },
        };
        app.game.start(&mut app.frontend);
        app.frontend.hide();
        let app = Rc::new(RefCell::new(app));

        setup_keyboard(&window, app.clone());
        setup_pointer(&canvas, app.clone());
        setup_restart_button(app.clone());
        setup_focus_loss(&window, app.clone());

        request_animation_frame(app);

        log::info!("Starfall running!");
        Ok(())
    }

    fn setup_keyboard(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if key == " " {
                    event.prevent_default();
                }
                app.borrow_mut().game.key_down(&key);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            app.borrow_mut().game.key_up(&event.key());
        });
        let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_pointer(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let mut a = app.borrow_mut();
                let arena = a.game.state.arena;
                // Client pixels to arena pixels (CSS size may differ from the arena)
                let sx = if rect.width() > 0.0 { arena.x as f64 / rect.width() } else { 1.0 };
                let sy = if rect.height() > 0.0 { arena.y as f64 / rect.height() } else { 1.0 };
                let x = (event.client_x() as f64 - rect.left()) * sx;
                let y = (event.client_y() as f64 - rect.top()) * sy;
                a.game.pointer_move(x as f32, y as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                app.borrow_mut().game.pointer_down();
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
            app.borrow_mut().game.pointer_up();
        });
        let _ =
            canvas.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_restart_button(app: Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("restart") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut a = app.borrow_mut();
                let App { game, frontend } = &mut *a;
                game.reset(frontend);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Keys released outside the window never deliver keyup
    fn setup_focus_loss(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            app.borrow_mut().game.input.release_all();
            log::debug!("Window blurred, released held input");
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            let App { game, frontend } = &mut *a;
            game.frame(time, frontend);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Starfall failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use serde::Serialize;

    use starfall::game::{lives_label, score_label};
    use starfall::renderer::build_scene;
    use starfall::sim::{GameEvent, GameState, bindings};
    use starfall::{Game, GameConfig, Hud, Overlay, QualityPreset, Renderer};

    /// Fixed simulation step for headless runs
    const STEP: f32 = 1.0 / 60.0;
    /// Frames spent sweeping in each direction
    const SWEEP_FRAMES: u64 = 90;

    /// Logs collaborator calls and counts geometry instead of drawing
    #[derive(Default)]
    struct LogFrontend {
        last_hud: (u64, u8),
        vertices: usize,
        peak_vertices: usize,
    }

    impl Hud for LogFrontend {
        fn update(&mut self, score: u64, lives: u8) {
            if (score, lives) != self.last_hud {
                log::debug!("{} | {}", score_label(score), lives_label(lives));
                self.last_hud = (score, lives);
            }
        }
    }

    impl Overlay for LogFrontend {
        fn show(&mut self, title: &str, message: &str) {
            log::info!("{}: {}", title, message);
        }

        fn hide(&mut self) {}
    }

    impl Renderer for LogFrontend {
        fn render(&mut self, state: &GameState) {
            self.vertices = build_scene(state).len();
            self.peak_vertices = self.peak_vertices.max(self.vertices);
        }
    }

    #[derive(Debug, Default, Serialize)]
    pub struct SessionSummary {
        pub seed: u64,
        pub quality: String,
        pub frames: u64,
        pub elapsed_ms: f64,
        pub score: u64,
        pub lives: u8,
        pub game_over: bool,
        pub shots_fired: u64,
        pub enemies_hit: u64,
        pub enemies_destroyed: u64,
        pub player_hits: u64,
        pub speed_multiplier: f32,
        pub spawn_interval_ms: f32,
        pub peak_vertices: usize,
    }

    /// Hold fire and sweep left/right until the frame limit or game over
    pub fn run(seed: u64, max_frames: u64, quality: QualityPreset) -> SessionSummary {
        let mut game = Game::new(seed, GameConfig::from_preset(quality));
        let mut frontend = LogFrontend::default();
        let mut summary = SessionSummary {
            seed,
            quality: quality.as_str().to_string(),
            ..Default::default()
        };

        game.start(&mut frontend);
        game.key_down(bindings::FIRE);

        for frame in 0..max_frames {
            let sweep_left = (frame / SWEEP_FRAMES) % 2 == 0;
            let (press, release) = if sweep_left {
                (bindings::LEFT[0], bindings::RIGHT[0])
            } else {
                (bindings::RIGHT[0], bindings::LEFT[0])
            };
            game.key_up(release);
            game.key_down(press);

            game.step(STEP, &mut frontend);
            summary.frames += 1;

            for event in game.last_events() {
                match event {
                    GameEvent::Fired => summary.shots_fired += 1,
                    GameEvent::EnemyHit => summary.enemies_hit += 1,
                    GameEvent::EnemyDestroyed { .. } => summary.enemies_destroyed += 1,
                    GameEvent::PlayerHit { .. } => summary.player_hits += 1,
                    GameEvent::GameOver { .. } | GameEvent::Reset => {}
                }
            }

            if !game.state.is_playing() {
                break;
            }
        }

        summary.elapsed_ms = game.state.elapsed_ms;
        summary.score = game.state.player.score;
        summary.lives = game.state.player.lives;
        summary.game_over = !game.state.is_playing();
        summary.speed_multiplier = game.state.difficulty.speed_multiplier;
        summary.spawn_interval_ms = game.state.difficulty.spawn_interval_ms;
        summary.peak_vertices = frontend.peak_vertices;
        summary
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    // starfall [seed] [frames] [quality]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed = args.first().and_then(|s| s.parse().ok()).unwrap_or(42);
    let frames = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3600);
    let quality = match args.get(2).map(|s| s.parse::<starfall::QualityPreset>()) {
        Some(Ok(preset)) => preset,
        Some(Err(e)) => {
            log::warn!("{}, using default quality", e);
            starfall::QualityPreset::default()
        }
        None => starfall::QualityPreset::default(),
    };

    log::info!("Starfall (native) autopilot: seed={} frames={}", seed, frames);
    let summary = autopilot::run(seed, frames, quality);

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Failed to serialize summary: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
