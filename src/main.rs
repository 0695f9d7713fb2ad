//! Gridbreak entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use gridbreak::config::GameConfig;
    use gridbreak::renderer::RenderState;
    use gridbreak::sim::Game;

    /// App instance holding the game and its render surface
    struct App {
        game: Game,
        render_state: Option<RenderState>,
        /// Timestamp of the previous animation frame; the first frame is
        /// primed with a zero delta
        last_time: Option<f64>,
    }

    impl App {
        fn new(config: &GameConfig) -> Self {
            Self {
                game: Game::new(config),
                render_state: None,
                last_time: None,
            }
        }

        /// Advance the simulation by the wall-clock milliseconds since the
        /// previous frame
        fn update(&mut self, time: f64) {
            let delta = match self.last_time {
                Some(last) => (time - last) as f32,
                None => 0.0,
            };
            self.last_time = Some(time);
            self.game.update(delta);
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                self.game.draw(render_state);
                match render_state.present() {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Gridbreak starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = GameConfig::load();

        // Fixed-size playfield; scale the backing store by device pixel ratio
        let dpr = window.device_pixel_ratio();
        let width = (config.screen_width as f64 * dpr) as u32;
        let height = (config.screen_height as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let app = Rc::new(RefCell::new(App::new(&config)));

        log::info!(
            "Game initialized: {}x{} playfield, {}x{} bricks",
            config.screen_width,
            config.screen_height,
            config.brick_cols,
            config.brick_rows
        );

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let screen = glam::Vec2::new(config.screen_width, config.screen_height);
        let render_state = RenderState::new(surface, &adapter, width, height, screen).await;
        app.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(app.clone());

        // Start game loop
        request_animation_frame(app);

        log::info!("Gridbreak running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                app.borrow_mut().game.handle_key(&event.key(), true);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                app.borrow_mut().game.handle_key(&event.key(), false);
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.update(time);
            a.render();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Gridbreak (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    // Headless sanity run
    println!("\nRunning headless smoke test...");
    smoke_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_run() {
    use gridbreak::config::GameConfig;
    use gridbreak::sim::Game;

    let config = GameConfig::default();
    let mut game = Game::new(&config);
    let frame_ms = 1000.0_f32 / 60.0;

    game.handle_key("ArrowLeft", true);
    for _ in 0..600 {
        game.update(frame_ms);
    }

    // Ten seconds of holding left pins the paddle to the wall
    assert_eq!(game.paddle.pos.x, game.paddle.size.x / 2.0);
    println!(
        "✓ Smoke test passed: {} bricks standing after 600 frames",
        game.bricks.alive_count()
    );
}
