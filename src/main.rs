//! Corridor Run entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use corridor_run::renderer::SceneRenderState;
    use corridor_run::sim::{FixedStep, GameState, InputTracker, Key};
    use corridor_run::{Error, Result, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        tuning: Tuning,
        tracker: InputTracker,
        step: FixedStep,
        render_state: Option<SceneRenderState>,
        last_time: f64,
    }

    impl Game {
        fn new(tuning: Tuning) -> Self {
            Self {
                state: GameState::new(&tuning),
                tuning,
                tracker: InputTracker::new(),
                step: FixedStep::new(),
                render_state: None,
                last_time: 0.0,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            self.step
                .advance(&mut self.state, &mut self.tracker, &self.tuning, dt);
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.state) {
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

    /// Canvas size in device pixels for the current window
    fn window_size(window: &web_sys::Window) -> (u32, u32) {
        let dpr = window.device_pixel_ratio();
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);
        (((w * dpr) as u32).max(1), ((h * dpr) as u32).max(1))
    }

    pub async fn run() -> Result<()> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger already set: {e}").into());
        }

        log::info!("Corridor Run starting...");

        let window = web_sys::window().ok_or(Error::Browser("no window"))?;
        let document = window.document().ok_or(Error::Browser("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or(Error::Browser("no #canvas element"))?
            .dyn_into()
            .map_err(|_| Error::Browser("#canvas is not a canvas"))?;

        let (width, height) = window_size(&window);
        canvas.set_width(width);
        canvas.set_height(height);

        let tuning = Tuning::load();
        let game = Rc::new(RefCell::new(Game::new(tuning)));

        // Initialize WebGPU (falls back to WebGL2 where WebGPU is missing)
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let world = game.borrow().state.world.clone();
        let render_state = SceneRenderState::new(surface, &adapter, width, height, &world).await?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&window, game.clone());
        setup_resize_handler(&window, canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Corridor Run running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    event.prevent_default();
                    game.borrow_mut().tracker.key_down(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    game.borrow_mut().tracker.key_up(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyup never arrives while unfocused, so drop held keys on blur
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().tracker.clear();
                log::debug!("Window blurred, input cleared");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(
        window: &web_sys::Window,
        canvas: HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (width, height) = window_size(&window);
            canvas.set_width(width);
            canvas.set_height(height);
            if let Some(ref mut render_state) = game.borrow_mut().render_state {
                render_state.resize(width, height);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                corridor_run::consts::SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Corridor Run failed to start: {e}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Corridor Run (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    scripted_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the simulation with a fixed key script and log the trajectory
#[cfg(not(target_arch = "wasm32"))]
fn scripted_run() {
    use corridor_run::Tuning;
    use corridor_run::consts::SIM_DT;
    use corridor_run::sim::{FixedStep, GameState, InputTracker, Key, Motion};

    const TICKS: u32 = 1200;

    let tuning = Tuning::load();
    let mut state = GameState::new(&tuning);
    let mut tracker = InputTracker::new();
    let mut step = FixedStep::new();
    let end_z = state.world.end_z();
    let mut reported_fall = false;

    for frame in 0..TICKS {
        match frame {
            0 => tracker.key_down(Key::Jump),
            1 => tracker.key_up(Key::Jump),
            120 => tracker.key_down(Key::Right),
            180 => {
                tracker.key_up(Key::Right);
                tracker.key_down(Key::TurnCamCw);
            }
            240 => tracker.key_down(Key::Left),
            300 => tracker.key_up(Key::Left),
            _ => {}
        }

        step.advance(&mut state, &mut tracker, &tuning, SIM_DT);

        let p = &state.player;
        if frame % 60 == 0 {
            log::info!(
                "tick {:4} pos=({:6.2}, {:6.2}, {:8.2}) vel_y={:6.3} {:?} camera={}°",
                state.time_ticks,
                p.pos.x,
                p.pos.y,
                p.pos.z,
                p.vel_y,
                p.motion,
                state.camera.angle_deg,
            );
        }

        let past_end = end_z.is_some_and(|z| p.pos.z < z);
        if past_end && p.motion == Motion::Airborne && !reported_fall {
            log::info!("Left the corridor at tick {}, falling", state.time_ticks);
            reported_fall = true;
        }
    }

    println!(
        "Ran {} ticks, distance {:.1}, final height {:.2}",
        state.time_ticks,
        state.distance(),
        state.player.pos.y
    );
}
