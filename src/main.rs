//! Canvas Breakout entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use canvas_breakout::consts::TICK_INTERVAL_MS;
    use canvas_breakout::render::CanvasRenderer;
    use canvas_breakout::settings::RenderSettings;
    use canvas_breakout::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        input: TickInput,
        /// The game clock; cancelling it is the terminal transition
        interval_id: Option<i32>,
    }

    impl Game {
        /// One clock firing: advance the simulation, then paint
        fn frame(&mut self) {
            let events = tick(&mut self.state, &self.input);
            self.renderer.draw(&self.state);

            for event in &events {
                match event {
                    GameEvent::BlockDestroyed { id } => {
                        log::debug!("Block {id} destroyed, {} left", self.state.blocks.len());
                    }
                    GameEvent::GameOver => {
                        log::info!(
                            "Game over after {} ticks, {} blocks left",
                            self.state.time_ticks,
                            self.state.blocks.len()
                        );
                    }
                    _ => {}
                }
            }

            if self.state.phase == GamePhase::GameOver {
                self.stop_clock();
            }
        }

        fn stop_clock(&mut self) {
            if let Some(id) = self.interval_id.take() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(id);
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Canvas Breakout starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("br_canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Dimensions come from the element's declared width/height
        let width = canvas.width() as f32;
        let height = canvas.height() as f32;

        let ctx: web_sys::CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("2d context unavailable")
            .expect("2d context unavailable")
            .dyn_into()
            .expect("not a 2d context");

        let settings = RenderSettings::from_canvas(&canvas);

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(width, height),
            renderer: CanvasRenderer::new(ctx, settings),
            input: TickInput::default(),
            interval_id: None,
        }));

        log::info!(
            "Game initialized: {width}x{height}, {} blocks",
            game.borrow().state.blocks.len()
        );

        setup_input_handler(&canvas, game.clone());
        start_clock(&window, game);

        log::info!("Canvas Breakout running!");
    }

    fn setup_input_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Pointer moves anywhere on the page steer the paddle; the x is
        // translated to canvas space here and applied inside the tick
        let document = web_sys::window().unwrap().document().unwrap();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas.get_bounding_client_rect();
            let x = event.client_x() as f32 - rect.left() as f32;
            game.borrow_mut().input.pointer_x = Some(x);
        });
        let _ =
            document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn start_clock(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        let clock_game = game.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            clock_game.borrow_mut().frame();
        });
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                TICK_INTERVAL_MS,
            )
            .expect("failed to start game clock");
        game.borrow_mut().interval_id = Some(id);
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_breakout::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Canvas Breakout (native) starting...");
    log::info!("Run with `trunk serve` for the web version; this binary plays a headless game");

    let mut state = GameState::new(480.0, 320.0);
    let total_blocks = state.blocks.len();

    // Autopilot: keep the paddle centered under the ball
    let max_ticks: u64 = 200_000;
    while state.phase == GamePhase::Playing && state.time_ticks < max_ticks {
        let input = TickInput {
            pointer_x: Some(state.ball.pos.x),
        };
        for event in tick(&mut state, &input) {
            if let GameEvent::BlockDestroyed { id } = event {
                log::debug!("Block {id} destroyed, {} left", state.blocks.len());
            }
        }
    }

    log::info!(
        "Headless run: {}/{} blocks destroyed in {} ticks, finished {:?}",
        total_blocks - state.blocks.len(),
        total_blocks,
        state.time_ticks,
        state.phase
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
