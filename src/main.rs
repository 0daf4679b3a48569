//! Space Shooter entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlButtonElement, HtmlCanvasElement, KeyboardEvent,
        MouseEvent,
    };

    use rand_pcg::Pcg32;
    use space_shooter::platform::{ButtonState, ButtonStates, DateClock, HudSink, Readout};
    use space_shooter::renderer::Canvas2d;
    use space_shooter::sim::{GamePhase, Playfield, seeded};
    use space_shooter::{FrameOutcome, GameLoop, Key, Settings, Tuning};

    /// Pushes readouts and button states into the page
    struct DomHud {
        document: Document,
    }

    impl DomHud {
        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        fn set_button(&self, id: &str, state: &ButtonState) {
            let button = self
                .document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
            if let Some(button) = button {
                button.set_disabled(!state.enabled);
                button.set_inner_text(state.label);
            }
        }
    }

    impl HudSink for DomHud {
        fn show_stats(&mut self, readout: &Readout) {
            self.set_text("health", &readout.health.to_string());
            self.set_text("score", &readout.score.to_string());
            self.set_text("level", &readout.level.to_string());
            match readout.elite_countdown_secs {
                Some(secs) => self.set_text("eliteTimer", &format!("Elites in {}s", secs)),
                None => self.set_text("eliteTimer", ""),
            }
        }

        fn show_buttons(&mut self, buttons: &ButtonStates) {
            self.set_button("startGame", &buttons.start);
            self.set_button("pauseGame", &buttons.pause);
            self.set_button("resetGame", &buttons.reset);
        }
    }

    /// Game instance holding the loop and its browser surfaces
    struct Game {
        game: GameLoop<DateClock, Pcg32>,
        canvas_el: HtmlCanvasElement,
        canvas: Canvas2d,
        hud: DomHud,
        /// An animation frame is scheduled
        chain_alive: bool,
    }

    impl Game {
        fn start(&mut self) -> bool {
            let started = self.game.start(&mut self.hud);
            self.set_cursor("default");
            started
        }

        fn set_cursor(&self, cursor: &str) {
            let _ = self.canvas_el.style().set_property("cursor", cursor);
        }

        fn fit_to_container(&mut self) {
            let playfield = fit_canvas(&self.canvas_el);
            self.game.resize(playfield);
            // Resizing clears the canvas
            self.game.redraw(&mut self.canvas);
        }
    }

    /// Size the canvas element to its container
    fn fit_canvas(canvas: &HtmlCanvasElement) -> Playfield {
        let container_width = canvas
            .parent_element()
            .map(|el| el.client_width())
            .unwrap_or(space_shooter::consts::MAX_PLAYFIELD_SIZE as i32);
        let playfield = Playfield::fit(container_width as f32);
        canvas.set_width(playfield.width as u32);
        canvas.set_height(playfield.height as u32);
        playfield
    }

    /// Parse a JSON config attribute, falling back to defaults on error
    fn read_config<T: Default>(
        canvas: &HtmlCanvasElement,
        attribute: &str,
        parse: impl Fn(&str) -> Result<T, space_shooter::ConfigError>,
    ) -> T {
        match canvas.get_attribute(attribute) {
            Some(json) => parse(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring {}: {}", attribute, e);
                T::default()
            }),
            None => T::default(),
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Space Shooter starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas_el: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| JsValue::from_str("no #gameCanvas"))?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas_el
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;

        let tuning = read_config(&canvas_el, "data-tuning", Tuning::from_json);
        let settings = read_config(&canvas_el, "data-settings", Settings::from_json);

        let seed = js_sys::Date::now() as u64;
        // Stars are scattered over the playfield the loop is built with
        let playfield = fit_canvas(&canvas_el);
        let game = Rc::new(RefCell::new(Game {
            game: GameLoop::new(seed, playfield, tuning, settings, DateClock, seeded(seed)),
            canvas_el: canvas_el.clone(),
            canvas: Canvas2d::new(ctx),
            hud: DomHud { document },
            chain_alive: false,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_keyboard(game.clone())?;
        setup_buttons(game.clone())?;
        setup_canvas_click(&canvas_el, game.clone());
        setup_resize(game.clone());

        // Auto-start
        let started = game.borrow_mut().start();
        if started {
            ensure_frame_chain(game);
        }

        log::info!("Space Shooter running!");
        Ok(())
    }

    fn ensure_frame_chain(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.chain_alive {
                return;
            }
            g.chain_alive = true;
        }
        request_animation_frame(game);
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
        let outcome = {
            let mut g = game.borrow_mut();
            let Game {
                game: lp, canvas, hud, ..
            } = &mut *g;
            let outcome = lp.frame(time, canvas, hud);
            if outcome == FrameOutcome::Stopped {
                g.chain_alive = false;
                if g.game.phase() == GamePhase::GameOver {
                    g.set_cursor("pointer");
                }
            }
            outcome
        };

        if outcome == FrameOutcome::Continue {
            request_animation_frame(game);
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_code(&event.code()) {
                    if key == Key::Fire {
                        event.prevent_default();
                    }
                    game.borrow_mut().game.set_key(key, true);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_code(&event.code()) {
                    game.borrow_mut().game.set_key(key, false);
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let document = game.borrow().hud.document.clone();

        // Start (also resumes a paused game)
        if let Some(btn) = document.get_element_by_id("startGame") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let started = {
                    let mut g = game.borrow_mut();
                    if g.game.phase() == GamePhase::Paused {
                        let Game { game: lp, hud, .. } = &mut *g;
                        lp.toggle_pause(hud);
                        false
                    } else {
                        g.start()
                    }
                };
                if started {
                    ensure_frame_chain(game.clone());
                }
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Pause / resume
        if let Some(btn) = document.get_element_by_id("pauseGame") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                let Game { game: lp, hud, .. } = &mut *g;
                lp.toggle_pause(hud);
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Reset
        if let Some(btn) = document.get_element_by_id("resetGame") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                let Game {
                    game: lp, canvas, hud, ..
                } = &mut *g;
                lp.reset(hud);
                lp.redraw(canvas);
                g.set_cursor("default");
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_canvas_click(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let restarted = {
                let mut g = game.borrow_mut();
                let Game { game: lp, hud, .. } = &mut *g;
                let restarted = lp.click(hud);
                if restarted {
                    g.set_cursor("default");
                }
                restarted
            };
            if restarted {
                ensure_frame_chain(game.clone());
            }
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_resize(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().fit_to_container();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use space_shooter::platform::{
        Clock, HeadlessTicks, ManualClock, NullHud, SystemClock, TickSource,
    };
    use space_shooter::renderer::DrawList;
    use space_shooter::sim::{Playfield, seeded};
    use space_shooter::{FrameOutcome, GameLoop, Key, QualityPreset, Settings, Tuning};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let frames: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60 * 120);
    let quality = args
        .next()
        .and_then(|s| QualityPreset::parse(&s))
        .unwrap_or(QualityPreset::Low);

    log::info!(
        "Space Shooter (native) headless run: seed {}, {} frames, {} quality",
        seed,
        frames,
        quality.as_str()
    );

    let clock = ManualClock::new(0.0);
    let mut game = GameLoop::new(
        seed,
        Playfield::fit(840.0),
        Tuning::default(),
        Settings::from_preset(quality),
        clock.clone(),
        seeded(seed),
    );
    let mut canvas = DrawList::new();
    let mut hud = NullHud;
    game.start(&mut hud);

    let wall = SystemClock::default();
    let mut ticks = HeadlessTicks::new(clock.clone(), frames);
    while let Some(frame_time) = ticks.next_frame() {
        steer(&mut game);
        game.set_key(Key::Fire, true);
        canvas.clear();
        if game.frame(frame_time, &mut canvas, &mut hud) == FrameOutcome::Stopped {
            break;
        }
    }

    log::info!(
        "Simulated {} frames in {:.1} ms",
        game.frames(),
        wall.now_ms()
    );

    let summary = game.state().session.summary(clock.now_ms());
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not encode summary: {}", e),
    }
}

/// Autopilot: line up under the lowest hostile
#[cfg(not(target_arch = "wasm32"))]
fn steer<C, R>(game: &mut space_shooter::GameLoop<C, R>)
where
    C: space_shooter::platform::Clock,
    R: space_shooter::sim::Randomness,
{
    use space_shooter::Key;

    let state = game.state();
    let player_x = state.player.bounds().center().x;
    let target = state
        .hostiles
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|h| h.bounds().center().x);

    let (left, right) = match target {
        Some(x) if x < player_x - 4.0 => (true, false),
        Some(x) if x > player_x + 4.0 => (false, true),
        _ => (false, false),
    };
    game.set_key(Key::Left, left);
    game.set_key(Key::Right, right);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
