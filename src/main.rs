//! Sling Birds entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, PointerEvent as DomPointerEvent};

    use sling_birds::consts::SIM_DT;
    use sling_birds::renderer::{RenderState, build_scene};
    use sling_birds::sim::{FixedStep, GameEvent, GameState, PointerEvent, apply_pointer};
    use sling_birds::{HudView, Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        tuning: Tuning,
        settings: Settings,
        stepper: FixedStep,
        render_state: Option<RenderState>,
        last_time: f64,
        /// CSS pixel size of the canvas, for pointer scaling
        client_size: (f32, f32),
        /// Last HUD written, to skip redundant DOM writes
        last_hud: Option<HudView>,
    }

    impl Game {
        fn new(tuning: Tuning, settings: Settings) -> Self {
            Self {
                state: GameState::new(),
                tuning,
                settings,
                stepper: FixedStep::new(),
                render_state: None,
                last_time: 0.0,
                client_size: (1.0, 1.0),
                last_hud: None,
            }
        }

        /// Convert canvas offset coordinates to play-surface coordinates
        fn to_play(&self, offset_x: i32, offset_y: i32) -> (f32, f32) {
            let (w, h) = self.client_size;
            (
                offset_x as f32 * self.state.bounds.x / w.max(1.0),
                offset_y as f32 * self.state.bounds.y / h.max(1.0),
            )
        }

        fn pointer(&mut self, event: PointerEvent) {
            apply_pointer(&mut self.state, &self.tuning, event);
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            self.stepper.advance(dt, &mut self.state, &self.tuning);

            for event in self.state.drain_events() {
                match event {
                    GameEvent::Victory | GameEvent::Defeat => log::info!("Round over: {:?}", event),
                    _ => log::debug!("{:?}", event),
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = build_scene(&self.state, &self.settings, &self.tuning);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
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

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let hud = HudView::from_state(&self.state, self.settings.language);
            if self.last_hud.as_ref() == Some(&hud) {
                return;
            }

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("birds-left") {
                el.set_text_content(Some(&hud.birds));
            }
            if let Some(el) = document.get_element_by_id("pigs-left") {
                el.set_text_content(Some(&hud.pigs));
            }
            if let Some(el) = document.get_element_by_id("hint") {
                el.set_text_content(Some(hud.hint));
            }
            self.last_hud = Some(hud);
        }

        /// Start the round over
        fn restart(&mut self) {
            self.state.reset();
            self.stepper.clear();
        }
    }

    /// Tuning override from the canvas `data-tuning` attribute
    fn load_tuning(canvas: &HtmlCanvasElement) -> Tuning {
        match canvas.get_attribute("data-tuning") {
            Some(json) => match Tuning::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Using tuning override: {:?}", tuning);
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring tuning override: {}", e);
                    Tuning::default()
                }
            },
            None => Tuning::default(),
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Sling Birds starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let query = window.location().search().unwrap_or_default();
        let settings = Settings::from_query(&query);
        let tuning = load_tuning(&canvas);
        log::info!("Settings: {:?}", settings);
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("lang", settings.language.as_str());
        }

        // Backing store at device resolution
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let game = Rc::new(RefCell::new(Game::new(tuning, settings)));
        game.borrow_mut().client_size = (client_w as f32, client_h as f32);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let bounds = game.borrow().state.bounds;
        let render_state = RenderState::new(surface, &adapter, width, height, bounds)
            .await
            .expect("Failed to create device");
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());
        setup_reset_button(game.clone());

        request_animation_frame(game);

        log::info!("Sling Birds running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Pointer down: try to grab the bird
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: DomPointerEvent| {
                let mut g = game.borrow_mut();
                g.client_size = (
                    canvas_clone.client_width() as f32,
                    canvas_clone.client_height() as f32,
                );
                let (x, y) = g.to_play(event.offset_x(), event.offset_y());
                g.pointer(PointerEvent::Down { x, y });
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer move: pull the bird
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: DomPointerEvent| {
                let mut g = game.borrow_mut();
                if !g.state.is_dragging() {
                    return;
                }
                let (x, y) = g.to_play(event.offset_x(), event.offset_y());
                g.pointer(PointerEvent::Move { x, y });
            });
            let _ = canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer up / leave: release
        for (name, event) in [("pointerup", PointerEvent::Up), ("pointerleave", PointerEvent::Leave)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: DomPointerEvent| {
                game.borrow_mut().pointer(event);
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
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

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.update_hud();
            g.render();
        }

        request_animation_frame(game);
    }

    fn setup_reset_button(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("reset") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().restart();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("No #reset button found");
        }
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
    log::info!("Sling Birds (native) starting...");
    log::info!("Native mode runs a headless demo round - run with `trunk serve` for the web version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match load_tuning_file(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => sling_birds::Tuning::default(),
    };

    demo_round(&tuning);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning_file(path: &str) -> Result<sling_birds::Tuning, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(sling_birds::Tuning::from_json(&json)?)
}

/// Fire a fixed sequence of shots and log how the round plays out
#[cfg(not(target_arch = "wasm32"))]
fn demo_round(tuning: &sling_birds::Tuning) {
    use sling_birds::sim::{GameState, PointerEvent, apply_pointer, tick};
    use sling_birds::{HudView, Language, sling_anchor};

    let mut state = GameState::new();
    let anchor = sling_anchor();
    let pulls = [(-80.0, 40.0), (-90.0, 20.0), (-70.0, 50.0)];

    for (dx, dy) in pulls {
        if state.birds_left == 0 || state.pigs_remaining() == 0 {
            break;
        }
        for event in [
            PointerEvent::Down {
                x: anchor.x,
                y: anchor.y,
            },
            PointerEvent::Move {
                x: anchor.x + dx,
                y: anchor.y + dy,
            },
            PointerEvent::Up,
        ] {
            apply_pointer(&mut state, tuning, event);
        }

        let mut ticks = 0;
        while state.is_flying() && ticks < 10_000 {
            tick(&mut state, tuning);
            ticks += 1;
        }
        // One more evaluator pass for the final result
        tick(&mut state, tuning);

        for event in state.drain_events() {
            log::info!("{:?}", event);
        }
        let hud = HudView::from_state(&state, Language::English);
        println!(
            "shot ({:>4}, {:>4}) -> {} ticks | birds {} | pigs {} | blocks {} | {}",
            dx,
            dy,
            ticks,
            hud.birds,
            hud.pigs,
            state.blocks_remaining(),
            hud.hint
        );
    }

    match serde_json::to_string_pretty(&state) {
        Ok(json) => log::debug!("Final state:\n{}", json),
        Err(e) => log::warn!("Could not serialize final state: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
