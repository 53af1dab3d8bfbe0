//! Score Burst entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MessageEvent};

    use score_burst::render::canvas::CanvasSurface;
    use score_burst::render::draw_frame;
    use score_burst::score::ScoreCell;
    use score_burst::sim::{SimState, tick};

    /// App instance holding all state
    struct App {
        sim: SimState,
        surface: CanvasSurface,
        score: ScoreCell,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Score Burst starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // The effect occupies half the window in each dimension
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0)
            / 2.0;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0)
            / 2.0;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let seed = js_sys::Date::now() as u64;
        let surface = CanvasSurface::new(&canvas).expect("canvas 2d context");
        let app = Rc::new(RefCell::new(App {
            sim: SimState::new(width as f32, height as f32, seed),
            surface,
            score: ScoreCell::new(),
        }));

        log::info!("Canvas {}x{}, seed {}", width as u32, height as u32, seed);

        setup_score_listener(app.clone());
        request_animation_frame(app);

        log::info!("Score Burst running!");
    }

    /// Listen for quiz result messages from the embedding page. The
    /// payload is re-serialized to JSON and handed to `ScoreCell::ingest`,
    /// which drops anything that is not a well-formed score result.
    fn setup_score_listener(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MessageEvent| {
            if let Ok(json) = js_sys::JSON::stringify(&event.data()) {
                if let Some(raw) = json.as_string() {
                    app.borrow_mut().score.ingest(&raw);
                }
            }
        });
        let _ = window
            .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            let App {
                sim,
                surface,
                score,
            } = &mut *a;

            // One snapshot per frame; the listener may overwrite the cell
            // at any point between frames
            let snapshot = score.snapshot();
            tick(sim, snapshot.ratio());
            draw_frame(surface, sim, &snapshot);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use score_burst::score::ScoreSnapshot;
    use score_burst::sim::{SimState, tick};

    env_logger::init();
    log::info!("Score Burst (native) starting...");
    log::info!("Native mode is headless; build for wasm32 for the canvas version");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    // Ten seconds of frames at a celebratory score
    let snapshot = ScoreSnapshot {
        score: 95.0,
        max_score: 100.0,
    };
    let mut state = SimState::new(480.0, 360.0, seed);
    for _ in 0..600 {
        tick(&mut state, snapshot.ratio());
    }

    println!(
        "600 frames at ratio {:.2}: {} fireworks launched, {} still in flight",
        snapshot.ratio(),
        state.launched,
        state.fireworks.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
