//! Browser wiring: DOM lookup, event listeners and the animation-frame loop

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Config, FrameLoop, Game, LoopControl};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

use crate::canvas::CanvasSurface;
use crate::input;
use crate::status;

const CANVAS_ID: &str = "pong";
const HIGH_SCORE_ID: &str = "highscore";

/// Main client state
struct Client {
    frame_loop: FrameLoop,
    surface: CanvasSurface,
}

thread_local! {
    // Reachable from the exported functions; the frame closure holds its own Rc
    static CLIENT: RefCell<Option<Rc<RefCell<Client>>>> = const { RefCell::new(None) };
}

fn with_client<R>(f: impl FnOnce(&mut Client) -> R) -> Option<R> {
    CLIENT.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|client| f(&mut client.borrow_mut()))
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&format!("Failed to init logger: {}", e)))?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("Canvas #pong not found"))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("#pong is not a canvas"))?;
    let high_score = document
        .get_element_by_id(HIGH_SCORE_ID)
        .ok_or_else(|| JsValue::from_str("Element #highscore not found"))?;

    let config = Config::for_surface(canvas.width() as f32, canvas.height() as f32);
    let seed = js_sys::Date::now() as u64;
    log::info!(
        "Pong starting on {}x{} canvas, seed {}",
        config.width,
        config.height,
        seed
    );

    let client = Rc::new(RefCell::new(Client {
        frame_loop: FrameLoop::new(Game::new(config, seed)),
        surface: CanvasSurface::new(&canvas, high_score)?,
    }));

    setup_input_handlers(&document, &canvas, client.clone())?;
    CLIENT.with(|slot| *slot.borrow_mut() = Some(client.clone()));

    request_animation_frame(client);
    Ok(())
}

/// Halt the loop before its next frame
#[wasm_bindgen]
pub fn stop_game() {
    if with_client(|client| client.frame_loop.stop_handle().stop()).is_none() {
        log::warn!("stop_game called before start");
    }
}

#[wasm_bindgen]
pub fn high_score() -> u32 {
    with_client(|client| client.frame_loop.game().score.high).unwrap_or(0)
}

fn setup_input_handlers(
    document: &Document,
    canvas: &HtmlCanvasElement,
    client: Rc<RefCell<Client>>,
) -> Result<(), JsValue> {
    // Keyboard
    for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
        let client = client.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut c = client.borrow_mut();
            if input::handle_key(c.frame_loop.game_mut(), &event.key(), pressed) {
                event.prevent_default();
            }
        });
        document.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Mouse move over the canvas
    {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let mut c = client.borrow_mut();
            input::handle_pointer_move(
                c.frame_loop.game_mut(),
                event.client_y() as f64,
                rect.top(),
            );
        });
        canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

fn request_animation_frame(client: Rc<RefCell<Client>>) {
    let Some(window) = web_sys::window() else {
        log::error!("No window to schedule frames on");
        return;
    };
    // Frees itself once the browser has called it
    let callback = Closure::once_into_js(move |_time: f64| {
        game_loop(client);
    });
    if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
}

fn game_loop(client: Rc<RefCell<Client>>) {
    let control = {
        let mut c = client.borrow_mut();
        let Client {
            frame_loop,
            surface,
        } = &mut *c;
        let control = match frame_loop.frame(surface) {
            Ok(control) => control,
            Err(e) => {
                log::warn!("Draw failed: {:?}", e);
                LoopControl::Continue
            }
        };
        let game = frame_loop.game();
        if let Some(line) = status::tick_summary(&game.events, &game.score) {
            log::info!("{}", line);
        }
        control
    };

    match control {
        LoopControl::Continue => request_animation_frame(client),
        LoopControl::Stop => {
            log::info!("Pong stopped after {} frames", client.borrow().frame_loop.frames());
        }
    }
}
